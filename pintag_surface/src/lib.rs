// Copyright 2026 the Pintag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pintag Surface: projecting one pin array onto independent viewports.
//!
//! Three rendering contexts show the same pins: the editable canvas with its
//! side list, the preview dialog (desktop split layout and mobile stacked
//! layout), and the permanent public display page. Each measures its own
//! image bounds, so this crate is where the shared normalized model meets
//! per-surface pixels: a [`Surface`] projects a `PinBoard` into a
//! [`MarkerLayout`] against its **own** [`ImageFrame`], and any two surfaces
//! given the same board agree on relative marker position (within 1 px) and
//! on order.
//!
//! Surfaces may differ in styling — marker size, pulse animation, whether
//! the badge number is drawn — but never in placement or ordering. Those
//! style knobs live in [`MarkerStyle`] and stay out of the placement math.
//!
//! Read-only kinds (both previews and the public page) **suppress** pins
//! that have no product assigned: such pins do not appear in the layout at
//! all and are excluded from the [`MarkerLayout::product_count`] summary.
//! The editor renders them instead, marked unassigned so the host can mute
//! them.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use pintag_board::{Pin, PinBoard, ProductCard};
//! use pintag_geom::{FracPoint, ImageFrame};
//! use pintag_surface::{Surface, SurfaceKind};
//!
//! let mut board = PinBoard::new();
//! board.add(Pin::assigned(1_u64, FracPoint::new(0.2, 0.2), ProductCard {
//!     id: "P1".into(),
//!     title: "Desk lamp".into(),
//!     image_url: "https://img.example/p1.jpg".into(),
//!     price: 49.0,
//!     currency: "USD".into(),
//! }));
//! board.add_unassigned(2, FracPoint::new(0.8, 0.8));
//!
//! let editor = Surface::new(
//!     SurfaceKind::Editor,
//!     ImageFrame::new(Rect::new(0.0, 0.0, 300.0, 300.0)),
//! );
//! let public = Surface::new(
//!     SurfaceKind::Public,
//!     ImageFrame::new(Rect::new(0.0, 0.0, 600.0, 600.0)),
//! );
//!
//! // The editor shows both pins; the public page suppresses the
//! // unassigned one and reports a single product.
//! assert_eq!(editor.project(&board).len(), 2);
//! let layout = public.project(&board);
//! assert_eq!(layout.len(), 1);
//! assert_eq!(layout.product_count(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use kurbo::Point;
use pintag_board::PinBoard;
use pintag_geom::ImageFrame;

/// One of the rendering contexts that must agree on pin placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// The editable canvas with its paired side list.
    Editor,
    /// The preview dialog's desktop split layout.
    PreviewDesktop,
    /// The preview dialog's mobile stacked layout.
    PreviewMobile,
    /// The permanent public display page.
    Public,
}

impl SurfaceKind {
    /// Returns `true` for surfaces that cannot edit pins.
    ///
    /// Read-only surfaces suppress unassigned pins; the previews behave like
    /// the public page because they exist to show the creator what visitors
    /// will see.
    #[must_use]
    pub fn is_read_only(self) -> bool {
        !matches!(self, Self::Editor)
    }
}

bitflags::bitflags! {
    /// Styling switches that may vary between surfaces.
    ///
    /// None of these affect placement or ordering.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MarkerOptions: u8 {
        /// Draw the 1-based badge number on the marker.
        const SHOW_BADGE = 0b0000_0001;
        /// Animate the marker with a pulse to draw attention.
        const PULSE      = 0b0000_0010;
    }
}

/// Per-surface marker styling.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    /// Marker diameter in device pixels.
    pub diameter: f64,
    /// Styling switches.
    pub options: MarkerOptions,
}

impl MarkerStyle {
    /// The conventional style for each surface kind.
    ///
    /// The editor draws numbered markers large enough to grab; previews add
    /// the pulse the public page uses; the public page drops the number in
    /// favor of a pulsing dot. All of this is a default — hosts override it
    /// with [`Surface::with_style`].
    #[must_use]
    pub fn for_kind(kind: SurfaceKind) -> Self {
        match kind {
            SurfaceKind::Editor => Self {
                diameter: 28.0,
                options: MarkerOptions::SHOW_BADGE,
            },
            SurfaceKind::PreviewDesktop => Self {
                diameter: 24.0,
                options: MarkerOptions::SHOW_BADGE | MarkerOptions::PULSE,
            },
            SurfaceKind::PreviewMobile => Self {
                diameter: 20.0,
                options: MarkerOptions::SHOW_BADGE | MarkerOptions::PULSE,
            },
            SurfaceKind::Public => Self {
                diameter: 20.0,
                options: MarkerOptions::PULSE,
            },
        }
    }
}

/// One positioned marker in a surface's layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker<K> {
    /// Identity of the underlying pin.
    pub id: K,
    /// Dense 1-based badge number, in shared array order over the markers
    /// this surface shows.
    pub badge: usize,
    /// Marker center in this surface's device pixels.
    pub center: Point,
    /// Whether the pin has a product assigned. Always `true` on read-only
    /// surfaces; the editor renders `false` muted with a generic icon.
    pub assigned: bool,
}

/// The projected marker set for one surface.
///
/// Markers appear in board array order. Projection is pure: the same board
/// and frame always produce the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerLayout<K> {
    kind: SurfaceKind,
    markers: Vec<Marker<K>>,
    product_count: usize,
}

impl<K> MarkerLayout<K> {
    /// Returns the kind of the surface that produced this layout.
    #[must_use]
    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// Returns the markers in paint (and badge) order.
    #[must_use]
    pub fn markers(&self) -> &[Marker<K>] {
        &self.markers
    }

    /// Returns the number of markers this surface shows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns `true` if nothing is shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Returns the number of product-linked pins — the "N products" summary.
    ///
    /// Unassigned pins never count, on any surface.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.product_count
    }
}

impl<K> MarkerLayout<K>
where
    K: PartialEq,
{
    /// Returns the marker for the given pin, if this surface shows it.
    #[must_use]
    pub fn marker_of(&self, id: &K) -> Option<&Marker<K>> {
        self.markers.iter().find(|m| &m.id == id)
    }
}

impl<K> MarkerLayout<K>
where
    K: Clone,
{
    /// Returns `(id, center)` pairs in paint order, the shape marker hit
    /// testing consumes.
    pub fn hit_entries(&self) -> impl Iterator<Item = (K, Point)> + '_ {
        self.markers.iter().map(|m| (m.id.clone(), m.center))
    }
}

/// One rendering context: a kind, its own measured frame, and styling.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    kind: SurfaceKind,
    frame: ImageFrame,
    style: MarkerStyle,
}

impl Surface {
    /// Creates a surface with the conventional style for its kind.
    #[must_use]
    pub fn new(kind: SurfaceKind, frame: ImageFrame) -> Self {
        Self {
            kind,
            frame,
            style: MarkerStyle::for_kind(kind),
        }
    }

    /// Replaces the default style.
    #[must_use]
    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns this surface's kind.
    #[must_use]
    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// Returns the current measured frame.
    #[must_use]
    pub fn frame(&self) -> ImageFrame {
        self.frame
    }

    /// Returns the marker style.
    #[must_use]
    pub fn style(&self) -> MarkerStyle {
        self.style
    }

    /// Updates the measured frame after a layout change.
    ///
    /// Projection recomputes pixel positions from the normalized model on
    /// every call, so no stored state needs fixing up here.
    pub fn set_frame(&mut self, frame: ImageFrame) {
        self.frame = frame;
    }

    /// Projects the board against this surface's frame.
    ///
    /// Every shown pin lands at `(x · width, y · height)` of the frame, in
    /// board array order, with dense badge numbers over the shown markers.
    /// Read-only kinds skip unassigned pins entirely.
    #[must_use]
    pub fn project<K>(&self, board: &PinBoard<K>) -> MarkerLayout<K>
    where
        K: Clone,
    {
        let read_only = self.kind.is_read_only();
        let mut markers = Vec::with_capacity(board.len());
        let mut product_count = 0;

        for pin in board.iter() {
            let assigned = pin.is_assigned();
            if read_only && !assigned {
                continue;
            }
            if assigned {
                product_count += 1;
            }
            markers.push(Marker {
                id: pin.id.clone(),
                badge: markers.len() + 1,
                center: self.frame.denormalize(pin.pos),
                assigned,
            });
        }

        MarkerLayout {
            kind: self.kind,
            markers,
            product_count,
        }
    }
}
