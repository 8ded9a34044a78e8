// Copyright 2026 the Pintag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pintag Geom: normalized-fraction image geometry.
//!
//! This crate provides the coordinate model shared by every Pintag surface:
//! pin positions are stored as fractions of the image's own bounding box
//! ([`FracPoint`], origin top-left), and each rendering surface converts them
//! to pixels against its **own** measured bounds ([`ImageFrame`]) at render
//! time. Because the stored value is resolution-independent, a pin placed on
//! a thumbnail lands in the same relative spot on a full-size or
//! mobile-scaled image without any re-derivation.
//!
//! Out-of-range input is always clamped, never rejected: there is no failing
//! constructor anywhere in this crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use pintag_geom::{FracPoint, ImageFrame};
//!
//! // The editor measured its image at 300x300 device pixels.
//! let editor = ImageFrame::new(Rect::new(0.0, 0.0, 300.0, 300.0));
//!
//! // A click at pixel (150, 150) normalizes to the image center.
//! let pos = editor.normalize(Point::new(150.0, 150.0));
//! assert_eq!(pos, FracPoint::new(0.5, 0.5));
//!
//! // The public page measured the same image at 600x400; the pin
//! // re-projects against that frame with no stored pixel state.
//! let public = ImageFrame::new(Rect::new(0.0, 0.0, 600.0, 400.0));
//! assert_eq!(public.denormalize(pos), Point::new(300.0, 200.0));
//! ```
//!
//! ## Round-trip guarantee
//!
//! For any pointer position inside a non-degenerate frame,
//! `denormalize(normalize(p))` reproduces `p` within one pixel. Degenerate
//! frames (zero width or height) collapse the affected axis to `0.0` rather
//! than producing NaN.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect, Size};

/// Clamp a raw fraction into the unit interval, mapping NaN to `0.0`.
fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// A normalized image coordinate: fractions of image width/height in `[0, 1]`.
///
/// The origin is the image's top-left corner. Values are clamped into range by
/// every constructor and combinator, so a `FracPoint` obtained through this
/// API is always in range regardless of input.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawFracPoint")
)]
pub struct FracPoint {
    /// Horizontal fraction of the image width, `0.0` at the left edge.
    pub x: f64,
    /// Vertical fraction of the image height, `0.0` at the top edge.
    pub y: f64,
}

/// Unclamped mirror of [`FracPoint`] used as the deserialization source, so
/// values arriving from a host's persistence layer are re-clamped on entry.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFracPoint {
    x: f64,
    y: f64,
}

#[cfg(feature = "serde")]
impl From<RawFracPoint> for FracPoint {
    fn from(raw: RawFracPoint) -> Self {
        Self::new(raw.x, raw.y)
    }
}

impl FracPoint {
    /// The top-left corner of the image.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// The image center.
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Creates a normalized point, clamping both components into `[0, 1]`.
    ///
    /// NaN components clamp to `0.0`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    /// Linearly interpolates towards `other`.
    ///
    /// `t` is itself clamped into `[0, 1]`, so the result stays in range.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = clamp_unit(t);
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Euclidean distance to `other` in fraction space.
    ///
    /// Note that fraction space is anisotropic on non-square images; use
    /// pixel-space distances (via [`ImageFrame::denormalize`]) for hit
    /// testing.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        kurbo::Vec2::new(dx, dy).length()
    }
}

/// One surface's measured image bounding box in device pixels.
///
/// Each rendering surface (editor canvas, preview dialog, public page) owns
/// its own `ImageFrame`, re-measured whenever layout changes, and converts
/// the shared [`FracPoint`] model through it. The frame guarantees
/// non-negative extents: construction normalizes the rect so `x0 <= x1` and
/// `y0 <= y1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageFrame {
    rect: Rect,
}

impl ImageFrame {
    /// Creates a frame from a device-pixel rect.
    ///
    /// The rect is normalized so that its extents are non-negative.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self { rect: rect.abs() }
    }

    /// Creates a frame from an origin and size.
    #[must_use]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(Rect::from_origin_size(origin, size))
    }

    /// Returns the underlying device-pixel rect.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the frame's origin (top-left corner) in device pixels.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.rect.origin()
    }

    /// Returns the frame's size in device pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.rect.size()
    }

    /// Returns `true` if the frame has zero width or height.
    ///
    /// Degenerate frames occur transiently while a surface is measuring
    /// itself; conversions through them collapse to the frame origin instead
    /// of dividing by zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.rect.width() == 0.0 || self.rect.height() == 0.0
    }

    /// Converts a device-pixel position into a normalized coordinate.
    ///
    /// The result is `(p - origin) / size`, clamped into `[0, 1]` per axis.
    /// Positions outside the frame clamp to the nearest edge; a degenerate
    /// axis maps to `0.0`.
    #[must_use]
    pub fn normalize(&self, p: Point) -> FracPoint {
        let size = self.rect.size();
        let x = if size.width == 0.0 {
            0.0
        } else {
            (p.x - self.rect.x0) / size.width
        };
        let y = if size.height == 0.0 {
            0.0
        } else {
            (p.y - self.rect.y0) / size.height
        };
        FracPoint::new(x, y)
    }

    /// Converts a normalized coordinate back into device pixels.
    ///
    /// This is evaluated at render time against the *current* frame, which is
    /// what lets independent surfaces with different measured bounds agree on
    /// relative placement.
    #[must_use]
    pub fn denormalize(&self, f: FracPoint) -> Point {
        let size = self.rect.size();
        Point::new(
            self.rect.x0 + f.x * size.width,
            self.rect.y0 + f.y * size.height,
        )
    }

    /// Returns `true` if the device-pixel position lies inside the frame.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_into_unit_range() {
        assert_eq!(FracPoint::new(-0.5, 1.5), FracPoint { x: 0.0, y: 1.0 });
        assert_eq!(FracPoint::new(0.25, 0.75), FracPoint { x: 0.25, y: 0.75 });
    }

    #[test]
    fn nan_clamps_to_zero() {
        let p = FracPoint::new(f64::NAN, f64::NAN);
        assert_eq!(p, FracPoint::ZERO);
    }

    #[test]
    fn normalize_center_of_square_frame() {
        let frame = ImageFrame::new(Rect::new(0.0, 0.0, 300.0, 300.0));
        let pos = frame.normalize(Point::new(150.0, 150.0));
        assert_eq!(pos, FracPoint::new(0.5, 0.5));
    }

    #[test]
    fn normalize_respects_frame_origin() {
        let frame = ImageFrame::new(Rect::new(100.0, 50.0, 300.0, 250.0));
        let pos = frame.normalize(Point::new(100.0, 50.0));
        assert_eq!(pos, FracPoint::ZERO);
        let pos = frame.normalize(Point::new(300.0, 250.0));
        assert_eq!(pos, FracPoint::new(1.0, 1.0));
    }

    #[test]
    fn normalize_clamps_outside_positions() {
        let frame = ImageFrame::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(
            frame.normalize(Point::new(-40.0, 260.0)),
            FracPoint::new(0.0, 1.0)
        );
    }

    #[test]
    fn round_trip_within_one_pixel() {
        let frame = ImageFrame::new(Rect::new(13.0, 7.0, 813.0, 607.0));
        let samples = [
            Point::new(13.0, 7.0),
            Point::new(813.0, 607.0),
            Point::new(400.0, 300.0),
            Point::new(119.5, 450.25),
        ];
        for p in samples {
            let back = frame.denormalize(frame.normalize(p));
            assert!((back.x - p.x).abs() < 1.0, "x drifted: {p:?} -> {back:?}");
            assert!((back.y - p.y).abs() < 1.0, "y drifted: {p:?} -> {back:?}");
        }
    }

    #[test]
    fn degenerate_frame_collapses_without_nan() {
        let frame = ImageFrame::new(Rect::new(10.0, 10.0, 10.0, 10.0));
        assert!(frame.is_degenerate());
        let pos = frame.normalize(Point::new(55.0, 99.0));
        assert_eq!(pos, FracPoint::ZERO);
        assert_eq!(frame.denormalize(pos), Point::new(10.0, 10.0));
    }

    #[test]
    fn inverted_rect_is_normalized() {
        let frame = ImageFrame::new(Rect::new(200.0, 200.0, 0.0, 0.0));
        assert_eq!(frame.origin(), Point::new(0.0, 0.0));
        assert_eq!(frame.normalize(Point::new(100.0, 100.0)), FracPoint::CENTER);
    }

    #[test]
    fn resolution_independence_across_frames() {
        let thumb = ImageFrame::new(Rect::new(0.0, 0.0, 120.0, 90.0));
        let full = ImageFrame::new(Rect::new(0.0, 0.0, 1200.0, 900.0));
        let pos = thumb.normalize(Point::new(30.0, 45.0));
        let projected = full.denormalize(pos);
        assert_eq!(projected, Point::new(300.0, 450.0));
    }

    #[test]
    fn lerp_stays_in_range() {
        let a = FracPoint::new(0.0, 0.0);
        let b = FracPoint::new(1.0, 1.0);
        assert_eq!(a.lerp(b, 0.5), FracPoint::CENTER);
        assert_eq!(a.lerp(b, 7.0), b);
        assert_eq!(a.lerp(b, -3.0), a);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = FracPoint::new(0.2, 0.2);
        let b = FracPoint::new(0.8, 0.8);
        assert!((a.distance(b) - b.distance(a)).abs() < f64::EPSILON);
    }
}
