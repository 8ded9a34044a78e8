// Copyright 2026 the Pintag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pointer state machine: click-to-add, marker selection, and drag
//! tracking.
//!
//! ## Usage
//!
//! 1) On pointer-down over the canvas, call [`PinGesture::on_pointer_down`]
//!    with the current marker centers in paint order. A press on a marker
//!    arms a drag and captures the grab offset; a press on empty canvas arms
//!    a potential click-to-add.
//! 2) While a gesture is armed, feed every move (document scope, not just
//!    moves over the image) into [`PinGesture::on_pointer_move`] and apply
//!    any returned [`Intent`].
//! 3) On pointer-up — anywhere — call [`PinGesture::on_pointer_up`] and
//!    apply the returned intent: a plain click resolves to
//!    [`Intent::Select`] or [`Intent::AddPin`], a real drag to
//!    [`Intent::DragEnd`].
//! 4) On surface teardown, call [`PinGesture::reset`] (or hold the gesture
//!    through a [`DragScope`], which does it on drop).

use kurbo::{Point, Vec2};
use pintag_geom::{FracPoint, ImageFrame};

use crate::hit;

/// Tunables for hit testing and click recognition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Radius of the circular marker hit target, in device pixels.
    pub marker_radius: f64,
    /// Movement beyond this many pixels turns a press into a drag instead of
    /// a click.
    pub drag_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            marker_radius: 12.0,
            drag_threshold: 3.0,
        }
    }
}

/// An editing intent produced by the state machine.
///
/// Intents are the controller's entire output; applying them to a board and
/// notifying the host is the caller's job.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent<K> {
    /// Plain click on empty canvas: place a new, unassigned pin here.
    AddPin(FracPoint),
    /// Drag in progress: the pin's next position.
    MovePin {
        /// The dragged pin.
        id: K,
        /// Next position, already clamped by normalization.
        pos: FracPoint,
    },
    /// The drag gesture finished; the host typically commits the array now.
    DragEnd {
        /// The pin that was dragged.
        id: K,
    },
    /// Plain click on a marker: make this the single selected pin.
    Select(K),
}

enum State<K> {
    Idle,
    /// Press began on empty canvas; may resolve to click-to-add.
    PressedCanvas { press: Point, moved: bool },
    /// Press began on a marker; armed as a drag from the first event.
    Dragging {
        id: K,
        grab_offset: Vec2,
        press: Point,
        moved: bool,
    },
}

/// The interaction controller for one editing surface.
///
/// Generic over the host's pin id type `K`; the controller holds no pin data
/// beyond the identity of the pin currently under the pointer.
pub struct PinGesture<K> {
    config: GestureConfig,
    state: State<K>,
}

impl<K> core::fmt::Debug for PinGesture<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = match &self.state {
            State::Idle => "Idle",
            State::PressedCanvas { .. } => "PressedCanvas",
            State::Dragging { .. } => "Dragging",
        };
        f.debug_struct("PinGesture")
            .field("config", &self.config)
            .field("state", &state)
            .finish()
    }
}

impl<K> Default for PinGesture<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PinGesture<K> {
    /// Creates a controller with the default [`GestureConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// Creates a controller with custom tunables.
    #[must_use]
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            state: State::Idle,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Returns `true` while a press on a marker is being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }

    /// Returns the pin armed for dragging, if any.
    #[must_use]
    pub fn dragging_pin(&self) -> Option<&K> {
        match &self.state {
            State::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Unconditionally abandons any in-flight gesture.
    ///
    /// This is the surface-teardown path: whatever document-scope listeners
    /// the host attached for the gesture must be released together with this
    /// call, and no further intents will be produced until the next press.
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }
}

impl<K> PinGesture<K>
where
    K: Clone + PartialEq,
{
    /// Feeds a pointer-down over the canvas.
    ///
    /// `markers` supplies `(id, center)` pairs in paint order, typically the
    /// projected marker layout of the editing surface. A press on a marker
    /// arms a drag on the topmost one and captures the pixel offset between
    /// pointer and marker center, so the pin does not jump under the
    /// pointer. A press anywhere else arms a potential click-to-add.
    ///
    /// Returns the marker that was pressed, if any — hosts use this to
    /// decide whether to attach document-scope move/up listeners.
    pub fn on_pointer_down<I>(&mut self, pointer: Point, markers: I) -> Option<K>
    where
        I: IntoIterator<Item = (K, Point)>,
    {
        match hit::top_hit_entry(markers, pointer, self.config.marker_radius) {
            Some((id, center)) => {
                self.state = State::Dragging {
                    id: id.clone(),
                    grab_offset: pointer - center,
                    press: pointer,
                    moved: false,
                };
                Some(id)
            }
            None => {
                self.state = State::PressedCanvas {
                    press: pointer,
                    moved: false,
                };
                None
            }
        }
    }

    /// Feeds a pointer move.
    ///
    /// During a drag this recomputes the pin position from the pointer minus
    /// the grab offset, normalized and clamped against `frame` — motion
    /// continues even when the pointer leaves the image bounds. Moves below
    /// the drag threshold produce nothing, so a steady click never jiggles
    /// the pin it is about to select.
    pub fn on_pointer_move(&mut self, pointer: Point, frame: &ImageFrame) -> Option<Intent<K>> {
        match &mut self.state {
            State::Idle => None,
            State::PressedCanvas { press, moved } => {
                let threshold2 = self.config.drag_threshold * self.config.drag_threshold;
                if (pointer - *press).hypot2() > threshold2 {
                    *moved = true;
                }
                None
            }
            State::Dragging {
                id,
                grab_offset,
                press,
                moved,
            } => {
                let threshold2 = self.config.drag_threshold * self.config.drag_threshold;
                if !*moved && (pointer - *press).hypot2() <= threshold2 {
                    return None;
                }
                *moved = true;
                let center = pointer - *grab_offset;
                Some(Intent::MovePin {
                    id: id.clone(),
                    pos: frame.normalize(center),
                })
            }
        }
    }

    /// Feeds the pointer-up that ends the gesture (wherever it lands).
    ///
    /// Resolution:
    /// - press+release on a marker without crossing the drag threshold is a
    ///   plain click: [`Intent::Select`];
    /// - the same on empty canvas is click-to-add: [`Intent::AddPin`] with
    ///   the release position normalized — but only when `can_add` is true
    ///   (the board is under its cap) and the release is still inside the
    ///   frame. Both guards are silent no-ops, not failures. A click whose
    ///   press target was a marker never adds, so no duplicate pin can spawn
    ///   under an existing one;
    /// - a real drag resolves to [`Intent::DragEnd`], after which the host
    ///   commits the moved array.
    pub fn on_pointer_up(
        &mut self,
        pointer: Point,
        frame: &ImageFrame,
        can_add: bool,
    ) -> Option<Intent<K>> {
        match core::mem::replace(&mut self.state, State::Idle) {
            State::Idle => None,
            State::PressedCanvas { moved, .. } => {
                if !moved && can_add && frame.contains(pointer) {
                    Some(Intent::AddPin(frame.normalize(pointer)))
                } else {
                    None
                }
            }
            State::Dragging { id, moved, .. } => {
                if moved {
                    Some(Intent::DragEnd { id })
                } else {
                    Some(Intent::Select(id))
                }
            }
        }
    }
}

/// RAII wrapper guaranteeing gesture release.
///
/// Hosts that subscribe document-scope move/up listeners for the lifetime of
/// one gesture hold the controller through a `DragScope`; when the scope
/// drops — pointer-up, surface teardown, or an unwinding panic — the gesture
/// resets, so a leaked subscription can never keep repositioning a pin after
/// the editing surface has closed.
#[derive(Debug)]
pub struct DragScope<'a, K> {
    gesture: &'a mut PinGesture<K>,
}

impl<'a, K> DragScope<'a, K> {
    /// Wraps a controller for the duration of one gesture.
    #[must_use]
    pub fn new(gesture: &'a mut PinGesture<K>) -> Self {
        Self { gesture }
    }
}

impl<K> core::ops::Deref for DragScope<'_, K> {
    type Target = PinGesture<K>;

    fn deref(&self) -> &Self::Target {
        self.gesture
    }
}

impl<K> core::ops::DerefMut for DragScope<'_, K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.gesture
    }
}

impl<K> Drop for DragScope<'_, K> {
    fn drop(&mut self) {
        self.gesture.reset();
    }
}
