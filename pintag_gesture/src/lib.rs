// Copyright 2026 the Pintag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pintag Gesture: the pointer interaction controller.
//!
//! This crate turns raw pointer events into pin-editing **intents**: add a
//! pin here, move this pin there, select that pin. It owns no pin data and
//! performs no mutation itself — the host (typically `pintag_editor`) applies
//! intents to a board and decides what to persist.
//!
//! Two pieces compose:
//!
//! - [`hit`]: circular marker hit testing with a deterministic
//!   topmost-wins tie-break.
//! - [`pointer`]: the `Idle`/`Dragging` state machine, including
//!   click-vs-drag recognition, the grab-offset capture that keeps a dragged
//!   pin from jumping under the pointer, and the capacity/target guards that
//!   make click-to-add a silent no-op when it must not fire.
//!
//! ## Event scope
//!
//! While a drag is active the owner must feed the controller *document
//! scope* moves, not just moves over the image: motion continues even when
//! the pointer leaves the image bounds (positions clamp at the edges). The
//! matching teardown requirement — whatever subscribed those document
//! listeners must unconditionally release them — is modeled by
//! [`pointer::DragScope`], an RAII wrapper whose drop ends any in-flight
//! gesture.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use pintag_geom::{FracPoint, ImageFrame};
//! use pintag_gesture::pointer::{Intent, PinGesture};
//!
//! let frame = ImageFrame::new(Rect::new(0.0, 0.0, 300.0, 300.0));
//! let mut gesture = PinGesture::<u64>::new();
//!
//! // No markers yet; press and release on the empty canvas.
//! gesture.on_pointer_down(Point::new(150.0, 150.0), core::iter::empty::<(u64, Point)>());
//! let intent = gesture.on_pointer_up(Point::new(150.0, 150.0), &frame, true);
//!
//! // A raw add intent, before any product is chosen.
//! assert_eq!(intent, Some(Intent::AddPin(FracPoint::new(0.5, 0.5))));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod hit;
pub mod pointer;

pub use hit::{HitSet, top_hit};
pub use pointer::{DragScope, GestureConfig, Intent, PinGesture};
