// Copyright 2026 the Pintag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pintag Editor: one pin-editing session, composed.
//!
//! This crate wires the leaf pieces — the ordered board, the pointer state
//! machine, the shared highlight — into the engine a host embeds behind its
//! editing canvas. The host keeps three responsibilities, and only three:
//!
//! - render the image and markers (the editor hands it a [`MarkerLayout`]);
//! - generate pin ids and persist arrays (the editor holds no canonical
//!   store);
//! - run product search, feeding the chosen snapshot back into
//!   [`PinEditor::assign_product`].
//!
//! Everything the host must react to arrives through a single event sink
//! passed into the methods that can emit:
//!
//! - [`EditorEvent::AddPin`] — a raw click in normalized coordinates, before
//!   any product is chosen. The host appends a pin (with its own id) via
//!   [`PinEditor::add_unassigned`] and typically opens its product picker.
//! - [`EditorEvent::PinsChanged`] — fired after drag completion, deletion,
//!   or reorder, carrying the full next array. Debouncing and saving are the
//!   host's business.
//! - [`EditorEvent::EditPinRequest`] — the "choose/change product" UI is
//!   delegated to the host; this engine never implements product search.
//!
//! Nothing here can fail: coordinates clamp, the pin cap silently rejects,
//! and unknown ids fall through as no-ops.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use pintag_editor::{EditorEvent, PinEditor};
//! use pintag_geom::{FracPoint, ImageFrame};
//!
//! let frame = ImageFrame::new(Rect::new(0.0, 0.0, 300.0, 300.0));
//! let mut editor = PinEditor::<u64>::new(frame);
//! let mut events = Vec::new();
//!
//! // Click the empty canvas at its center.
//! editor.pointer_down(Point::new(150.0, 150.0));
//! editor.pointer_up(Point::new(150.0, 150.0), |ev| events.push(ev));
//!
//! // The engine asked for a pin; the host appends one with its own id.
//! assert_eq!(events, vec![EditorEvent::AddPin { pos: FracPoint::new(0.5, 0.5) }]);
//! editor.add_unassigned(1, FracPoint::new(0.5, 0.5));
//! assert_eq!(editor.board().len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Point;

use pintag_board::{Pin, PinBoard, ProductCard};
use pintag_geom::{FracPoint, ImageFrame};
use pintag_gesture::pointer::{Intent, PinGesture};
use pintag_highlight::{Highlight, HighlightEvent};
use pintag_surface::{MarkerLayout, Surface, SurfaceKind};

pub use pintag_board::DEFAULT_MAX_PINS;

/// What the engine tells its host.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorEvent<K> {
    /// A click on empty canvas asked for a new pin here. No pin exists yet;
    /// the host appends one (choosing the id) and usually opens its product
    /// picker.
    AddPin {
        /// Click position in normalized coordinates.
        pos: FracPoint,
    },
    /// The array changed shape or order: a drag completed, a pin was
    /// deleted, or pins were reordered. Carries the full next state.
    PinsChanged {
        /// The next array, in badge order.
        pins: Vec<Pin<K>>,
    },
    /// The host should open its "choose/change product" UI for this pin.
    EditPinRequest {
        /// The pin to edit.
        id: K,
    },
}

/// One editing session over one image.
///
/// Single-threaded and strictly callback-driven: the only suspension points
/// are waits for the next pointer event, and every mutation happens inside
/// the method that receives that event.
#[derive(Debug)]
pub struct PinEditor<K> {
    board: PinBoard<K>,
    gesture: PinGesture<K>,
    highlight: Highlight<K>,
    selected: Option<K>,
    surface: Surface,
}

impl<K> PinEditor<K> {
    /// Creates an empty session with the default pin cap.
    #[must_use]
    pub fn new(frame: ImageFrame) -> Self {
        Self::with_board(PinBoard::new(), frame)
    }

    /// Creates a session around an existing board (for example, one seeded
    /// from the host's stored array).
    #[must_use]
    pub fn with_board(board: PinBoard<K>, frame: ImageFrame) -> Self {
        Self {
            board,
            gesture: PinGesture::new(),
            highlight: Highlight::new(),
            selected: None,
            surface: Surface::new(SurfaceKind::Editor, frame),
        }
    }

    /// Returns the board this session edits.
    #[must_use]
    pub fn board(&self) -> &PinBoard<K> {
        &self.board
    }

    /// Returns the shared highlight linking markers to list rows.
    #[must_use]
    pub fn highlight(&self) -> &Highlight<K> {
        &self.highlight
    }

    /// Returns the currently selected pin, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&K> {
        self.selected.as_ref()
    }

    /// Returns `true` while a marker drag is in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Updates the editor's measured image frame after a layout change.
    pub fn set_frame(&mut self, frame: ImageFrame) {
        self.surface.set_frame(frame);
    }

    /// Ends any in-flight gesture without emitting; the surface-teardown
    /// path. The document-scope listeners the host attached for the gesture
    /// must be released together with this call.
    pub fn teardown(&mut self) {
        self.gesture.reset();
    }
}

impl<K> PinEditor<K>
where
    K: Clone + PartialEq,
{
    /// Projects the current board for rendering the editing canvas.
    #[must_use]
    pub fn layout(&self) -> MarkerLayout<K> {
        self.surface.project(&self.board)
    }

    /// Feeds a pointer-down on the canvas.
    ///
    /// Returns the marker that was pressed, if any, so the host knows to
    /// attach its document-scope move/up listeners for the drag.
    pub fn pointer_down(&mut self, pointer: Point) -> Option<K> {
        let layout = self.surface.project(&self.board);
        self.gesture.on_pointer_down(pointer, layout.hit_entries())
    }

    /// Feeds a pointer move (document scope while a gesture is active).
    ///
    /// Drags reposition the pin immediately so the marker tracks the
    /// pointer; the array hand-off waits for drag completion.
    pub fn pointer_move(&mut self, pointer: Point) {
        if let Some(Intent::MovePin { id, pos }) =
            self.gesture.on_pointer_move(pointer, &self.surface.frame())
        {
            self.board.drag_to(&id, pos);
        }
    }

    /// Feeds the pointer-up that ends the gesture, emitting into `sink`.
    pub fn pointer_up(&mut self, pointer: Point, mut sink: impl FnMut(EditorEvent<K>)) {
        let can_add = self.board.remaining_capacity() > 0;
        let intent = self
            .gesture
            .on_pointer_up(pointer, &self.surface.frame(), can_add);
        match intent {
            Some(Intent::AddPin(pos)) => sink(EditorEvent::AddPin { pos }),
            Some(Intent::Select(id)) => self.selected = Some(id),
            Some(Intent::DragEnd { .. }) => self.emit_pins_changed(&mut sink),
            Some(Intent::MovePin { .. }) | None => {}
        }
    }

    /// Appends the pin a preceding [`EditorEvent::AddPin`] asked for, using
    /// the host-generated id. Returns `false` at the cap.
    pub fn add_unassigned(&mut self, id: K, pos: FracPoint) -> bool {
        self.board.add_unassigned(id, pos)
    }

    /// Appends a pin already linked to a product (the explicit
    /// add-with-product path). Returns `false` at the cap.
    pub fn add_with_product(&mut self, id: K, pos: FracPoint, product: ProductCard) -> bool {
        self.board.add(Pin::assigned(id, pos, product))
    }

    /// Attaches the product snapshot the host resolved for a pin.
    pub fn assign_product(&mut self, id: &K, product: ProductCard) -> bool {
        self.board.assign_product(id, product)
    }

    /// Clears a pin's product link, returning it to the unassigned state.
    pub fn clear_product(&mut self, id: &K) -> bool {
        self.board.clear_product(id)
    }

    /// Sets or clears a pin's free-text label.
    pub fn set_label(&mut self, id: &K, label: Option<String>) -> bool {
        self.board.set_label(id, label)
    }

    /// Deletes a pin by identity and hands the host the next array.
    pub fn remove_pin(&mut self, id: &K, mut sink: impl FnMut(EditorEvent<K>)) {
        if self.board.remove(id) {
            if self.selected.as_ref() == Some(id) {
                self.selected = None;
            }
            if self.highlight.is_highlighted(id) {
                self.highlight.clear();
            }
            self.emit_pins_changed(&mut sink);
        }
    }

    /// Reorders pins (list-row drag) and hands the host the next array.
    pub fn move_pin(&mut self, from: usize, to: usize, mut sink: impl FnMut(EditorEvent<K>)) {
        if self.board.move_to(from, to) {
            self.emit_pins_changed(&mut sink);
        }
    }

    /// Asks the host to open its product picker for a pin.
    ///
    /// Wired to whatever affordance the host renders (an edit button on the
    /// list row, a double click on the marker); the engine only relays it.
    pub fn request_edit(&mut self, id: &K, mut sink: impl FnMut(EditorEvent<K>)) {
        if self.board.get(id).is_some() {
            sink(EditorEvent::EditPinRequest { id: id.clone() });
        }
    }

    /// Moves the hover highlight; returns the enter/leave transitions for
    /// both the marker overlay and the list rows.
    pub fn hover(&mut self, id: Option<K>) -> Vec<HighlightEvent<K>> {
        self.highlight.update(id)
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    fn emit_pins_changed(&self, sink: &mut impl FnMut(EditorEvent<K>)) {
        sink(EditorEvent::PinsChanged {
            pins: self.board.snapshot(),
        });
    }
}
