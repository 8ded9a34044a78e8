// Copyright 2026 the Pintag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pintag Highlight: the shared hover/selection link between an image
//! overlay and its list representation.
//!
//! Both representations of a pin — the marker on the image and its paired
//! list row — must light up together when either one is hovered. This crate
//! models that as a single-owner nullable id with exactly **one read path**
//! ([`Highlight::current`]) and **one write path** ([`Highlight::update`]),
//! instead of implicit shared mutable state. The write path returns the
//! enter/leave transitions so the caller can forward them to every
//! representation; setting the same id twice is idempotent and produces no
//! transitions.
//!
//! ## Minimal example
//!
//! ```rust
//! use pintag_highlight::{Highlight, HighlightEvent};
//!
//! let mut highlight = Highlight::<u32>::new();
//!
//! // Pointer enters the marker for pin 7: both representations light up.
//! let events = highlight.update(Some(7));
//! assert_eq!(events, vec![HighlightEvent::Enter(7)]);
//!
//! // Hovering the paired list row for the same pin changes nothing.
//! assert!(highlight.update(Some(7)).is_empty());
//!
//! // Moving onto another pin's row swaps the highlight.
//! let events = highlight.update(Some(9));
//! assert_eq!(events, vec![
//!     HighlightEvent::Leave(7),
//!     HighlightEvent::Enter(9),
//! ]);
//!
//! // Mouse-leave clears.
//! let events = highlight.update(None);
//! assert_eq!(events, vec![HighlightEvent::Leave(9)]);
//! ```
//!
//! ## Touch surfaces
//!
//! Read-only surfaces have no hover on touch devices; there, highlighting is
//! triggered by tap and auto-clears after a fixed timeout. [`TapHighlight`]
//! wraps the same state with a host-supplied-millisecond deadline — the
//! engine never reads a clock; callers pass `now` into [`TapHighlight::tap`]
//! and [`TapHighlight::tick`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// How long a tap-triggered highlight stays lit, in milliseconds.
pub const TAP_HIGHLIGHT_MS: u64 = 2000;

/// An enter/leave transition produced by the highlight write path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HighlightEvent<K> {
    /// The pin with this id became highlighted.
    Enter(K),
    /// The pin with this id stopped being highlighted.
    Leave(K),
}

/// The single shared "highlighted pin" value.
///
/// At most one pin is highlighted at a time. The revision counter bumps only
/// when the highlighted id actually changes, so representations that poll
/// instead of consuming [`HighlightEvent`]s can cheaply detect change.
#[derive(Clone, Debug, Default)]
pub struct Highlight<K> {
    current: Option<K>,
    revision: u64,
}

impl<K> Highlight<K> {
    /// Creates an empty highlight (nothing lit).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            revision: 0,
        }
    }

    /// The read path: the currently highlighted id, if any.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Returns the current revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<K> Highlight<K>
where
    K: PartialEq,
{
    /// Returns `true` if the given id is the highlighted one.
    #[must_use]
    pub fn is_highlighted(&self, id: &K) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Clears the highlight (mouse-leave).
    ///
    /// Behaves like `update(None)` without requiring `Clone`; returns `true`
    /// if anything was lit.
    pub fn clear(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }
        self.current = None;
        self.revision = self.revision.wrapping_add(1);
        true
    }
}

impl<K> Highlight<K>
where
    K: Clone + PartialEq,
{
    /// The write path: moves the highlight to `next`, returning the
    /// transitions that occurred.
    ///
    /// Idempotent: writing the value already held returns no events and
    /// leaves the revision unchanged. At most two events are produced
    /// (a `Leave` for the old id, then an `Enter` for the new one).
    pub fn update(&mut self, next: Option<K>) -> Vec<HighlightEvent<K>> {
        if self.current == next {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(old) = self.current.take() {
            events.push(HighlightEvent::Leave(old));
        }
        if let Some(new) = next {
            events.push(HighlightEvent::Enter(new.clone()));
            self.current = Some(new);
        }
        self.revision = self.revision.wrapping_add(1);
        events
    }
}

/// Tap-triggered highlight for read-only surfaces.
///
/// Touch devices have no hover, so the public page highlights on tap and
/// auto-clears once a deadline passes. Time is host-supplied: callers pass
/// a monotonic millisecond value into [`TapHighlight::tap`] and call
/// [`TapHighlight::tick`] from whatever frame/timer source they already run.
/// Re-tapping the highlighted pin extends its deadline.
#[derive(Clone, Debug)]
pub struct TapHighlight<K> {
    highlight: Highlight<K>,
    timeout_ms: u64,
    deadline: Option<u64>,
}

impl<K> Default for TapHighlight<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TapHighlight<K> {
    /// Creates a tap highlight with the default [`TAP_HIGHLIGHT_MS`] timeout.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_timeout(TAP_HIGHLIGHT_MS)
    }

    /// Creates a tap highlight with a custom timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout(timeout_ms: u64) -> Self {
        Self {
            highlight: Highlight::new(),
            timeout_ms,
            deadline: None,
        }
    }

    /// The currently highlighted id, if any.
    ///
    /// Expiry only happens inside [`TapHighlight::tick`]; a host that stops
    /// ticking keeps the highlight lit.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.highlight.current()
    }

    /// Returns the revision counter of the underlying highlight.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.highlight.revision()
    }
}

impl<K> TapHighlight<K>
where
    K: Clone + PartialEq,
{
    /// Highlights `id` and (re)arms the auto-clear deadline at
    /// `now_ms + timeout`.
    ///
    /// Returns the transitions, which are empty when re-tapping the already
    /// highlighted pin — the deadline still extends in that case.
    pub fn tap(&mut self, id: K, now_ms: u64) -> Vec<HighlightEvent<K>> {
        self.deadline = Some(now_ms.saturating_add(self.timeout_ms));
        self.highlight.update(Some(id))
    }

    /// Advances time, clearing the highlight once `now_ms` reaches the
    /// deadline.
    ///
    /// Returns the `Leave` transition when the highlight expired on this
    /// tick; safe to call at any cadence, including after expiry.
    pub fn tick(&mut self, now_ms: u64) -> Vec<HighlightEvent<K>> {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                self.highlight.update(None)
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_highlight_reads_none() {
        let highlight = Highlight::<u32>::new();
        assert_eq!(highlight.current(), None);
        assert_eq!(highlight.revision(), 0);
    }

    #[test]
    fn setting_same_id_twice_is_idempotent() {
        let mut highlight = Highlight::new();
        assert_eq!(highlight.update(Some(5)), vec![HighlightEvent::Enter(5)]);
        let rev = highlight.revision();

        assert!(highlight.update(Some(5)).is_empty());
        assert_eq!(highlight.revision(), rev);
        assert!(highlight.is_highlighted(&5));
    }

    #[test]
    fn swapping_ids_leaves_then_enters() {
        let mut highlight = Highlight::new();
        highlight.update(Some(1));
        let events = highlight.update(Some(2));
        assert_eq!(
            events,
            vec![HighlightEvent::Leave(1), HighlightEvent::Enter(2)]
        );
        assert_eq!(highlight.current(), Some(&2));
    }

    #[test]
    fn clear_is_a_no_op_when_nothing_is_lit() {
        let mut highlight = Highlight::<u32>::new();
        assert!(!highlight.clear());
        assert_eq!(highlight.revision(), 0);

        highlight.update(Some(3));
        assert!(highlight.clear());
        assert_eq!(highlight.current(), None);
    }

    #[test]
    fn tap_arms_the_deadline_and_tick_expires_it() {
        let mut tap = TapHighlight::new();
        tap.tap(8_u32, 1_000);
        assert_eq!(tap.current(), Some(&8));

        // One millisecond early: still lit.
        assert!(tap.tick(2_999).is_empty());
        assert_eq!(tap.current(), Some(&8));

        // Exactly at the deadline: cleared.
        assert_eq!(tap.tick(3_000), vec![HighlightEvent::Leave(8)]);
        assert_eq!(tap.current(), None);
    }

    #[test]
    fn retapping_extends_the_deadline() {
        let mut tap = TapHighlight::with_timeout(100);
        tap.tap(1_u32, 0);
        // Re-tap at t=80 produces no transitions but pushes expiry to 180.
        assert!(tap.tap(1, 80).is_empty());
        assert!(tap.tick(100).is_empty());
        assert_eq!(tap.tick(180), vec![HighlightEvent::Leave(1)]);
    }

    #[test]
    fn tapping_another_pin_swaps_and_rearms() {
        let mut tap = TapHighlight::with_timeout(100);
        tap.tap(1_u32, 0);
        let events = tap.tap(2, 50);
        assert_eq!(
            events,
            vec![HighlightEvent::Leave(1), HighlightEvent::Enter(2)]
        );
        // The new deadline counts from the second tap.
        assert!(tap.tick(120).is_empty());
        assert_eq!(tap.tick(150), vec![HighlightEvent::Leave(2)]);
    }

    #[test]
    fn tick_after_expiry_stays_quiet() {
        let mut tap = TapHighlight::with_timeout(100);
        tap.tap(1_u32, 0);
        assert!(!tap.tick(100).is_empty());
        assert!(tap.tick(200).is_empty());
        assert!(tap.tick(300).is_empty());
    }
}
