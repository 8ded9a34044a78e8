// Copyright 2026 the Pintag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pintag Board: the ordered product-pin collection.
//!
//! This crate does the _bookkeeping_ of one post's pin annotations: an
//! ordered sequence of [`Pin`]s plus the structural invariants every Pintag
//! surface relies on. It knows nothing about pointer events or rendering;
//! callers decide how user input maps onto the mutation methods here.
//!
//! The core type is [`PinBoard`], a compact, generic container that tracks:
//! - The ordered pin sequence. **Insertion order is the numbering**: the
//!   visible 1-based badge number of a pin is derived from its array
//!   position and is never stored independently, so it is always dense
//!   (`1..=N`, no gaps).
//! - A `max_pins` cap (default [`DEFAULT_MAX_PINS`]). Adding at the cap is a
//!   **silent no-op** — a policy rejection, not a failure.
//! - A monotonically increasing **revision** counter that bumps when the
//!   board changes semantically, letting observers cheaply detect change.
//!
//! Coordinates are normalized fractions ([`FracPoint`]) and are clamped into
//! `[0, 1]` on every write; nothing in this crate rejects input or returns an
//! error. Pins are identified by an opaque, host-generated key type `K`
//! (only `PartialEq` is required), so removal and product assignment work by
//! identity, never by position — a stale index from a concurrent re-render
//! cannot corrupt an edit.
//!
//! The board holds no canonical store: after a batch of edits the host asks
//! for [`PinBoard::snapshot`] ("here is the next full array") and owns
//! whatever persistence happens next.
//!
//! ## Minimal example
//!
//! ```rust
//! use pintag_board::{PinBoard, ProductCard};
//! use pintag_geom::FracPoint;
//!
//! // Using u64 as a stand-in for a host-generated pin id.
//! let mut board = PinBoard::<u64>::new();
//!
//! // Click-to-add: placed but unassigned.
//! board.add_unassigned(1, FracPoint::new(0.5, 0.5));
//! assert!(!board.pins()[0].is_assigned());
//!
//! // The host resolved a product; attach the display snapshot.
//! board.assign_product(&1, ProductCard {
//!     id: "P1".into(),
//!     title: "Desk lamp".into(),
//!     image_url: "https://img.example/p1.jpg".into(),
//!     price: 49.0,
//!     currency: "USD".into(),
//! });
//! assert!(board.pins()[0].is_assigned());
//!
//! // Badge numbers are array order, 1-based.
//! board.add_unassigned(2, FracPoint::new(0.8, 0.2));
//! assert_eq!(board.badge_of(&2), Some(2));
//! board.move_to(1, 0);
//! assert_eq!(board.badge_of(&2), Some(1));
//!
//! // Removal is by identity.
//! board.remove(&1);
//! assert_eq!(board.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

pub use pintag_geom::FracPoint;

/// Default pin cap per board.
pub const DEFAULT_MAX_PINS: usize = 20;

/// Denormalized product display snapshot attached to a pin.
///
/// The fields are populated once, at assignment time, from whatever
/// product-lookup service the host supplies; this subsystem never re-fetches
/// them. `price`/`currency` are display data — formatting (and any locale
/// logic) belongs to the consuming surface.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductCard {
    /// Catalog id of the linked product.
    pub id: String,
    /// Product title as shown on list rows and marker tooltips.
    pub title: String,
    /// Thumbnail URL.
    pub image_url: String,
    /// Display price, in major units.
    pub price: f64,
    /// ISO 4217 currency code.
    pub currency: String,
}

/// One annotation: a normalized position, an optional label, and an optional
/// product link.
///
/// `product == None` means "placed but unassigned": the editor shows such
/// pins muted with a generic icon, and read-only surfaces suppress them
/// entirely (see `pintag_surface`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pin<K> {
    /// Opaque, host-generated identity; stable across drag and reorder.
    pub id: K,
    /// Position as fractions of the image bounding box, origin top-left.
    pub pos: FracPoint,
    /// Optional free-text override shown instead of the product title.
    pub label: Option<String>,
    /// Product display snapshot; `None` until the host assigns one.
    pub product: Option<ProductCard>,
}

impl<K> Pin<K> {
    /// Creates a placed-but-unassigned pin.
    #[must_use]
    pub fn unassigned(id: K, pos: FracPoint) -> Self {
        Self {
            id,
            pos,
            label: None,
            product: None,
        }
    }

    /// Creates a pin already linked to a product.
    #[must_use]
    pub fn assigned(id: K, pos: FracPoint, product: ProductCard) -> Self {
        Self {
            id,
            pos,
            label: None,
            product: Some(product),
        }
    }

    /// Returns `true` if a product has been assigned.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.product.is_some()
    }
}

/// The ordered pin collection for one post, with a capacity cap and a
/// revision counter.
///
/// `PinBoard` imposes only `PartialEq` on the id type `K`, keeping it easy to
/// integrate with whatever identity scheme the host already uses (UUID
/// strings, integer handles, …). Uniqueness of ids is a documented caller
/// contract, checked by a debug-only assertion on every add.
#[derive(Clone, Debug)]
pub struct PinBoard<K> {
    pins: Vec<Pin<K>>,
    max_pins: usize,
    revision: u64,
}

impl<K> Default for PinBoard<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PinBoard<K> {
    /// Creates an empty board with the default cap of [`DEFAULT_MAX_PINS`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pins: Vec::new(),
            max_pins: DEFAULT_MAX_PINS,
            revision: 0,
        }
    }

    /// Creates an empty board with a caller-configured cap.
    #[must_use]
    pub const fn with_max_pins(max_pins: usize) -> Self {
        Self {
            pins: Vec::new(),
            max_pins,
            revision: 0,
        }
    }

    /// Returns the pins in badge order.
    #[must_use]
    pub fn pins(&self) -> &[Pin<K>] {
        &self.pins
    }

    /// Returns an iterator over the pins in badge order.
    pub fn iter(&self) -> core::slice::Iter<'_, Pin<K>> {
        self.pins.iter()
    }

    /// Returns the number of pins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Returns `true` if the board has no pins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Returns the configured cap.
    #[must_use]
    pub fn max_pins(&self) -> usize {
        self.max_pins
    }

    /// Returns how many more pins can be added before the cap.
    ///
    /// Hosts typically surface this as an informational "18/20" counter;
    /// the board itself never raises an error when it reaches zero.
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        self.max_pins.saturating_sub(self.pins.len())
    }

    /// Returns the current revision counter.
    ///
    /// The revision is local to this board instance and bumps only when a
    /// mutation changes the semantic contents. No-op calls (for example, a
    /// rejected add at the cap, or re-assigning an identical snapshot) leave
    /// it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Reorders a pin from one array position to another (splice semantics).
    ///
    /// The pin keeps its identity and all fields; only the order — and with
    /// it every derived badge number — changes. An out-of-range `from` is a
    /// no-op; `to` is clamped to the valid insertion range.
    ///
    /// Returns `true` if the order changed.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        if from >= self.pins.len() {
            return false;
        }
        let to = to.min(self.pins.len() - 1);
        if from == to {
            return false;
        }
        let pin = self.pins.remove(from);
        self.pins.insert(to, pin);
        self.bump_revision();
        true
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K> PinBoard<K>
where
    K: PartialEq,
{
    /// Seeds a board from an existing pin array (for example, one loaded by
    /// the host).
    ///
    /// Pins beyond `max_pins` and pins whose id duplicates an earlier one
    /// are dropped silently, consistent with the cap policy. The scan-based
    /// de-duplication is quadratic; for large boards with hashable ids see
    /// [`PinBoard::from_pins_hashed`].
    #[must_use]
    pub fn from_pins<I>(pins: I, max_pins: usize) -> Self
    where
        I: IntoIterator<Item = Pin<K>>,
    {
        let mut board = Self::with_max_pins(max_pins);
        for pin in pins {
            if board.pins.len() == board.max_pins {
                break;
            }
            if board.position_of(&pin.id).is_none() {
                board.pins.push(pin);
            }
        }
        board
    }

    /// Appends a pin at the end of the sequence.
    ///
    /// Returns `false` — leaving the array untouched — when the board is at
    /// its cap. This is the only add path, so `len() <= max_pins` holds at
    /// all times.
    ///
    /// # Panics (debug only)
    ///
    /// Panics in debug builds if `pin.id` is already on the board.
    pub fn add(&mut self, pin: Pin<K>) -> bool {
        if self.pins.len() >= self.max_pins {
            return false;
        }
        debug_assert!(
            self.position_of(&pin.id).is_none(),
            "pin id already on the board"
        );
        self.pins.push(pin);
        self.bump_revision();
        true
    }

    /// Appends a placed-but-unassigned pin (the click-to-add path).
    pub fn add_unassigned(&mut self, id: K, pos: FracPoint) -> bool {
        self.add(Pin::unassigned(id, pos))
    }

    /// Moves a pin to a new position, touching nothing else.
    ///
    /// The position is already clamped by construction of [`FracPoint`];
    /// identity, label, and product link are unchanged. Returns `true` if
    /// the pin exists and actually moved.
    pub fn drag_to(&mut self, id: &K, pos: FracPoint) -> bool {
        let Some(idx) = self.position_of(id) else {
            return false;
        };
        if self.pins[idx].pos == pos {
            return false;
        }
        self.pins[idx].pos = pos;
        self.bump_revision();
        true
    }

    /// Attaches (or replaces) the product snapshot on a pin.
    ///
    /// Returns `true` if the pin exists and the snapshot changed.
    pub fn assign_product(&mut self, id: &K, product: ProductCard) -> bool {
        let Some(idx) = self.position_of(id) else {
            return false;
        };
        if self.pins[idx].product.as_ref() == Some(&product) {
            return false;
        }
        self.pins[idx].product = Some(product);
        self.bump_revision();
        true
    }

    /// Detaches the product from a pin, returning it to the unassigned state.
    pub fn clear_product(&mut self, id: &K) -> bool {
        let Some(idx) = self.position_of(id) else {
            return false;
        };
        if self.pins[idx].product.is_none() {
            return false;
        }
        self.pins[idx].product = None;
        self.bump_revision();
        true
    }

    /// Sets or clears the free-text label override on a pin.
    pub fn set_label(&mut self, id: &K, label: Option<String>) -> bool {
        let Some(idx) = self.position_of(id) else {
            return false;
        };
        if self.pins[idx].label == label {
            return false;
        }
        self.pins[idx].label = label;
        self.bump_revision();
        true
    }

    /// Removes a pin by identity.
    ///
    /// Exactly one element leaves the array; the relative order of the rest
    /// is unchanged, so the surviving badge numbers close ranks to `1..=N`.
    /// Returns `true` if the pin existed.
    pub fn remove(&mut self, id: &K) -> bool {
        let Some(idx) = self.position_of(id) else {
            return false;
        };
        self.pins.remove(idx);
        self.bump_revision();
        true
    }

    /// Returns the pin with the given id, if present.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&Pin<K>> {
        self.position_of(id).map(|idx| &self.pins[idx])
    }

    /// Returns the array position of the pin with the given id.
    #[must_use]
    pub fn position_of(&self, id: &K) -> Option<usize> {
        self.pins.iter().position(|pin| &pin.id == id)
    }

    /// Returns the visible 1-based badge number of the pin with the given id.
    ///
    /// Badge numbers are derived from array order on every call, so they are
    /// dense by construction.
    #[must_use]
    pub fn badge_of(&self, id: &K) -> Option<usize> {
        self.position_of(id).map(|idx| idx + 1)
    }
}

impl<K> PinBoard<K>
where
    K: Clone,
{
    /// Clones the full pin array for hand-off to the host.
    ///
    /// This is the "here is the next full array" contract: the board keeps
    /// no canonical store, and the host owns debouncing and persistence of
    /// whatever it receives.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Pin<K>> {
        self.pins.clone()
    }
}

#[cfg(feature = "hashbrown")]
impl<K> PinBoard<K>
where
    K: core::hash::Hash + Eq,
{
    /// Seeds a board from an existing pin array, de-duplicating ids with
    /// hashing.
    ///
    /// An alternative to [`PinBoard::from_pins`] for large inputs when `K`
    /// supports hashing; first occurrence wins, matching the scan-based
    /// variant.
    #[must_use]
    pub fn from_pins_hashed<I>(pins: I, max_pins: usize) -> Self
    where
        I: IntoIterator<Item = Pin<K>>,
    {
        use core::hash::BuildHasher;
        use hashbrown::hash_map::Entry;
        use hashbrown::{DefaultHashBuilder, HashMap};

        // Distinct ids can share a 64-bit hash, so each bucket tracks every
        // candidate index and falls back to equality checks against them.
        enum Bucket {
            One(usize),
            Many(Vec<usize>),
        }

        let build_hasher = DefaultHashBuilder::default();
        let mut kept: Vec<Pin<K>> = Vec::new();
        let mut seen: HashMap<u64, Bucket, DefaultHashBuilder> =
            HashMap::with_hasher(build_hasher.clone());

        for pin in pins {
            if kept.len() == max_pins {
                break;
            }
            let hash = build_hasher.hash_one(&pin.id);
            match seen.entry(hash) {
                Entry::Vacant(entry) => {
                    entry.insert(Bucket::One(kept.len()));
                    kept.push(pin);
                }
                Entry::Occupied(mut entry) => match entry.get_mut() {
                    Bucket::One(existing_idx) => {
                        if kept[*existing_idx].id == pin.id {
                            continue;
                        }
                        let idx = kept.len();
                        *entry.get_mut() = Bucket::Many(Vec::from([*existing_idx, idx]));
                        kept.push(pin);
                    }
                    Bucket::Many(existing_idxs) => {
                        if existing_idxs.iter().any(|&idx| kept[idx].id == pin.id) {
                            continue;
                        }
                        existing_idxs.push(kept.len());
                        kept.push(pin);
                    }
                },
            }
        }

        let mut board = Self::with_max_pins(max_pins);
        board.pins = kept;
        board
    }
}
