// Copyright 2026 the Pintag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular marker hit testing.
//!
//! Markers are circles of a uniform radius centered on each pin's projected
//! pixel position. Candidates are tested in paint order (array order, which
//! is also badge order), and overlapping markers resolve to the **last**
//! candidate — the one painted on top. The tie-break is deterministic so a
//! press and the click resolution that follows it agree on the target.

use kurbo::Point;
use smallvec::SmallVec;

/// Hit candidates in paint order. Boards cap at a couple dozen pins, so the
/// buffer stays inline for any overlap a real layout can produce.
pub type HitSet<K> = SmallVec<[K; 4]>;

/// Collects every marker whose circle contains `pointer`, in paint order.
///
/// `markers` supplies `(id, center)` pairs in array order. Distances compare
/// squared, so no square root is taken.
pub fn hits<K, I>(markers: I, pointer: Point, radius: f64) -> HitSet<K>
where
    I: IntoIterator<Item = (K, Point)>,
{
    let r2 = radius * radius;
    let mut found = HitSet::new();
    for (id, center) in markers {
        let d = pointer - center;
        if d.hypot2() <= r2 {
            found.push(id);
        }
    }
    found
}

/// Returns the topmost marker at `pointer` together with its center, if any.
///
/// The topmost marker is the last one in paint order, matching what the user
/// sees when markers overlap. The center is what a drag needs to capture its
/// grab offset.
#[must_use = "the hit result decides whether a press starts a drag"]
pub fn top_hit_entry<K, I>(markers: I, pointer: Point, radius: f64) -> Option<(K, Point)>
where
    I: IntoIterator<Item = (K, Point)>,
{
    let r2 = radius * radius;
    let mut topmost = None;
    for (id, center) in markers {
        let d = pointer - center;
        if d.hypot2() <= r2 {
            topmost = Some((id, center));
        }
    }
    topmost
}

/// Returns the topmost marker at `pointer`, if any.
#[must_use = "the hit result decides whether a press starts a drag"]
pub fn top_hit<K, I>(markers: I, pointer: Point, radius: f64) -> Option<K>
where
    I: IntoIterator<Item = (K, Point)>,
{
    top_hit_entry(markers, pointer, radius).map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_returns_none() {
        let markers = [(1_u32, Point::new(50.0, 50.0))];
        assert_eq!(top_hit(markers, Point::new(100.0, 100.0), 12.0), None);
    }

    #[test]
    fn hit_inside_radius() {
        let markers = [(1_u32, Point::new(50.0, 50.0))];
        assert_eq!(top_hit(markers, Point::new(58.0, 50.0), 12.0), Some(1));
    }

    #[test]
    fn boundary_is_inclusive() {
        let markers = [(1_u32, Point::new(50.0, 50.0))];
        assert_eq!(top_hit(markers, Point::new(62.0, 50.0), 12.0), Some(1));
    }

    #[test]
    fn overlapping_markers_resolve_to_topmost() {
        // Two markers almost on top of each other; the later one paints on top.
        let markers = [
            (1_u32, Point::new(50.0, 50.0)),
            (2, Point::new(54.0, 50.0)),
        ];
        assert_eq!(top_hit(markers, Point::new(52.0, 50.0), 12.0), Some(2));
    }

    #[test]
    fn hits_keeps_paint_order() {
        let markers = [
            (1_u32, Point::new(50.0, 50.0)),
            (2, Point::new(51.0, 50.0)),
            (3, Point::new(300.0, 300.0)),
        ];
        let found = hits(markers, Point::new(50.0, 50.0), 12.0);
        assert_eq!(found.as_slice(), &[1, 2]);
    }
}
