// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hole-to-outer bridge selection and stitching.

use alloc::vec;
use alloc::vec::Vec;
use slicer_geometry::{Loop, Point, Segment, dist2, seg_intersect};
use slicer_spatial::SegmentTree;

use crate::ring::{NodeIdx, Ring};

/// 100,000-node cap on the flattened output, guarding against a
/// corrupted splice spinning the flatten loop forever.
const MAX_RING_NODES: usize = 100_000;

/// Outcome of merging an outer boundary with its holes into one simple
/// polygon.
#[derive(Debug, Default)]
pub struct MergeResult {
    /// The merged simple polygon, wound the same way as `outer`.
    pub points: Vec<Point>,
    /// Indices into the `holes` slice passed to [`merge`] for which no
    /// unobstructed bridge could be found: fully enclosed by other
    /// geometry. This is non-fatal; the hole is dropped and the caller
    /// logs a warning.
    pub skipped_holes: Vec<usize>,
}

/// The rightmost (max-x) vertex of a loop, and its index.
///
/// Ties keep the earliest index encountered, matching the "first
/// claimant wins" convention used elsewhere in the workspace for
/// deterministic tie-breaks.
fn max_x_vertex(points: &[Point]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        if p.x > points[best].x {
            best = i;
        }
    }
    best
}

fn edges_of(points: &[Point]) -> Vec<Segment> {
    let n = points.len();
    (0..n)
        .map(|i| Segment::new(points[i], points[(i + 1) % n]))
        .collect()
}

/// Whether segment `a-b` strictly crosses any previously placed bridge,
/// ignoring bridges that share an endpoint with it (two bridges may
/// legitimately land on the same outer vertex).
fn crosses_placed_bridge(a: Point, b: Point, placed: &[(Point, Point)]) -> bool {
    placed
        .iter()
        .any(|&(p, q)| seg_intersect(a, b, p, q).is_some())
}

/// Merge `outer` with `holes` into a single simple polygon by stitching
/// each hole onto the outer boundary with a bridge edge.
///
/// Holes are processed in descending order of their own max-x vertex, so
/// bridges are built from the "most exterior" hole inward, matching the
/// algorithm's requirement that earlier bridges never need to route
/// around later ones.
#[must_use]
pub fn merge(outer: &Loop, holes: &[Loop]) -> MergeResult {
    if holes.is_empty() {
        return MergeResult {
            points: outer.points().to_vec(),
            skipped_holes: Vec::new(),
        };
    }

    let mut wall_segments = edges_of(outer.points());
    for h in holes {
        wall_segments.extend(edges_of(h.points()));
    }
    let wall_tree = SegmentTree::build(&wall_segments);

    let mut order: Vec<usize> = (0..holes.len()).collect();
    order.sort_by(|&a, &b| {
        let xa = holes[a].points()[max_x_vertex(holes[a].points())].x;
        let xb = holes[b].points()[max_x_vertex(holes[b].points())].x;
        xb.partial_cmp(&xa).unwrap_or(core::cmp::Ordering::Equal)
    });

    let mut ring = Ring::from_points(outer.points());
    let mut placed_bridges: Vec<(Point, Point)> = Vec::new();
    let mut skipped_holes = Vec::new();

    for idx in order {
        let hole_points = holes[idx].points();
        let m_idx = max_x_vertex(hole_points);
        let m = hole_points[m_idx];

        let mut rotated = Vec::with_capacity(hole_points.len());
        rotated.extend_from_slice(&hole_points[m_idx..]);
        rotated.extend_from_slice(&hole_points[..m_idx]);

        match find_bridge_anchor(&ring, m, &wall_tree, &placed_bridges) {
            Some(p) => {
                let p_pos = ring.pos(p);
                ring.splice_hole_at(p, &rotated);
                placed_bridges.push((p_pos, m));
            }
            None => skipped_holes.push(idx),
        }
    }

    MergeResult {
        points: ring.flatten(MAX_RING_NODES),
        skipped_holes,
    }
}

/// Find the nearest ring vertex `p` with `p.x > m.x` such that the
/// bridge `m-p` crosses neither a wall segment nor an already-placed
/// bridge, trying candidates in ascending distance order.
fn find_bridge_anchor(
    ring: &Ring,
    m: Point,
    wall_tree: &SegmentTree,
    placed_bridges: &[(Point, Point)],
) -> Option<NodeIdx> {
    let mut candidates: Vec<(f64, NodeIdx)> = Vec::new();
    let start = ring.anchor();
    let mut cur = start;
    loop {
        let p = ring.pos(cur);
        if p.x > m.x {
            candidates.push((dist2(m, p), cur));
        }
        cur = ring.next(cur);
        if cur == start {
            break;
        }
    }
    candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(core::cmp::Ordering::Equal));

    candidates.into_iter().map(|(_, h)| h).find(|&h| {
        let p = ring.pos(h);
        !wall_tree.intersects(m, p) && !crosses_placed_bridge(m, p, placed_bridges)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    #[test]
    fn merges_a_single_centered_hole() {
        let outer = Loop::new(sq(0.0, 0.0, 10.0, 10.0));
        let mut hole = Loop::new(sq(3.0, 3.0, 7.0, 7.0));
        hole.normalize_winding(false); // holes wind opposite the outer
        let result = merge(&outer, core::slice::from_ref(&hole));
        assert!(result.skipped_holes.is_empty());
        // 4 outer + 4 hole + 2 duplicated junction nodes.
        assert_eq!(result.points.len(), 10);
    }

    #[test]
    fn no_holes_returns_outer_unchanged() {
        let outer = Loop::new(sq(0.0, 0.0, 1.0, 1.0));
        let result = merge(&outer, &[]);
        assert_eq!(result.points, outer.points());
        assert!(result.skipped_holes.is_empty());
    }

    #[test]
    fn two_holes_are_both_bridged_without_crossing() {
        let outer = Loop::new(sq(0.0, 0.0, 20.0, 10.0));
        let mut left = Loop::new(sq(2.0, 3.0, 6.0, 7.0));
        left.normalize_winding(false);
        let mut right = Loop::new(sq(12.0, 3.0, 16.0, 7.0));
        right.normalize_winding(false);
        let result = merge(&outer, &[left, right]);
        assert!(result.skipped_holes.is_empty());
        // 4 outer + 2*(4 hole + 2 duplicated) = 16.
        assert_eq!(result.points.len(), 16);
    }
}
