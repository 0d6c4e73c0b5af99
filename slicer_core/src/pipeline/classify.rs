// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Winding classification and containment-based hierarchy assignment.

use std::collections::HashSet;

use slicer_geometry::tolerance::AREA_MIN;
use slicer_geometry::{Loop, Point, point_in_polygon, quantize_key, signed_area};
use slicer_spatial::{Aabb2D, StaticAabbTree};

use crate::types::PolygonWithHoles;

/// Outcome of classifying and assigning a batch of raw extracted loops.
pub(crate) struct ClassifyReport {
    pub(crate) polygons: Vec<PolygonWithHoles>,
    /// Holes with no qualifying parent solid: discarded rather than
    /// promoted to a solid.
    pub(crate) orphan_holes: usize,
}

/// A loop's vertex set as a sorted list of coincidence-quantized keys,
/// order-independent so it can be compared against a loop walked in the
/// opposite direction.
fn loop_signature(points: &[Point]) -> Vec<(i64, i64)> {
    let mut sig: Vec<(i64, i64)> = points.iter().map(|&p| quantize_key(p)).collect();
    sig.sort_unstable();
    sig
}

/// Classify raw point loops into solids (CCW, area >= `AREA_MIN`) and
/// hole candidates (CW, area >= `AREA_MIN`), discarding everything below
/// the area floor regardless of winding sign, then assign each hole to its smallest-area containing
/// solid.
///
/// A hole the cut never touches stays a disconnected cycle in the planar
/// graph: `extract_loops` walks it in both directions and emits a CW face
/// (the real hole candidate) *and* a CCW face over the exact same vertex
/// set (the hole's own interior, masquerading as a solid). Winding sign
/// alone can't tell those apart, so before a CCW loop is accepted as a
/// solid its vertex set is checked against every CW candidate's: an exact
/// match (same quantized vertex set, regardless of walk direction) means
/// it's that hole's untouched interior, not a new filled region, and it
/// is dropped.
pub(crate) fn classify_and_assign(raw_loops: Vec<Vec<Point>>) -> ClassifyReport {
    let mut solid_raws: Vec<Vec<Point>> = Vec::new();
    let mut hole_raws: Vec<Vec<Point>> = Vec::new();

    for raw in raw_loops {
        let area = signed_area(&raw);
        if area.abs() < AREA_MIN {
            continue;
        }
        if area > 0.0 {
            solid_raws.push(raw);
        } else {
            hole_raws.push(raw);
        }
    }

    let hole_signatures: HashSet<Vec<(i64, i64)>> =
        hole_raws.iter().map(|h| loop_signature(h)).collect();

    let mut solids: Vec<Loop> = Vec::new();
    for raw in solid_raws {
        if hole_signatures.contains(&loop_signature(&raw)) {
            continue;
        }
        let mut loop_ = Loop::new(raw);
        loop_.normalize_winding(true);
        solids.push(loop_);
    }

    let mut hole_candidates: Vec<Loop> = Vec::new();
    for raw in hole_raws {
        let mut loop_ = Loop::new(raw);
        loop_.normalize_winding(false);
        hole_candidates.push(loop_);
    }

    let solid_items: Vec<(Aabb2D<f64>, usize)> = solids
        .iter()
        .enumerate()
        .filter_map(|(i, loop_)| loop_.aabb().map(|(min, max)| (i, min, max)))
        .map(|(i, min, max)| (Aabb2D::new(min.x, min.y, max.x, max.y), i))
        .collect();
    let tree = StaticAabbTree::build(solid_items);

    let mut assigned: Vec<Vec<Loop>> = solids.iter().map(|_| Vec::new()).collect();
    let mut orphan_holes = 0usize;

    for hole in hole_candidates {
        let centroid = hole.centroid();
        let hole_area = hole.signed_area().abs();
        let mut best: Option<(usize, f64)> = None;
        tree.for_each_containing_point(centroid.x, centroid.y, |&solid_idx, _aabb| {
            let solid = &solids[solid_idx];
            let solid_area = solid.signed_area();
            if solid_area <= hole_area {
                return;
            }
            if !point_in_polygon(centroid, solid.points()) {
                return;
            }
            match best {
                Some((_, best_area)) if solid_area >= best_area => {}
                _ => best = Some((solid_idx, solid_area)),
            }
        });
        match best {
            Some((idx, _)) => assigned[idx].push(hole),
            None => orphan_holes += 1,
        }
    }

    let polygons = solids
        .into_iter()
        .zip(assigned)
        .map(|(outer, holes)| PolygonWithHoles::new(outer, holes))
        .collect();

    ClassifyReport {
        polygons,
        orphan_holes,
    }
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

    fn cw(mut points: Vec<Point>) -> Vec<Point> {
        points.reverse();
        points
    }

    #[test]
    fn assigns_a_hole_to_its_containing_solid() {
        let outer = sq(0.0, 0.0, 10.0, 10.0);
        let hole = cw(sq(3.0, 3.0, 7.0, 7.0));
        let report = classify_and_assign(vec![outer, hole]);
        assert_eq!(report.polygons.len(), 1);
        assert_eq!(report.polygons[0].holes.len(), 1);
        assert_eq!(report.orphan_holes, 0);
    }

    #[test]
    fn drops_tiny_loops_regardless_of_winding() {
        let tiny_ccw = vec![
            Point::new(0.0, 0.0),
            Point::new(0.01, 0.0),
            Point::new(0.01, 0.01),
            Point::new(0.0, 0.01),
        ];
        let tiny_cw = cw(tiny_ccw.clone());
        let report = classify_and_assign(vec![tiny_ccw, tiny_cw]);
        assert!(report.polygons.is_empty());
        assert_eq!(report.orphan_holes, 0);
    }

    #[test]
    fn hole_outside_every_solid_is_orphaned() {
        let outer = sq(0.0, 0.0, 10.0, 10.0);
        let far_hole = cw(sq(100.0, 100.0, 101.0, 101.0));
        let report = classify_and_assign(vec![outer, far_hole]);
        assert_eq!(report.polygons.len(), 1);
        assert!(report.polygons[0].holes.is_empty());
        assert_eq!(report.orphan_holes, 1);
    }

    #[test]
    fn untouched_hole_s_ccw_duplicate_face_is_not_promoted_to_a_solid() {
        // Mirrors what `extract_loops` emits for a hole the cut never
        // crosses: the hole's own CW face, plus a CCW face walking the
        // exact same vertex set in reverse.
        let outer = sq(0.0, 0.0, 10.0, 10.0);
        let hole = cw(sq(3.0, 3.0, 7.0, 7.0));
        let hole_interior_duplicate = sq(3.0, 3.0, 7.0, 7.0);
        let report = classify_and_assign(vec![outer, hole, hole_interior_duplicate]);
        assert_eq!(report.polygons.len(), 1);
        assert_eq!(report.polygons[0].holes.len(), 1);
        assert_eq!(report.orphan_holes, 0);
    }

    #[test]
    fn hole_picks_the_smaller_of_two_nested_solids() {
        let big = sq(-10.0, -10.0, 10.0, 10.0);
        let small = sq(-5.0, -5.0, 5.0, 5.0);
        let hole = cw(sq(-1.0, -1.0, 1.0, 1.0));
        // `small` is nested inside `big`; both contain the hole's
        // centroid, so the hole must go to `small` (smaller area).
        let report = classify_and_assign(vec![big, small, hole]);
        assert_eq!(report.polygons.len(), 2);
        let total_holes: usize = report.polygons.iter().map(|p| p.holes.len()).sum();
        assert_eq!(total_holes, 1);
    }
}
