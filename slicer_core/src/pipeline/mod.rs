// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cut pipeline: graph construction with intersection
//! and cut-seam insertion, loop extraction, classification, and
//! hierarchy assignment.

mod classify;
mod graph_build;

use slicer_geometry::{Point, Segment, dist2};

use crate::types::{PolygonWithHoles, RefRect};

/// Minimum squared cut length below which a cut is treated as zero-length.
const ZERO_LENGTH_EPS2: f64 = 1e-12;

/// Extend `cut` on both ends by `1.5 * max(width, height) + 1.0` so it
/// clears the polygon's bounding box.
pub(crate) fn extend_cut(cut: Segment, ref_rect: RefRect) -> Segment {
    let dx = cut.b.x - cut.a.x;
    let dy = cut.b.y - cut.a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len <= f64::EPSILON {
        return cut;
    }
    let (ux, uy) = (dx / len, dy / len);
    let ext = 1.5 * ref_rect.width.max(ref_rect.height) + 1.0;
    Segment::new(
        Point::new(cut.a.x - ux * ext, cut.a.y - uy * ext),
        Point::new(cut.b.x + ux * ext, cut.b.y + uy * ext),
    )
}

/// Outcome of running the cut pipeline once.
pub(crate) struct PipelineReport {
    pub(crate) polygons: Vec<PolygonWithHoles>,
    pub(crate) discarded_loops: usize,
    pub(crate) orphan_holes: usize,
}

/// Run the full pipeline for one polygon against one (already
/// extended) cut segment. Returns `None` for the "no-op" cases: a
/// zero-length cut, or fewer than two total cut intersections.
pub(crate) fn run(polygon: &PolygonWithHoles, cut: Segment) -> Option<PipelineReport> {
    if dist2(cut.a, cut.b) <= ZERO_LENGTH_EPS2 {
        return None;
    }

    let mut paths: Vec<&[Point]> = Vec::with_capacity(1 + polygon.holes.len());
    paths.push(polygon.outer.points());
    for hole in &polygon.holes {
        paths.push(hole.points());
    }

    let (graph, intersection_count) = graph_build::build(&paths, cut);
    if intersection_count < 2 {
        return None;
    }

    let extraction = slicer_graph::extract_loops(&graph);
    let raw_loops: Vec<Vec<Point>> = extraction.loops;

    let classified = classify::classify_and_assign(raw_loops);

    Some(PipelineReport {
        polygons: classified.polygons,
        discarded_loops: extraction.discarded,
        orphan_holes: classified.orphan_holes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicer_geometry::Loop;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Loop {
        Loop::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    #[test]
    fn diagonal_cut_through_a_square_yields_two_polygons() {
        let polygon = PolygonWithHoles::new(square(-1.0, -1.0, 1.0, 1.0), Vec::new());
        let cut = Segment::new(Point::new(-2.0, -2.0), Point::new(2.0, 2.0));
        let report = run(&polygon, cut).expect("cut should intersect");
        assert_eq!(report.polygons.len(), 2);
        assert_eq!(report.discarded_loops, 0);
        assert_eq!(report.orphan_holes, 0);
    }

    #[test]
    fn zero_length_cut_is_a_no_op() {
        let polygon = PolygonWithHoles::new(square(-1.0, -1.0, 1.0, 1.0), Vec::new());
        let cut = Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0));
        assert!(run(&polygon, cut).is_none());
    }

    #[test]
    fn miss_cut_is_a_no_op() {
        let polygon = PolygonWithHoles::new(square(-1.0, -1.0, 1.0, 1.0), Vec::new());
        let cut = Segment::new(Point::new(-2.0, 10.0), Point::new(2.0, 10.0));
        assert!(run(&polygon, cut).is_none());
    }
}
