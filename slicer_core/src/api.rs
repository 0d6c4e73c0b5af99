// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public API surface: `slice`, `merge`, `triangulate`,
//! `uv_for`, plus [`slice_to_meshes`] for hosts that want the full
//! cut-to-mesh pipeline in one call.

use slicer_geometry::{Loop, Point, Segment};

use crate::error::SliceError;
use crate::pipeline;
use crate::types::{PolygonWithHoles, RefRect, SliceOutput, TriMesh};

/// Cut `polygon` along `cut`, returning the resulting polygons.
///
/// A zero-length cut, a cut that misses the polygon (fewer than two
/// boundary intersections), or a cut that topologically produces fewer
/// than two output polygons are all treated as no-ops: this function
/// returns an empty `Vec` and the caller must leave its input intact.
/// Non-fatal pipeline failures — dropped loop-extraction walks, orphaned
/// holes — are logged via `tracing` and do not otherwise affect the
/// result.
#[must_use]
pub fn slice(polygon: &PolygonWithHoles, cut: Segment, ref_rect: RefRect) -> Vec<PolygonWithHoles> {
    let extended = pipeline::extend_cut(cut, ref_rect);
    let Some(report) = pipeline::run(polygon, extended) else {
        return Vec::new();
    };
    if report.discarded_loops > 0 {
        tracing::warn!(
            count = report.discarded_loops,
            "loop extraction dropped one or more walks"
        );
    }
    if report.orphan_holes > 0 {
        tracing::warn!(
            count = report.orphan_holes,
            "hole(s) had no qualifying parent solid and were discarded"
        );
    }
    if report.polygons.len() < 2 {
        return Vec::new();
    }
    report.polygons
}

/// Stitch `outer`'s holes onto it, returning a single simple-polygon
/// vertex sequence ready for [`triangulate`].
///
/// A hole with no unobstructed bridge is skipped and logged; it never
/// aborts the merge for the remaining holes.
#[must_use]
pub fn merge(outer: &Loop, holes: &[Loop]) -> Vec<Point> {
    let result = slicer_merge::merge(outer, holes);
    for &hole_index in &result.skipped_holes {
        tracing::warn!(hole_index, "hole has no visible bridge, skipped");
    }
    result.points
}

/// Triangulate a simple polygon vertex sequence, any winding.
///
/// Returns a triangle index list of length `3 * (N - 2)` on success; may
/// be shorter if the `2N` watchdog exhausts, or if the candidate stack
/// runs dry before 3 points remain, in which case a warning is logged
/// and the partial result is returned.
#[must_use]
pub fn triangulate(points: &[Point]) -> Vec<u32> {
    let result = slicer_triangulate::triangulate(points);
    if result.watchdog_exhausted {
        tracing::warn!("triangulator watchdog exhausted before completion, returning partial result");
    }
    if result.candidates_exhausted {
        tracing::warn!(
            "triangulator exhausted its candidate ears before completion, returning partial result"
        );
    }
    result.indices
}

/// Map a world-space point to UV coordinates via the host-supplied
/// reference rectangle. A zero-width or zero-height rectangle maps
/// every point to `0.0` on that axis rather than dividing by zero.
#[must_use]
pub fn uv_for(p: Point, rect: RefRect) -> (f32, f32) {
    let u = if rect.width != 0.0 {
        (p.x - rect.min_x) / rect.width
    } else {
        0.0
    };
    let v = if rect.height != 0.0 {
        (p.y - rect.min_y) / rect.height
    } else {
        0.0
    };
    (u as f32, v as f32)
}

/// Run the full cut pipeline and mesh every output polygon, handing back
/// the `(vertices, indices, outer+holes collider paths)` tuple per
/// output polygon.
///
/// Equivalent to calling [`slice`] and then [`merge`] + [`triangulate`]
/// on each resulting polygon, but fans the per-polygon meshing step out
/// over a `rayon` thread pool when built with the `parallel` feature.
#[must_use]
pub fn slice_to_meshes(
    polygon: &PolygonWithHoles,
    cut: Segment,
    ref_rect: RefRect,
) -> SliceOutput {
    let polygons = slice(polygon, cut, ref_rect);
    if polygons.len() < 2 {
        return SliceOutput::default();
    }
    let meshes = build_meshes(&polygons, ref_rect);
    SliceOutput { polygons, meshes }
}

fn build_mesh_for(polygon: &PolygonWithHoles, ref_rect: RefRect) -> TriMesh {
    let positions = merge(&polygon.outer, &polygon.holes);
    let indices = triangulate(&positions);
    let uvs = positions.iter().map(|&p| uv_for(p, ref_rect)).collect();
    TriMesh {
        positions,
        uvs,
        indices,
        outer_path: polygon.outer.points().to_vec(),
        hole_paths: polygon.holes.iter().map(|h| h.points().to_vec()).collect(),
    }
}

#[cfg(feature = "parallel")]
fn build_meshes(polygons: &[PolygonWithHoles], ref_rect: RefRect) -> Vec<TriMesh> {
    use rayon::prelude::*;
    polygons
        .par_iter()
        .map(|p| build_mesh_for(p, ref_rect))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn build_meshes(polygons: &[PolygonWithHoles], ref_rect: RefRect) -> Vec<TriMesh> {
    polygons.iter().map(|p| build_mesh_for(p, ref_rect)).collect()
}

/// Like [`merge`], but rejects an outer loop with fewer than 3 points
/// instead of silently producing a degenerate result.
pub fn try_merge(outer: &Loop, holes: &[Loop]) -> Result<Vec<Point>, SliceError> {
    if outer.len() < 3 {
        return Err(SliceError::DegenerateOuterLoop(outer.len()));
    }
    Ok(merge(outer, holes))
}

/// Like [`triangulate`], but rejects a point sequence with fewer than 3
/// points instead of silently returning an empty index list.
pub fn try_triangulate(points: &[Point]) -> Result<Vec<u32>, SliceError> {
    if points.len() < 3 {
        return Err(SliceError::DegeneratePointSequence(points.len()));
    }
    Ok(triangulate(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Loop {
        Loop::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    #[test]
    fn diagonal_cut_produces_two_triangulatable_polygons() {
        let polygon = PolygonWithHoles::new(square(-1.0, -1.0, 1.0, 1.0), Vec::new());
        let cut = Segment::new(Point::new(-2.0, -2.0), Point::new(2.0, 2.0));
        let rect = RefRect::new(-1.0, -1.0, 2.0, 2.0);
        let pieces = slice(&polygon, cut, rect);
        assert_eq!(pieces.len(), 2);
        for piece in &pieces {
            let merged = merge(&piece.outer, &piece.holes);
            let indices = triangulate(&merged);
            assert_eq!(indices.len() % 3, 0);
            assert!(!indices.is_empty());
        }
    }

    #[test]
    fn miss_cut_returns_empty_and_leaves_no_trace() {
        let polygon = PolygonWithHoles::new(square(-1.0, -1.0, 1.0, 1.0), Vec::new());
        let cut = Segment::new(Point::new(-2.0, 10.0), Point::new(2.0, 10.0));
        let rect = RefRect::new(-1.0, -1.0, 2.0, 2.0);
        assert!(slice(&polygon, cut, rect).is_empty());
    }

    #[test]
    fn uv_for_maps_corners_to_unit_square() {
        let rect = RefRect::new(0.0, 0.0, 2.0, 4.0);
        assert_eq!(uv_for(Point::new(0.0, 0.0), rect), (0.0, 0.0));
        assert_eq!(uv_for(Point::new(2.0, 4.0), rect), (1.0, 1.0));
    }

    #[test]
    fn try_merge_rejects_degenerate_outer_loop() {
        let outer = Loop::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert_eq!(
            try_merge(&outer, &[]),
            Err(SliceError::DegenerateOuterLoop(2))
        );
    }

    #[test]
    fn try_triangulate_rejects_degenerate_point_sequence() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert_eq!(
            try_triangulate(&points),
            Err(SliceError::DegeneratePointSequence(2))
        );
    }

    #[test]
    fn slice_to_meshes_produces_matching_polygon_and_mesh_counts() {
        let polygon = PolygonWithHoles::new(square(-1.0, -1.0, 1.0, 1.0), Vec::new());
        let cut = Segment::new(Point::new(-2.0, -2.0), Point::new(2.0, 2.0));
        let rect = RefRect::new(-1.0, -1.0, 2.0, 2.0);
        let output = slice_to_meshes(&polygon, cut, rect);
        assert_eq!(output.polygons.len(), output.meshes.len());
        assert_eq!(output.polygons.len(), 2);
    }
}
