// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-path intersection insertion and odd-even cut-seam injection.

use std::collections::HashSet;

use slicer_geometry::{Loop, Point, Segment, line_hits_segment, quantize_key};
use slicer_graph::Graph;

/// Build the planar graph for a cut: for every boundary path (outer
/// loop, then each hole), splice in its intersections with `cut` and add
/// the resulting boundary edges; then inject the odd-even cut seam
/// across all paths' intersections together.
///
/// Returns the populated graph and the number of distinct cut
/// intersections found (after coincidence dedup), which the caller uses
/// for the "fewer than two intersections is a no-op" rule.
pub(crate) fn build(paths: &[&[Point]], cut: Segment) -> (Graph, usize) {
    let mut graph = Graph::new();
    let mut all_intersections: Vec<Point> = Vec::new();

    for &path in paths {
        let (new_seq, hits) = splice_intersections(path, cut);
        for i in 0..new_seq.len() {
            graph.add_edge(new_seq[i], new_seq[(i + 1) % new_seq.len()]);
        }
        all_intersections.extend(hits);
    }

    let seam_points = dedup_points(all_intersections);
    let count = seam_points.len();
    inject_seam(&mut graph, seam_points, cut);
    (graph, count)
}

/// For one boundary path, find every intersection with `cut`, splice the
/// intersection points into the path's vertex sequence in boundary
/// order, and return the new (deduplicated) sequence plus the raw
/// intersection points found.
fn splice_intersections(path: &[Point], cut: Segment) -> (Vec<Point>, Vec<Point>) {
    let n = path.len();
    // (edge index, parameter along the edge, intersection point),
    // naturally produced in edge-index order; sorted below by
    // (edge index, parameter) to match step 2's tie-break.
    let mut hits: Vec<(usize, f64, Point)> = Vec::new();
    for i in 0..n {
        let a = path[i];
        let b = path[(i + 1) % n];
        if let Some((u, _v)) = line_hits_segment(a, b, cut.a, cut.b) {
            let pt = Point::new(a.x + u * (b.x - a.x), a.y + u * (b.y - a.y));
            hits.push((i, u, pt));
        }
    }
    hits.sort_by(|lhs, rhs| {
        lhs.0
            .cmp(&rhs.0)
            .then(lhs.1.partial_cmp(&rhs.1).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut new_seq = Vec::with_capacity(n + hits.len());
    let mut hi = 0;
    for (i, &p) in path.iter().enumerate() {
        new_seq.push(p);
        while hi < hits.len() && hits[hi].0 == i {
            new_seq.push(hits[hi].2);
            hi += 1;
        }
    }
    let deduped = Loop::new(new_seq).points().to_vec();
    let raw_hits = hits.into_iter().map(|(_, _, p)| p).collect();
    (deduped, raw_hits)
}

/// Deduplicate points by coincidence-quantized key, keeping the first
/// occurrence of each cell.
fn dedup_points(points: Vec<Point>) -> Vec<Point> {
    let mut seen = HashSet::new();
    points
        .into_iter()
        .filter(|&p| seen.insert(quantize_key(p)))
        .collect()
}

/// Pair intersections along the cut by the odd-even rule and inject both
/// directed edges of each pair.
fn inject_seam(graph: &mut Graph, mut points: Vec<Point>, cut: Segment) {
    let dir = (cut.b.x - cut.a.x, cut.b.y - cut.a.y);
    points.sort_by(|&a, &b| {
        let proj_a = (a.x - cut.a.x) * dir.0 + (a.y - cut.a.y) * dir.1;
        let proj_b = (b.x - cut.a.x) * dir.0 + (b.y - cut.a.y) * dir.1;
        proj_a.partial_cmp(&proj_b).unwrap_or(std::cmp::Ordering::Equal)
    });

    for pair in points.chunks_exact(2) {
        graph.add_directed_edge(pair[0], pair[1]);
        graph.add_directed_edge(pair[1], pair[0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ]
    }

    #[test]
    fn horizontal_cut_through_a_square_yields_two_intersections() {
        let sq = square();
        let cut = Segment::new(Point::new(-3.0, 0.0), Point::new(3.0, 0.0));
        let (graph, count) = build(&[&sq], cut);
        assert_eq!(count, 2);
        assert!(graph.node_count() >= 6);
    }

    #[test]
    fn miss_cut_yields_no_intersections() {
        let sq = square();
        let cut = Segment::new(Point::new(-3.0, 10.0), Point::new(3.0, 10.0));
        let (_, count) = build(&[&sq], cut);
        assert_eq!(count, 0);
    }

    #[test]
    fn odd_count_drops_the_last_unpaired_intersection() {
        let mut graph = Graph::new();
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        let cut = Segment::new(Point::new(0.0, -1.0), Point::new(0.0, 1.0));
        inject_seam(&mut graph, points, cut);
        // 3 points -> one pair consumed (2 directed edges), one dropped.
        assert_eq!(graph.directed_edge_count(), 2);
    }
}
