// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Face extraction by left-most-turn traversal.

use alloc::vec::Vec;
use hashbrown::HashSet;
use slicer_geometry::Point;
use slicer_geometry::mathshim::atan2;

use crate::graph::{Graph, NodeId};

/// Extra watchdog iterations added to `2 * directed_edge_count`, bounding
/// worst-case traversal length even on adversarial graphs.
const WATCHDOG_SLACK: usize = 100;

/// At `curr`, coming from `prev`, choose the neighbor making the largest
/// counter-clockwise angle from the reverse of the incoming direction.
///
/// Ties are broken by first-in-list order (the neighbor list's own
/// order), since `fold`/`>` below only replaces the current best on a
/// strictly larger angle.
fn leftmost_turn(graph: &Graph, prev: NodeId, curr: NodeId) -> Option<NodeId> {
    let p_prev = graph.point(prev);
    let p_curr = graph.point(curr);
    let reverse_incoming = (p_prev.x - p_curr.x, p_prev.y - p_curr.y);
    let base_angle = atan2(reverse_incoming.1, reverse_incoming.0);

    let mut best: Option<(NodeId, f64)> = None;
    for &cand in graph.neighbors(curr) {
        let p_cand = graph.point(cand);
        let outgoing = (p_cand.x - p_curr.x, p_cand.y - p_curr.y);
        if outgoing.0 == 0.0 && outgoing.1 == 0.0 {
            continue;
        }
        let angle = atan2(outgoing.1, outgoing.0);
        let mut ccw = angle - base_angle;
        // Normalize into [0, 2*pi).
        let two_pi = core::f64::consts::TAU;
        ccw = ((ccw % two_pi) + two_pi) % two_pi;

        match best {
            Some((_, best_angle)) if ccw <= best_angle => {}
            _ => best = Some((cand, ccw)),
        }
    }
    best.map(|(id, _)| id)
}

/// Result of a full face-extraction pass.
#[derive(Debug, Default)]
pub struct ExtractionReport {
    /// Closed, length >= 3 point loops, one per extracted face.
    pub loops: Vec<Vec<Point>>,
    /// Number of walks discarded (dead end, watchdog exhaustion, or a
    /// walk that converged into an already-visited edge without
    /// closing). A numerical failure in loop extraction is non-fatal
    /// and localized to the dropped walk; the caller logs a warning
    /// using this count.
    pub discarded: usize,
}

/// Extract every face of the planar subdivision exactly once per
/// orientation. CCW traversals enclose filled regions, CW traversals
/// enclose holes; this function doesn't classify, only extracts
/// raw point loops, leaving classification to the caller (which needs
/// signed area and the `AREA_MIN` tolerance from `slicer_geometry`).
#[must_use]
pub fn extract_loops(graph: &Graph) -> ExtractionReport {
    let watchdog = 2 * graph.directed_edge_count() + WATCHDOG_SLACK;
    let mut visited: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut report = ExtractionReport::default();

    for u in graph.node_ids() {
        let neighbors: Vec<NodeId> = graph.neighbors(u).to_vec();
        for v in neighbors {
            if visited.contains(&(u, v)) {
                continue;
            }
            match walk_from(graph, &mut visited, u, v, watchdog) {
                Some(walk) => report.loops.push(walk),
                None => report.discarded += 1,
            }
        }
    }
    report
}

/// Walk a single face starting with the directed edge `start -> first`,
/// returning the point sequence (without a repeated closing point) if the
/// walk closes back on `start`, or `None` if it dead-ends, revisits an
/// edge without closing, or exceeds the watchdog.
fn walk_from(
    graph: &Graph,
    visited: &mut HashSet<(NodeId, NodeId)>,
    start: NodeId,
    first: NodeId,
    watchdog: usize,
) -> Option<Vec<Point>> {
    visited.insert((start, first));
    let mut node_path = alloc::vec![start];
    let mut prev = start;
    let mut curr = first;
    let mut steps = 0usize;

    loop {
        node_path.push(curr);
        if curr == start {
            node_path.pop();
            return (node_path.len() >= 3)
                .then(|| node_path.into_iter().map(|id| graph.point(id)).collect());
        }
        let Some(next) = leftmost_turn(graph, prev, curr) else {
            return None; // dead end
        };
        let edge = (curr, next);
        if visited.contains(&edge) {
            return None; // converged into an already-traversed face without closing
        }
        visited.insert(edge);
        prev = curr;
        curr = next;

        steps += 1;
        if steps > watchdog {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicer_geometry::signed_area;

    fn square_graph() -> Graph {
        let mut g = Graph::new();
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        for i in 0..pts.len() {
            g.add_edge(pts[i], pts[(i + 1) % pts.len()]);
        }
        g
    }

    #[test]
    fn extracts_ccw_and_cw_face_for_a_single_square() {
        let g = square_graph();
        let report = extract_loops(&g);
        // An undirected square produces two directed traversals: the
        // outer CCW face and the CW face that is "outside".
        assert_eq!(report.loops.len(), 2);
        assert_eq!(report.discarded, 0);
        let areas: Vec<f64> = report.loops.iter().map(|l| signed_area(l)).collect();
        assert!(areas.iter().any(|&a| a > 0.0));
        assert!(areas.iter().any(|&a| a < 0.0));
    }

    #[test]
    fn every_directed_edge_visited_at_most_once() {
        let g = square_graph();
        let report = extract_loops(&g);
        let mut seen = HashSet::new();
        for l in &report.loops {
            for i in 0..l.len() {
                let a = l[i];
                let b = l[(i + 1) % l.len()];
                let key = (
                    slicer_geometry::quantize_key(a),
                    slicer_geometry::quantize_key(b),
                );
                assert!(seen.insert(key), "edge visited twice: {key:?}");
            }
        }
    }

    #[test]
    fn dangling_spur_does_not_hang_or_duplicate_edges() {
        let mut g = Graph::new();
        // A dangling edge off a square: (1,1) -> (2,2) has only one
        // neighbor at its far end, forcing backtrack-on-dead-end.
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        for i in 0..pts.len() {
            g.add_edge(pts[i], pts[(i + 1) % pts.len()]);
        }
        g.add_edge(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        // Must terminate (watchdog-bounded) without panicking, and must
        // not report the same directed edge inside two different loops.
        let report = extract_loops(&g);
        let mut seen = HashSet::new();
        for l in &report.loops {
            for i in 0..l.len() {
                let a = slicer_geometry::quantize_key(l[i]);
                let b = slicer_geometry::quantize_key(l[(i + 1) % l.len()]);
                assert!(seen.insert((a, b)), "edge visited twice: {a:?}->{b:?}");
            }
        }
    }
}
