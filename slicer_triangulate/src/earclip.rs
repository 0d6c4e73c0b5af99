// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid-accelerated ear clipping.

use alloc::vec::Vec;
use slicer_geometry::{Point, tolerance::EAR_COINCIDE_EPS2};
use slicer_spatial::{Aabb2D, UniformGrid};

use crate::node::Ring;
use crate::triangle::{point_in_triangle_strict, triangle_aabb};

/// Extra watchdog iterations, on top of `2 * N`, bounding the main loop
/// against numerical pathologies.
const WATCHDOG_SLACK: usize = 0;

/// Outcome of triangulating one simple polygon.
#[derive(Debug, Default)]
pub struct TriangulateResult {
    /// Triangle indices into the input point sequence, three per
    /// triangle.
    pub indices: Vec<u32>,
    /// Set when the `2N` watchdog exhausted before the ring fully
    /// drained.
    pub watchdog_exhausted: bool,
    /// Set when the candidate stack ran dry (every remaining vertex
    /// reflex, or blocked) while more than 3 points were still live:
    /// a distinct failure mode from watchdog exhaustion, also requiring
    /// the caller to treat `indices` as a partial result.
    pub candidates_exhausted: bool,
}

fn coincides(a: Point, b: Point) -> bool {
    slicer_geometry::coincident(a, b, EAR_COINCIDE_EPS2)
}

fn bounding_box(points: &[Point]) -> Aabb2D<f64> {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Aabb2D::new(min_x, min_y, max_x, max_y)
}

/// Triangulate a simple polygon vertex sequence (any winding) into a
/// triangle index list.
#[must_use]
pub fn triangulate(points: &[Point]) -> TriangulateResult {
    let n = points.len();
    if n < 3 {
        return TriangulateResult::default();
    }

    let mut ring = Ring::build(points);
    let aabb = bounding_box(points);

    let mut candidates: Vec<u32> = Vec::new();
    let reflex_count = ring.nodes.iter().filter(|node| node.is_reflex).count();
    let mut grid = UniformGrid::new(aabb, reflex_count);

    for i in 0..n as u32 {
        if ring.nodes[i as usize].is_reflex {
            grid.insert(i as usize, ring.pos(i));
        } else {
            ring.nodes[i as usize].is_candidate = true;
            candidates.push(i);
        }
    }

    let mut indices = Vec::with_capacity(3 * (n.saturating_sub(2)));
    let mut point_count = n;
    let watchdog = 2 * n + WATCHDOG_SLACK;
    let mut steps = 0usize;
    let mut watchdog_exhausted = false;

    while point_count > 3 && !candidates.is_empty() {
        steps += 1;
        if steps > watchdog {
            watchdog_exhausted = true;
            break;
        }

        let Some(v) = candidates.pop() else {
            break;
        };
        if !ring.nodes[v as usize].alive {
            continue;
        }
        ring.nodes[v as usize].is_candidate = false;
        if ring.nodes[v as usize].is_reflex {
            continue;
        }

        let prev = ring.prev(v);
        let next = ring.next(v);
        let p_prev = ring.pos(prev);
        let p_v = ring.pos(v);
        let p_next = ring.pos(next);

        let query = triangle_aabb(p_prev, p_v, p_next);
        let mut blocked = false;
        grid.enumerate_window(query, |slot, pos| {
            if blocked {
                return;
            }
            let slot = slot as u32;
            if slot == prev || slot == next {
                return;
            }
            if coincides(pos, p_prev) || coincides(pos, p_v) || coincides(pos, p_next) {
                return;
            }
            if point_in_triangle_strict(pos, p_prev, p_v, p_next) {
                blocked = true;
            }
        });
        if blocked {
            continue;
        }

        indices.push(ring.nodes[prev as usize].original_index);
        indices.push(ring.nodes[v as usize].original_index);
        indices.push(ring.nodes[next as usize].original_index);
        ring.unlink(v);
        point_count -= 1;

        for &n_idx in &[prev, next] {
            let was_reflex = ring.nodes[n_idx as usize].is_reflex;
            ring.reclassify(n_idx);
            let is_reflex_now = ring.nodes[n_idx as usize].is_reflex;
            match (was_reflex, is_reflex_now) {
                (true, false) => {
                    grid.remove(n_idx as usize);
                    if !ring.nodes[n_idx as usize].is_candidate {
                        ring.nodes[n_idx as usize].is_candidate = true;
                        candidates.push(n_idx);
                    }
                }
                (false, true) => {
                    if ring.nodes[n_idx as usize].is_candidate {
                        ring.nodes[n_idx as usize].is_candidate = false;
                    }
                    grid.insert(n_idx as usize, ring.pos(n_idx));
                }
                (false, false) if !ring.nodes[n_idx as usize].is_candidate => {
                    ring.nodes[n_idx as usize].is_candidate = true;
                    candidates.push(n_idx);
                }
                _ => {}
            }
        }
    }

    let candidates_exhausted = point_count > 3 && !watchdog_exhausted;

    if point_count == 3 && !watchdog_exhausted {
        if let Some(last) = (0..ring.len() as u32).find(|&i| ring.nodes[i as usize].alive) {
            let prev = ring.prev(last);
            let next = ring.next(last);
            indices.push(ring.nodes[prev as usize].original_index);
            indices.push(ring.nodes[last as usize].original_index);
            indices.push(ring.nodes[next as usize].original_index);
        }
    }

    TriangulateResult {
        indices,
        watchdog_exhausted,
        candidates_exhausted,
    }
}
