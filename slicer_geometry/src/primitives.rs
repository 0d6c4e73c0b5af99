// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation, area, intersection, and point-in-polygon primitives.
//!
//! These are the only functions in the workspace that compare against
//! numeric tolerances directly; everything upstream calls through them.

use kurbo::Point;

use crate::tolerance::{ENDPOINT_EPS, INTERSECT_EPS};

/// Sign of the 2D cross product `(b-a) x (c-a)`.
///
/// Positive: `a, b, c` form a left (counter-clockwise) turn. Negative: a
/// right turn. Zero: collinear.
#[inline]
#[must_use]
pub fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Signed area of a closed loop via the shoelace formula.
///
/// Positive area means the loop winds counter-clockwise; negative means
/// clockwise. The loop is implicitly closed (an edge from the last point
/// back to the first is assumed).
#[must_use]
pub fn signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    acc * 0.5
}

/// Strict-interior intersection of two segments `a-b` and `c-d`.
///
/// Returns `None` for parallel/collinear segments or when the intersection
/// falls outside the open interval `(eps, 1-eps)` along either segment,
/// with `eps = `[`INTERSECT_EPS`]. Returns `Some(point)` otherwise.
#[must_use]
pub fn seg_intersect(a: Point, b: Point, c: Point, d: Point) -> Option<Point> {
    let r = (b.x - a.x, b.y - a.y);
    let s = (d.x - c.x, d.y - c.y);
    let denom = r.0 * s.1 - r.1 * s.0;
    if denom.abs() <= f64::EPSILON {
        return None; // parallel or collinear
    }
    let ac = (c.x - a.x, c.y - a.y);
    let t = (ac.0 * s.1 - ac.1 * s.0) / denom;
    let u = (ac.0 * r.1 - ac.1 * r.0) / denom;

    let eps = INTERSECT_EPS;
    if t > eps && t < 1.0 - eps && u > eps && u < 1.0 - eps {
        Some(Point::new(a.x + t * r.0, a.y + t * r.1))
    } else {
        None
    }
}

/// Parametric positions `(u, v)` where line `p1->p2` meets segment
/// `q1->q2`, tolerant at endpoints.
///
/// Accepts `u` and `v` in `[-`[`ENDPOINT_EPS`]`, 1+`[`ENDPOINT_EPS`]`]`, then
/// clamps both to `[0, 1]`. Used to compute cut intersections tolerantly
/// at endpoints. Returns `None` when the two directions are
/// (numerically) parallel.
#[must_use]
pub fn line_hits_segment(p1: Point, p2: Point, q1: Point, q2: Point) -> Option<(f64, f64)> {
    let r = (p2.x - p1.x, p2.y - p1.y);
    let s = (q2.x - q1.x, q2.y - q1.y);
    let denom = r.0 * s.1 - r.1 * s.0;
    if denom.abs() <= f64::EPSILON {
        return None;
    }
    let pq = (q1.x - p1.x, q1.y - p1.y);
    let u = (pq.0 * s.1 - pq.1 * s.0) / denom;
    let v = (pq.0 * r.1 - pq.1 * r.0) / denom;

    let lo = -ENDPOINT_EPS;
    let hi = 1.0 + ENDPOINT_EPS;
    if (lo..=hi).contains(&u) && (lo..=hi).contains(&v) {
        Some((u.clamp(0.0, 1.0), v.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Even-odd ray-casting point-in-polygon test, casting along `+x`.
///
/// `loop_` is treated as an implicitly closed polyline (edge from the last
/// point back to the first).
#[must_use]
pub fn point_in_polygon(p: Point, loop_: &[Point]) -> bool {
    if loop_.len() < 3 {
        return false;
    }
    let mut inside = false;
    let n = loop_.len();
    let mut j = n - 1;
    for i in 0..n {
        let pi = loop_[i];
        let pj = loop_[j];
        let crosses = (pi.y > p.y) != (pj.y > p.y);
        if crosses {
            let x_at_y = pj.x + (p.y - pj.y) / (pi.y - pj.y) * (pi.x - pj.x);
            if p.x < x_at_y {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
