// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strict point-in-triangle test used by the ear test.

use slicer_geometry::{Point, orient};
use slicer_spatial::Aabb2D;

/// Whether `p` lies strictly inside triangle `(a, b, c)`.
///
/// Strict: a point exactly on an edge does not count, matching the ear
/// test's need to admit the duplicated bridge-junction vertices that sit
/// exactly on a triangle edge without disqualifying the
/// ear.
#[must_use]
pub(crate) fn point_in_triangle_strict(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = orient(a, b, p);
    let d2 = orient(b, c, p);
    let d3 = orient(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos) && d1 != 0.0 && d2 != 0.0 && d3 != 0.0
}

/// Bounding box of a triangle's three vertices.
#[must_use]
pub(crate) fn triangle_aabb(a: Point, b: Point, c: Point) -> Aabb2D<f64> {
    let min_x = a.x.min(b.x).min(c.x);
    let max_x = a.x.max(b.x).max(c.x);
    let min_y = a.y.min(b.y).min(c.y);
    let max_y = a.y.max(b.y).max(c.y);
    Aabb2D::new(min_x, min_y, max_x, max_y)
}
