// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A closed, simple polyline with an enforced winding order.

use alloc::vec::Vec;
use kurbo::Point;

use crate::primitives::signed_area;
use crate::tolerance::EPS_COINCIDE2;

/// A closed polyline: a finite ordered sequence of points, implicitly
/// closed (an edge runs from the last point back to the first).
///
/// Invariants upheld by construction helpers in this module (not checked
/// on every access, since the data model is trusted within one `slice`
/// call): no two consecutive points coincide; the loop is simple.
/// Winding (CCW for outer loops, CW for holes) is a caller-chosen property
/// enforced by [`Loop::normalize_winding`], not an invariant of the type
/// itself, since a freshly extracted loop's role (solid vs. hole) isn't
/// known until its signed area is classified.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Loop {
    points: Vec<Point>,
}

impl Loop {
    /// Build a loop from points, deduplicating consecutive coincident
    /// points within [`EPS_COINCIDE2`].
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        let mut deduped: Vec<Point> = Vec::with_capacity(points.len());
        for p in points {
            if let Some(&last) = deduped.last() {
                if crate::coincident(last, p, EPS_COINCIDE2) {
                    continue;
                }
            }
            deduped.push(p);
        }
        // The implicit closing edge can also duplicate the start point.
        if deduped.len() > 1 {
            let first = deduped[0];
            let last = *deduped.last().expect("checked non-empty above");
            if crate::coincident(first, last, EPS_COINCIDE2) {
                deduped.pop();
            }
        }
        Self { points: deduped }
    }

    /// Points of the loop, in order. The closing edge is implicit.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the loop has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area via the shoelace formula. Positive means CCW.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Whether the loop currently winds counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Reverse point order in place, flipping the winding direction.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Force this loop to wind counter-clockwise (`want_ccw = true`) or
    /// clockwise (`want_ccw = false`), reversing in place if needed.
    ///
    /// Outer loops normalize to CCW, holes to CW, enforced at ingress.
    pub fn normalize_winding(&mut self, want_ccw: bool) {
        if self.is_ccw() != want_ccw {
            self.reverse();
        }
    }

    /// Centroid (average of vertices). Sufficient for containment tests
    /// against another polygon; not an area-weighted centroid.
    #[must_use]
    pub fn centroid(&self) -> Point {
        if self.points.is_empty() {
            return Point::ZERO;
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    /// Axis-aligned bounding box of the loop's vertices.
    #[must_use]
    pub fn aabb(&self) -> Option<(Point, Point)> {
        let mut it = self.points.iter();
        let first = *it.next()?;
        let (mut min, mut max) = (first, first);
        for &p in it {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        Some((min, max))
    }
}

impl From<Vec<Point>> for Loop {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
