// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The segment AABB tree: a [`StaticAabbTree`] specialized to segments,
//! used for obstruction queries during bridge building.

use alloc::vec::Vec;

use slicer_geometry::tolerance::{SEGMENT_AABB_EXPAND, SHARED_ENDPOINT_EPS2};
use slicer_geometry::{Point, Segment, coincident, seg_intersect};

use crate::tree::StaticAabbTree;
use crate::types::Aabb2D;

fn segment_aabb(seg: Segment) -> Aabb2D<f64> {
    let (min_x, max_x) = (seg.a.x.min(seg.b.x), seg.a.x.max(seg.b.x));
    let (min_y, max_y) = (seg.a.y.min(seg.b.y), seg.a.y.max(seg.b.y));
    Aabb2D::new(min_x, min_y, max_x, max_y).expanded(SEGMENT_AABB_EXPAND)
}

/// A static AABB tree over segments, supporting a single query: "does any
/// stored segment strictly cross this query segment?".
#[derive(Clone, Debug)]
pub struct SegmentTree {
    inner: StaticAabbTree<Segment>,
}

impl SegmentTree {
    /// Build a tree over `segments`. An empty slice yields a tree whose
    /// [`SegmentTree::intersects`] always returns `false`.
    #[must_use]
    pub fn build(segments: &[Segment]) -> Self {
        let items = segments
            .iter()
            .map(|&seg| (segment_aabb(seg), seg))
            .collect::<Vec<_>>();
        Self {
            inner: StaticAabbTree::build(items),
        }
    }

    /// Whether the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Strict-interior intersection test of the query segment `p-q`
    /// against every stored segment.
    ///
    /// A stored segment that shares an endpoint with the query (within
    /// [`SHARED_ENDPOINT_EPS2`]) is skipped: adjacency at a shared vertex
    /// must not register as an obstruction. Returns on the first
    /// strict-interior hit.
    #[must_use]
    pub fn intersects(&self, p: Point, q: Point) -> bool {
        if self.inner.is_empty() {
            return false;
        }
        let query_aabb = Aabb2D::new(p.x.min(q.x), p.y.min(q.y), p.x.max(q.x), p.y.max(q.y));
        self.inner.any_match(query_aabb, |seg| {
            let shares_endpoint = coincident(seg.a, p, SHARED_ENDPOINT_EPS2)
            || coincident(seg.a, q, SHARED_ENDPOINT_EPS2)
            || coincident(seg.b, p, SHARED_ENDPOINT_EPS2)
            || coincident(seg.b, q, SHARED_ENDPOINT_EPS2);
            if shares_endpoint {
                return false;
            }
            seg_intersect(p, q, seg.a, seg.b).is_some()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_never_intersects() {
        let tree = SegmentTree::build(&[]);
        assert!(!tree.intersects(Point::new(0.0, 0.0), Point::new(1.0, 1.0)));
    }

    #[test]
    fn detects_crossing_segment() {
        let wall = Segment::new(Point::new(0.0, -1.0), Point::new(0.0, 1.0));
        let tree = SegmentTree::build(&[wall]);
        assert!(tree.intersects(Point::new(-1.0, 0.0), Point::new(1.0, 0.0)));
    }

    #[test]
    fn ignores_shared_endpoint() {
        let wall = Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        let tree = SegmentTree::build(&[wall]);
        // Query shares the (0,0) endpoint with the wall: not an obstruction.
        assert!(!tree.intersects(Point::new(0.0, 0.0), Point::new(1.0, 0.0)));
    }

    #[test]
    fn misses_segment_outside_window() {
        let wall = Segment::new(Point::new(100.0, 100.0), Point::new(101.0, 101.0));
        let tree = SegmentTree::build(&[wall]);
        assert!(!tree.intersects(Point::new(-1.0, 0.0), Point::new(1.0, 0.0)));
    }
}
