// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing types: polygons-with-holes, the UV reference rectangle,
//! and the triangle mesh handed back per output polygon.

use slicer_geometry::{Loop, Point};

/// An outer loop plus zero or more hole loops.
///
/// Invariants (checked by construction in this crate, not re-verified by
/// callers): the outer loop winds CCW, every hole winds CW, and every
/// hole lies strictly inside the outer loop's interior.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonWithHoles {
    /// The CCW-wound outer boundary.
    pub outer: Loop,
    /// CW-wound hole boundaries, each fully contained in `outer`.
    pub holes: Vec<Loop>,
}

impl PolygonWithHoles {
    /// A polygon with no holes.
    #[must_use]
    pub const fn new(outer: Loop, holes: Vec<Loop>) -> Self {
        Self { outer, holes }
    }

    /// Signed area of the polygon (outer area minus the sum of hole
    /// areas, since holes wind CW and so already contribute negative
    /// area to the sum).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.outer.signed_area() + self.holes.iter().map(Loop::signed_area).sum::<f64>()
    }
}

/// A reference rectangle supplied by the host, used only for UV
/// computation. The core exposes but never mutates it: fragments of
/// fragments inherit the ancestral rectangle unchanged, which is the
/// host's responsibility to propagate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RefRect {
    /// Minimum x of the rectangle.
    pub min_x: f64,
    /// Minimum y of the rectangle.
    pub min_y: f64,
    /// Rectangle width.
    pub width: f64,
    /// Rectangle height.
    pub height: f64,
}

impl RefRect {
    /// A new reference rectangle.
    #[must_use]
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

/// A triangulated mesh for one output polygon, plus the collider paths a
/// physics host would want.
#[derive(Clone, Debug, PartialEq)]
pub struct TriMesh {
    /// Mesh vertex positions, in the same order the `indices` reference.
    pub positions: Vec<Point>,
    /// Per-vertex UV coordinates, computed via [`crate::uv_for`].
    pub uvs: Vec<(f32, f32)>,
    /// Triangle index list, three entries per triangle.
    pub indices: Vec<u32>,
    /// The polygon's outer boundary, for collider generation.
    pub outer_path: Vec<Point>,
    /// The polygon's hole boundaries, for collider generation.
    pub hole_paths: Vec<Vec<Point>>,
}

/// The full result of slicing and meshing a polygon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliceOutput {
    /// The topological output of the cut. Empty when the cut was a
    /// no-op (missed the polygon, or produced fewer than two pieces).
    pub polygons: Vec<PolygonWithHoles>,
    /// One mesh per entry in `polygons`, in the same order.
    pub meshes: Vec<TriMesh>,
}
