// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=slicer_geometry --heading-base-level=0

//! Slicer Geometry: point/segment primitives for the 2D polygon slicer.
//!
//! This crate is the only place in the slicer workspace where numeric
//! tolerances appear. Every higher-level crate (`slicer_spatial`,
//! `slicer_graph`, `slicer_merge`, `slicer_triangulate`, `slicer_core`)
//! calls through [`orient`], [`signed_area`], [`seg_intersect`],
//! [`line_hits_segment`], and [`point_in_polygon`] rather than
//! re-deriving them.
//!
//! - [`Point`] is a re-export of [`kurbo::Point`] (an `f64` pair).
//! - [`Segment`] is an ordered pair of points.
//! - [`Loop`] is a closed polyline: no two consecutive points coincide, no
//! self-intersection, winding enforced by [`Loop::normalize_winding`].
//! - [`tolerance`] groups every tolerance constant used by the pipeline.
//!
//! ```rust
//! use slicer_geometry::{Point, orient, signed_area};
//!
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(1.0, 0.0);
//! let c = Point::new(1.0, 1.0);
//! assert!(orient(a, b, c) > 0.0); // left turn
//!
//! let square = [a, b, c, Point::new(0.0, 1.0)];
//! assert!(signed_area(&square) > 0.0); // CCW
//! ```

#![no_std]

extern crate alloc;

mod loop_;
pub mod mathshim;
mod primitives;
mod segment;
pub mod tolerance;

pub use kurbo::Point;
pub use loop_::Loop;
pub use primitives::{line_hits_segment, orient, point_in_polygon, seg_intersect, signed_area};
pub use segment::Segment;
pub use tolerance::Tolerances;

/// Squared Euclidean distance between two points.
#[inline]
#[must_use]
pub fn dist2(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Whether two points coincide within `eps2` (a squared-distance tolerance).
#[inline]
#[must_use]
pub fn coincident(a: Point, b: Point, eps2: f64) -> bool {
    dist2(a, b) <= eps2
}

/// Quantized coordinate key: `(floor(x * 100), floor(y * 100))`.
///
/// Two points within roughly `0.01` world units collapse to the same key.
/// Used by `slicer_graph` to merge coincident vertices into a single
/// planar-graph node, per the "coincidence-quantized" data model.
#[inline]
#[must_use]
pub fn quantize_key(p: Point) -> (i64, i64) {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "quantized keys are intentionally truncated fixed-point coordinates"
    )]
    let kx = mathshim::floor(p.x * 100.0) as i64;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "quantized keys are intentionally truncated fixed-point coordinates"
    )]
    let ky = mathshim::floor(p.y * 100.0) as i64;
    (kx, ky)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_merges_nearby_points() {
        let a = Point::new(1.0019, 2.0019);
        let b = Point::new(1.0021, 2.0021);
        // Both truncate to the same 0.01-scale cell.
        assert_eq!(quantize_key(a), quantize_key(b));
    }

    #[test]
    fn coincident_respects_tolerance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.005, 0.0);
        assert!(coincident(a, b, tolerance::EPS_COINCIDE2));
        let c = Point::new(1.0, 0.0);
        assert!(!coincident(a, c, tolerance::EPS_COINCIDE2));
    }
}
