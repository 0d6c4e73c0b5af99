// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slicer Core: orchestrates a single 2D polygon cut end to end and exposes the public API.
//!
//! This is the one `std` crate in the workspace: it owns the
//! `tracing`-based warning surface for every non-fatal failure category,
//! and assembles `slicer_graph`, `slicer_merge`, and
//! `slicer_triangulate` into the `slice` → `merge` → `triangulate`
//! pipeline.
//!
//! ```rust
//! use slicer_core::{PolygonWithHoles, RefRect, slice};
//! use slicer_geometry::{Loop, Point, Segment};
//!
//! let square = Loop::new(vec![
//! Point::new(-1.0, -1.0),
//! Point::new(1.0, -1.0),
//! Point::new(1.0, 1.0),
//! Point::new(-1.0, 1.0),
//! ]);
//! let polygon = PolygonWithHoles::new(square, Vec::new());
//! let cut = Segment::new(Point::new(-2.0, -2.0), Point::new(2.0, 2.0));
//! let rect = RefRect::new(-1.0, -1.0, 2.0, 2.0);
//! let pieces = slice(&polygon, cut, rect);
//! assert_eq!(pieces.len(), 2);
//! ```

mod api;
mod error;
mod pipeline;
mod types;

pub use api::{merge, slice, slice_to_meshes, triangulate, try_merge, try_triangulate, uv_for};
pub use error::SliceError;
pub use types::{PolygonWithHoles, RefRect, SliceOutput, TriMesh};

pub use slicer_geometry::{Loop, Point, Segment};
