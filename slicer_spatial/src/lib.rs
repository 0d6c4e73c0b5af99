// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slicer Spatial: the two spatial acceleration structures the slicer
//! builds once per slice and discards.
//!
//! - [`tree::StaticAabbTree`] is a flat, in-place-partitioned static AABB
//! tree. [`segment_tree::SegmentTree`] specializes it to
//! segments for the "does this query segment cross any wall?"
//! obstruction query used during bridge building; `slicer_core` reuses
//! the same generic tree, keyed by solid index instead of segments, for
//! hierarchy assignment.
//! - [`grid::UniformGrid`] is a uniform spatial hash over reflex-vertex
//! positions, used by the triangulator to accelerate ear tests.
//!
//! Both structures are built once per slice invocation and owned
//! exclusively by that invocation — there is no shared or global spatial
//! state.

#![no_std]

extern crate alloc;

pub mod grid;
pub mod segment_tree;
pub mod tree;
pub mod types;

pub use grid::UniformGrid;
pub use segment_tree::SegmentTree;
pub use tree::StaticAabbTree;
pub use types::Aabb2D;
