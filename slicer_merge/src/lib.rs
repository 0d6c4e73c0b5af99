// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slicer Merge: stitches a polygon's holes onto its outer boundary with
//! bridge edges, producing one simple polygon ready for triangulation.
//!
//! The merge never fails outright: a hole that cannot be bridged (fully
//! enclosed by other geometry) is dropped and reported in
//! [`MergeResult::skipped_holes`] rather than aborting the merge for
//! every other hole.

#![no_std]

extern crate alloc;

mod bridge;
mod ring;

pub use bridge::{MergeResult, merge};
