// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slicer Graph: the planar graph and left-most-turn face extraction used
//! by the slicer core to turn a set of intersected path edges into raw
//! point loops.
//!
//! This crate does not know about cuts, winding classification, or
//! hierarchy — it only builds the coincidence-quantized adjacency
//! structure ([`Graph`]) and extracts faces from it
//! ([`extract_loops`]). `slicer_core` is responsible for computing
//! intersections, injecting the cut seam, and classifying/assigning the
//! resulting loops.

#![no_std]

extern crate alloc;

mod extract;
mod graph;

pub use extract::extract_loops;
pub use graph::{Graph, NodeId};
