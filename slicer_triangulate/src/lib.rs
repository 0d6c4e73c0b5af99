// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slicer Triangulate: grid-accelerated ear clipping over a simple
//! polygon vertex sequence.
//!
//! [`triangulate`] never fails outright: a watchdog-exhausted input
//! returns whatever triangles were clipped before exhaustion, flagged in
//! [`TriangulateResult::watchdog_exhausted`], rather than panicking or
//! returning an error.

#![no_std]

extern crate alloc;

mod earclip;
mod node;
mod triangle;

pub use earclip::{TriangulateResult, triangulate};
