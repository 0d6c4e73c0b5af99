// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small typed error for genuine precondition violations.
//!
//! Every non-fatal failure category — a degenerate
//! cut, a dropped loop-extraction walk, a hole that can't be bridged, a
//! watchdog-exhausted triangulation — is handled locally by the main
//! [`crate::slice`]/[`crate::merge`]/[`crate::triangulate`] entry points:
//! they log a [`tracing::warn!`] and return a (possibly empty or
//! partial) result rather than an `Err`. `SliceError` exists only for
//! inputs that violate a hard precondition the caller controls, via the
//! `try_` variants.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SliceError {
    /// [`crate::try_merge`] was called with an outer loop of fewer than
    /// 3 points: there is no polygon to bridge holes onto.
    #[error("outer loop has {0} points, need at least 3")]
    DegenerateOuterLoop(usize),
    /// [`crate::try_triangulate`] was called with fewer than 3 points:
    /// there is no polygon to triangulate.
    #[error("point sequence has {0} points, need at least 3")]
    DegeneratePointSequence(usize),
}
