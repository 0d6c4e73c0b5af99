// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The doubly-linked ring of polygon vertices the ear clipper mutates in
//! place.
//!
//! Index-based arena (`prev`/`next` as `u32` indices into a `Vec`),
//! grounded on the node-arena style `earcut`-family triangulators use,
//! but without `unsafe`/`get_unchecked`: every access here is a checked
//! `Vec` index, since the workspace lints deny `unsafe_code` outright.

use alloc::vec::Vec;
use slicer_geometry::{Point, orient};

/// A vertex in the clipping ring.
pub(crate) struct Node {
    pub(crate) pos: Point,
    pub(crate) original_index: u32,
    pub(crate) prev: u32,
    pub(crate) next: u32,
    pub(crate) is_reflex: bool,
    pub(crate) is_candidate: bool,
    pub(crate) alive: bool,
}

/// The fixed-size node arena backing one triangulation. Nodes are never
/// freed early: `alive` is cleared when an ear is clipped, and `prev`/
/// `next` on its neighbors are relinked to skip it, but its slot stays
/// valid (and its index stable) for the whole call.
pub(crate) struct Ring {
    pub(crate) nodes: Vec<Node>,
}

impl Ring {
    /// Build the ring from `points`, enforcing CCW winding.
    ///
    /// Points come in already deduplicated (via `Loop`/merge output), so
    /// winding is the only normalization needed here: walk the sequence
    /// in reverse order when its signed area (CCW-positive, per
    /// `slicer_geometry::signed_area`) is not already positive. Each
    /// node's `original_index` always refers back to `points`'s own
    /// order, regardless of which direction the ring is walked in, so
    /// callers get triangle indices into the sequence they actually
    /// passed in rather than an internally flipped copy.
    pub(crate) fn build(points: &[Point]) -> Self {
        let n = points.len();
        let reversed = slicer_geometry::signed_area(points) <= 0.0;
        let order = |slot: usize| -> usize {
            if reversed { n - 1 - slot } else { slot }
        };

        let mut nodes = Vec::with_capacity(n);
        for slot in 0..n {
            let orig_idx = order(slot);
            nodes.push(Node {
                pos: points[orig_idx],
                original_index: orig_idx as u32,
                prev: ((slot + n - 1) % n) as u32,
                next: ((slot + 1) % n) as u32,
                is_reflex: false,
                is_candidate: false,
                alive: true,
            });
        }
        let mut ring = Self { nodes };
        for i in 0..n as u32 {
            ring.reclassify(i);
        }
        ring
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn pos(&self, i: u32) -> Point {
        self.nodes[i as usize].pos
    }

    pub(crate) fn prev(&self, i: u32) -> u32 {
        self.nodes[i as usize].prev
    }

    pub(crate) fn next(&self, i: u32) -> u32 {
        self.nodes[i as usize].next
    }

    /// Recompute `is_reflex` for node `i` from its current neighbors.
    ///
    /// A vertex is reflex iff `orient(prev, curr, next) <= 0`: a
    /// right turn or collinear triple, for a ring already wound CCW.
    pub(crate) fn reclassify(&mut self, i: u32) {
        let prev = self.pos(self.prev(i));
        let curr = self.pos(i);
        let next = self.pos(self.next(i));
        self.nodes[i as usize].is_reflex = orient(prev, curr, next) <= 0.0;
    }

    /// Unlink node `i`, splicing its neighbors together.
    pub(crate) fn unlink(&mut self, i: u32) {
        let p = self.prev(i);
        let n = self.next(i);
        self.nodes[p as usize].next = n;
        self.nodes[n as usize].prev = p;
        self.nodes[i as usize].alive = false;
    }
}
