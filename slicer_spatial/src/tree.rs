// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat, in-place-partitioned static AABB tree.
//!
//! Unlike the incremental, SAH-insert style bounding hierarchy this was
//! grounded on, this tree is built once over a fixed item set and never
//! updated: no `insert`/`update`/`remove`, no pointer chasing at query
//! time. Leaves reference contiguous ranges of a reordered payload array.
//!
//! It is generic over a payload `P` so the same structure backs both the
//! segment-obstruction tree in [`crate::segment_tree`] and the
//! solid-bounds tree `slicer_core` builds during hierarchy assignment
//!, where the payload is a solid index rather than a segment.

use alloc::vec::Vec;

use crate::types::Aabb2D;

/// Maximum number of items stored in a single leaf.
pub const MAX_LEAF: usize = 4;

#[derive(Clone, Debug)]
enum NodeKind {
    Leaf { start: u32, count: u32 },
    Internal { left: u32, right: u32 },
}

#[derive(Clone, Debug)]
struct Node {
    aabb: Aabb2D<f64>,
    kind: NodeKind,
}

/// A static, flat AABB tree over `(Aabb2D<f64>, P)` pairs.
#[derive(Clone, Debug)]
pub struct StaticAabbTree<P> {
    nodes: Vec<Node>,
    aabbs: Vec<Aabb2D<f64>>,
    payloads: Vec<P>,
    root: Option<u32>,
}

impl<P: Copy> StaticAabbTree<P> {
    /// Build a tree over `items`. Empty input produces an empty tree whose
    /// queries always report no matches.
    #[must_use]
    pub fn build(items: Vec<(Aabb2D<f64>, P)>) -> Self {
        let mut aabbs: Vec<Aabb2D<f64>> = Vec::with_capacity(items.len());
        let mut payloads: Vec<P> = Vec::with_capacity(items.len());
        for (aabb, payload) in items {
            aabbs.push(aabb);
            payloads.push(payload);
        }
        let mut nodes = Vec::new();
        let root = if aabbs.is_empty() {
            None
        } else {
            let n = aabbs.len();
            Some(Self::build_range(&mut aabbs, &mut payloads, 0, n, &mut nodes))
        };
        Self {
            nodes,
            aabbs,
            payloads,
            root,
        }
    }

    fn union_range(aabbs: &[Aabb2D<f64>]) -> Aabb2D<f64> {
        let mut it = aabbs.iter();
        let first = *it.next().expect("range is non-empty");
        it.fold(first, |acc, a| acc.union(a))
    }

    /// Build the subtree over `aabbs[lo..hi]` (and the matching
    /// `payloads[lo..hi]`), partitioning both slices in lockstep, and
    /// return the new node's index.
    fn build_range(
        aabbs: &mut [Aabb2D<f64>],
        payloads: &mut [P],
        lo: usize,
        hi: usize,
        nodes: &mut Vec<Node>,
    ) -> u32 {
        let range_aabb = Self::union_range(&aabbs[lo..hi]);
        let count = hi - lo;
        if count <= MAX_LEAF {
            let idx = nodes.len() as u32;
            nodes.push(Node {
                aabb: range_aabb,
                kind: NodeKind::Leaf {
                    start: lo as u32,
                    count: count as u32,
                },
            });
            return idx;
        }

        let axis = if range_aabb.extent_on_axis(0) >= range_aabb.extent_on_axis(1) {
            0
        } else {
            1
        };
        let mid = lo + count / 2;
        let split = Self::partition_by_center(aabbs, payloads, lo, hi, axis);
        // If the partition degenerated to one side (every item landed on
        // the same side of the pivot value, e.g. all centers equal), fall
        // back to an even split by count so recursion always progresses.
        let split = if split <= lo || split >= hi { mid } else { split };

        let left = Self::build_range(aabbs, payloads, lo, split, nodes);
        let right = Self::build_range(aabbs, payloads, split, hi, nodes);
        let idx = nodes.len() as u32;
        nodes.push(Node {
            aabb: range_aabb,
            kind: NodeKind::Internal { left, right },
        });
        idx
    }

    /// In-place partition of `[lo, hi)` by each item's AABB center on
    /// `axis`, pivoting on the range's median-index value. Returns the
    /// split index `s` such that every item in `[lo, s)` has a center
    /// strictly less than the pivot and every item in `[s, hi)` does not.
    /// Degenerate inputs (all items on one side) are handled by the
    /// caller.
    fn partition_by_center(
        aabbs: &mut [Aabb2D<f64>],
        payloads: &mut [P],
        lo: usize,
        hi: usize,
        axis: u8,
    ) -> usize {
        let pivot = aabbs[lo + (hi - lo) / 2].center_on_axis(axis);
        let mut store = lo;
        for k in lo..hi {
            if aabbs[k].center_on_axis(axis) < pivot {
                aabbs.swap(k, store);
                payloads.swap(k, store);
                store += 1;
            }
        }
        store
    }

    /// Whether any payload in an overlapping leaf satisfies `pred`.
    /// Short-circuits on the first match.
    pub fn any_match(&self, query: Aabb2D<f64>, mut pred: impl FnMut(&P) -> bool) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        self.any_match_node(root, &query, &mut pred)
    }

    fn any_match_node(&self, idx: u32, query: &Aabb2D<f64>, pred: &mut impl FnMut(&P) -> bool) -> bool {
        let node = &self.nodes[idx as usize];
        if !node.aabb.intersects(query) {
            return false;
        }
        match node.kind {
            NodeKind::Leaf { start, count } => {
                let start = start as usize;
                let count = count as usize;
                for i in start..start + count {
                    if pred(&self.payloads[i]) {
                        return true;
                    }
                }
                false
            }
            NodeKind::Internal { left, right } => {
                self.any_match_node(left, query, pred) || self.any_match_node(right, query, pred)
            }
        }
    }

    /// Visit every payload whose AABB contains the point `(x, y)`.
    pub fn for_each_containing_point(&self, x: f64, y: f64, mut f: impl FnMut(&P, &Aabb2D<f64>)) {
        let Some(root) = self.root else {
            return;
        };
        self.for_each_containing_point_node(root, x, y, &mut f);
    }

    fn for_each_containing_point_node(
        &self,
        idx: u32,
        x: f64,
        y: f64,
        f: &mut impl FnMut(&P, &Aabb2D<f64>),
    ) {
        let node = &self.nodes[idx as usize];
        if !node.aabb.contains_point(x, y) {
            return;
        }
        match node.kind {
            NodeKind::Leaf { start, count } => {
                let start = start as usize;
                let count = count as usize;
                for i in start..start + count {
                    if self.aabbs[i].contains_point(x, y) {
                        f(&self.payloads[i], &self.aabbs[i]);
                    }
                }
            }
            NodeKind::Internal { left, right } => {
                self.for_each_containing_point_node(left, x, y, f);
                self.for_each_containing_point_node(right, x, y, f);
            }
        }
    }

    /// Whether the tree holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(x0: f64, y0: f64, x1: f64, y1: f64) -> Aabb2D<f64> {
        Aabb2D::new(x0, y0, x1, y1)
    }

    #[test]
    fn empty_tree_matches_nothing() {
        let tree: StaticAabbTree<u32> = StaticAabbTree::build(Vec::new());
        assert!(tree.is_empty());
        assert!(!tree.any_match(aabb(0.0, 0.0, 1.0, 1.0), |_| true));
    }

    #[test]
    fn any_match_finds_overlapping_leaf() {
        let items = alloc::vec![
            (aabb(0.0, 0.0, 1.0, 1.0), 0u32),
            (aabb(5.0, 5.0, 6.0, 6.0), 1u32),
            (aabb(10.0, 10.0, 11.0, 11.0), 2u32),
            (aabb(-5.0, -5.0, -4.0, -4.0), 3u32),
            (aabb(20.0, 0.0, 21.0, 1.0), 4u32),
            (aabb(0.5, 0.5, 2.0, 2.0), 5u32),
        ];
        let tree = StaticAabbTree::build(items);
        assert!(tree.any_match(aabb(5.2, 5.2, 5.3, 5.3), |p| *p == 1));
        assert!(!tree.any_match(aabb(100.0, 100.0, 101.0, 101.0), |_| true));
    }

    #[test]
    fn for_each_containing_point_visits_all_overlapping() {
        let items = alloc::vec![
            (aabb(0.0, 0.0, 10.0, 10.0), "outer"),
            (aabb(2.0, 2.0, 4.0, 4.0), "inner-small"),
            (aabb(20.0, 20.0, 21.0, 21.0), "far"),
        ];
        let tree = StaticAabbTree::build(items);
        let mut hits = Vec::new();
        tree.for_each_containing_point(3.0, 3.0, |p, _| hits.push(*p));
        hits.sort_unstable();
        assert_eq!(hits, alloc::vec!["inner-small", "outer"]);
    }

    #[test]
    fn build_handles_degenerate_all_same_center() {
        // Every item has the same center on both axes: the Hoare scan
        // can't separate them, so the builder must fall back to an even
        // split by count instead of looping or panicking.
        let items: Vec<_> = (0..9)
            .map(|i| (aabb(0.0, 0.0, 1.0, 1.0), i as u32))
            .collect();
        let tree = StaticAabbTree::build(items);
        for i in 0..9u32 {
            assert!(tree.any_match(aabb(0.0, 0.0, 1.0, 1.0), |p| *p == i));
        }
    }
}
