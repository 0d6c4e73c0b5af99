// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undirected multigraph over coincidence-quantized 2D points.
//!
//! Nodes are looked up by [`quantize_key`], so points within roughly
//! `0.01` world units collapse onto the same node. No back-pointers are
//! kept for edges: neighbor lists of endpoint node ids are enough —
//! an adjacency mapping keyed by coincidence-quantized integer
//! coordinates needs no back-pointers.

use alloc::vec::Vec;
use hashbrown::HashMap;
use slicer_geometry::{Point, quantize_key};

/// Identifier for a node in the planar graph.
///
/// Plain slot index: the graph is built and discarded within one `slice`
/// call, so (unlike `understory_box_tree`'s `NodeId`) no generation
/// counter is needed — nothing is ever freed mid-build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[must_use]
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

struct GraphNode {
    point: Point,
    neighbors: Vec<NodeId>,
}

/// An undirected multigraph keyed by coincidence-quantized point
/// coordinates.
#[derive(Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    by_key: HashMap<(i64, i64), NodeId>,
}

impl Graph {
    /// An empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The representative point stored for `id`.
    #[must_use]
    pub fn point(&self, id: NodeId) -> Point {
        self.nodes[id.idx()].point
    }

    /// Neighbors of `id`, in insertion order.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.idx()].neighbors
    }

    /// Get the node for `p`, inserting a new one if no existing node's
    /// quantized key matches. The first point to claim a quantized cell
    /// becomes that cell's representative coordinate.
    pub fn node_for(&mut self, p: Point) -> NodeId {
        let key = quantize_key(p);
        if let Some(&id) = self.by_key.get(&key) {
            return id;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(GraphNode {
            point: p,
            neighbors: Vec::new(),
        });
        self.by_key.insert(key, id);
        id
    }

    /// Add an undirected edge between the nodes for `a` and `b`.
    ///
    /// A degenerate edge (both endpoints map to the same node) is
    /// ignored. The same directed edge is never duplicated: inserting the
    /// same pair twice is a no-op the second time.
    pub fn add_edge(&mut self, a: Point, b: Point) {
        let u = self.node_for(a);
        let v = self.node_for(b);
        if u == v {
            return;
        }
        if !self.nodes[u.idx()].neighbors.contains(&v) {
            self.nodes[u.idx()].neighbors.push(v);
        }
        if !self.nodes[v.idx()].neighbors.contains(&u) {
            self.nodes[v.idx()].neighbors.push(u);
        }
    }

    /// Add a directed edge `a -> b` only (used for cut-seam injection,
    /// which inserts both directions explicitly and separately so each
    /// can be independently traversed/visited).
    pub fn add_directed_edge(&mut self, a: Point, b: Point) {
        let u = self.node_for(a);
        let v = self.node_for(b);
        if u == v {
            return;
        }
        if !self.nodes[u.idx()].neighbors.contains(&v) {
            self.nodes[u.idx()].neighbors.push(v);
        }
    }

    /// Total number of directed edges currently in the graph (each
    /// undirected edge counts twice). Used to size the loop-extraction
    /// watchdog.
    #[must_use]
    pub fn directed_edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbors.len()).sum()
    }

    /// Iterate all node ids.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId(i as u32))
    }
}
