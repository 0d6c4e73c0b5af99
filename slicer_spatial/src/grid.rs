// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid over reflex-vertex positions.
//!
//! Grounded on `understory_index`'s `GridF64` bucket-table backend:
//! buckets are `Vec<(cell_x, cell_y, Vec<slot>)>`, found by linear scan
//! (cell counts stay small in practice) rather than a hash map, so
//! `find_cell` stays allocation-free for repeated lookups of the same
//! cell. Unlike `GridF64`, cell size and origin are derived from the
//! input rather than supplied by the caller, and removal is
//! swap-remove-by-scan within a single bucket instead of a linked list:
//! buckets stay small in practice, so O(k) removal is enough.

use alloc::vec::Vec;

use slicer_geometry::Point;
use slicer_geometry::mathshim::{ceil, floor, sqrt};

use crate::types::Aabb2D;

/// Upper bound on total cells; cell size is enlarged uniformly to stay
/// under this.
const MAX_CELLS: usize = 200_000;

/// Lower bound on cell size, to avoid degenerate all-in-one-cell grids on
/// tiny or zero-area inputs.
const MIN_CELL_SIZE: f64 = 1e-4;

/// A uniform spatial hash over a fixed set of reflex-vertex slots.
#[derive(Clone, Debug)]
pub struct UniformGrid {
    cell_size: f64,
    origin_x: f64,
    origin_y: f64,
    cols: i64,
    rows: i64,
    cells: Vec<(i64, i64, Vec<usize>)>,
    positions: Vec<Option<Point>>,
}

impl UniformGrid {
    /// Build an (initially empty) grid sized for `reflex_count` reflex
    /// vertices spread over `aabb`. Cell size is `sqrt(area / (R+1))`
    /// clamped to [`MIN_CELL_SIZE`] and capped so total cells stay under
    /// [`MAX_CELLS`].
    #[must_use]
    pub fn new(aabb: Aabb2D<f64>, reflex_count: usize) -> Self {
        let width = (aabb.max_x - aabb.min_x).max(0.0);
        let height = (aabb.max_y - aabb.min_y).max(0.0);
        let area = (width * height).max(0.0);
        let mut cell_size = sqrt(area / (reflex_count as f64 + 1.0));
        if !cell_size.is_finite() || cell_size < MIN_CELL_SIZE {
            cell_size = MIN_CELL_SIZE;
        }

        let mut cols = (ceil(width / cell_size) as i64).max(1);
        let mut rows = (ceil(height / cell_size) as i64).max(1);
        if (cols as i128) * (rows as i128) > MAX_CELLS as i128 {
            let scale = sqrt((cols as f64) * (rows as f64) / MAX_CELLS as f64);
            cell_size *= scale;
            cols = (ceil(width / cell_size) as i64).max(1);
            rows = (ceil(height / cell_size) as i64).max(1);
        }

        Self {
            cell_size,
            origin_x: aabb.min_x,
            origin_y: aabb.min_y,
            cols,
            rows,
            cells: Vec::new(),
            positions: Vec::new(),
        }
    }

    fn cell_of(&self, p: Point) -> (i64, i64) {
        let cx = floor((p.x - self.origin_x) / self.cell_size) as i64;
        let cy = floor((p.y - self.origin_y) / self.cell_size) as i64;
        (cx.clamp(0, self.cols - 1), cy.clamp(0, self.rows - 1))
    }

    fn find_or_create_cell(&mut self, key: (i64, i64)) -> usize {
        if let Some(idx) = self
            .cells
            .iter()
            .position(|&(cx, cy, _)| (cx, cy) == key)
        {
            idx
        } else {
            self.cells.push((key.0, key.1, Vec::new()));
            self.cells.len() - 1
        }
    }

    /// Insert a reflex-vertex slot at `p` (head-prepend within its
    /// bucket, O(1)).
    pub fn insert(&mut self, slot: usize, p: Point) {
        if self.positions.len() <= slot {
            self.positions.resize(slot + 1, None);
        }
        self.positions[slot] = Some(p);
        let key = self.cell_of(p);
        let idx = self.find_or_create_cell(key);
        self.cells[idx].2.insert(0, slot);
    }

    /// Remove a previously inserted slot. No-op if the slot was never
    /// inserted or was already removed.
    pub fn remove(&mut self, slot: usize) {
        let Some(Some(p)) = self.positions.get(slot).copied() else {
            return;
        };
        let key = self.cell_of(p);
        if let Some(idx) = self.cells.iter().position(|&(cx, cy, _)| (cx, cy) == key) {
            if let Some(pos) = self.cells[idx].2.iter().position(|&s| s == slot) {
                self.cells[idx].2.swap_remove(pos);
            }
        }
        self.positions[slot] = None;
    }

    /// Visit every currently-inserted slot whose cell overlaps `aabb`.
    /// Query coordinates are clamped to the grid's bounds.
    pub fn enumerate_window(&self, aabb: Aabb2D<f64>, mut f: impl FnMut(usize, Point)) {
        if self.cells.is_empty() {
            return;
        }
        let (min_cx, min_cy) = self.cell_of(Point::new(aabb.min_x, aabb.min_y));
        let (max_cx, max_cy) = self.cell_of(Point::new(aabb.max_x, aabb.max_y));
        for &(cx, cy, ref slots) in &self.cells {
            if cx < min_cx || cx > max_cx || cy < min_cy || cy > max_cy {
                continue;
            }
            for &slot in slots {
                if let Some(Some(p)) = self.positions.get(slot) {
                    f(slot, *p);
                }
            }
        }
    }

    /// Number of cells currently holding at least one slot.
    #[must_use]
    pub fn occupied_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.2.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(x0: f64, y0: f64, x1: f64, y1: f64) -> Aabb2D<f64> {
        Aabb2D::new(x0, y0, x1, y1)
    }

    #[test]
    fn insert_and_enumerate_window() {
        let mut grid = UniformGrid::new(aabb(0.0, 0.0, 10.0, 10.0), 4);
        grid.insert(0, Point::new(1.0, 1.0));
        grid.insert(1, Point::new(9.0, 9.0));
        grid.insert(2, Point::new(5.0, 5.0));

        let mut hits = Vec::new();
        grid.enumerate_window(aabb(0.0, 0.0, 6.0, 6.0), |slot, _| hits.push(slot));
        hits.sort_unstable();
        assert_eq!(hits, alloc::vec![0, 2]);
    }

    #[test]
    fn remove_excludes_from_future_queries() {
        let mut grid = UniformGrid::new(aabb(0.0, 0.0, 10.0, 10.0), 2);
        grid.insert(0, Point::new(1.0, 1.0));
        grid.remove(0);
        let mut hits = Vec::new();
        grid.enumerate_window(aabb(0.0, 0.0, 10.0, 10.0), |slot, _| hits.push(slot));
        assert!(hits.is_empty());
    }

    #[test]
    fn cell_count_is_capped_for_huge_sparse_inputs() {
        // A huge AABB with very few reflex vertices would otherwise want
        // an enormous number of tiny cells; the cap must keep the grid
        // bounded.
        let grid = UniformGrid::new(aabb(0.0, 0.0, 1.0e6, 1.0e6), 1);
        assert!((grid.cols as i128) * (grid.rows as i128) <= MAX_CELLS as i128);
    }

    #[test]
    fn zero_area_input_does_not_panic() {
        let mut grid = UniformGrid::new(aabb(5.0, 5.0, 5.0, 5.0), 0);
        grid.insert(0, Point::new(5.0, 5.0));
        let mut hits = Vec::new();
        grid.enumerate_window(aabb(0.0, 0.0, 10.0, 10.0), |slot, _| hits.push(slot));
        assert_eq!(hits, alloc::vec![0]);
    }
}
