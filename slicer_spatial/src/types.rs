// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding box type shared by both spatial backends.

/// Axis-aligned bounding box in 2D, generic over scalar `T`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2D<T> {
    /// Minimum x (left).
    pub min_x: T,
    /// Minimum y (top).
    pub min_y: T,
    /// Maximum x (right).
    pub max_x: T,
    /// Maximum y (bottom).
    pub max_y: T,
}

impl<T: Copy> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl Aabb2D<f64> {
    /// Whether this AABB contains the point.
    #[must_use]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && self.min_y <= y && x <= self.max_x && y <= self.max_y
    }

    /// Whether this AABB overlaps `other` (touching counts as overlap).
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
        && other.min_x <= self.max_x
        && self.min_y <= other.max_y
        && other.min_y <= self.max_y
    }

    /// Axis-aligned bounding box union.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Expand the box uniformly by `amount` on every side.
    #[must_use]
    pub fn expanded(&self, amount: f64) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    /// Area of the box (zero if degenerate/inverted).
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.max_x - self.min_x).max(0.0) * (self.max_y - self.min_y).max(0.0)
    }

    /// Midpoint along the given axis (`0` = x, `1` = y).
    #[must_use]
    pub fn center_on_axis(&self, axis: u8) -> f64 {
        if axis == 0 {
            0.5 * (self.min_x + self.max_x)
        } else {
            0.5 * (self.min_y + self.max_y)
        }
    }

    /// Width along the given axis (`0` = x, `1` = y).
    #[must_use]
    pub fn extent_on_axis(&self, axis: u8) -> f64 {
        if axis == 0 {
            self.max_x - self.min_x
        } else {
            self.max_y - self.min_y
        }
    }
}
