// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transcendental float helpers for `#![no_std]` callers.
//!
//! `core` has no `sqrt`/`floor`/`ceil`/`atan2` for `f64` — those inherent
//! methods live in `std`. Every function here picks the `std` method
//! when the `std` feature is enabled, falling back to the `libm` crate
//! otherwise, so the rest of the workspace's `no_std` crates can call
//! through here instead of each wiring their own `libm` dependency.

#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(all(feature = "libm", not(feature = "std")))]
#[inline]
#[must_use]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn floor(x: f64) -> f64 {
    x.floor()
}

#[cfg(all(feature = "libm", not(feature = "std")))]
#[inline]
#[must_use]
pub fn floor(x: f64) -> f64 {
    libm::floor(x)
}

#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[cfg(all(feature = "libm", not(feature = "std")))]
#[inline]
#[must_use]
pub fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}

#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

#[cfg(all(feature = "libm", not(feature = "std")))]
#[inline]
#[must_use]
pub fn atan2(y: f64, x: f64) -> f64 {
    libm::atan2(y, x)
}

#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn sin(x: f64) -> f64 {
    x.sin()
}

#[cfg(all(feature = "libm", not(feature = "std")))]
#[inline]
#[must_use]
pub fn sin(x: f64) -> f64 {
    libm::sin(x)
}

#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn cos(x: f64) -> f64 {
    x.cos()
}

#[cfg(all(feature = "libm", not(feature = "std")))]
#[inline]
#[must_use]
pub fn cos(x: f64) -> f64 {
    libm::cos(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_matches_std() {
        assert!((sqrt(4.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn floor_and_ceil_bracket_a_fraction() {
        assert_eq!(floor(1.7), 1.0);
        assert_eq!(ceil(1.2), 2.0);
    }

    #[test]
    fn atan2_of_unit_axes() {
        assert!((atan2(0.0, 1.0) - 0.0).abs() < 1e-12);
        assert!((atan2(1.0, 0.0) - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
