// Copyright 2025 the Slicer2D Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tolerance constants are a contract: altering them changes observable
//! behavior on near-degenerate inputs. They are named here, not scattered
//! through the pipeline as magic numbers.

/// Coincidence tolerance, squared (`≈ 0.01` world units per side).
pub const EPS_COINCIDE2: f64 = 1e-4;

/// Minimum loop area for a loop to survive classification.
pub const AREA_MIN: f64 = 1e-2;

/// Strict-interior intersection epsilon for [`crate::seg_intersect`].
pub const INTERSECT_EPS: f64 = 1e-5;

/// Endpoint tolerance for [`crate::line_hits_segment`] parameter acceptance.
pub const ENDPOINT_EPS: f64 = 1e-4;

/// AABB expansion applied to segments to avoid false negatives on
/// axis-aligned edges.
pub const SEGMENT_AABB_EXPAND: f64 = 1e-3;

/// Squared endpoint-sharing tolerance used by the segment AABB tree when
/// culling segments that share an endpoint with the query.
pub const SHARED_ENDPOINT_EPS2: f64 = 1e-7;

/// Squared coincidence tolerance used by the triangulator's ear test to
/// treat duplicated bridge-junction vertices as non-blocking.
pub const EAR_COINCIDE_EPS2: f64 = 1e-6;

/// A named bundle of the tolerances above, for call sites that want to
/// pass a single value instead of naming each constant.
///
/// The pipeline itself always uses the module-level constants directly;
/// this struct exists for tests and for callers who want to experiment
/// with alternate tolerances without touching the library's behavior.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerances {
    /// See [`EPS_COINCIDE2`].
    pub eps_coincide2: f64,
    /// See [`AREA_MIN`].
    pub area_min: f64,
    /// See [`INTERSECT_EPS`].
    pub intersect_eps: f64,
    /// See [`ENDPOINT_EPS`].
    pub endpoint_eps: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            eps_coincide2: EPS_COINCIDE2,
            area_min: AREA_MIN,
            intersect_eps: INTERSECT_EPS,
            endpoint_eps: ENDPOINT_EPS,
        }
    }
}
