//! Uniform-grid retabulation.
//!
//! ## Purpose
//!
//! This module re-tabulates an arbitrary piecewise polynomial on an
//! equal-step grid spanning its domain and refits a fresh interpolating
//! cubic through the tabulated values, trading exact fidelity to the
//! source fit for O(1) interval lookup at evaluation time.
//!
//! ## Design notes
//!
//! * **Round-up coverage**: The grid starts at the domain minimum; the
//!   step count rounds up so the final grid point reaches or passes the
//!   domain maximum.
//! * **Pure interpolation**: The refit runs with smoothing 0, so the
//!   retabulation reproduces the source values exactly at every grid
//!   point and deviates only between them.
//! * **Interval budget**: A step fine enough to explode the grid is
//!   rejected up front rather than allocating without bound.
//!
//! ## Non-goals
//!
//! * This module does not choose the step; callers trade accuracy against
//!   lookup volume themselves.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::spline::fit_cubic;
use crate::primitives::errors::SplineError;
use crate::primitives::polynomial::{EqualStepPolynomial, PiecewisePolynomial};
use crate::primitives::samples::SampleSet;

// ============================================================================
// Retabulation
// ============================================================================

/// Hard ceiling on the number of uniform grid intervals.
const MAX_GRID_INTERVALS: usize = 16_777_216;

/// Retabulate a polynomial on a uniform grid with the given step.
pub fn resample_uniform<T: Float>(
    poly: &PiecewisePolynomial<T>,
    step: T,
) -> Result<EqualStepPolynomial<T>, SplineError> {
    let (min, max) = poly.domain();
    let span = max - min;

    // Whole steps covering the span, rounding up on any remainder.
    let whole = (span / step).floor();
    let intervals = if min + whole * step == max {
        whole
    } else {
        whole + T::one()
    };
    let intervals = intervals
        .to_usize()
        .filter(|&k| k <= MAX_GRID_INTERVALS)
        .ok_or_else(|| SplineError::InvalidStep(step.to_f64().unwrap_or(f64::NAN)))?;
    let intervals = intervals.max(1);

    let grid: Vec<T> = (0..=intervals)
        .map(|j| min + step * T::from(j).unwrap())
        .collect();
    // A step below the float resolution of the domain would collapse
    // adjacent grid points.
    if grid.windows(2).any(|w| w[0] >= w[1]) {
        return Err(SplineError::InvalidStep(step.to_f64().unwrap_or(f64::NAN)));
    }
    let values = poly.values(&grid);
    let weights = vec![T::one(); grid.len()];

    let refit = fit_cubic(&SampleSet::new(grid, values, weights), T::zero())?;
    Ok(EqualStepPolynomial::new(min, step, refit))
}
