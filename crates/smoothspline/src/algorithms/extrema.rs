//! Local maxima extraction.
//!
//! ## Purpose
//!
//! This module locates the local maxima of a piecewise cubic (the peak
//! positions of a fitted trace) by scanning its derivative for
//! concave-down zero crossings and refining each with bisection.
//!
//! ## Design notes
//!
//! * **Descending crossings only**: A derivative that changes sign from
//!   positive to negative brackets a maximum; ascending crossings are
//!   minima and are skipped without refinement.
//! * **Relative tolerance**: The bisection tolerance is scaled to the
//!   magnitude of the sign change (1e-10 relative), so flat and steep
//!   peaks resolve comparably.
//! * **Exact-zero breakpoints**: A derivative that lands exactly on zero
//!   at a breakpoint counts as a maximum when its neighbors straddle it
//!   from positive to negative.
//!
//! ## Invariants
//!
//! * Reported maxima are in ascending x-order.
//! * Polynomials of degree < 2 have no maxima by definition and yield an
//!   empty sequence.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::roots::find_zero;
use crate::primitives::polynomial::PiecewisePolynomial;

// ============================================================================
// Maxima Scan
// ============================================================================

/// Relative scale for the per-crossing bisection tolerance.
const CROSSING_TOLERANCE_SCALE: f64 = 1e-10;

/// Locate the local maxima of a piecewise polynomial, ascending in x.
pub fn local_maxima<T: Float>(poly: &PiecewisePolynomial<T>) -> Vec<T> {
    if poly.degree() < 2 || poly.len() < 2 {
        return Vec::new();
    }
    let deriv = match poly.differentiate() {
        Ok(d) => d,
        // degree >= 2 checked above
        Err(_) => return Vec::new(),
    };

    let breaks = poly.breaks();
    let slopes: Vec<T> = breaks.iter().map(|&b| deriv.value_at(b)).collect();
    let scale = T::from(CROSSING_TOLERANCE_SCALE).unwrap();

    let mut maxima = Vec::new();
    for i in 0..slopes.len() - 1 {
        let before = slopes[i];
        let after = slopes[i + 1];

        if before > T::zero() && after < T::zero() {
            let eps = scale * before.abs().max(after.abs());
            let root = find_zero(|q| deriv.value_at(q), breaks[i], breaks[i + 1], eps);
            maxima.push(root);
        } else if before > T::zero() && after == T::zero() {
            // The slope touches zero exactly on a breakpoint: a maximum
            // when the next slope continues downward.
            if i + 2 < slopes.len() && slopes[i + 2] < T::zero() {
                maxima.push(breaks[i + 1]);
            }
        }
    }

    maxima
}
