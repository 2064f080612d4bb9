//! Smoothing-spline coefficient construction.
//!
//! ## Purpose
//!
//! This module turns a validated sample set and a smoothing parameter into
//! the piecewise-cubic coefficients of a natural smoothing spline, by
//! assembling and solving the pentadiagonal normal equations in the
//! breakpoint curvatures.
//!
//! ## Design notes
//!
//! * **Curvature unknowns**: The solved unknowns are the second-derivative
//!   values c_i at each breakpoint; the remaining per-interval
//!   coefficients follow from closed-form finite-difference formulas.
//! * **Penalty folding**: The per-point roughness penalty is
//!   `weight_i * smoothing`, folded into the main and off-diagonals. With
//!   smoothing 0 the penalty vanishes and the same banded solve reduces
//!   to pure natural-spline interpolation; the system topology never
//!   changes.
//! * **Natural boundaries**: The first and last rows pin the boundary
//!   curvatures to zero.
//!
//! ## Key concepts
//!
//! * **Local form**: On `[x_i, x_{i+1})` the spline is
//!   `a_i + b_i t + (c_i / 2) t^2 + (d_i / 6) t^3` with `t = x - x_i`.
//! * **Sentinel row**: The final breakpoint stores a constant row holding
//!   the fitted boundary value; queries clamp to the last real interval,
//!   so the sentinel is never evaluated.
//!
//! ## Invariants
//!
//! * One coefficient row per breakpoint, degree 3.
//! * With smoothing 0 the fitted value at every breakpoint equals the
//!   sample value, and the curve is C2-continuous across breakpoints.
//!
//! ## Non-goals
//!
//! * This module does not validate samples and does not evaluate the
//!   resulting polynomial.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::banded::solve_pentadiagonal;
use crate::primitives::errors::SplineError;
use crate::primitives::polynomial::PiecewisePolynomial;
use crate::primitives::samples::SampleSet;

// ============================================================================
// Spline Construction
// ============================================================================

/// Fit a natural smoothing cubic spline through the samples.
///
/// Returns a degree-3 [`PiecewisePolynomial`] with one coefficient row per
/// sample. Fewer than 3 samples short-circuit to an exact constant or
/// straight line with zero curvature.
pub fn fit_cubic<T: Float>(
    samples: &SampleSet<T>,
    smoothing: T,
) -> Result<PiecewisePolynomial<T>, SplineError> {
    let n = samples.len();
    let x = samples.x();
    let y = samples.y();

    let zero = T::zero();
    let half = T::from(0.5).unwrap();
    let third = T::from(3.0).unwrap().recip();
    let sixth = T::from(6.0).unwrap().recip();

    if n == 1 {
        let coefs = vec![zero, zero, zero, y[0]];
        return Ok(PiecewisePolynomial::new(3, x.to_vec(), coefs));
    }
    if n == 2 {
        let slope = (y[1] - y[0]) / (x[1] - x[0]);
        let coefs = vec![zero, zero, slope, y[0], zero, zero, zero, y[1]];
        return Ok(PiecewisePolynomial::new(3, x.to_vec(), coefs));
    }

    // Per-point roughness penalties and interval widths.
    let p: Vec<T> = samples.weights().iter().map(|&w| w * smoothing).collect();
    let h: Vec<T> = x.windows(2).map(|w| w[1] - w[0]).collect();

    // Assemble the symmetric pentadiagonal system in the curvatures c_i.
    let mut main = vec![zero; n];
    let mut sup1 = vec![zero; n - 1];
    let mut sup2 = vec![zero; n - 2];
    let mut rhs = vec![zero; n];

    // Boundary rows pin c_0 = c_{n-1} = 0; the off-diagonal entries of
    // those rows stay zero.
    main[0] = sixth;
    main[n - 1] = sixth;

    for i in 1..n - 1 {
        let il = h[i - 1].recip();
        let ir = h[i].recip();
        main[i] = (h[i - 1] + h[i]) * third
            + p[i - 1] * il * il
            + (il + ir) * (il + ir) * p[i]
            + p[i + 1] * ir * ir;
        rhs[i] = (y[i + 1] - y[i]) * ir - (y[i] - y[i - 1]) * il;
    }
    for i in 1..n - 2 {
        let il = h[i - 1].recip();
        let ic = h[i].recip();
        let ir = h[i + 1].recip();
        sup1[i] = h[i] * sixth - ((il + ic) * p[i] + (ir + ic) * p[i + 1]) * ic;
    }
    for i in 1..n - 3 {
        sup2[i] = p[i + 1] / (h[i] * h[i + 1]);
    }

    // The matrix is symmetric: the sub-diagonals mirror the
    // super-diagonals. The solver consumes its first sub-diagonal, so
    // only that one needs a copy.
    let mut sub1 = sup1.clone();
    let c = solve_pentadiagonal(&sup2, &mut sub1, &mut main, &mut sup1, &sup2, &mut rhs)?;

    // Recover the per-interval coefficients from the curvatures.
    let mut coefs = Vec::with_capacity(4 * n);
    for i in 0..n - 1 {
        let hi = h[i];
        let d = (c[i + 1] - c[i]) / hi;
        // Fitted value: the sample pulled along the penalized curvature
        // residual. With penalty 0 this is the sample itself.
        let a = if i == 0 {
            y[0] - p[0] * (c[1] - c[0]) / h[0]
        } else {
            y[i] - p[i] * ((c[i + 1] - c[i]) / h[i] - (c[i] - c[i - 1]) / h[i - 1])
        };
        let b = (y[i + 1] - y[i]) / hi - (c[i] * half + d * hi * sixth) * hi;

        coefs.push(d * sixth);
        coefs.push(c[i] * half);
        coefs.push(b);
        coefs.push(a);
    }

    // Sentinel row: the fitted boundary value as a constant.
    let a_last = y[n - 1] - p[n - 1] * (c[n - 2] - c[n - 1]) / h[n - 2];
    coefs.push(zero);
    coefs.push(zero);
    coefs.push(zero);
    coefs.push(a_last);

    Ok(PiecewisePolynomial::new(3, x.to_vec(), coefs))
}
