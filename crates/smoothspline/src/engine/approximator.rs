//! Approximator trait and concrete fitting strategies.
//!
//! ## Purpose
//!
//! This module binds fitted piecewise polynomials to the uniform
//! evaluation contract exposed to callers: scalar and bulk evaluation,
//! peak extraction, and equal-step retabulation.
//!
//! ## Design notes
//!
//! * **One trait, two strategies**: The standard smoothing-spline fit and
//!   its equal-step retabulation implement the same [`Approximator`]
//!   contract; no deeper hierarchy is needed.
//! * **Immutable instances**: An approximator never mutates after
//!   construction. Changing parameters means building a replacement and
//!   swapping it in, so concurrent readers of the old instance are never
//!   invalidated mid-use.
//! * **Shared read-only polynomial**: The fitted polynomial is owned by
//!   its approximator and lent to callers by reference.
//!
//! ## Non-goals
//!
//! * This module does not validate raw samples (the fitting entry point
//!   does) and does not compute coefficients itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::extrema::local_maxima;
use crate::algorithms::resample::resample_uniform;
use crate::engine::validator::Validator;
use crate::primitives::errors::SplineError;
use crate::primitives::polynomial::{EqualStepPolynomial, PiecewisePolynomial};

// ============================================================================
// Approximator Contract
// ============================================================================

/// Uniform evaluation contract of a fitted approximation.
pub trait Approximator<T: Float> {
    /// Approximated value at a single query point. Queries outside the
    /// fitted domain extrapolate with the boundary polynomial.
    fn value_at(&self, x: T) -> T;

    /// Approximated values for every query point, same length, same order.
    fn values(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.value_at(x)).collect()
    }

    /// X-locations of the local maxima of the approximation, ascending.
    fn peaks(&self) -> Vec<T>;

    /// Retabulate on a uniform grid with the given step for O(1) lookup.
    fn resample(&self, step: T) -> Result<EqualStepApproximator<T>, SplineError>;
}

// ============================================================================
// Standard Smoothing-Spline Strategy
// ============================================================================

/// Smoothing cubic-spline approximation with binary-search interval lookup.
#[derive(Debug, Clone)]
pub struct SplineApproximator<T> {
    poly: PiecewisePolynomial<T>,
}

impl<T: Float> SplineApproximator<T> {
    pub(crate) fn new(poly: PiecewisePolynomial<T>) -> Self {
        Self { poly }
    }

    /// The fitted piecewise cubic.
    pub fn polynomial(&self) -> &PiecewisePolynomial<T> {
        &self.poly
    }

    /// Domain covered by the fit, as `(min, max)`.
    pub fn domain(&self) -> (T, T) {
        self.poly.domain()
    }
}

impl<T: Float> Approximator<T> for SplineApproximator<T> {
    fn value_at(&self, x: T) -> T {
        self.poly.value_at(x)
    }

    fn peaks(&self) -> Vec<T> {
        local_maxima(&self.poly)
    }

    fn resample(&self, step: T) -> Result<EqualStepApproximator<T>, SplineError> {
        Validator::validate_step(step)?;
        Ok(EqualStepApproximator::new(resample_uniform(
            &self.poly, step,
        )?))
    }
}

// ============================================================================
// Equal-Step Strategy
// ============================================================================

/// Equal-step retabulated approximation with constant-time interval lookup.
#[derive(Debug, Clone)]
pub struct EqualStepApproximator<T> {
    poly: EqualStepPolynomial<T>,
}

impl<T: Float> EqualStepApproximator<T> {
    pub(crate) fn new(poly: EqualStepPolynomial<T>) -> Self {
        Self { poly }
    }

    /// Grid spacing of the retabulation.
    pub fn step(&self) -> T {
        self.poly.step()
    }

    /// The uniform-grid cubic backing this approximator.
    pub fn polynomial(&self) -> &PiecewisePolynomial<T> {
        self.poly.polynomial()
    }
}

impl<T: Float> Approximator<T> for EqualStepApproximator<T> {
    fn value_at(&self, x: T) -> T {
        self.poly.value_at(x)
    }

    fn peaks(&self) -> Vec<T> {
        local_maxima(self.poly.polynomial())
    }

    fn resample(&self, step: T) -> Result<EqualStepApproximator<T>, SplineError> {
        Validator::validate_step(step)?;
        Ok(EqualStepApproximator::new(resample_uniform(
            self.poly.polynomial(),
            step,
        )?))
    }
}
