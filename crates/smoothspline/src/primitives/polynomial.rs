//! Piecewise polynomial storage, evaluation, and differentiation.
//!
//! ## Purpose
//!
//! This module defines the `PiecewisePolynomial` struct, an ordered
//! sequence of breakpoints each carrying the local power-basis
//! coefficients valid until the next breakpoint, together with its
//! equal-step variant for O(1) interval lookup.
//!
//! ## Design notes
//!
//! * **Runtime degree**: The degree is a runtime field, not a type
//!   parameter; it only ever takes the values 3, 2, 1, or 0 in practice,
//!   which does not justify a compiled variant per degree.
//! * **Horner evaluation**: Local polynomials are evaluated from the
//!   highest-order coefficient down, which is numerically stable and
//!   O(degree) per query.
//! * **Clamped extrapolation**: Queries outside the domain reuse the first
//!   or last real interval's polynomial; the final breakpoint's row is a
//!   constant sentinel that in-domain evaluation never reaches.
//!
//! ## Key concepts
//!
//! * **Breakpoint**: x-coordinate at which the local formula changes.
//! * **Coefficient row**: `degree + 1` values per breakpoint, highest
//!   power first, describing the cubic (or lower) on `[x_i, x_{i+1})` in
//!   the local variable `t = x - x_i`.
//!
//! ## Invariants
//!
//! * Breakpoints are strictly increasing and there is at least one.
//! * The coefficient vector holds exactly `breaks.len() * (degree + 1)` values.
//! * Differentiation preserves breakpoints and lowers the degree by one.
//!
//! ## Non-goals
//!
//! * This module does not compute spline coefficients (see the spline
//!   construction algorithm) and does not search for extrema.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SplineError;

// ============================================================================
// Piecewise Polynomial
// ============================================================================

/// Piecewise power-basis polynomial over strictly increasing breakpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewisePolynomial<T> {
    /// Polynomial degree of every local piece.
    degree: usize,

    /// Strictly increasing breakpoints.
    breaks: Vec<T>,

    /// Flat coefficient storage, `degree + 1` values per breakpoint,
    /// highest power first.
    coefs: Vec<T>,
}

impl<T: Float> PiecewisePolynomial<T> {
    /// Wrap precomputed breakpoints and coefficient rows.
    pub(crate) fn new(degree: usize, breaks: Vec<T>, coefs: Vec<T>) -> Self {
        debug_assert!(!breaks.is_empty());
        debug_assert_eq!(coefs.len(), breaks.len() * (degree + 1));
        Self {
            degree,
            breaks,
            coefs,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Degree of the local polynomials.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of breakpoints (one more than the number of real intervals,
    /// except for a single-point polynomial).
    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    /// Whether the polynomial has no breakpoints. Always false for
    /// instances built by this crate.
    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    /// Breakpoint x-values.
    pub fn breaks(&self) -> &[T] {
        &self.breaks
    }

    /// Domain covered by the breakpoints, as `(min, max)`.
    pub fn domain(&self) -> (T, T) {
        (self.breaks[0], self.breaks[self.breaks.len() - 1])
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Find the interval index for a query point via binary search.
    ///
    /// Out-of-domain queries clamp to the first or last real interval, so
    /// extrapolation reuses the boundary polynomial and the sentinel row
    /// at the final breakpoint is never selected.
    fn interval_index(&self, x: T) -> usize {
        let n = self.breaks.len();
        if n < 2 || x < self.breaks[0] {
            return 0;
        }
        if x >= self.breaks[n - 1] {
            return n - 2;
        }

        let mut start = 0;
        let mut end = n - 1;
        while end - start != 1 {
            let mid = (start + end) / 2;
            if x >= self.breaks[mid] {
                start = mid;
            } else {
                end = mid;
            }
        }
        start
    }

    /// Evaluate the local polynomial of interval `idx` at offset `t` from
    /// its left breakpoint, by Horner's rule.
    #[inline]
    pub(crate) fn eval_interval(&self, idx: usize, t: T) -> T {
        let stride = self.degree + 1;
        let row = &self.coefs[idx * stride..(idx + 1) * stride];

        let mut acc = row[0];
        for &coef in &row[1..] {
            acc = acc * t + coef;
        }
        acc
    }

    /// Evaluate the polynomial at a single query point.
    #[inline]
    pub fn value_at(&self, x: T) -> T {
        let idx = self.interval_index(x);
        self.eval_interval(idx, x - self.breaks[idx])
    }

    /// Evaluate the polynomial at every query point, preserving order.
    pub fn values(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.value_at(x)).collect()
    }

    // ========================================================================
    // Differentiation
    // ========================================================================

    /// Differentiate every local polynomial, producing a polynomial of
    /// degree one lower over the same breakpoints.
    ///
    /// Degree 0 cannot be differentiated further and fails with
    /// [`SplineError::DegreeUnderflow`].
    pub fn differentiate(&self) -> Result<PiecewisePolynomial<T>, SplineError> {
        if self.degree == 0 {
            return Err(SplineError::DegreeUnderflow);
        }

        let stride = self.degree + 1;
        let mut coefs = Vec::with_capacity(self.breaks.len() * self.degree);

        for row in self.coefs.chunks_exact(stride) {
            // Coefficient at power k becomes k * coefficient, shifted down
            // one slot; the constant term drops off.
            for (slot, &coef) in row[..self.degree].iter().enumerate() {
                let power = self.degree - slot;
                coefs.push(T::from(power).unwrap() * coef);
            }
        }

        Ok(PiecewisePolynomial::new(
            self.degree - 1,
            self.breaks.clone(),
            coefs,
        ))
    }
}

// ============================================================================
// Equal-Step Polynomial
// ============================================================================

/// Piecewise polynomial retabulated on a uniform grid for O(1) lookup.
///
/// Interval lookup is `floor((x - origin) / step)` clamped to the real
/// intervals, replacing the binary search of [`PiecewisePolynomial`].
/// Useful when the polynomial is evaluated at very high query volumes,
/// at the cost of exact fidelity to the original fit.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualStepPolynomial<T> {
    /// Left edge of the uniform grid (the source domain minimum).
    origin: T,

    /// Grid spacing.
    step: T,

    /// Cubic refit through the grid tabulation.
    poly: PiecewisePolynomial<T>,
}

impl<T: Float> EqualStepPolynomial<T> {
    /// Wrap a uniform-grid refit.
    pub(crate) fn new(origin: T, step: T, poly: PiecewisePolynomial<T>) -> Self {
        Self { origin, step, poly }
    }

    /// Left edge of the uniform grid.
    pub fn origin(&self) -> T {
        self.origin
    }

    /// Grid spacing.
    pub fn step(&self) -> T {
        self.step
    }

    /// The uniform-grid cubic backing this retabulation.
    pub fn polynomial(&self) -> &PiecewisePolynomial<T> {
        &self.poly
    }

    /// Evaluate at a single query point with constant-time interval lookup.
    #[inline]
    pub fn value_at(&self, x: T) -> T {
        let last = self.poly.len().saturating_sub(2);

        let offset = (x - self.origin) / self.step;
        let idx = if offset <= T::zero() {
            0
        } else {
            let i = offset.floor().to_usize().unwrap_or(last);
            if i > last {
                last
            } else {
                i
            }
        };

        let t = x - (self.origin + self.step * T::from(idx).unwrap());
        self.poly.eval_interval(idx, t)
    }

    /// Evaluate at every query point, preserving order.
    pub fn values(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.value_at(x)).collect()
    }
}
