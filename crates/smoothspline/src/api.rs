//! High-level API for smoothing-spline fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the smoothing parameter and penalty weights,
//! producing an immutable model that fits raw (x, y) samples into an
//! approximator.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (smoothing 0,
//!   unit weights).
//! * **Validated**: Parameters are validated during `build()`; sample data
//!   during `fit()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SplineBuilder`] via `SmoothingSpline::new()`.
//! 2. Chain configuration methods (`.smoothing()`, `.weights()`).
//! 3. Call `.build()` to obtain a validated [`SplineModel`].
//! 4. Call `.fit(&x, &y)` to produce a [`SplineApproximator`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::spline::fit_cubic;
use crate::engine::validator::Validator;
use crate::primitives::sorting::{apply_permutation, sort_permutation};

// Publicly re-exported types
pub use crate::engine::approximator::{Approximator, EqualStepApproximator, SplineApproximator};
pub use crate::primitives::errors::SplineError;
pub use crate::primitives::polynomial::{EqualStepPolynomial, PiecewisePolynomial};
pub use crate::primitives::samples::SampleSet;

// ============================================================================
// Spline Builder
// ============================================================================

/// Fluent builder for configuring a smoothing-spline model.
#[derive(Debug, Clone)]
pub struct SplineBuilder<T> {
    /// Smoothing parameter (roughness penalty scale).
    pub smoothing: Option<T>,

    /// Per-point penalty weights.
    pub weights: Option<Vec<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SplineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SplineBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            smoothing: None,
            weights: None,
            duplicate_param: None,
        }
    }

    /// Set the smoothing parameter.
    ///
    /// `0.0` (the default) yields pure interpolation; larger values trade
    /// pointwise fidelity for a calmer curve.
    pub fn smoothing(mut self, smoothing: T) -> Self {
        if self.smoothing.is_some() {
            self.duplicate_param = Some("smoothing");
        }
        self.smoothing = Some(smoothing);
        self
    }

    /// Set per-point penalty weights.
    ///
    /// The weight of a sample scales the roughness penalty applied to it:
    /// weight 0 pins the sample exactly even under heavy smoothing.
    /// Absent weights default to 1 for every sample.
    pub fn weights(mut self, weights: Vec<T>) -> Self {
        if self.weights.is_some() {
            self.duplicate_param = Some("weights");
        }
        self.weights = Some(weights);
        self
    }

    /// Build the model, validating the configured parameters.
    pub fn build(self) -> Result<SplineModel<T>, SplineError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let smoothing = self.smoothing.unwrap_or_else(T::zero);
        Validator::validate_smoothing(smoothing)?;

        // Weight values are checked here; the length check waits for the
        // sample count at fit time.
        if let Some(ref weights) = self.weights {
            Validator::validate_weight_values(weights)?;
        }

        Ok(SplineModel {
            smoothing,
            weights: self.weights,
        })
    }
}

// ============================================================================
// Spline Model
// ============================================================================

/// Validated smoothing-spline configuration, ready to fit sample data.
#[derive(Debug, Clone)]
pub struct SplineModel<T> {
    smoothing: T,
    weights: Option<Vec<T>>,
}

impl<T: Float> SplineModel<T> {
    /// The smoothing parameter this model fits with.
    pub fn smoothing(&self) -> T {
        self.smoothing
    }

    /// Fit the model to raw samples, producing an approximator.
    ///
    /// The samples need not be sorted: they are canonicalized by x with an
    /// index-permutation sort before fitting, so an unsorted trace fits
    /// identically to its pre-sorted counterpart. Fails with
    /// [`SplineError::DuplicateX`] if two samples share an x-value after
    /// sorting.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<SplineApproximator<T>, SplineError> {
        Validator::validate_inputs(x, y)?;

        // An absent or empty weight array defaults every weight to 1.
        let mut weights = match &self.weights {
            Some(w) if !w.is_empty() => {
                Validator::validate_weight_length(w.len(), x.len())?;
                w.clone()
            }
            _ => vec![T::one(); x.len()],
        };

        // Canonicalize into owned buffers: sort by x, carrying y and the
        // weights through the same permutation.
        let mut xs = x.to_vec();
        let mut ys = y.to_vec();
        let order = sort_permutation(&xs);
        apply_permutation(&order, &mut xs, &mut ys, &mut weights);
        Validator::validate_strictly_increasing(&xs)?;

        let samples = SampleSet::new(xs, ys, weights);
        let poly = fit_cubic(&samples, self.smoothing)?;
        Ok(SplineApproximator::new(poly))
    }
}
