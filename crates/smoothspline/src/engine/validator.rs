//! Input validation for spline configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for fitting parameters and
//! raw sample data: input lengths, finite values, weight constraints, and
//! strict x-ordering after canonicalization.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Smoothing must be finite and non-negative; the
//!   resampling step finite and positive.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Ordering**: Duplicate x-values after sorting make interpolation
//!   ambiguous and are rejected.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the fitting itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SplineError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for spline configuration and input data.
///
/// Provides static methods for validating fitting parameters and raw
/// samples. All methods return `Result<(), SplineError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate raw sample arrays for fitting.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), SplineError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(SplineError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(SplineError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: All values finite (combined loop for cache locality)
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(SplineError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(SplineError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that sorted x-values are strictly increasing.
    pub fn validate_strictly_increasing<T: Float>(x: &[T]) -> Result<(), SplineError> {
        for pair in x.windows(2) {
            if pair[0] == pair[1] {
                return Err(SplineError::DuplicateX(
                    pair[0].to_f64().unwrap_or(f64::NAN),
                ));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Weight Validation
    // ========================================================================

    /// Validate penalty weight values for finiteness and sign.
    pub fn validate_weight_values<T: Float>(weights: &[T]) -> Result<(), SplineError> {
        for &w in weights {
            if !w.is_finite() || w < T::zero() {
                return Err(SplineError::InvalidWeight(w.to_f64().unwrap_or(f64::NAN)));
            }
        }
        Ok(())
    }

    /// Validate that the weight array matches the sample count.
    pub fn validate_weight_length(weights_len: usize, data_len: usize) -> Result<(), SplineError> {
        if weights_len != data_len {
            return Err(SplineError::MismatchedWeights {
                weights_len,
                data_len,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing parameter.
    pub fn validate_smoothing<T: Float>(smoothing: T) -> Result<(), SplineError> {
        if !smoothing.is_finite() || smoothing < T::zero() {
            return Err(SplineError::InvalidSmoothing(
                smoothing.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the resampling step.
    pub fn validate_step<T: Float>(step: T) -> Result<(), SplineError> {
        if !step.is_finite() || step <= T::zero() {
            return Err(SplineError::InvalidStep(step.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SplineError> {
        if let Some(param) = duplicate_param {
            return Err(SplineError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
