//! Error types for spline fitting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building,
//! fitting, differentiating, or resampling a smoothing spline, including
//! input validation, parameter constraints, and numerical degeneracy.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., offending lengths or pivots).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values, duplicate x.
//! 2. **Parameter validation**: Invalid smoothing parameter, resampling step, or weights.
//! 3. **Numerical degeneracy**: Singular banded systems, differentiation below degree zero.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric payloads are carried as `f64` regardless of the working precision.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for spline fitting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Input arrays are empty; fitting requires at least 1 point.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Weight array must be empty or match the sample count.
    MismatchedWeights {
        /// Number of elements in the weight array.
        weights_len: usize,
        /// Number of samples.
        data_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Penalty weights must be non-negative.
    InvalidWeight(f64),

    /// Two samples share the same x-value after sorting.
    DuplicateX(f64),

    /// Smoothing parameter must be finite and non-negative.
    InvalidSmoothing(f64),

    /// Resampling step must be finite, positive, and coarse enough to
    /// keep the retabulated grid within the interval budget.
    InvalidStep(f64),

    /// Banded system hit an exactly-zero pivot during elimination.
    SingularMatrix {
        /// Elimination row at which the pivot vanished.
        row: usize,
    },

    /// Attempted to differentiate a degree-0 polynomial.
    DegreeUnderflow,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SplineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::MismatchedWeights {
                weights_len,
                data_len,
            } => {
                write!(
                    f,
                    "Weight mismatch: {weights_len} weights for {data_len} samples"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidWeight(w) => {
                write!(f, "Invalid weight: {w} (must be finite and >= 0)")
            }
            Self::DuplicateX(x) => {
                write!(f, "Duplicate x-value: {x} (interpolation is ambiguous)")
            }
            Self::InvalidSmoothing(s) => {
                write!(f, "Invalid smoothing parameter: {s} (must be finite and >= 0)")
            }
            Self::InvalidStep(h) => {
                write!(f, "Invalid resampling step: {h} (must be finite and > 0)")
            }
            Self::SingularMatrix { row } => {
                write!(f, "Singular banded system: zero pivot at row {row}")
            }
            Self::DegreeUnderflow => {
                write!(f, "Cannot differentiate a polynomial of degree 0")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SplineError {}
