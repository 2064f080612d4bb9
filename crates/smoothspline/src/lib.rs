//! # smoothspline — Weighted Smoothing Cubic Splines for Rust
//!
//! A smoothing cubic-spline approximation engine for tabular (x, y)
//! measurement data such as chromatography or mass-spectrometry traces.
//! It fits a piecewise cubic polynomial through possibly noisy, weighted
//! samples under a tunable smoothing parameter, evaluates the fit at
//! arbitrary query points, differentiates it, and locates its local maxima
//! for peak detection.
//!
//! ## What is a smoothing spline?
//!
//! A smoothing spline balances fidelity to the samples against the total
//! curvature of the fitted curve. The smoothing parameter `s` controls the
//! trade-off: `s = 0` reproduces every sample exactly (pure interpolation),
//! while larger values trade pointwise accuracy for a visibly calmer curve.
//! Per-point weights scale the roughness penalty locally, so individual
//! samples can be pinned (`weight = 0`) or relaxed without touching the
//! rest of the trace.
//!
//! ## Quick Start
//!
//! ```rust
//! use smoothspline::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = vec![0.0, 1.0, 0.0, 1.0, 0.0];
//!
//! // Build the model
//! let model = SmoothingSpline::new()
//!     .smoothing(0.0)     // pure interpolation
//!     .build()?;
//!
//! // Fit the model to the data
//! let fit = model.fit(&x, &y)?;
//!
//! // The fit passes through every sample ...
//! assert!((fit.value_at(1.0) - 1.0).abs() < 1e-9);
//!
//! // ... and exposes the local maxima of the fitted curve.
//! let peaks = fit.peaks();
//! assert_eq!(peaks.len(), 2);
//! # Result::<(), SplineError>::Ok(())
//! ```
//!
//! ## Full Features
//!
//! ```rust
//! use smoothspline::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let y = vec![0.1, 0.9, 2.2, 2.9, 4.1, 5.2, 5.9];
//! let w = vec![1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0];
//!
//! let model = SmoothingSpline::new()
//!     .smoothing(0.5)     // roughness penalty
//!     .weights(w)         // per-point penalty scaling; 0 pins the sample
//!     .build()?;
//!
//! let fit = model.fit(&x, &y)?;
//!
//! let ys = fit.values(&[0.5, 1.5, 2.5]);   // bulk evaluation
//! let peaks = fit.peaks();                  // ascending maxima locations
//! let fast = fit.resample(0.01)?;           // O(1)-lookup retabulation
//! # let _ = (ys, peaks, fast);
//! # Result::<(), SplineError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, SplineError>`. Invalid samples
//! (NaN/Inf, duplicate x-values, mismatched weight arrays), degenerate
//! linear systems, and out-of-range parameters are all surfaced
//! synchronously from the failing call; nothing is retried internally.
//!
//! ```rust
//! use smoothspline::prelude::*;
//!
//! let model = SmoothingSpline::new().build()?;
//!
//! // Two samples share x = 1.0: ambiguous interpolation.
//! match model.fit(&[1.0, 1.0], &[0.0, 5.0]) {
//!     Err(SplineError::DuplicateX(_)) => {}
//!     other => panic!("expected DuplicateX, got {:?}", other.is_ok()),
//! }
//! # Result::<(), SplineError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (with `alloc`). Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! smoothspline = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` instead of `f64` to halve the memory footprint on constrained
//! targets; every public type is generic over the float precision.
//!
//! ## References
//!
//! - Reinsch, C. H. (1967). "Smoothing by Spline Functions"
//! - de Boor, C. (1978). "A Practical Guide to Splines"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure numerical routines.
mod math;

// Layer 3: Algorithms - spline construction, extrema, retabulation.
mod algorithms;

// Layer 4: Engine - validation and the approximator strategies.
mod engine;

// High-level fluent API for spline fitting.
mod api;

// Standard smoothing-spline prelude.
pub mod prelude {
    pub use crate::api::{
        Approximator, EqualStepApproximator, PiecewisePolynomial, SplineApproximator,
        SplineBuilder as SmoothingSpline, SplineError, SplineModel,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
