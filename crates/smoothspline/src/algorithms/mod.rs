//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the core spline algorithms:
//! - Smoothing-spline coefficient construction
//! - Local maxima extraction
//! - Uniform-grid retabulation
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Local maxima extraction.
pub mod extrema;

/// Uniform-grid retabulation.
pub mod resample;

/// Smoothing-spline coefficient construction.
pub mod spline;
