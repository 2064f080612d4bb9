//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numerical routines used by the spline
//! algorithms:
//! - Banded linear solvers (tridiagonal and pentadiagonal)
//! - Bracketed root finding by bisection
//!
//! These are reusable building blocks with no spline-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Banded linear system solvers.
pub mod banded;

/// Bracketed zero finding.
pub mod roots;
