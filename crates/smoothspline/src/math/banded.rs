//! Banded linear system solvers.
//!
//! ## Purpose
//!
//! This module provides O(n) direct solvers for tridiagonal and
//! pentadiagonal linear systems, the two band shapes that arise from
//! cubic-spline construction: the tridiagonal system of pure
//! interpolation and the pentadiagonal system of the roughness-penalized
//! normal equations.
//!
//! ## Design notes
//!
//! * **Destructive**: Both solvers overwrite the diagonal and right-hand
//!   side buffers they eliminate through. Callers that need the original
//!   matrix must copy first.
//! * **No pivoting**: Elimination proceeds in order. A pivot that is
//!   exactly zero is a caller-visible precondition failure
//!   (`SingularMatrix`), not recovered internally; the systems built by
//!   this crate are diagonally dominant and never trip it.
//! * **Deterministic**: No retry policy. Ill-conditioning is a property of
//!   the input, not a transient fault.
//!
//! ## Key concepts
//!
//! * **Thomas algorithm**: Forward elimination of the sub-diagonal
//!   followed by back-substitution, for tridiagonal systems.
//! * **Two-sweep elimination**: The pentadiagonal solver zeroes both
//!   sub-diagonals with paired (i, i+1) and (i, i+2) row operations, then
//!   back-substitutes top-down using the two already-solved neighbors.
//!
//! ## Invariants
//!
//! * Diagonal buffer lengths are `n`, `n - 1`, and `n - 2` for the main,
//!   first, and second diagonals respectively.
//! * The returned solution vector has length `n`.
//!
//! ## Non-goals
//!
//! * This module does not assemble spline systems and does not attempt
//!   iterative refinement or partial pivoting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SplineError;

// ============================================================================
// Tridiagonal Solver
// ============================================================================

/// Solve a tridiagonal system by the Thomas algorithm.
///
/// `sub` and `sup` are the sub- and super-diagonals (length `n - 1`),
/// `main` the main diagonal and `rhs` the right-hand side (length `n`).
/// `main` and `rhs` are consumed by the elimination.
pub fn solve_tridiagonal<T: Float>(
    sub: &[T],
    main: &mut [T],
    sup: &[T],
    rhs: &mut [T],
) -> Result<Vec<T>, SplineError> {
    let n = main.len();
    if n == 0 {
        return Err(SplineError::SingularMatrix { row: 0 });
    }
    debug_assert_eq!(sub.len(), n - 1);
    debug_assert_eq!(sup.len(), n - 1);
    debug_assert_eq!(rhs.len(), n);

    // Forward elimination of the sub-diagonal.
    for i in 0..n - 1 {
        if main[i] == T::zero() {
            return Err(SplineError::SingularMatrix { row: i });
        }
        let m = sub[i] / main[i];
        main[i + 1] = main[i + 1] - m * sup[i];
        rhs[i + 1] = rhs[i + 1] - m * rhs[i];
    }
    if main[n - 1] == T::zero() {
        return Err(SplineError::SingularMatrix { row: n - 1 });
    }

    // Back-substitution.
    let mut x = vec![T::zero(); n];
    x[n - 1] = rhs[n - 1] / main[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = (rhs[i] - sup[i] * x[i + 1]) / main[i];
    }

    Ok(x)
}

// ============================================================================
// Pentadiagonal Solver
// ============================================================================

/// Solve a pentadiagonal system by two-sweep forward elimination.
///
/// Diagonals below the main are `sub2` (length `n - 2`) and `sub1`
/// (length `n - 1`); diagonals above are `sup1` and `sup2` with matching
/// lengths. For the symmetric systems produced by spline fitting, pass
/// copies of the upper diagonals as the lower ones. `sub1`, `main`,
/// `sup1`, and `rhs` are consumed by the elimination.
pub fn solve_pentadiagonal<T: Float>(
    sub2: &[T],
    sub1: &mut [T],
    main: &mut [T],
    sup1: &mut [T],
    sup2: &[T],
    rhs: &mut [T],
) -> Result<Vec<T>, SplineError> {
    let n = main.len();
    if n == 0 {
        return Err(SplineError::SingularMatrix { row: 0 });
    }
    debug_assert_eq!(sub1.len(), n.saturating_sub(1));
    debug_assert_eq!(sub2.len(), n.saturating_sub(2));
    debug_assert_eq!(sup1.len(), n.saturating_sub(1));
    debug_assert_eq!(sup2.len(), n.saturating_sub(2));
    debug_assert_eq!(rhs.len(), n);

    if n == 1 {
        if main[0] == T::zero() {
            return Err(SplineError::SingularMatrix { row: 0 });
        }
        return Ok(vec![rhs[0] / main[0]]);
    }

    // First sweep: eliminate both sub-diagonals of rows i+1 and i+2.
    for i in 0..n - 2 {
        if main[i] == T::zero() {
            return Err(SplineError::SingularMatrix { row: i });
        }
        let m1 = sub1[i] / main[i];
        let m2 = sub2[i] / main[i];

        main[i + 1] = main[i + 1] - m1 * sup1[i];
        sup1[i + 1] = sup1[i + 1] - m1 * sup2[i];
        sub1[i + 1] = sub1[i + 1] - m2 * sup1[i];
        main[i + 2] = main[i + 2] - m2 * sup2[i];
        rhs[i + 1] = rhs[i + 1] - m1 * rhs[i];
        rhs[i + 2] = rhs[i + 2] - m2 * rhs[i];
    }

    // Final 2x2 elimination between the last two rows.
    if main[n - 2] == T::zero() {
        return Err(SplineError::SingularMatrix { row: n - 2 });
    }
    let m3 = sub1[n - 2] / main[n - 2];
    main[n - 1] = main[n - 1] - m3 * sup1[n - 2];
    rhs[n - 1] = rhs[n - 1] - m3 * rhs[n - 2];
    if main[n - 1] == T::zero() {
        return Err(SplineError::SingularMatrix { row: n - 1 });
    }

    // Back-substitution using the two already-solved neighbors.
    let mut x = vec![T::zero(); n];
    x[n - 1] = rhs[n - 1] / main[n - 1];
    x[n - 2] = (rhs[n - 2] - sup1[n - 2] * x[n - 1]) / main[n - 2];
    for i in (0..n - 2).rev() {
        x[i] = (rhs[i] - sup1[i] * x[i + 1] - sup2[i] * x[i + 2]) / main[i];
    }

    Ok(x)
}
