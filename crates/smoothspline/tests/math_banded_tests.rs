#![cfg(feature = "dev")]
//! Tests for the banded linear solvers.
//!
//! These tests verify the tridiagonal and pentadiagonal solvers against
//! systems with known solutions, degenerate sizes, and singular pivots.
//!
//! ## Test Organization
//!
//! 1. **Tridiagonal** - Known systems, tiny sizes, singularity
//! 2. **Pentadiagonal** - Known systems, tiny sizes, singularity
//! 3. **Cross-checks** - Pentadiagonal degenerating to tridiagonal

use approx::assert_relative_eq;

use smoothspline::internals::math::banded::{solve_pentadiagonal, solve_tridiagonal};
use smoothspline::internals::primitives::errors::SplineError;

// ============================================================================
// Tridiagonal Tests
// ============================================================================

/// Test a symmetric 3x3 system with a hand-computed solution.
#[test]
fn test_tridiagonal_known_system() {
    let sub = [1.0, 1.0];
    let mut main = [2.0, 2.0, 2.0];
    let sup = [1.0, 1.0];
    let mut rhs = [4.0, 8.0, 8.0];

    let x = solve_tridiagonal(&sub, &mut main, &sup, &mut rhs).unwrap();

    assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    assert_relative_eq!(x[2], 3.0, epsilon = 1e-12);
}

/// Test a non-symmetric 4x4 system built from a known solution vector.
#[test]
fn test_tridiagonal_non_symmetric() {
    let sub = [1.0, 1.0, 1.0];
    let mut main = [2.0, 2.0, 2.0, 2.0];
    let sup = [0.5, 0.5, 0.5];
    // A * [1, 1, 1, 1]
    let mut rhs = [2.5, 3.5, 3.5, 3.0];

    let x = solve_tridiagonal(&sub, &mut main, &sup, &mut rhs).unwrap();

    for xi in x {
        assert_relative_eq!(xi, 1.0, epsilon = 1e-12);
    }
}

/// Test the 1x1 system.
#[test]
fn test_tridiagonal_single_equation() {
    let x = solve_tridiagonal::<f64>(&[], &mut [2.0], &[], &mut [4.0]).unwrap();
    assert_relative_eq!(x[0], 2.0, epsilon = 1e-12);
}

/// Test that a zero pivot reports the offending row.
#[test]
fn test_tridiagonal_singular_pivot() {
    let err = solve_tridiagonal(&[1.0], &mut [0.0, 2.0], &[1.0], &mut [1.0, 1.0]).unwrap_err();
    assert_eq!(err, SplineError::SingularMatrix { row: 0 });
}

/// Test that an empty system is reported as singular.
#[test]
fn test_tridiagonal_empty_system() {
    let err = solve_tridiagonal::<f64>(&[], &mut [], &[], &mut []).unwrap_err();
    assert_eq!(err, SplineError::SingularMatrix { row: 0 });
}

// ============================================================================
// Pentadiagonal Tests
// ============================================================================

/// Test a symmetric 5x5 system built from the solution [1, 2, 3, 4, 5].
#[test]
fn test_pentadiagonal_known_system() {
    let sup2 = [0.5, 0.5, 0.5];
    let mut sub1 = [1.0, 1.0, 1.0, 1.0];
    let mut main = [4.0, 4.0, 4.0, 4.0, 4.0];
    let mut sup1 = [1.0, 1.0, 1.0, 1.0];
    let mut rhs = [7.5, 14.0, 21.0, 25.0, 25.5];

    let x = solve_pentadiagonal(&sup2, &mut sub1, &mut main, &mut sup1, &sup2, &mut rhs).unwrap();

    for (i, xi) in x.iter().enumerate() {
        assert_relative_eq!(*xi, (i + 1) as f64, epsilon = 1e-12);
    }
}

/// Test the 1x1 and 2x2 systems.
#[test]
fn test_pentadiagonal_tiny_systems() {
    let x = solve_pentadiagonal::<f64>(&[], &mut [], &mut [10.0], &mut [], &[], &mut [5.0]).unwrap();
    assert_relative_eq!(x[0], 0.5, epsilon = 1e-12);

    // [[2, 1], [1, 2]] * [1, 2] = [4, 5]
    let x = solve_pentadiagonal::<f64>(
        &[],
        &mut [1.0],
        &mut [2.0, 2.0],
        &mut [1.0],
        &[],
        &mut [4.0, 5.0],
    )
    .unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
}

/// Test that a zero pivot reports the offending row.
#[test]
fn test_pentadiagonal_singular_pivot() {
    let sup2 = [0.0];
    let mut sub1 = [1.0, 1.0];
    let mut main = [0.0, 2.0, 2.0];
    let mut sup1 = [1.0, 1.0];
    let mut rhs = [1.0, 1.0, 1.0];

    let err = solve_pentadiagonal(&sup2, &mut sub1, &mut main, &mut sup1, &sup2, &mut rhs)
        .unwrap_err();
    assert_eq!(err, SplineError::SingularMatrix { row: 0 });
}

// ============================================================================
// Cross-check Tests
// ============================================================================

/// Test that with zero second diagonals the pentadiagonal solver matches
/// the tridiagonal solver on the same system.
#[test]
fn test_pentadiagonal_degenerates_to_tridiagonal() {
    let sub = [1.0, 1.0, 1.0];
    let sup = [0.5, 0.5, 0.5];
    let main = [3.0, 3.0, 3.0, 3.0];
    let rhs = [1.0, -2.0, 0.5, 4.0];

    let mut tri_main = main;
    let mut tri_rhs = rhs;
    let tri = solve_tridiagonal(&sub, &mut tri_main, &sup, &mut tri_rhs).unwrap();

    let zeros = [0.0, 0.0];
    let mut sub1 = sub;
    let mut penta_main = main;
    let mut sup1 = sup;
    let mut penta_rhs = rhs;
    let penta = solve_pentadiagonal(
        &zeros,
        &mut sub1,
        &mut penta_main,
        &mut sup1,
        &zeros,
        &mut penta_rhs,
    )
    .unwrap();

    for (a, b) in tri.iter().zip(penta.iter()) {
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }
}
