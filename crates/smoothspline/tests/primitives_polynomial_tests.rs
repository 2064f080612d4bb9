//! Tests for piecewise polynomial evaluation and differentiation.
//!
//! These tests exercise the polynomial surface reachable from a fitted
//! spline: Horner evaluation, bulk evaluation, clamped extrapolation, and
//! the differentiation chain down to degree underflow.
//!
//! ## Test Organization
//!
//! 1. **Differentiation Chain** - Degrees 3 → 2 → 1 → 0 → underflow
//! 2. **Derivative Accuracy** - Agreement with finite differences
//! 3. **Natural Boundaries** - Vanishing curvature at the domain ends
//! 4. **Evaluation** - Bulk evaluation and extrapolation clamping

use approx::assert_relative_eq;

use smoothspline::prelude::*;

fn fitted_polynomial(x: &[f64], y: &[f64]) -> PiecewisePolynomial<f64> {
    SmoothingSpline::new()
        .build()
        .unwrap()
        .fit(x, y)
        .unwrap()
        .polynomial()
        .clone()
}

// ============================================================================
// Differentiation Chain Tests
// ============================================================================

/// Test that each differentiation lowers the degree by one over unchanged
/// breakpoints, and degree 0 refuses to differentiate further.
#[test]
fn test_differentiation_chain() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 0.0, 1.0];

    let poly = fitted_polynomial(&x, &y);
    assert_eq!(poly.degree(), 3);

    let d1 = poly.differentiate().unwrap();
    assert_eq!(d1.degree(), 2);
    assert_eq!(d1.breaks(), poly.breaks());

    let d2 = d1.differentiate().unwrap();
    assert_eq!(d2.degree(), 1);

    let d3 = d2.differentiate().unwrap();
    assert_eq!(d3.degree(), 0);

    assert_eq!(d3.differentiate().unwrap_err(), SplineError::DegreeUnderflow);
}

/// Test that differentiating a linear fit yields the exact constant slope.
#[test]
fn test_derivative_of_linear_data_is_constant() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi).collect();

    let d1 = fitted_polynomial(&x, &y).differentiate().unwrap();

    for &probe in &[0.0, 0.4, 1.9, 3.5, 4.0] {
        assert_relative_eq!(d1.value_at(probe), 2.0, epsilon = 1e-10);
    }
}

// ============================================================================
// Derivative Accuracy Tests
// ============================================================================

/// Test that the analytic derivative matches a central finite-difference
/// estimate of the fitted curve.
#[test]
fn test_derivative_matches_finite_difference() {
    let x: Vec<f64> = (0..=10).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| (0.6 * xi).sin()).collect();

    let poly = fitted_polynomial(&x, &y);
    let d1 = poly.differentiate().unwrap();

    let h = 1e-5;
    for &probe in &[0.5, 1.37, 4.2, 7.77, 9.5] {
        let estimate = (poly.value_at(probe + h) - poly.value_at(probe - h)) / (2.0 * h);
        assert_relative_eq!(d1.value_at(probe), estimate, epsilon = 1e-4);
    }
}

// ============================================================================
// Natural Boundary Tests
// ============================================================================

/// Test that the second derivative vanishes at both domain ends.
#[test]
fn test_natural_boundary_curvature() {
    let x: Vec<f64> = (0..=8).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| (0.9 * xi).cos()).collect();

    let d2 = fitted_polynomial(&x, &y)
        .differentiate()
        .unwrap()
        .differentiate()
        .unwrap();

    assert_relative_eq!(d2.value_at(0.0), 0.0, epsilon = 1e-9);
    assert_relative_eq!(d2.value_at(8.0), 0.0, epsilon = 1e-9);
}

// ============================================================================
// Evaluation Tests
// ============================================================================

/// Test that bulk evaluation matches scalar evaluation point for point,
/// preserving length and order with no sorting requirement on queries.
#[test]
fn test_bulk_evaluation_matches_scalar() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [1.0, 3.0, 2.0, 5.0, 4.0];

    let poly = fitted_polynomial(&x, &y);
    let probes = [2.5, 0.1, 3.99, 1.0, -0.5, 4.5];
    let bulk = poly.values(&probes);

    assert_eq!(bulk.len(), probes.len());
    for (probe, value) in probes.iter().zip(bulk.iter()) {
        assert_eq!(poly.value_at(*probe), *value);
    }
}

/// Test that out-of-domain queries extrapolate with the boundary
/// polynomial: approaching the domain from outside is continuous.
#[test]
fn test_extrapolation_uses_boundary_polynomial() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 4.0, 9.0];

    let poly = fitted_polynomial(&x, &y);

    assert!((poly.value_at(-1e-9) - poly.value_at(0.0)).abs() < 1e-6);
    assert!((poly.value_at(3.0 + 1e-9) - poly.value_at(3.0)).abs() < 1e-6);

    // Far outside, the boundary cubic keeps producing finite values.
    assert!(poly.value_at(-5.0).is_finite());
    assert!(poly.value_at(50.0).is_finite());
}
