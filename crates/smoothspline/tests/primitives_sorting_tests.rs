#![cfg(feature = "dev")]
//! Tests for the permutation sorting utilities.
//!
//! These tests verify the canonicalization machinery used before fitting:
//! - Computing the sort permutation over x-coordinates
//! - Applying it in place to parallel x/y/weight buffers
//! - Stability for equal x-values
//!
//! ## Test Organization
//!
//! 1. **Permutation Computation** - Unsorted, sorted, and reversed inputs
//! 2. **Permutation Application** - Lock-step reordering of three buffers
//! 3. **Stability** - Equal x-values keep their relative order
//! 4. **Edge Cases** - Single-element and cycle-heavy inputs

use smoothspline::internals::primitives::sorting::{apply_permutation, sort_permutation};

// ============================================================================
// Permutation Computation Tests
// ============================================================================

/// Test that the permutation maps sorted positions to original indices.
#[test]
fn test_permutation_basic() {
    let x = [3.0, 1.0, 4.0, 2.0];
    let order = sort_permutation(&x);
    assert_eq!(order, vec![1, 3, 0, 2]);
}

/// Test that already-sorted data takes the identity fast path.
#[test]
fn test_permutation_already_sorted() {
    let x = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(sort_permutation(&x), vec![0, 1, 2, 3]);
}

/// Test a fully reversed input.
#[test]
fn test_permutation_reversed() {
    let x = [4.0, 3.0, 2.0, 1.0];
    assert_eq!(sort_permutation(&x), vec![3, 2, 1, 0]);
}

// ============================================================================
// Permutation Application Tests
// ============================================================================

/// Test that all three buffers are reordered in lock-step.
#[test]
fn test_apply_reorders_all_buffers() {
    let mut x = [3.0, 1.0, 2.0];
    let mut y = [9.0, 1.0, 4.0];
    let mut w = [0.3, 0.1, 0.2];

    let order = sort_permutation(&x);
    apply_permutation(&order, &mut x, &mut y, &mut w);

    assert_eq!(x, [1.0, 2.0, 3.0]);
    assert_eq!(y, [1.0, 4.0, 9.0]);
    assert_eq!(w, [0.1, 0.2, 0.3]);
}

/// Test a permutation made of several disjoint swap cycles.
#[test]
fn test_apply_disjoint_cycles() {
    let mut x = [2.0, 1.0, 4.0, 3.0];
    let mut y = [20.0, 10.0, 40.0, 30.0];
    let mut w = [1.0, 1.0, 1.0, 1.0];

    let order = sort_permutation(&x);
    apply_permutation(&order, &mut x, &mut y, &mut w);

    assert_eq!(x, [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(y, [10.0, 20.0, 30.0, 40.0]);
}

/// Test a long rotation cycle: every element lands one slot over.
#[test]
fn test_apply_long_cycle() {
    let mut x = [2.0, 3.0, 4.0, 5.0, 1.0];
    let mut y = [20.0, 30.0, 40.0, 50.0, 10.0];
    let mut w = [0.2, 0.3, 0.4, 0.5, 0.1];

    let order = sort_permutation(&x);
    apply_permutation(&order, &mut x, &mut y, &mut w);

    assert_eq!(x, [1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(y, [10.0, 20.0, 30.0, 40.0, 50.0]);
    assert_eq!(w, [0.1, 0.2, 0.3, 0.4, 0.5]);
}

// ============================================================================
// Stability Tests
// ============================================================================

/// Test that equal x-values keep their original relative order, so the
/// duplicate report downstream is deterministic.
#[test]
fn test_stable_for_equal_x() {
    let x = [2.0, 1.0, 2.0, 1.0];
    let order = sort_permutation(&x);

    // The two 1.0s keep original order (1 before 3), likewise the 2.0s.
    assert_eq!(order, vec![1, 3, 0, 2]);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that a single element is a no-op.
#[test]
fn test_single_element() {
    let mut x = [5.0];
    let mut y = [25.0];
    let mut w = [1.0];

    let order = sort_permutation(&x);
    assert_eq!(order, vec![0]);

    apply_permutation(&order, &mut x, &mut y, &mut w);
    assert_eq!(x, [5.0]);
    assert_eq!(y, [25.0]);
}
