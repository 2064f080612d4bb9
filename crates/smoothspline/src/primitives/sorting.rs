//! Sorting utilities for raw sample data.
//!
//! ## Purpose
//!
//! This module provides utilities for canonicalizing sample buffers by
//! x-coordinate: computing the sorted index permutation, then applying it
//! in place to the parallel x/y/weight buffers.
//!
//! ## Design notes
//!
//! * **Stability**: Uses a stable sort so equal x-values keep their relative
//!   order and can be reported deterministically as duplicates downstream.
//! * **In-place**: The permutation is realized with lock-step swaps and a
//!   visited bitmap, so the reorder costs O(n) extra space beyond the
//!   O(n log n) index sort.
//!
//! ## Key concepts
//!
//! ### Sort-Apply Pattern
//! 1. **Sort**: An index vector is sorted by x, producing the permutation.
//! 2. **Apply**: The permutation is walked cycle by cycle, swapping the
//!    parallel buffers into sorted order.
//!
//! ## Invariants
//!
//! * The permutation is a valid permutation of `0..n`.
//! * After application, x is non-decreasing (strictness is checked by the
//!   validator, not here).
//!
//! ## Non-goals
//!
//! * This module does not perform data validation or spline fitting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Compute the permutation that sorts `x` in ascending order.
///
/// 1. Checks if data is already sorted (fast path, identity permutation).
/// 2. Sorts an index vector keyed by the x-values.
///    - Only indices move during the sort; the data buffers stay put until
///      [`apply_permutation`] walks the cycles.
///
/// `order[sorted_pos]` is the original position of the `sorted_pos`-th
/// smallest x-value.
#[inline]
pub fn sort_permutation<T: Float>(x: &[T]) -> Vec<usize> {
    let n = x.len();

    // Fast path: already sorted by x
    if x.windows(2).all(|w| w[0] <= w[1]) {
        return (0..n).collect();
    }

    let mut order: Vec<usize> = (0..n).collect();

    // Stable sort to preserve order of equal x values for determinism
    order.sort_by(|&i, &j| x[i].partial_cmp(&x[j]).unwrap_or(Ordering::Equal));

    order
}

/// Apply a sort permutation to parallel x/y/weight buffers in place.
///
/// Walks each permutation cycle once, swapping all three buffers in
/// lock-step. The visited bitmap guarantees every element moves at most
/// once, so the reorder itself is O(n).
pub fn apply_permutation<T: Float>(order: &[usize], x: &mut [T], y: &mut [T], w: &mut [T]) {
    let n = order.len();
    let mut visited = vec![false; n];

    for start in 0..n {
        let mut i = start;
        while !visited[i] {
            visited[i] = true;
            let j = order[i];
            if visited[j] {
                break;
            }
            x.swap(i, j);
            y.swap(i, j);
            w.swap(i, j);
            i = j;
        }
    }
}
