//! Bracketed zero finding by bisection.
//!
//! ## Purpose
//!
//! This module locates a zero of a scalar function inside a bracketing
//! interval, used by peak extraction to pin down the x-position of a
//! derivative sign change.
//!
//! ## Design notes
//!
//! * **Single-zero assumption**: The function is assumed monotone (or to
//!   have a single sign change) on the bracket. A bracket with multiple
//!   sign changes silently yields a boundary-adjacent answer rather than
//!   an error; this is an accepted approximation of the method, not a
//!   defect to repair by changing semantics.
//! * **Linear convergence**: One bit of precision per iteration; cheap and
//!   unconditionally stable for a correct bracket.
//!
//! ## Invariants
//!
//! * The returned point lies inside the closed input interval.
//! * For a correctly bracketed monotone zero the result satisfies
//!   `|f(x)| < eps`, unless the bracket collapses to machine resolution
//!   first.

// External dependencies
use num_traits::Float;

// ============================================================================
// Bisection
// ============================================================================

/// Find an `x` in `[a, b]` with `|f(x)| < eps`.
///
/// # Policy
///
/// * If `f(a)` and `f(b)` share a sign (no crossing), or both endpoint
///   magnitudes already satisfy the tolerance, the endpoint with the
///   smaller function value is returned without iterating.
/// * Otherwise the bracket is oriented so the function decreases across
///   it, then bisected: the midpoint replaces whichever end shares the
///   sign of its function value.
/// * If the bracket shrinks to machine resolution before the tolerance is
///   met, the midpoint is returned as-is.
pub fn find_zero<T, F>(f: F, a: T, b: T, eps: T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let fa = f(a);
    let fb = f(b);

    if fa * fb > T::zero() || (fa.abs() < eps && fb.abs() < eps) {
        return if fa <= fb { a } else { b };
    }

    // Orient the bracket so f(lo) >= 0 >= f(hi).
    let (mut lo, mut hi) = if fa < fb { (b, a) } else { (a, b) };

    let half = T::from(0.5).unwrap();
    loop {
        let mid = (lo + hi) * half;
        let fm = f(mid);
        if fm.abs() < eps {
            return mid;
        }
        if mid == lo || mid == hi {
            // Bracket exhausted at machine resolution.
            return mid;
        }
        if fm < T::zero() {
            hi = mid;
        } else {
            lo = mid;
        }
    }
}
