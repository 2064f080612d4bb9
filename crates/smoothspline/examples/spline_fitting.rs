//! smoothspline Fitting Examples
//!
//! This example demonstrates the core fitting workflow:
//! - Pure interpolation (smoothing 0)
//! - Noise suppression with a positive smoothing parameter
//! - Per-point penalty weights
//! - Unsorted input canonicalization

use smoothspline::prelude::*;

fn main() -> Result<(), SplineError> {
    println!("{}", "=".repeat(80));
    println!("smoothspline Fitting Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_pure_interpolation()?;
    example_2_noise_suppression()?;
    example_3_penalty_weights()?;
    example_4_unsorted_input()?;

    Ok(())
}

/// Example 1: Pure Interpolation
/// Demonstrates the default smoothing parameter (0), which reproduces
/// every sample exactly
fn example_1_pure_interpolation() -> Result<(), SplineError> {
    println!("Example 1: Pure Interpolation");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..=10).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| (0.5 * xi).sin()).collect();

    let model = SmoothingSpline::new()
        .smoothing(0.0) // pure interpolation (also the default)
        .build()?;
    let fit = model.fit(&x, &y)?;

    println!("       X     sample      fitted");
    println!("  {}", "-".repeat(32));
    for (xi, yi) in x.iter().zip(y.iter()).take(5) {
        println!("  {:6.2}  {:9.5}  {:9.5}", xi, yi, fit.value_at(*xi));
    }
    println!("  ... ({} more rows)", x.len() - 5);

    // Between samples the cubic gives a smooth curve, not a polyline.
    println!("  fitted value at x = 2.5: {:.5}", fit.value_at(2.5));

    println!();
    Ok(())
}

/// Example 2: Noise Suppression
/// Demonstrates how a positive smoothing parameter trades pointwise
/// fidelity for a calmer curve
fn example_2_noise_suppression() -> Result<(), SplineError> {
    println!("Example 2: Noise Suppression");
    println!("{}", "-".repeat(80));

    // A clean trend with deterministic "noise" on top.
    let x: Vec<f64> = (0..=20).map(|i| 0.5 * i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (0.4 * xi).sin() + if i % 2 == 0 { 0.08 } else { -0.08 })
        .collect();

    for smoothing in [0.0, 0.05, 0.5] {
        let fit = SmoothingSpline::new().smoothing(smoothing).build()?.fit(&x, &y)?;

        // Mean absolute deviation from the samples grows with smoothing.
        let mad: f64 = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| (fit.value_at(xi) - yi).abs())
            .sum::<f64>()
            / x.len() as f64;
        println!("  smoothing = {:4.2}: mean |fit - sample| = {:.5}", smoothing, mad);
    }

    println!();
    Ok(())
}

/// Example 3: Penalty Weights
/// Demonstrates pinning individual samples with zero weights while the
/// rest of the trace is smoothed
fn example_3_penalty_weights() -> Result<(), SplineError> {
    println!("Example 3: Penalty Weights");
    println!("{}", "-".repeat(80));

    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![0.0, 1.0, 0.0, 1.0, 0.0];

    // Weight 0 pins the middle sample; its neighbors stay smoothable.
    let w = vec![1.0, 1.0, 0.0, 1.0, 1.0];

    let fit = SmoothingSpline::new()
        .smoothing(1.0)
        .weights(w)
        .build()?
        .fit(&x, &y)?;

    println!("  pinned sample    : fit(2.0) = {:9.5} (sample 0.0)", fit.value_at(2.0));
    println!("  smoothed neighbor: fit(1.0) = {:9.5} (sample 1.0)", fit.value_at(1.0));

    println!();
    Ok(())
}

/// Example 4: Unsorted Input
/// Demonstrates that samples are canonicalized by x before fitting
fn example_4_unsorted_input() -> Result<(), SplineError> {
    println!("Example 4: Unsorted Input");
    println!("{}", "-".repeat(80));

    // Same trace, scrambled acquisition order.
    let x = vec![3.0, 1.0, 2.0, 0.0];
    let y = vec![9.0, 1.0, 4.0, 0.0];

    let fit = SmoothingSpline::new().build()?.fit(&x, &y)?;

    println!("  breakpoints after canonicalization: {:?}", fit.polynomial().breaks());
    println!("  fit(1.5) = {:.5}", fit.value_at(1.5));

    println!();
    Ok(())
}
