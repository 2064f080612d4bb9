//! smoothspline Peak Detection Examples
//!
//! This example demonstrates locating local maxima of a fitted trace:
//! - Peaks of a noisy bimodal signal
//! - Smoothing as a pre-filter for spurious peaks
//! - Peak positions from bulk-evaluated curves

use smoothspline::prelude::*;

fn main() -> Result<(), SplineError> {
    println!("{}", "=".repeat(80));
    println!("smoothspline Peak Detection Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_bimodal_trace()?;
    example_2_smoothing_prefilter()?;
    example_3_peak_heights()?;

    Ok(())
}

/// Example 1: Bimodal Trace
/// Demonstrates peak extraction on a two-bump signal
fn example_1_bimodal_trace() -> Result<(), SplineError> {
    println!("Example 1: Bimodal Trace");
    println!("{}", "-".repeat(80));

    // Two Gaussian-ish bumps centered at x = 2 and x = 6.
    let x: Vec<f64> = (0..=40).map(|i| 0.2 * i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| (-(xi - 2.0) * (xi - 2.0)).exp() + 0.6 * (-(xi - 6.0) * (xi - 6.0)).exp())
        .collect();

    let fit = SmoothingSpline::new().build()?.fit(&x, &y)?;
    let peaks = fit.peaks();

    println!("  found {} peaks (ascending):", peaks.len());
    for p in &peaks {
        println!("    x = {:7.4}, height = {:7.4}", p, fit.value_at(*p));
    }

    println!();
    Ok(())
}

/// Example 2: Smoothing as a Pre-Filter
/// Demonstrates how a roughness penalty removes spurious noise peaks
/// before extraction
fn example_2_smoothing_prefilter() -> Result<(), SplineError> {
    println!("Example 2: Smoothing as a Pre-Filter");
    println!("{}", "-".repeat(80));

    // One real bump plus deterministic jitter that creates false extrema
    // under pure interpolation.
    let x: Vec<f64> = (0..=30).map(|i| 0.2 * i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (-(xi - 3.0) * (xi - 3.0)).exp() + if i % 2 == 0 { 0.02 } else { -0.02 })
        .collect();

    let raw = SmoothingSpline::new().build()?.fit(&x, &y)?;
    let smoothed = SmoothingSpline::new().smoothing(1e-3).build()?.fit(&x, &y)?;

    println!("  interpolated trace: {} peaks", raw.peaks().len());
    println!("  smoothed trace    : {} peaks", smoothed.peaks().len());

    println!();
    Ok(())
}

/// Example 3: Peak Heights
/// Demonstrates combining peak locations with bulk evaluation
fn example_3_peak_heights() -> Result<(), SplineError> {
    println!("Example 3: Peak Heights");
    println!("{}", "-".repeat(80));

    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![0.0, 1.0, 0.0, 1.0, 0.0];

    let fit = SmoothingSpline::new().build()?.fit(&x, &y)?;
    let peaks = fit.peaks();
    let heights = fit.values(&peaks);

    for (p, h) in peaks.iter().zip(heights.iter()) {
        println!("  peak at x = {:6.4} with height {:6.4}", p, h);
    }

    println!();
    Ok(())
}
