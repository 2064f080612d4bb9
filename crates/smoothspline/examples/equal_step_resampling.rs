//! smoothspline Equal-Step Resampling Examples
//!
//! This example demonstrates the equal-step retabulation:
//! - Trading exact fidelity for O(1) interval lookup
//! - Choosing the step against the deviation it costs
//! - High-volume evaluation, as when redrawing a plot per pixel

use smoothspline::prelude::*;

fn main() -> Result<(), SplineError> {
    println!("{}", "=".repeat(80));
    println!("smoothspline Equal-Step Resampling Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_resampling()?;
    example_2_step_accuracy_tradeoff()?;
    example_3_pixel_volume_evaluation()?;

    Ok(())
}

/// Example 1: Basic Resampling
/// Demonstrates retabulating a fit on a uniform grid
fn example_1_basic_resampling() -> Result<(), SplineError> {
    println!("Example 1: Basic Resampling");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..=20).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| (0.5 * xi).sin()).collect();

    let fit = SmoothingSpline::new().build()?.fit(&x, &y)?;
    let fast = fit.resample(0.25)?;

    println!("  source breakpoints : {}", fit.polynomial().len());
    println!("  grid breakpoints   : {}", fast.polynomial().len());
    println!("  grid step          : {}", fast.step());
    println!(
        "  value at x = 7.3   : source {:.6}, resampled {:.6}",
        fit.value_at(7.3),
        fast.value_at(7.3)
    );

    println!();
    Ok(())
}

/// Example 2: Step vs Accuracy
/// Demonstrates how the retabulation error shrinks with the step
fn example_2_step_accuracy_tradeoff() -> Result<(), SplineError> {
    println!("Example 2: Step vs Accuracy");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..=20).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| (0.5 * xi).sin()).collect();
    let fit = SmoothingSpline::new().build()?.fit(&x, &y)?;

    let probes: Vec<f64> = (0..2000).map(|i| 0.01 * i as f64).collect();
    let reference = fit.values(&probes);

    for step in [1.0, 0.5, 0.1, 0.05] {
        let fast = fit.resample(step)?;
        let worst = fast
            .values(&probes)
            .iter()
            .zip(reference.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f64, f64::max);
        println!("  step = {:4.2}: worst deviation = {:.2e}", step, worst);
    }

    println!();
    Ok(())
}

/// Example 3: High-Volume Evaluation
/// Demonstrates the intended use: evaluating the curve once per pixel
fn example_3_pixel_volume_evaluation() -> Result<(), SplineError> {
    println!("Example 3: High-Volume Evaluation");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..=200).map(|i| 0.1 * i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| (0.7 * xi).sin() + (0.013 * xi).cos()).collect();

    let fit = SmoothingSpline::new().smoothing(1e-4).build()?.fit(&x, &y)?;
    let fast = fit.resample(0.01)?;

    // One query per pixel column of a wide plot.
    let width = 3840;
    let (min, max) = fit.domain();
    let pixels: Vec<f64> = (0..width)
        .map(|px| min + (max - min) * px as f64 / (width - 1) as f64)
        .collect();

    let curve = fast.values(&pixels);
    println!("  evaluated {} pixel columns with O(1) interval lookup", curve.len());
    println!("  first/last values: {:.5} / {:.5}", curve[0], curve[width - 1]);

    // Peaks survive the retabulation.
    println!("  peaks on the resampled curve: {}", fast.peaks().len());

    println!();
    Ok(())
}
