//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use pdf_core::SampledPdf;

pub const EPSILON: f64 = 1e-10;

/// Evenly spaced axis of `n` samples starting at `start`
pub fn even_axis(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Unnormalised Gaussian bump on an even axis
pub fn gaussian_bump(mean: f64, std_dev: f64, start: f64, step: f64, n: usize) -> SampledPdf {
    let x = even_axis(start, step, n);
    let p = x
        .iter()
        .map(|v| (-0.5 * ((v - mean) / std_dev).powi(2)).exp())
        .collect();
    SampledPdf::new(x, p).expect("valid test PDF")
}

/// Densities exercising degenerate shapes: spikes, plateaus, zero runs
pub fn awkward_densities() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 1.0],
        vec![1.0, 0.0, 0.0, 1.0],
        vec![0.0, 0.0, 5.0, 0.0, 0.0],
        vec![1.0; 16],
        vec![1e-300, 1e-300, 1e-300],
        vec![1e300, 1.0, 1e300],
    ]
}
