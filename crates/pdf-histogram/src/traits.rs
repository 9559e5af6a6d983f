//! Core traits for converting samples to PDFs

use pdf_core::{Result, SampledPdf};

/// Trait for building a sampled PDF from an array of values
///
/// Typical inputs are Monte Carlo draws of a quantity, e.g. an age model
/// sampled from a calibration.
pub trait PdfBuilder {
    /// Build a unit-area PDF from the given sample
    fn build(&self, samples: &[f64]) -> Result<SampledPdf>;

    /// Spacing of the output axis
    fn step(&self) -> f64;

    /// Human-readable name of the builder
    fn name(&self) -> &'static str;
}
