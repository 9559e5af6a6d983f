//! Histogram and kernel density builders
//!
//! Both builders sample the output on a fixed step starting at the smallest
//! value and extending one step past the largest, log the raw sample
//! statistics, optionally smooth, and normalise to unit area.

use crate::smoothing::SmoothingKernel;
use crate::summary::SampleSummary;
use crate::traits::PdfBuilder;
use crate::types::Histogram;
use pdf_core::numeric::arange;
use pdf_core::{Error, Result, SampledPdf};
use statrs::distribution::{Continuous, Normal};
use tracing::{debug, instrument};

/// Largest number of output samples a builder will allocate
pub const MAX_OUTPUT_POINTS: usize = 10_000_000;

/// Histogram builder with a fixed bin width
///
/// Bins of width `step` run from the smallest sample upward; the last bin
/// is closed on the right. The PDF is sampled at bin centres and padded with
/// a zero at the outer edge on each side, so it starts and ends at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramPdfBuilder {
    step: f64,
    smoothing: Option<SmoothingKernel>,
}

impl HistogramPdfBuilder {
    /// Create a builder with the given bin width
    pub fn new(step: f64) -> Self {
        Self {
            step,
            smoothing: None,
        }
    }

    /// Smooth the bin counts before normalising
    pub fn with_smoothing(mut self, kernel: SmoothingKernel) -> Self {
        self.smoothing = Some(kernel);
        self
    }

    /// Get the smoothing kernel, if any
    pub fn smoothing(&self) -> Option<SmoothingKernel> {
        self.smoothing
    }

    /// Count the samples into bins of width `step`
    pub fn histogram(&self, samples: &[f64]) -> Result<Histogram> {
        let (sorted, summary) = prepare(samples, self.step)?;
        let edges = output_axis(&summary, self.step)?;
        Ok(Histogram::from_edges(&edges, &sorted))
    }
}

impl PdfBuilder for HistogramPdfBuilder {
    #[instrument(skip_all, fields(samples = samples.len(), step = self.step))]
    fn build(&self, samples: &[f64]) -> Result<SampledPdf> {
        let histogram = self.histogram(samples)?;
        let edges = histogram.edges();

        // Taper: zero-count samples at the outer edges.
        let mut x = Vec::with_capacity(histogram.len() + 2);
        let mut p = Vec::with_capacity(histogram.len() + 2);
        x.push(edges[0]);
        p.push(0.0);
        for bin in histogram.bins() {
            x.push(bin.center());
            p.push(bin.count as f64);
        }
        x.push(edges[edges.len() - 1]);
        p.push(0.0);

        let p = smooth(p, self.smoothing)?;
        SampledPdf::new(x, p)?.normalized()
    }

    fn step(&self) -> f64 {
        self.step
    }

    fn name(&self) -> &'static str {
        "Histogram"
    }
}

/// Gaussian kernel density builder
///
/// The bandwidth follows Scott's rule, `σ̂ · n^(-1/5)` with `σ̂` the sample
/// standard deviation. The density is evaluated on an axis of spacing
/// `step` and forced to zero at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KdePdfBuilder {
    step: f64,
    smoothing: Option<SmoothingKernel>,
}

impl KdePdfBuilder {
    /// Create a builder sampling the density every `step`
    pub fn new(step: f64) -> Self {
        Self {
            step,
            smoothing: None,
        }
    }

    /// Smooth the evaluated density before normalising
    pub fn with_smoothing(mut self, kernel: SmoothingKernel) -> Self {
        self.smoothing = Some(kernel);
        self
    }

    /// Get the smoothing kernel, if any
    pub fn smoothing(&self) -> Option<SmoothingKernel> {
        self.smoothing
    }

    /// Scott's rule bandwidth for a sample
    pub fn bandwidth(summary: &SampleSummary) -> f64 {
        summary.std_dev * (summary.count as f64).powf(-0.2)
    }
}

impl PdfBuilder for KdePdfBuilder {
    #[instrument(skip_all, fields(samples = samples.len(), step = self.step))]
    fn build(&self, samples: &[f64]) -> Result<SampledPdf> {
        let (sorted, summary) = prepare(samples, self.step)?;
        let x = output_axis(&summary, self.step)?;

        let bandwidth = Self::bandwidth(&summary);
        debug!(bandwidth, "Scott's rule bandwidth");
        let kernel =
            Normal::new(0.0, bandwidth).map_err(|e| Error::Domain(format!("KDE bandwidth: {e}")))?;

        let n = sorted.len() as f64;
        let mut p: Vec<f64> = x
            .iter()
            .map(|&t| sorted.iter().map(|&v| kernel.pdf(t - v)).sum::<f64>() / n)
            .collect();
        let last = p.len() - 1;
        p[0] = 0.0;
        p[last] = 0.0;

        let p = smooth(p, self.smoothing)?;
        SampledPdf::new(x, p)?.normalized()
    }

    fn step(&self) -> f64 {
        self.step
    }

    fn name(&self) -> &'static str {
        "Kernel density"
    }
}

/// Validate the inputs, log the raw statistics and sort the sample
fn prepare(samples: &[f64], step: f64) -> Result<(Vec<f64>, SampleSummary)> {
    if !(step > 0.0) || !step.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "step must be positive and finite, got {step}"
        )));
    }

    let summary = SampleSummary::new(samples)?;
    debug!("Raw statistics: {summary}");

    if !(summary.range() > 0.0) {
        return Err(Error::Domain(format!(
            "samples span no range (all values are {})",
            summary.min
        )));
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok((sorted, summary))
}

/// Axis from the smallest sample to one step past the largest
fn output_axis(summary: &SampleSummary, step: f64) -> Result<Vec<f64>> {
    let points = ((summary.range() + step) / step).ceil();
    if points > MAX_OUTPUT_POINTS as f64 {
        return Err(Error::InvalidParameter(format!(
            "step {step} over a range of {} gives {points} samples, limit is {MAX_OUTPUT_POINTS}",
            summary.range()
        )));
    }
    Ok(arange(summary.min, summary.max + step, step))
}

fn smooth(p: Vec<f64>, kernel: Option<SmoothingKernel>) -> Result<Vec<f64>> {
    match kernel {
        Some(kernel) => {
            debug!("Applying smoothing kernel: {kernel}");
            kernel.apply(&p)
        }
        None => Ok(p),
    }
}
