//! Inter-quantile range (IQR) credible intervals
//!
//! The interval excludes equal probability from both tails: its bounds are
//! where the CDF reaches `0.5 - c/2` and `0.5 + c/2`. Stable, but for a
//! skewed PDF it is not the narrowest interval holding mass `c`.

use crate::traits::CredibleIntervalEstimator;
use crate::types::{ConfidenceLevel, CredibleInterval};
use pdf_core::interp::invert_monotone;
use pdf_core::{Error, PdfEstimator, Result, SampledPdf};
use tracing::{debug, instrument};

/// Inter-quantile range estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterQuantileRange {
    level: ConfidenceLevel,
}

impl InterQuantileRange {
    /// Create an estimator for the given confidence level
    pub fn new(level: ConfidenceLevel) -> Self {
        Self { level }
    }

    /// Create an estimator from a confidence percentage, e.g. `68.0`
    pub fn from_percent(percent: f64) -> Result<Self> {
        Ok(Self::new(ConfidenceLevel::from_percent(percent)?))
    }

    /// Cumulative probabilities of the lower and upper bound
    pub fn targets(&self) -> (f64, f64) {
        let half = self.level.value() / 2.0;
        (0.5 - half, 0.5 + half)
    }
}

impl PdfEstimator for InterQuantileRange {
    type Output = CredibleInterval;

    #[instrument(skip_all, fields(confidence = %self.level, samples = pdf.len()))]
    fn estimate(&self, pdf: &SampledPdf) -> Result<CredibleInterval> {
        if self.level.is_full() {
            return Err(Error::Domain(
                "inter-quantile range requires a confidence below 100%".to_string(),
            ));
        }

        let pdf = pdf.normalized()?;
        let cdf = pdf.cdf();
        let (lower_target, upper_target) = self.targets();

        let lower = invert(&cdf, pdf.x(), lower_target)?;
        let upper = invert(&cdf, pdf.x(), upper_target)?;
        let median = invert(&cdf, pdf.x(), 0.5)?;

        debug!("Lower value: {:.6}; Upper value: {:.6}", lower, upper);
        Ok(CredibleInterval::new(lower, upper, median, self.level))
    }

    fn name(&self) -> &'static str {
        "Inter-quantile range"
    }
}

impl CredibleIntervalEstimator for InterQuantileRange {
    fn confidence_level(&self) -> ConfidenceLevel {
        self.level
    }

    fn bounds(&self, pdf: &SampledPdf) -> Result<(f64, f64)> {
        self.estimate(pdf).map(|ci| ci.bounds())
    }
}

/// Value at which the normalised CDF of `pdf` reaches `probability`
///
/// # Errors
/// [`Error::Domain`] if `probability` is outside `[0, 1]` or the CDF never
/// reaches it.
pub fn quantile(pdf: &SampledPdf, probability: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(Error::Domain(format!(
            "quantile probability {probability} must be in [0, 1]"
        )));
    }
    let pdf = pdf.normalized()?;
    invert(&pdf.cdf(), pdf.x(), probability)
}

fn invert(cdf: &[f64], x: &[f64], target: f64) -> Result<f64> {
    invert_monotone(cdf, x, target).ok_or_else(|| {
        let last = cdf.last().copied().unwrap_or(0.0);
        Error::Domain(format!(
            "cumulative probability {target} outside the CDF range [0, {last}]"
        ))
    })
}
