//! Highest posterior density (HPD) credible regions
//!
//! Samples are ranked by density and accumulated from the highest down
//! until the requested share of the summed densities is reached. The
//! retained samples, put back in x order, form one or more clusters: the
//! narrowest region(s) holding that mass, which may be disjoint for a
//! multimodal PDF.
//!
//! Summing densities instead of integrating them assumes the samples are
//! evenly spaced. Irregular spacing is reported with a warning but does not
//! stop the computation.
//!
//! The running sum is divided by its own maximum rather than by the unit
//! area of the normalised PDF, so the retained fraction is relative to the
//! summed densities of all samples.

use crate::cluster::ClusterDetector;
use crate::traits::CredibleIntervalEstimator;
use crate::types::{ConfidenceLevel, HpdResult};
use pdf_core::utils::{argsort_descending, cumsum};
use pdf_core::{Error, PdfEstimator, Result, SampledPdf, DEFAULT_STEP_TOLERANCE};
use tracing::{debug, instrument, warn};

/// Highest posterior density estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighestPosteriorDensity {
    level: ConfidenceLevel,
    step_tolerance: f64,
}

impl HighestPosteriorDensity {
    /// Create an estimator for the given confidence level
    pub fn new(level: ConfidenceLevel) -> Self {
        Self {
            level,
            step_tolerance: DEFAULT_STEP_TOLERANCE,
        }
    }

    /// Create an estimator from a confidence percentage, e.g. `95.0`
    pub fn from_percent(percent: f64) -> Result<Self> {
        Ok(Self::new(ConfidenceLevel::from_percent(percent)?))
    }

    /// Set the multiple of the mean spacing above which a gap splits clusters
    pub fn with_step_tolerance(mut self, step_tolerance: f64) -> Self {
        self.step_tolerance = step_tolerance;
        self
    }

    /// Multiple of the mean spacing above which a gap splits clusters
    pub fn step_tolerance(&self) -> f64 {
        self.step_tolerance
    }
}

impl PdfEstimator for HighestPosteriorDensity {
    type Output = HpdResult;

    #[instrument(skip_all, fields(confidence = %self.level, samples = pdf.len()))]
    fn estimate(&self, pdf: &SampledPdf) -> Result<HpdResult> {
        if !(self.step_tolerance > 0.0) || !self.step_tolerance.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "step tolerance must be positive and finite, got {}",
                self.step_tolerance
            )));
        }

        let pdf = pdf.normalized()?;
        let spacing = pdf.spacing_report(self.step_tolerance);
        if !spacing.is_regular() {
            warn!(
                irregular_gaps = spacing.irregular_gaps,
                max_gap = spacing.max_gap,
                mean_spacing = spacing.mean_spacing,
                "Sample spacing must be approximately equal for HPD calculation"
            );
        }

        let (x, p) = (pdf.x(), pdf.p());

        // Rank from highest to lowest density and accumulate.
        let order = argsort_descending(p);
        let cumulative = cumsum(order.iter().map(|&i| p[i]));
        let peak = cumulative.iter().copied().fold(0.0, f64::max);
        if !(peak > 0.0) {
            return Err(Error::zero_mass(peak));
        }

        let confidence = self.level.value();
        let mut mass_fraction = 0.0;
        let mut retained: Vec<usize> = Vec::new();
        for (&i, &cum) in order.iter().zip(&cumulative) {
            let fraction = cum / peak;
            if fraction <= confidence && p[i] > 0.0 {
                retained.push(i);
                mass_fraction = fraction;
            }
        }

        if retained.is_empty() {
            return Err(Error::Domain(format!(
                "no samples retained at {} confidence; the densest sample alone holds {:.4} of the mass",
                self.level,
                cumulative[0] / peak
            )));
        }

        // Indices ascend with x.
        retained.sort_unstable();
        let x_retained: Vec<f64> = retained.iter().map(|&i| x[i]).collect();
        let p_retained: Vec<f64> = retained.iter().map(|&i| p[i]).collect();

        let clusters = ClusterDetector::from_report(&spacing).detect(&x_retained, &p_retained);
        let lowest = x_retained[0];
        let highest = x_retained[x_retained.len() - 1];

        debug!("Lowest value: {:.6}; Highest value: {:.6}", lowest, highest);
        debug!("Number of clusters: {}", clusters.len());

        Ok(HpdResult {
            lowest,
            highest,
            clusters,
            confidence_level: self.level,
            mass_fraction,
            spacing,
        })
    }

    fn name(&self) -> &'static str {
        "Highest posterior density"
    }
}

impl CredibleIntervalEstimator for HighestPosteriorDensity {
    fn confidence_level(&self) -> ConfidenceLevel {
        self.level
    }

    fn bounds(&self, pdf: &SampledPdf) -> Result<(f64, f64)> {
        self.estimate(pdf).map(|hpd| hpd.bounds())
    }
}
