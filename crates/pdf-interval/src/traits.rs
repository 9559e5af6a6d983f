//! Core traits for credible interval estimation

use crate::types::ConfidenceLevel;
use pdf_core::{PdfEstimator, Result, SampledPdf};

/// An estimator that extracts a credible region from a sampled PDF
///
/// Both the inter-quantile and highest-posterior-density methods expose
/// their outer bounds through [`bounds`](Self::bounds), which lets the two
/// be compared on the same PDF.
pub trait CredibleIntervalEstimator: PdfEstimator {
    /// Get the confidence level
    fn confidence_level(&self) -> ConfidenceLevel;

    /// Outer `(lower, upper)` bounds of the credible region
    fn bounds(&self, pdf: &SampledPdf) -> Result<(f64, f64)>;
}
