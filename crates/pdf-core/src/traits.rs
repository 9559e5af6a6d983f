//! Core traits for estimation on sampled PDFs
//!
//! Algorithm-specific traits (credible intervals, sample-to-PDF builders)
//! are defined in their respective crates.

use crate::{Result, SampledPdf};

/// An estimator that summarises a sampled PDF
///
/// Implementations treat the input as read-only and re-normalise it
/// themselves, so callers may pass PDFs of any positive area.
pub trait PdfEstimator {
    /// Output type of the estimator
    type Output;

    /// Estimate the statistic from the given PDF
    fn estimate(&self, pdf: &SampledPdf) -> Result<Self::Output>;

    /// Estimate from raw `(x, p)` columns
    fn estimate_columns(&self, x: &[f64], p: &[f64]) -> Result<Self::Output> {
        let pdf = SampledPdf::new(x.to_vec(), p.to_vec())?;
        self.estimate(&pdf)
    }

    /// Human-readable name of the estimator
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Area;

    impl PdfEstimator for Area {
        type Output = f64;

        fn estimate(&self, pdf: &SampledPdf) -> Result<f64> {
            Ok(pdf.area())
        }

        fn name(&self) -> &'static str {
            "Area"
        }
    }

    #[test]
    fn test_estimate_columns_validates() {
        assert_eq!(Area.estimate_columns(&[0.0, 2.0], &[1.0, 1.0]).unwrap(), 2.0);
        assert!(Area.estimate_columns(&[0.0, 2.0], &[1.0]).is_err());
        assert_eq!(Area.name(), "Area");
    }
}
