//! High-level API for credible intervals on raw columns
//!
//! These functions take the sample locations and densities as plain slices
//! and a confidence given as a percentage, which is how tabulated PDFs are
//! usually handled. For repeated use on `SampledPdf` values, construct
//! [`InterQuantileRange`] or [`HighestPosteriorDensity`] directly.

use crate::hpd::HighestPosteriorDensity;
use crate::iqr::InterQuantileRange;
use crate::types::HpdResult;
use pdf_core::{PdfEstimator, Result};

/// Inter-quantile range of a tabulated PDF
///
/// # Arguments
/// * `x` - Strictly increasing sample locations
/// * `p` - Non-negative densities aligned to `x`; need not be normalised
/// * `confidence_percent` - Confidence in `(0, 100)`, e.g. `68.0`
///
/// # Returns
/// `(lower, upper)` where the normalised CDF reaches `0.5 ∓ c/2`.
///
/// # Example
/// ```rust
/// use pdf_interval::compute_iqr;
///
/// let x = [0.0, 10.0];
/// let p = [1.0, 1.0];
/// let (lower, upper) = compute_iqr(&x, &p, 50.0).unwrap();
/// assert!((lower - 2.5).abs() < 1e-12);
/// assert!((upper - 7.5).abs() < 1e-12);
/// ```
pub fn compute_iqr(x: &[f64], p: &[f64], confidence_percent: f64) -> Result<(f64, f64)> {
    InterQuantileRange::from_percent(confidence_percent)?
        .estimate_columns(x, p)
        .map(|ci| ci.bounds())
}

/// Highest posterior density region of a tabulated PDF
///
/// # Arguments
/// * `x` - Strictly increasing, evenly spaced sample locations
/// * `p` - Non-negative densities aligned to `x`; need not be normalised
/// * `confidence_percent` - Confidence in `(0, 100]`, e.g. `95.0`
///
/// # Returns
/// The overall bounds plus the contiguous clusters of retained samples.
pub fn compute_hpd(x: &[f64], p: &[f64], confidence_percent: f64) -> Result<HpdResult> {
    HighestPosteriorDensity::from_percent(confidence_percent)?.estimate_columns(x, p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_core::Error;

    #[test]
    fn test_compute_iqr_rejects_mismatched_columns() {
        let err = compute_iqr(&[0.0, 1.0, 2.0], &[1.0, 1.0], 50.0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_compute_hpd_two_clusters() {
        let x: Vec<f64> = (0..8).map(f64::from).collect();
        let p = [0.0, 2.0, 2.0, 0.0, 0.0, 2.0, 2.0, 0.0];
        let hpd = compute_hpd(&x, &p, 100.0).unwrap();

        assert_eq!(hpd.x_clusters(), vec![&[1.0, 2.0][..], &[5.0, 6.0][..]]);
        assert_eq!(hpd.bounds(), (1.0, 6.0));
    }

    #[test]
    fn test_compute_hpd_rejects_bad_percent() {
        let x = [0.0, 1.0];
        let p = [1.0, 1.0];
        assert!(matches!(compute_hpd(&x, &p, 0.0), Err(Error::Domain(_))));
        assert!(matches!(compute_hpd(&x, &p, 100.5), Err(Error::Domain(_))));
    }
}
