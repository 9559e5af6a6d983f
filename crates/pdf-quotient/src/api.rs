//! High-level API for the quotient of two tabulated PDFs

use crate::computer::QuotientComputer;
use crate::config::QuotientConfig;
use pdf_core::{Result, SampledPdf};

/// PDF of the ratio of two quantities given as raw columns
///
/// # Arguments
/// * `x_numer`, `p_numer` - Numerator sample locations and densities
/// * `x_denom`, `p_denom` - Denominator sample locations and densities
/// * `step_size` - Quotient axis spacing; `None` gives 1000 intervals
/// * `max_quotient` - Optional upper limit of the quotient axis
///
/// # Example
/// ```rust
/// use pdf_quotient::compute_quotient;
///
/// // Displacement of 4 to 6 m over 1 to 2 kyr
/// let pdf = compute_quotient(&[4.0, 6.0], &[1.0, 1.0], &[1.0, 2.0], &[1.0, 1.0], None, None)
///     .unwrap();
/// let (low, high) = pdf.support();
/// assert!((low - 2.0).abs() < 1e-9);
/// assert!(high <= 6.0 + 1e-9);
/// ```
pub fn compute_quotient(
    x_numer: &[f64],
    p_numer: &[f64],
    x_denom: &[f64],
    p_denom: &[f64],
    step_size: Option<f64>,
    max_quotient: Option<f64>,
) -> Result<SampledPdf> {
    let numerator = SampledPdf::new(x_numer.to_vec(), p_numer.to_vec())?;
    let denominator = SampledPdf::new(x_denom.to_vec(), p_denom.to_vec())?;
    let config = QuotientConfig {
        step_size,
        max_quotient,
        ..QuotientConfig::default()
    };

    QuotientComputer::new(config)
        .compute(&numerator, &denominator)
        .map(|result| result.into_pdf())
}
