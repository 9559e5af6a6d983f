//! Result type of a quotient computation

use pdf_core::SampledPdf;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quotient PDF together with the axis it was evaluated on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotientResult {
    /// Unit-area density over `[q_min, q_max]`
    pub pdf: SampledPdf,
    /// First axis value, `min(X) / max(Y)`
    pub q_min: f64,
    /// Requested end of the axis, `max(X) / min(Y)` or the cap if smaller
    pub q_max: f64,
    /// Axis spacing
    pub step: f64,
    /// Numerator samples left after dropping non-positive values and densities
    pub numerator_samples: usize,
    /// Denominator samples left after dropping non-positive values and densities
    pub denominator_samples: usize,
}

impl QuotientResult {
    /// Number of points on the quotient axis
    pub fn axis_len(&self) -> usize {
        self.pdf.len()
    }

    /// Consume the result, keeping only the PDF
    pub fn into_pdf(self) -> SampledPdf {
        self.pdf
    }
}

impl fmt::Display for QuotientResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "quotient min {:.6}, max {:.6}, step {:.6}, len {}",
            self.q_min,
            self.q_max,
            self.step,
            self.axis_len()
        )
    }
}
