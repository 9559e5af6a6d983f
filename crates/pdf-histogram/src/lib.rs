//! Conversion of sample arrays to sampled PDFs
//!
//! Monte Carlo draws of a quantity (an age model, an offset) are turned
//! into a [`SampledPdf`] on a fixed step, either by a histogram (stable on
//! short intervals) or by a Gaussian kernel density estimate (inherently
//! smoother). Either result can be smoothed further with a short
//! convolution kernel to suppress undersampling artefacts.
//!
//! # Examples
//!
//! ## Histogram
//!
//! ```rust
//! use pdf_histogram::{HistogramPdfBuilder, PdfBuilder, SmoothingKernel};
//!
//! let ages = vec![9.8, 10.1, 10.0, 10.4, 9.9, 10.2, 10.0, 10.3];
//! let pdf = HistogramPdfBuilder::new(0.1)
//!     .with_smoothing(SmoothingKernel::Mean(3))
//!     .build(&ages)
//!     .unwrap();
//!
//! assert!((pdf.area() - 1.0).abs() < 1e-9);
//! assert_eq!(pdf.p()[0], 0.0);
//! ```
//!
//! ## Kernel density estimate
//!
//! ```rust
//! use pdf_histogram::kde_pdf;
//!
//! let offsets = vec![4.1, 4.4, 4.5, 4.9, 5.0, 5.2, 5.6];
//! let pdf = kde_pdf(&offsets, 0.05).unwrap();
//! assert!(pdf.support().0 <= 4.1);
//! ```

pub mod builders;
pub mod smoothing;
pub mod summary;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{HistogramPdfBuilder, KdePdfBuilder, MAX_OUTPUT_POINTS};
pub use pdf_core::{Result, SampledPdf};
pub use smoothing::SmoothingKernel;
pub use summary::SampleSummary;
pub use traits::PdfBuilder;
pub use types::{Histogram, HistogramBin};

// Convenience functions
/// Build a histogram PDF with bins of width `step`
pub fn histogram_pdf(samples: &[f64], step: f64) -> Result<SampledPdf> {
    HistogramPdfBuilder::new(step).build(samples)
}

/// Build a kernel density PDF sampled every `step`
pub fn kde_pdf(samples: &[f64], step: f64) -> Result<SampledPdf> {
    KdePdfBuilder::new(step).build(samples)
}
