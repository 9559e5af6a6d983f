//! Credible intervals and quotients of sampled probability density functions
//!
//! This crate re-exports the workspace crates:
//!
//! - [`pdf_core`]: the `SampledPdf` model, numerics, parametric PDFs and table I/O
//! - [`pdf_interval`]: inter-quantile and highest posterior density intervals
//! - [`pdf_quotient`]: the PDF of the ratio of two quantities
//! - [`pdf_histogram`]: conversion of sample arrays to PDFs
//!
//! # Example
//!
//! A slip rate from an offset and an age, summarised by its 95% HPD region:
//!
//! ```rust
//! use slip_pdf::prelude::*;
//!
//! let offset = Distribution::Gaussian { mean: 12.0, std_dev: 1.0 }.build(400).unwrap();
//! let age = Distribution::Uniform { min: 2.0, max: 3.0 }.build(400).unwrap();
//!
//! let rate = QuotientComputer::default().compute(&offset, &age).unwrap();
//! let region = HighestPosteriorDensity::new(ConfidenceLevel::NINETY_FIVE)
//!     .estimate(&rate.pdf)
//!     .unwrap();
//!
//! assert!(region.contains(5.0));
//! ```

pub use pdf_core;
pub use pdf_histogram;
pub use pdf_interval;
pub use pdf_quotient;

pub use pdf_core::{Error, Result, SampledPdf};
pub use pdf_interval::{compute_hpd, compute_iqr};
pub use pdf_quotient::compute_quotient;

/// Prelude module for convenient imports
pub mod prelude {
    pub use pdf_core::prelude::*;
    pub use pdf_core::{load_table, save_table};

    pub use pdf_interval::{
        ConfidenceLevel, CredibleInterval, CredibleIntervalEstimator, HighestPosteriorDensity,
        HpdResult, InterQuantileRange,
    };

    pub use pdf_quotient::{QuotientComputer, QuotientConfig, QuotientResult};

    pub use pdf_histogram::{HistogramPdfBuilder, KdePdfBuilder, PdfBuilder, SmoothingKernel};
}
