//! Core types for sampled probability density functions
//!
//! This crate provides the shared representation used across the slip-pdf
//! workspace: a [`SampledPdf`] (strictly increasing sample locations with
//! aligned non-negative densities) together with the numerical primitives
//! every consumer needs.
//!
//! # Contents
//!
//! - [`pdf`]: the `SampledPdf` model, normalisation and spacing checks
//! - [`numeric`]: trapezoid areas, cumulative integrals, axis generation
//! - [`interp`]: linear interpolation and monotone-curve inversion
//! - [`execution`]: sequential and Rayon-backed evaluation engines
//! - [`parametric`]: Gaussian, uniform, triangular and trapezoidal PDFs
//! - [`table`]: the two-column text format
//!
//! # Example
//!
//! ```rust
//! use pdf_core::{Distribution, SampledPdf};
//!
//! let pdf = Distribution::Gaussian { mean: 5.0, std_dev: 0.3 }
//!     .build(200)
//!     .unwrap();
//! assert!((pdf.area() - 1.0).abs() < 1e-6);
//!
//! let raw = SampledPdf::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 0.0]).unwrap();
//! let unit = raw.normalized().unwrap();
//! assert_eq!(unit.p(), &[0.0, 1.0, 0.0]);
//! ```

pub mod error;
pub mod execution;
pub mod interp;
pub mod numeric;
pub mod parametric;
pub mod pdf;
pub mod table;
pub mod traits;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use interp::LinearInterpolator;
pub use parametric::{Distribution, DEFAULT_POINTS};
pub use pdf::{PdfParts, SampledPdf, SpacingReport, AREA_TOLERANCE, DEFAULT_STEP_TOLERANCE};
pub use table::{load_table, read_table, save_table, write_table};
pub use traits::PdfEstimator;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Distribution, Error, ExecutionEngine, PdfEstimator, Result, SampledPdf,
        SequentialEngine, SpacingReport,
    };

    #[cfg(feature = "parallel")]
    pub use crate::ParallelEngine;
}
