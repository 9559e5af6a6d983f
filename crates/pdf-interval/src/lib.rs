//! Credible intervals for sampled probability density functions
//!
//! This crate extracts credible regions from a [`SampledPdf`]:
//!
//! - **Inter-quantile range (IQR)**: equal-tailed bounds read off the CDF
//! - **Highest posterior density (HPD)**: the densest samples holding the
//!   requested mass, grouped into one or more contiguous clusters
//!
//! For a symmetric unimodal PDF both methods agree to within the sampling
//! resolution. For a skewed PDF the HPD region is narrower; for a
//! multimodal one it may be disjoint.
//!
//! # Example
//!
//! ```rust
//! use pdf_core::{Distribution, PdfEstimator};
//! use pdf_interval::{hpd, iqr, ConfidenceLevel};
//!
//! let pdf = Distribution::Gaussian { mean: 5.0, std_dev: 0.3 }
//!     .build(1000)
//!     .unwrap();
//!
//! let interval = iqr(ConfidenceLevel::ONE_SIGMA).estimate(&pdf).unwrap();
//! let region = hpd(ConfidenceLevel::ONE_SIGMA).estimate(&pdf).unwrap();
//!
//! assert_eq!(region.cluster_count(), 1);
//! assert!((interval.lower - region.lowest).abs() < 0.02);
//! assert!((interval.upper - region.highest).abs() < 0.02);
//! ```

pub mod api;
mod cluster;
mod hpd;
mod iqr;
mod traits;
mod types;

// Re-exports
pub use api::{compute_hpd, compute_iqr};
pub use cluster::ClusterDetector;
pub use hpd::HighestPosteriorDensity;
pub use iqr::{quantile, InterQuantileRange};
pub use pdf_core::{PdfEstimator, SampledPdf};
pub use traits::CredibleIntervalEstimator;
pub use types::{Cluster, ConfidenceLevel, CredibleInterval, HpdResult};

/// Convenience constructor for an inter-quantile range estimator
pub fn iqr(level: ConfidenceLevel) -> InterQuantileRange {
    InterQuantileRange::new(level)
}

/// Convenience constructor for a highest posterior density estimator
pub fn hpd(level: ConfidenceLevel) -> HighestPosteriorDensity {
    HighestPosteriorDensity::new(level)
}
