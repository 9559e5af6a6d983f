//! Quotient of two independent sampled PDFs
//!
//! Given PDFs for a numerator `X` (e.g. an offset) and a denominator `Y`
//! (e.g. an age), this crate computes the PDF of `Q = X / Y` (e.g. a slip
//! rate) on an evenly spaced axis. Only the positive support of both inputs
//! contributes.
//!
//! # Example
//!
//! ```rust
//! use pdf_core::Distribution;
//! use pdf_quotient::{QuotientComputer, QuotientConfig};
//!
//! let offset = Distribution::Gaussian { mean: 10.0, std_dev: 1.0 }.build(500).unwrap();
//! let age = Distribution::Uniform { min: 1.0, max: 2.0 }.build(500).unwrap();
//!
//! let computer = QuotientComputer::new(QuotientConfig::new().with_max_quotient(12.0));
//! let rate = computer.compute(&offset, &age).unwrap();
//!
//! assert!(rate.q_max <= 12.0);
//! assert!((rate.pdf.area() - 1.0).abs() < 1e-9);
//! ```
//!
//! With the `parallel` feature, [`QuotientComputer::with_engine`] accepts a
//! `ParallelEngine` that evaluates axis points on a Rayon pool.

pub mod api;
mod computer;
mod config;
mod types;

// Re-exports
pub use api::compute_quotient;
pub use computer::QuotientComputer;
pub use config::{QuotientConfig, DEFAULT_AXIS_INTERVALS, DEFAULT_MAX_AXIS_POINTS};
pub use types::QuotientResult;

/// Convenience constructor for a sequential quotient computer
pub fn quotient(config: QuotientConfig) -> QuotientComputer {
    QuotientComputer::new(config)
}
