//! Error types for sampled-PDF analysis
//!
//! Provides a unified error type for all slip-pdf crates.

use thiserror::Error;

/// Core error type for PDF operations
#[derive(Error, Debug)]
pub enum Error {
    /// A value lies outside the mathematical domain of the operation
    ///
    /// Raised for confidence levels outside their range, cumulative targets
    /// the CDF never reaches, empty supports and degenerate axes.
    #[error("Domain error: {0}")]
    Domain(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Malformed row in a two-column PDF table
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires a non-empty input"))
    }

    /// Create an error for a confidence fraction outside its valid range
    pub fn invalid_confidence(fraction: f64) -> Self {
        Self::Domain(format!("Confidence {fraction} must be in (0, 1]"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a PDF whose area cannot be normalised
    pub fn zero_mass(area: f64) -> Self {
        Self::Domain(format!(
            "PDF has no usable probability mass (trapezoidal area {area})"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Domain("confidence 1.5 out of range".to_string());
        assert_eq!(err.to_string(), "Domain error: confidence 1.5 out of range");

        let err = Error::InvalidParameter("step size must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: step size must be positive");

        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 samples, got 1"
        );

        let err = Error::Parse { line: 3, message: "expected 2 columns".to_string() };
        assert_eq!(err.to_string(), "Parse error on line 3: expected 2 columns");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::invalid_confidence(1.5);
        assert!(matches!(err, Error::Domain(_)));
        assert_eq!(err.to_string(), "Domain error: Confidence 1.5 must be in (0, 1]");

        let err = Error::size_mismatch(100, 50, "probability vector");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in probability vector: expected 100, got 50"
        );

        let err = Error::non_finite("sample locations");
        assert!(err.to_string().contains("NaN or infinite"));

        let err = Error::zero_mass(0.0);
        assert!(matches!(err, Error::Domain(_)));
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("file not found")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("custom error message"));
    }
}
