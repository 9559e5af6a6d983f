//! Raw statistics of a sample

use pdf_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, OrderStatistics, Statistics};
use std::fmt;

/// Order statistics of a raw sample, reported before conversion to a PDF
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Number of samples
    pub count: usize,
    /// 50th percentile
    pub median: f64,
    /// Central 68.27% range
    pub one_sigma: (f64, f64),
    /// Central 95.45% range
    pub two_sigma: (f64, f64),
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
}

impl SampleSummary {
    /// Summarise a sample
    ///
    /// # Errors
    /// - [`Error::InsufficientData`] for an empty sample
    /// - [`Error::InvalidInput`] if a value is not finite
    pub fn new(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        if samples.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("samples"));
        }

        let mut data = Data::new(samples.to_vec());
        let central = |data: &mut Data<Vec<f64>>, mass: f64| {
            let half = mass / 2.0;
            (data.quantile(0.5 - half), data.quantile(0.5 + half))
        };

        Ok(Self {
            count: samples.len(),
            median: data.quantile(0.5),
            one_sigma: central(&mut data, 0.6827),
            two_sigma: central(&mut data, 0.9545),
            min: samples.min(),
            max: samples.max(),
            std_dev: if samples.len() > 1 {
                samples.std_dev()
            } else {
                0.0
            },
        })
    }

    /// Distance between the smallest and largest sample
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "median: {:.3}; 68.27% range: {:.3}-{:.3}; 95.45% range: {:.3}-{:.3}; min: {:.3}; max: {:.3}",
            self.median,
            self.one_sigma.0,
            self.one_sigma.1,
            self.two_sigma.0,
            self.two_sigma.1,
            self.min,
            self.max
        )
    }
}
