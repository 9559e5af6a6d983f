//! Smoothing of undersampled densities
//!
//! A histogram or KDE built from few samples can be ragged. Convolving it
//! with a short kernel removes single-bin noise. The output keeps the
//! length of the input ("same" mode) and its end samples are reset to
//! zero so the PDF still tapers to nothing at the edges of its support.

use pdf_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Window widths beyond this many standard deviations carry no weight
const GAUSSIAN_WINDOW_SIGMAS: f64 = 6.0;

/// Convolution kernel applied to a density before normalisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "width", rename_all = "lowercase")]
pub enum SmoothingKernel {
    /// Moving mean over `width` samples
    Mean(usize),
    /// Gaussian window spanning `width` samples, with a standard deviation of
    /// one sixth of the window
    Gaussian(usize),
}

impl SmoothingKernel {
    /// Width of the kernel in samples
    pub fn width(&self) -> usize {
        match *self {
            Self::Mean(width) | Self::Gaussian(width) => width,
        }
    }

    /// Check the kernel width
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] for a zero width.
    pub fn validate(&self) -> Result<()> {
        if self.width() == 0 {
            return Err(Error::InvalidParameter(format!(
                "{self} kernel width must be at least 1"
            )));
        }
        Ok(())
    }

    /// Kernel weights, normalised to unit sum
    pub fn weights(&self) -> Vec<f64> {
        let raw: Vec<f64> = match *self {
            Self::Mean(width) => vec![1.0; width],
            Self::Gaussian(width) => {
                let centre = (width as f64 - 1.0) / 2.0;
                let sigma = width as f64 / GAUSSIAN_WINDOW_SIGMAS;
                (0..width)
                    .map(|i| (-0.5 * ((i as f64 - centre) / sigma).powi(2)).exp())
                    .collect()
            }
        };
        let total: f64 = raw.iter().sum();
        raw.into_iter().map(|w| w / total).collect()
    }

    /// Convolve `density` with the kernel, keeping its length, and zero the ends
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] for a zero-width kernel.
    pub fn apply(&self, density: &[f64]) -> Result<Vec<f64>> {
        self.validate()?;
        let mut smoothed = convolve_same(density, &self.weights());
        if let Some(first) = smoothed.first_mut() {
            *first = 0.0;
        }
        if let Some(last) = smoothed.last_mut() {
            *last = 0.0;
        }
        Ok(smoothed)
    }
}

impl fmt::Display for SmoothingKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mean(width) => write!(f, "mean({width})"),
            Self::Gaussian(width) => write!(f, "gaussian({width})"),
        }
    }
}

/// Parse a kernel type name with the default width of 2
impl FromStr for SmoothingKernel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mean" => Ok(Self::Mean(2)),
            "gauss" | "gaussian" => Ok(Self::Gaussian(2)),
            other => Err(Error::InvalidParameter(format!(
                "unknown smoothing kernel '{other}' (expected mean or gaussian)"
            ))),
        }
    }
}

/// Discrete convolution trimmed to the length of `signal`
///
/// The window starts `(k - 1) / 2` samples into the full convolution, which
/// centres odd kernels and shifts even ones half a sample to the left.
fn convolve_same(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let offset = kernel.len().saturating_sub(1) / 2;
    (0..signal.len())
        .map(|i| {
            let k = i + offset;
            kernel
                .iter()
                .enumerate()
                .filter(|&(j, _)| j <= k && k - j < signal.len())
                .map(|(j, w)| w * signal[k - j])
                .sum()
        })
        .collect()
}
