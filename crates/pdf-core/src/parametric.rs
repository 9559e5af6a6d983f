//! Parametric PDF construction
//!
//! Builds a [`SampledPdf`] from a named distribution and its defining
//! values (a Gaussian mean and standard deviation, or the corner points of
//! a uniform, triangular or trapezoidal shape) on an evenly spaced axis.

use crate::interp::piecewise_linear;
use crate::numeric::linspace;
use crate::{Error, Result, SampledPdf};
use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, Normal};
use std::fmt;
use tracing::debug;

/// Number of samples used when none is given
pub const DEFAULT_POINTS: usize = 100;

/// Half-width of the Gaussian axis, in standard deviations
const GAUSSIAN_HALF_WIDTH: f64 = 4.0;

/// A parametric distribution shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Distribution {
    /// Normal distribution, sampled over `mean ± 4 std_dev`
    Gaussian { mean: f64, std_dev: f64 },
    /// Boxcar between `min` and `max`
    Uniform { min: f64, max: f64 },
    /// Zero at `min` and `max`, peak at `mode`
    Triangular { min: f64, mode: f64, max: f64 },
    /// Ramps up over `[min, plateau_start]`, flat, then down to `max`
    Trapezoidal {
        min: f64,
        plateau_start: f64,
        plateau_end: f64,
        max: f64,
    },
}

impl Distribution {
    /// Parse a distribution from its name and defining values
    ///
    /// Names are case-insensitive: `gauss`/`gaussian`, `uniform`/`boxcar`,
    /// `tri`/`triangle`/`triangular`, `trap`/`trapezoid`/`trapezoidal`.
    /// Values of every shape but the Gaussian are sorted before use.
    pub fn from_values(name: &str, values: &[f64]) -> Result<Self> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("distribution values"));
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let dist = match name.to_ascii_lowercase().as_str() {
            "gauss" | "gaussian" => {
                expect_count("Gaussian", "the mean and standard deviation, e.g. 5.0 0.3", values, 2)?;
                Self::Gaussian {
                    mean: values[0],
                    std_dev: values[1],
                }
            }
            "uniform" | "boxcar" => {
                expect_count("Uniform", "the minimum and maximum values, e.g. 3.0 5.0", values, 2)?;
                Self::Uniform {
                    min: sorted[0],
                    max: sorted[1],
                }
            }
            "tri" | "triangle" | "triangular" => {
                expect_count(
                    "Triangular",
                    "the minimum, preferred and maximum values, e.g. 4.4 5.0 5.6",
                    values,
                    3,
                )?;
                Self::Triangular {
                    min: sorted[0],
                    mode: sorted[1],
                    max: sorted[2],
                }
            }
            "trap" | "trapezoid" | "trapezoidal" => {
                expect_count(
                    "Trapezoidal",
                    "the minimum, plateau bounds and maximum values, e.g. 4.4 4.6 5.4 5.6",
                    values,
                    4,
                )?;
                Self::Trapezoidal {
                    min: sorted[0],
                    plateau_start: sorted[1],
                    plateau_end: sorted[2],
                    max: sorted[3],
                }
            }
            other => {
                return Err(Error::InvalidParameter(format!(
                    "{other} is not a valid distribution; choose from gaussian, uniform, triangular, trapezoidal"
                )))
            }
        };
        dist.validate()?;
        Ok(dist)
    }

    /// Check that the shape has a non-zero extent
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = match *self {
            Self::Gaussian { std_dev, .. } => {
                if !(std_dev > 0.0) {
                    return Err(Error::InvalidParameter(format!(
                        "Gaussian standard deviation must be positive, got {std_dev}"
                    )));
                }
                return Ok(());
            }
            Self::Uniform { min, max } => (min, max),
            Self::Triangular { min, mode, max } => {
                check_order(&[min, mode, max])?;
                (min, max)
            }
            Self::Trapezoidal {
                min,
                plateau_start,
                plateau_end,
                max,
            } => {
                check_order(&[min, plateau_start, plateau_end, max])?;
                (min, max)
            }
        };
        if !(hi > lo) {
            return Err(Error::InvalidParameter(
                "must provide nonzero distance between the specified values".to_string(),
            ));
        }
        Ok(())
    }

    /// Sample the distribution on `n_points` evenly spaced values
    ///
    /// The result is normalised to unit trapezoidal area.
    pub fn build(&self, n_points: usize) -> Result<SampledPdf> {
        self.validate()?;
        if n_points < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: n_points,
            });
        }

        let (x, p) = match *self {
            Self::Gaussian { mean, std_dev } => {
                let normal = Normal::new(mean, std_dev)
                    .map_err(|e| Error::InvalidParameter(e.to_string()))?;
                let x = linspace(
                    mean - GAUSSIAN_HALF_WIDTH * std_dev,
                    mean + GAUSSIAN_HALF_WIDTH * std_dev,
                    n_points,
                );
                let p = x.iter().map(|&v| normal.pdf(v)).collect();
                (x, p)
            }
            Self::Uniform { min, max } => (linspace(min, max, n_points), vec![1.0; n_points]),
            Self::Triangular { min, mode, max } => {
                shaped(&[min, mode, max], &[0.0, 1.0, 0.0], n_points)
            }
            Self::Trapezoidal {
                min,
                plateau_start,
                plateau_end,
                max,
            } => shaped(
                &[min, plateau_start, plateau_end, max],
                &[0.0, 1.0, 1.0, 0.0],
                n_points,
            ),
        };

        let pdf = SampledPdf::new(x, p)?.normalized()?;
        debug!(distribution = %self, n_points, area = pdf.area(), "built parametric PDF");
        Ok(pdf)
    }

    /// Sample the distribution on [`DEFAULT_POINTS`] values
    pub fn build_default(&self) -> Result<SampledPdf> {
        self.build(DEFAULT_POINTS)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gaussian { mean, std_dev } => write!(f, "gaussian({mean}, {std_dev})"),
            Self::Uniform { min, max } => write!(f, "uniform({min}, {max})"),
            Self::Triangular { min, mode, max } => write!(f, "triangular({min}, {mode}, {max})"),
            Self::Trapezoidal {
                min,
                plateau_start,
                plateau_end,
                max,
            } => write!(f, "trapezoidal({min}, {plateau_start}, {plateau_end}, {max})"),
        }
    }
}

fn expect_count(name: &str, hint: &str, values: &[f64], count: usize) -> Result<()> {
    if values.len() != count {
        return Err(Error::InvalidParameter(format!(
            "{name} distribution requires {hint}; got {} values",
            values.len()
        )));
    }
    Ok(())
}

fn check_order(values: &[f64]) -> Result<()> {
    if values.windows(2).any(|w| w[1] < w[0]) {
        return Err(Error::InvalidParameter(format!(
            "distribution values must be ascending, got {values:?}"
        )));
    }
    Ok(())
}

fn shaped(knots: &[f64], heights: &[f64], n_points: usize) -> (Vec<f64>, Vec<f64>) {
    let x = linspace(knots[0], knots[knots.len() - 1], n_points);
    let p = x.iter().map(|&v| piecewise_linear(knots, heights, v)).collect();
    (x, p)
}
