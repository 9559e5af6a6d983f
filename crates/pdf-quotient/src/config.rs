//! Configuration of the quotient axis

use pdf_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of intervals on the quotient axis when no step is given
pub const DEFAULT_AXIS_INTERVALS: usize = 1000;

/// Upper bound on the number of quotient axis points
pub const DEFAULT_MAX_AXIS_POINTS: usize = 1_000_000;

/// Parameters of a quotient computation
///
/// All fields are optional refinements: the default configuration spans the
/// full support `[min(X)/max(Y), max(X)/min(Y)]` in
/// [`DEFAULT_AXIS_INTERVALS`] steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotientConfig {
    /// Spacing of the quotient axis, in numerator units per denominator unit
    pub step_size: Option<f64>,
    /// Largest quotient to evaluate; the axis stops at the smaller of this
    /// and the natural maximum
    pub max_quotient: Option<f64>,
    /// Refuse axes longer than this
    pub max_axis_points: usize,
}

impl Default for QuotientConfig {
    fn default() -> Self {
        Self {
            step_size: None,
            max_quotient: None,
            max_axis_points: DEFAULT_MAX_AXIS_POINTS,
        }
    }
}

impl QuotientConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quotient axis spacing
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = Some(step_size);
        self
    }

    /// Caps the quotient axis
    pub fn with_max_quotient(mut self, max_quotient: f64) -> Self {
        self.max_quotient = Some(max_quotient);
        self
    }

    /// Sets the largest permitted axis length
    pub fn with_max_axis_points(mut self, max_axis_points: usize) -> Self {
        self.max_axis_points = max_axis_points;
        self
    }

    /// Check the parameters that do not depend on the inputs
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] for a non-positive or non-finite step or
    /// cap, or an axis limit below two points.
    pub fn validate(&self) -> Result<()> {
        if let Some(step) = self.step_size {
            if !(step > 0.0) || !step.is_finite() {
                return Err(Error::InvalidParameter(format!(
                    "quotient step size must be positive and finite, got {step}"
                )));
            }
        }
        if let Some(cap) = self.max_quotient {
            if !(cap > 0.0) || !cap.is_finite() {
                return Err(Error::InvalidParameter(format!(
                    "maximum quotient must be positive and finite, got {cap}"
                )));
            }
        }
        if self.max_axis_points < 2 {
            return Err(Error::InvalidParameter(format!(
                "quotient axis needs at least 2 points, limit is {}",
                self.max_axis_points
            )));
        }
        Ok(())
    }
}
