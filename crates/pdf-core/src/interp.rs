//! Piecewise-linear interpolation
//!
//! Forward interpolation of a sampled curve (with a constant fill outside
//! its support) and inversion of a monotone cumulative curve.

use crate::{Error, Result};

/// Linear interpolator over ascending knots
///
/// Evaluation outside `[x[0], x[n-1]]` returns the fill value instead of
/// extrapolating. Each evaluation is `O(log n)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    fill: f64,
}

impl LinearInterpolator {
    /// Create an interpolator with a fill value of zero
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::size_mismatch(x.len(), y.len(), "interpolation knots"));
        }
        if x.is_empty() {
            return Err(Error::empty_input("interpolation"));
        }
        if x.windows(2).any(|w| !(w[1] >= w[0])) {
            return Err(Error::InvalidInput(
                "interpolation knots must be ascending".to_string(),
            ));
        }
        Ok(Self { x, y, fill: 0.0 })
    }

    /// Value returned outside the knot range
    pub fn with_fill(mut self, fill: f64) -> Self {
        self.fill = fill;
        self
    }

    /// Lower and upper knot
    pub fn bounds(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Evaluate the interpolant at `t`
    pub fn eval(&self, t: f64) -> f64 {
        let (lo, hi) = self.bounds();
        if t.is_nan() || t < lo || t > hi {
            return self.fill;
        }

        // Number of knots <= t; at least one because t >= lo.
        let i = self.x.partition_point(|&v| v <= t) - 1;
        if i + 1 >= self.x.len() {
            return self.y[i];
        }

        let (x0, x1) = (self.x[i], self.x[i + 1]);
        let (y0, y1) = (self.y[i], self.y[i + 1]);
        if x1 == x0 {
            return y0;
        }
        y0 + (t - x0) * (y1 - y0) / (x1 - x0)
    }
}

/// Invert a non-decreasing curve by linear interpolation
///
/// Returns the `x` at which `cumulative` first reaches `target`. Flat
/// stretches (zero-density plateaus of a CDF) resolve to their first
/// crossing. `None` when `target` lies outside the curve's range.
pub fn invert_monotone(cumulative: &[f64], x: &[f64], target: f64) -> Option<f64> {
    let n = cumulative.len().min(x.len());
    if n == 0 || target.is_nan() {
        return None;
    }
    if target < cumulative[0] || target > cumulative[n - 1] {
        return None;
    }

    let j = cumulative[..n].iter().position(|&c| c >= target)?;
    if j == 0 {
        return Some(x[0]);
    }

    let (c0, c1) = (cumulative[j - 1], cumulative[j]);
    let frac = (target - c0) / (c1 - c0);
    Some(x[j - 1] + frac * (x[j] - x[j - 1]))
}

/// Evaluate a piecewise-linear shape given by sorted `knots` and `heights`
///
/// Zero-width segments (repeated knots) describe vertical edges and are
/// skipped; outside the knot range the shape is zero.
pub fn piecewise_linear(knots: &[f64], heights: &[f64], t: f64) -> f64 {
    knots
        .windows(2)
        .zip(heights.windows(2))
        .find(|(k, _)| k[1] > k[0] && t >= k[0] && t <= k[1])
        .map(|(k, h)| h[0] + (t - k[0]) * (h[1] - h[0]) / (k[1] - k[0]))
        .unwrap_or(0.0)
}
