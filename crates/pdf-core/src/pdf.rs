//! The sampled probability density function
//!
//! A [`SampledPdf`] is the shared representation consumed and produced by
//! every component of the workspace: two aligned sequences, strictly
//! increasing sample locations `x` and non-negative densities `p`.
//!
//! Instances are immutable. Normalisation returns a new value, so a PDF
//! handed to an estimator is never modified by it.

use crate::numeric::{cumtrapz, mean_step, trapz};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Factor of the mean sample spacing above which a gap counts as irregular
pub const DEFAULT_STEP_TOLERANCE: f64 = 1.01;

/// Tolerance used when checking that a PDF integrates to one
pub const AREA_TOLERANCE: f64 = 1e-6;

/// A discretely sampled probability density function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PdfParts", into = "PdfParts")]
pub struct SampledPdf {
    x: Vec<f64>,
    p: Vec<f64>,
}

/// Unvalidated `(x, p)` columns, the serialised form of a [`SampledPdf`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfParts {
    pub x: Vec<f64>,
    pub p: Vec<f64>,
}

impl SampledPdf {
    /// Create a PDF from sample locations and densities
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] if the lengths differ, a value is not finite,
    ///   `x` is not strictly increasing or a density is negative
    /// - [`Error::InsufficientData`] for fewer than two samples
    pub fn new(x: Vec<f64>, p: Vec<f64>) -> Result<Self> {
        if x.len() != p.len() {
            return Err(Error::size_mismatch(x.len(), p.len(), "sampled PDF"));
        }
        if x.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: x.len(),
            });
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("sample locations"));
        }
        if p.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("densities"));
        }
        if let Some(i) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(Error::InvalidInput(format!(
                "sample locations must be strictly increasing (x[{}] = {} >= x[{}] = {})",
                i,
                x[i],
                i + 1,
                x[i + 1]
            )));
        }
        if let Some(i) = p.iter().position(|&v| v < 0.0) {
            return Err(Error::InvalidInput(format!(
                "densities must be non-negative (p[{i}] = {})",
                p[i]
            )));
        }
        Ok(Self { x, p })
    }

    /// Create a PDF from `(value, density)` pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (x, p) = pairs.into_iter().unzip();
        Self::new(x, p)
    }

    /// Sample locations
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Densities aligned to [`x`](Self::x)
    pub fn p(&self) -> &[f64] {
        &self.p
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the PDF holds no samples
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, p)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.p.iter().copied())
    }

    /// First and last sample location
    pub fn support(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Trapezoidal area under the curve
    pub fn area(&self) -> f64 {
        trapz(&self.p, &self.x)
    }

    /// Whether the area equals one within [`AREA_TOLERANCE`]
    pub fn is_normalized(&self) -> bool {
        (self.area() - 1.0).abs() <= AREA_TOLERANCE
    }

    /// A copy rescaled to unit trapezoidal area
    ///
    /// # Errors
    /// [`Error::Domain`] when the area is zero or not finite.
    pub fn normalized(&self) -> Result<Self> {
        let area = self.area();
        if !(area > 0.0) || !area.is_finite() {
            return Err(Error::zero_mass(area));
        }
        Ok(Self {
            x: self.x.clone(),
            p: self.p.iter().map(|v| v / area).collect(),
        })
    }

    /// Cumulative trapezoidal integral, anchored at zero
    ///
    /// Computed on the densities as given; normalise first for a CDF that
    /// ends at one.
    pub fn cdf(&self) -> Vec<f64> {
        cumtrapz(&self.p, &self.x)
    }

    /// Mean distance between consecutive samples
    pub fn mean_spacing(&self) -> f64 {
        // Two or more samples are guaranteed by construction.
        mean_step(&self.x).unwrap_or(0.0)
    }

    /// Check the approximate even-spacing precondition
    ///
    /// A gap counts as irregular when it exceeds `tolerance` times the mean
    /// spacing.
    pub fn spacing_report(&self, tolerance: f64) -> SpacingReport {
        let mean_spacing = self.mean_spacing();
        let limit = tolerance * mean_spacing;
        let (irregular_gaps, max_gap) = self.x.windows(2).map(|w| w[1] - w[0]).fold(
            (0usize, 0.0f64),
            |(count, max), gap| (count + usize::from(gap > limit), max.max(gap)),
        );
        SpacingReport {
            mean_spacing,
            tolerance,
            irregular_gaps,
            max_gap,
        }
    }

    /// Consume the PDF, returning `(x, p)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.p)
    }
}

impl TryFrom<PdfParts> for SampledPdf {
    type Error = Error;

    fn try_from(parts: PdfParts) -> Result<Self> {
        Self::new(parts.x, parts.p)
    }
}

impl From<SampledPdf> for PdfParts {
    fn from(pdf: SampledPdf) -> Self {
        let (x, p) = pdf.into_parts();
        Self { x, p }
    }
}

impl fmt::Display for SampledPdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = self.support();
        write!(
            f,
            "SampledPdf({} samples, support=[{:.6}, {:.6}], area={:.6})",
            self.len(),
            lo,
            hi,
            self.area()
        )
    }
}

/// Outcome of the even-spacing check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingReport {
    /// Mean distance between consecutive samples
    pub mean_spacing: f64,
    /// Multiple of the mean spacing tolerated before a gap is flagged
    pub tolerance: f64,
    /// Number of gaps wider than `tolerance * mean_spacing`
    pub irregular_gaps: usize,
    /// Widest gap between consecutive samples
    pub max_gap: f64,
}

impl SpacingReport {
    /// True when no gap exceeds the tolerance
    pub fn is_regular(&self) -> bool {
        self.irregular_gaps == 0
    }

    /// Largest gap still treated as contiguous
    pub fn gap_limit(&self) -> f64 {
        self.tolerance * self.mean_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> SampledPdf {
        SampledPdf::new(vec![0.0, 1.0, 2.0], vec![0.0, 4.0, 0.0]).unwrap()
    }

    #[test]
    fn test_new_validates_shape() {
        assert!(matches!(
            SampledPdf::new(vec![0.0, 1.0], vec![1.0]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            SampledPdf::new(vec![0.0], vec![1.0]),
            Err(Error::InsufficientData { expected: 2, actual: 1 })
        ));
        assert!(SampledPdf::new(vec![0.0, 0.0], vec![1.0, 1.0]).is_err());
        assert!(SampledPdf::new(vec![1.0, 0.0], vec![1.0, 1.0]).is_err());
        assert!(SampledPdf::new(vec![0.0, 1.0], vec![1.0, -0.1]).is_err());
        assert!(SampledPdf::new(vec![0.0, f64::NAN], vec![1.0, 1.0]).is_err());
        assert!(SampledPdf::new(vec![0.0, 1.0], vec![f64::INFINITY, 1.0]).is_err());
    }

    #[test]
    fn test_len_and_is_empty() {
        let pdf = triangle();
        assert_eq!(pdf.len(), 3);
        assert!(!pdf.is_empty());
    }

    #[test]
    fn test_normalized_returns_new_pdf() {
        let pdf = triangle();
        assert_relative_eq!(pdf.area(), 4.0);

        let norm = pdf.normalized().unwrap();
        assert_relative_eq!(norm.area(), 1.0);
        assert!(norm.is_normalized());
        assert_eq!(pdf.p(), &[0.0, 4.0, 0.0]);
        assert_eq!(norm.p(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_normalized_zero_mass() {
        let pdf = SampledPdf::new(vec![0.0, 1.0], vec![0.0, 0.0]).unwrap();
        assert!(matches!(pdf.normalized(), Err(Error::Domain(_))));
    }

    #[test]
    fn test_cdf_of_normalized_ends_at_one() {
        let cdf = triangle().normalized().unwrap().cdf();
        assert_eq!(cdf[0], 0.0);
        assert_relative_eq!(cdf[1], 0.5);
        assert_relative_eq!(cdf[2], 1.0);
    }

    #[test]
    fn test_spacing_report() {
        let even = SampledPdf::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0; 4]).unwrap();
        let report = even.spacing_report(DEFAULT_STEP_TOLERANCE);
        assert!(report.is_regular());
        assert_relative_eq!(report.mean_spacing, 1.0);

        let gapped = SampledPdf::new(vec![0.0, 1.0, 2.0, 5.0], vec![1.0; 4]).unwrap();
        let report = gapped.spacing_report(DEFAULT_STEP_TOLERANCE);
        assert!(!report.is_regular());
        assert_eq!(report.irregular_gaps, 1);
        assert_relative_eq!(report.max_gap, 3.0);
        assert_relative_eq!(report.gap_limit(), 5.0 / 3.0 * 1.01);
    }

    #[test]
    fn test_from_pairs_and_iter() {
        let pdf = SampledPdf::from_pairs(vec![(1.0, 0.5), (2.0, 0.5)]).unwrap();
        let pairs: Vec<_> = pdf.iter().collect();
        assert_eq!(pairs, vec![(1.0, 0.5), (2.0, 0.5)]);
        assert_eq!(pdf.support(), (1.0, 2.0));
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let pdf = triangle();
        let json = serde_json::to_string(&pdf).unwrap();
        let back: SampledPdf = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pdf);

        let bad = r#"{"x":[1.0,0.0],"p":[1.0,1.0]}"#;
        assert!(serde_json::from_str::<SampledPdf>(bad).is_err());
    }

    #[test]
    fn test_display() {
        let text = triangle().to_string();
        assert!(text.contains("3 samples"));
        assert!(text.contains("area=4.000000"));
    }
}
