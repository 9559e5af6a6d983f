//! Common types for credible intervals

use pdf_core::numeric::trapz;
use pdf_core::{Error, Result, SpacingReport};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inter-quantile credible interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CredibleInterval {
    /// Lower bound, where the CDF equals `0.5 - c/2`
    pub lower: f64,
    /// Upper bound, where the CDF equals `0.5 + c/2`
    pub upper: f64,
    /// The 50th percentile the interval is centred on
    pub median: f64,
    /// Probability mass between the bounds
    pub confidence_level: ConfidenceLevel,
}

impl CredibleInterval {
    /// Create a new credible interval
    pub fn new(lower: f64, upper: f64, median: f64, confidence_level: ConfidenceLevel) -> Self {
        Self {
            lower,
            upper,
            median,
            confidence_level,
        }
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &CredibleInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// `(lower, upper)`
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl fmt::Display for CredibleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} IQR: [{:.6}, {:.6}], median: {:.6}",
            self.confidence_level, self.lower, self.upper, self.median
        )
    }
}

/// Confidence level type with validation
///
/// Holds a fraction in `(0, 1]`. A level of exactly one is accepted so the
/// HPD method can return the full positive-density support; the IQR method
/// rejects it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level from a fraction
    ///
    /// # Errors
    /// [`Error::Domain`] if `level` is not in `(0, 1]`.
    pub fn new(level: f64) -> Result<Self> {
        if level > 0.0 && level <= 1.0 {
            Ok(Self(level))
        } else {
            Err(Error::invalid_confidence(level))
        }
    }

    /// Create a confidence level from a percentage, e.g. `95.0`
    pub fn from_percent(percent: f64) -> Result<Self> {
        Self::new(percent / 100.0)
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The level as a percentage
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Whether the level covers the whole distribution
    pub fn is_full(&self) -> bool {
        self.0 >= 1.0
    }

    /// Mass within one standard deviation of a Gaussian mean
    pub const ONE_SIGMA: Self = Self(0.6827);
    /// Mass within two standard deviations of a Gaussian mean
    pub const TWO_SIGMA: Self = Self(0.9545);
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
    pub const FULL: Self = Self(1.0);
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> f64 {
        level.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.percent())
    }
}

/// A contiguous run of retained high-density samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Sample locations, ascending
    pub x: Vec<f64>,
    /// Densities aligned to `x`
    pub p: Vec<f64>,
}

impl Cluster {
    /// Create a cluster from aligned slices
    pub fn new(x: Vec<f64>, p: Vec<f64>) -> Self {
        Self { x, p }
    }

    /// Number of samples in the cluster
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the cluster holds no samples
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Smallest sample location
    pub fn lower(&self) -> f64 {
        self.x.first().copied().unwrap_or(f64::NAN)
    }

    /// Largest sample location
    pub fn upper(&self) -> f64 {
        self.x.last().copied().unwrap_or(f64::NAN)
    }

    /// Distance between the first and last sample
    pub fn width(&self) -> f64 {
        if self.x.is_empty() {
            0.0
        } else {
            self.upper() - self.lower()
        }
    }

    /// Trapezoidal mass under the cluster; zero for a single sample
    pub fn mass(&self) -> f64 {
        trapz(&self.p, &self.x)
    }

    /// Check if a value lies between the first and last sample
    pub fn contains(&self, value: f64) -> bool {
        !self.x.is_empty() && value >= self.lower() && value <= self.upper()
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.6}, {:.6}] ({} samples)",
            self.lower(),
            self.upper(),
            self.len()
        )
    }
}

/// Result of a highest-posterior-density estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HpdResult {
    /// Smallest retained sample location
    pub lowest: f64,
    /// Largest retained sample location
    pub highest: f64,
    /// Disjoint, x-ascending runs of retained samples
    pub clusters: Vec<Cluster>,
    /// Requested confidence
    pub confidence_level: ConfidenceLevel,
    /// Retained share of the summed densities, in the method's own normalisation
    pub mass_fraction: f64,
    /// Even-spacing check of the input
    pub spacing: SpacingReport,
}

impl HpdResult {
    /// `(lowest, highest)` envelope of all clusters
    pub fn bounds(&self) -> (f64, f64) {
        (self.lowest, self.highest)
    }

    /// Number of clusters
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Whether the credible region is split into several intervals
    pub fn is_multimodal(&self) -> bool {
        self.clusters.len() > 1
    }

    /// Number of retained samples across all clusters
    pub fn retained(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }

    /// Summed width of the clusters
    pub fn total_width(&self) -> f64 {
        self.clusters.iter().map(Cluster::width).sum()
    }

    /// Check if a value lies inside any cluster
    pub fn contains(&self, value: f64) -> bool {
        self.clusters.iter().any(|c| c.contains(value))
    }

    /// Cluster locations, one slice per cluster
    pub fn x_clusters(&self) -> Vec<&[f64]> {
        self.clusters.iter().map(|c| c.x.as_slice()).collect()
    }

    /// Cluster densities, one slice per cluster
    pub fn p_clusters(&self) -> Vec<&[f64]> {
        self.clusters.iter().map(|c| c.p.as_slice()).collect()
    }
}

impl fmt::Display for HpdResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} HPD: [{:.6}, {:.6}] in {} cluster(s)",
            self.confidence_level,
            self.lowest,
            self.highest,
            self.clusters.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credible_interval() {
        let ci = CredibleInterval::new(2.0, 8.0, 5.0, ConfidenceLevel::NINETY_FIVE);

        assert_eq!(ci.width(), 6.0);
        assert!(ci.contains(5.0));
        assert!(!ci.contains(1.0));
        assert!(!ci.contains(9.0));
        assert_eq!(ci.bounds(), (2.0, 8.0));
    }

    #[test]
    fn test_overlap() {
        let level = ConfidenceLevel::NINETY_FIVE;
        let ci1 = CredibleInterval::new(2.0, 6.0, 4.0, level);
        let ci2 = CredibleInterval::new(4.0, 8.0, 6.0, level);
        let ci3 = CredibleInterval::new(7.0, 9.0, 8.0, level);

        assert!(ci1.overlaps(&ci2));
        assert!(ci2.overlaps(&ci1));
        assert!(!ci1.overlaps(&ci3));
    }

    #[test]
    fn test_confidence_level() {
        let level = ConfidenceLevel::new(0.95).unwrap();
        assert_eq!(level.value(), 0.95);
        assert!((level.alpha() - 0.05).abs() < 1e-10);
        assert!((level.tail_probability() - 0.025).abs() < 1e-10);
        assert!(!level.is_full());
        assert!(ConfidenceLevel::FULL.is_full());
    }

    #[test]
    fn test_confidence_level_from_percent() {
        let level = ConfidenceLevel::from_percent(68.0).unwrap();
        assert!((level.value() - 0.68).abs() < 1e-12);
        assert!(ConfidenceLevel::from_percent(100.0).unwrap().is_full());
    }

    #[test]
    fn test_invalid_confidence_level() {
        for bad in [0.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(ConfidenceLevel::new(bad), Err(Error::Domain(_))),
                "{bad} accepted"
            );
        }
        assert!(ConfidenceLevel::from_percent(120.0).is_err());
    }

    #[test]
    fn test_confidence_level_serde_validates() {
        let level: ConfidenceLevel = serde_json::from_str("0.68").unwrap();
        assert_eq!(level.value(), 0.68);
        assert!(serde_json::from_str::<ConfidenceLevel>("1.2").is_err());
        assert_eq!(serde_json::to_string(&ConfidenceLevel::NINETY).unwrap(), "0.9");
    }

    #[test]
    fn test_confidence_level_display() {
        assert_eq!(format!("{}", ConfidenceLevel::NINETY_FIVE), "95.0%");
        assert_eq!(format!("{}", ConfidenceLevel::ONE_SIGMA), "68.3%");
    }

    #[test]
    fn test_cluster_measures() {
        let cluster = Cluster::new(vec![1.0, 1.5, 2.0], vec![1.0, 1.0, 1.0]);
        assert_eq!(cluster.len(), 3);
        assert_eq!(cluster.width(), 1.0);
        assert_eq!(cluster.mass(), 1.0);
        assert!(cluster.contains(1.2));
        assert!(!cluster.contains(2.1));

        let single = Cluster::new(vec![3.0], vec![0.4]);
        assert_eq!(single.width(), 0.0);
        assert_eq!(single.mass(), 0.0);

        let empty = Cluster::new(vec![], vec![]);
        assert!(empty.is_empty());
        assert!(!empty.contains(0.0));
    }

    #[test]
    fn test_credible_interval_display() {
        let ci = CredibleInterval::new(2.5, 7.5, 5.0, ConfidenceLevel::NINETY_FIVE);
        let display = format!("{}", ci);
        assert!(display.contains("95.0%"));
        assert!(display.contains("2.500000"));
        assert!(display.contains("7.500000"));
    }
}
