//! Partitioning of retained samples into contiguous clusters

use crate::types::Cluster;
use pdf_core::SpacingReport;

/// Splits x-ascending samples wherever consecutive locations are too far apart
///
/// A new cluster starts when the gap to the previous sample exceeds
/// `tolerance × mean_spacing`, where the mean spacing is that of the full
/// PDF the samples were drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterDetector {
    gap_limit: f64,
}

impl ClusterDetector {
    /// Create a detector for a PDF with the given mean sample spacing
    pub fn new(mean_spacing: f64, tolerance: f64) -> Self {
        Self {
            gap_limit: tolerance * mean_spacing,
        }
    }

    /// Create a detector from a PDF's spacing check
    pub fn from_report(report: &SpacingReport) -> Self {
        Self {
            gap_limit: report.gap_limit(),
        }
    }

    /// Largest gap still treated as contiguous
    pub fn gap_limit(&self) -> f64 {
        self.gap_limit
    }

    /// Index ranges of the clusters in `x`
    pub fn ranges(&self, x: &[f64]) -> Vec<std::ops::Range<usize>> {
        let mut ranges = Vec::new();
        if x.is_empty() {
            return ranges;
        }

        let mut start = 0;
        for i in 1..x.len() {
            if x[i] - x[i - 1] > self.gap_limit {
                ranges.push(start..i);
                start = i;
            }
        }
        ranges.push(start..x.len());
        ranges
    }

    /// Partition aligned `(x, p)` samples into clusters
    ///
    /// `x` must be ascending. An empty input yields no clusters.
    pub fn detect(&self, x: &[f64], p: &[f64]) -> Vec<Cluster> {
        self.ranges(x)
            .into_iter()
            .map(|r| Cluster::new(x[r.clone()].to_vec(), p[r].to_vec()))
            .collect()
    }
}
