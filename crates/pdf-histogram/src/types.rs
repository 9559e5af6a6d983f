//! Core types for histogram representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize) -> Self {
        Self { left, right, count }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}): count={}", self.left, self.right, self.count)
    }
}

/// Fixed-step histogram of a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
}

impl Histogram {
    /// Count `sorted` samples into bins delimited by ascending `edges`
    ///
    /// Bins are half open except the last, which also takes its right edge
    /// and anything that rounding left beyond it.
    pub(crate) fn from_edges(edges: &[f64], sorted: &[f64]) -> Self {
        let mut bins: Vec<HistogramBin> = edges
            .windows(2)
            .map(|w| HistogramBin::new(w[0], w[1], 0))
            .collect();

        if let Some(last) = bins.len().checked_sub(1) {
            for &value in sorted {
                let index = edges.partition_point(|&e| e <= value).saturating_sub(1);
                bins[index.min(last)].count += 1;
            }
        }

        Self {
            bins,
            total_count: sorted.len(),
        }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(HistogramBin::center).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.left).collect();
        if let Some(last) = self.bins.last() {
            edges.push(last.right);
        }
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Histogram({} bins, n={})", self.len(), self.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_bin() {
        let bin = HistogramBin::new(0.0, 1.0, 5);
        assert_eq!(bin.center(), 0.5);
        assert_eq!(bin.width(), 1.0);
        assert!(bin.contains(0.5));
        assert!(!bin.contains(1.0)); // Right edge is exclusive
    }

    #[test]
    fn test_histogram_counts_close_last_bin() {
        let edges = [0.0, 1.0, 2.0, 3.0];
        let sorted = [0.0, 0.5, 1.0, 1.5, 1.7, 2.0, 3.0];
        let hist = Histogram::from_edges(&edges, &sorted);

        assert_eq!(hist.len(), 3);
        assert_eq!(hist.total_count(), 7);
        assert_eq!(hist.counts(), vec![2, 3, 2]);
        assert_eq!(hist.max_count(), 3);
        assert_eq!(hist.centers(), vec![0.5, 1.5, 2.5]);
        assert_eq!(hist.edges(), edges.to_vec());
    }

    #[test]
    fn test_histogram_without_bins() {
        let hist = Histogram::from_edges(&[1.0], &[1.0]);
        assert!(hist.is_empty());
        assert!(hist.edges().is_empty());
    }
}
