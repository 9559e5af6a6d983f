//! Utility functions for working with data slices

use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Indices that order `values` from largest to smallest
///
/// The sort is stable: equal values keep their original relative order.
/// NaN compares greater than every number and therefore comes first.
///
/// # Examples
///
/// ```rust
/// use pdf_core::utils::argsort_descending;
///
/// let order = argsort_descending(&[0.1, 0.4, 0.2, 0.4]);
/// assert_eq!(order, vec![1, 3, 2, 0]);
/// ```
pub fn argsort_descending(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by_key(|&i| Reverse(OrderedFloat(values[i])));
    order
}

/// Running sum of `values`
pub fn cumsum<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}
