//! Numerical primitives over sampled curves
//!
//! The vectorised array operations of a sampled PDF (areas, cumulative
//! integrals, axis generation) expressed as explicit slice iteration.
//! Every function here is `O(n)` in the number of samples.

/// Trapezoidal integral of `y` over `x`
///
/// Slices of unequal length are integrated over their common prefix.
/// Fewer than two samples integrate to `0.0`.
///
/// # Examples
///
/// ```rust
/// use pdf_core::numeric::trapz;
///
/// let x = [0.0, 1.0, 2.0];
/// let y = [0.0, 1.0, 0.0];
/// assert_eq!(trapz(&y, &x), 1.0);
/// ```
pub fn trapz(y: &[f64], x: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) * 0.5)
        .sum()
}

/// Cumulative trapezoidal integral of `y` over `x`, anchored at 0
///
/// The output has the same length as the inputs; element `i` holds the
/// area between `x[0]` and `x[i]`.
pub fn cumtrapz(y: &[f64], x: &[f64]) -> Vec<f64> {
    let n = x.len().min(y.len());
    let mut out = Vec::with_capacity(n);
    if n == 0 {
        return out;
    }

    let mut acc = 0.0;
    out.push(acc);
    for i in 1..n {
        acc += (x[i] - x[i - 1]) * (y[i] + y[i - 1]) * 0.5;
        out.push(acc);
    }
    out
}

/// First differences `x[i+1] - x[i]`
pub fn diff(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Mean of the first differences, `None` for fewer than two samples
pub fn mean_step(x: &[f64]) -> Option<f64> {
    if x.len() < 2 {
        return None;
    }
    Some((x[x.len() - 1] - x[0]) / (x.len() - 1) as f64)
}

/// Half-open range `[start, stop)` at a fixed step
///
/// The number of values is `ceil((stop - start) / step)`, so a `stop` of
/// `end + step` yields an axis that includes `end` (up to rounding).
/// Returns an empty vector for a non-positive or non-finite step.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !step.is_finite() || !(stop > start) {
        return Vec::new();
    }
    let n = ((stop - start) / step).ceil() as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// `n` evenly spaced values over the closed interval `[start, end]`
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Minimum and maximum of a slice, `None` when empty
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(values.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    }))
}
