//! Pearson correlation kernels

use num_traits::{Float, NumCast};
use survey_core::{Error, Result};

/// Pearson correlation coefficient of two equal-length samples
///
/// Errors when fewer than two observations are given or either sample has
/// zero variance.
pub fn pearson_correlation<T: Float + std::ops::AddAssign>(x: &[T], y: &[T]) -> Result<T> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "pearson_correlation"));
    }
    if x.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: x.len(),
        });
    }

    let n: T = NumCast::from(x.len())
        .ok_or_else(|| Error::Computation("Sample size not representable".to_string()))?;

    let mean_x = x.iter().fold(T::zero(), |acc, &v| acc + v) / n;
    let mean_y = y.iter().fold(T::zero(), |acc, &v| acc + v) / n;

    let mut numerator = T::zero();
    let mut sum_sq_x = T::zero();
    let mut sum_sq_y = T::zero();

    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;

        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();

    if denominator == T::zero() {
        return Err(Error::Computation(
            "Cannot compute correlation: zero variance".to_string(),
        ));
    }

    Ok(numerator / denominator)
}

/// Pearson correlation over the rows where both values are present
///
/// `None` when fewer than two complete pairs remain or either side is
/// constant. The result is clamped to [-1, 1].
pub fn pairwise_complete(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .unzip();

    pearson_correlation(&xs, &ys)
        .ok()
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(-1.0, 1.0))
}

/// True when a column has at least two present values that are not all equal
pub fn has_variance(values: &[Option<f64>]) -> bool {
    let mut present = values.iter().flatten();
    match present.next() {
        Some(first) => present.any(|v| v != first),
        None => false,
    }
}
