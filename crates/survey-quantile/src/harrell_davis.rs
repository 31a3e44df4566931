//! Harrell-Davis quantile estimator
//!
//! A weighted sum of all order statistics with Beta-distribution weights.
//! Smoother than interpolated order statistics on small survey samples.

use crate::traits::{validate, QuantileEstimator};
use statrs::distribution::{Beta, ContinuousCDF};
use survey_core::{Error, Result};

/// Harrell-Davis quantile estimator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarrellDavis;

impl QuantileEstimator for HarrellDavis {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        validate(sorted_data, p)?;
        let n = sorted_data.len();

        if n == 1 || p == 0.0 {
            return Ok(sorted_data[0]);
        }
        if p == 1.0 {
            return Ok(sorted_data[n - 1]);
        }

        let n_f = n as f64;
        let beta = Beta::new((n_f + 1.0) * p, (n_f + 1.0) * (1.0 - p))
            .map_err(|e| Error::Computation(format!("Failed to create beta distribution: {e}")))?;

        let mut estimate = 0.0;
        let mut cdf_right = 0.0;
        for (j, value) in sorted_data.iter().enumerate() {
            let cdf_left = cdf_right;
            cdf_right = beta.cdf((j + 1) as f64 / n_f);
            estimate += (cdf_right - cdf_left) * value;
        }
        Ok(estimate)
    }

    fn name(&self) -> &'static str {
        "harrell_davis"
    }
}
