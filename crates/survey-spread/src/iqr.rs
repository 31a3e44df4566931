//! Interquartile Range (IQR) and Tukey fences

use serde::{Deserialize, Serialize};
use survey_core::{Error, Result};
use survey_quantile::QuantileEstimator;

/// Default Tukey fence multiplier
pub const DEFAULT_FENCE: f64 = 1.5;

/// Quartiles of a sample and the outlier fences derived from them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrFences {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrFences {
    /// Compute quartiles and `[Q1 - k*IQR, Q3 + k*IQR]`
    ///
    /// # Warning
    /// Sorts `data` in place.
    pub fn compute<Q: QuantileEstimator>(data: &mut [f64], quantile_est: &Q, k: f64) -> Result<Self> {
        if !k.is_finite() || k < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Fence multiplier {k} must be finite and non-negative"
            )));
        }
        let quartiles = quantile_est.quantiles(data, &[0.25, 0.75])?;
        let (q1, q3) = (quartiles[0], quartiles[1]);
        let iqr = q3 - q1;
        Ok(Self {
            q1,
            q3,
            iqr,
            lower: q1 - k * iqr,
            upper: q3 + k * iqr,
        })
    }

    /// True when `value` falls strictly outside the fences
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use approx::assert_relative_eq;
    use survey_quantile::QuantileMethod;

    #[test]
    fn test_fences_linear() {
        let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let fences = IqrFences::compute(&mut data, &QuantileMethod::Linear, DEFAULT_FENCE).unwrap();
        assert_relative_eq!(fences.q1, 2.25);
        assert_relative_eq!(fences.q3, 4.75);
        assert_relative_eq!(fences.iqr, 2.5);
        assert_relative_eq!(fences.lower, -1.5);
        assert_relative_eq!(fences.upper, 8.5);
        assert!(fences.is_outlier(100.0));
        assert!(!fences.is_outlier(8.5));
    }

    #[test]
    fn test_zero_variance() {
        let mut data = vec![3.0; 5];
        let fences = IqrFences::compute(&mut data, &QuantileMethod::Linear, DEFAULT_FENCE).unwrap();
        assert_eq!(fences.iqr, 0.0);
        assert!(!fences.is_outlier(3.0));
        assert!(fences.is_outlier(3.0001));
    }

    #[test]
    fn test_invalid_fence() {
        let mut data = vec![1.0, 2.0];
        assert!(IqrFences::compute(&mut data, &QuantileMethod::Linear, -1.0).is_err());
        assert!(IqrFences::compute(&mut data, &QuantileMethod::Linear, f64::NAN).is_err());
    }

    #[test]
    fn test_empty_sample() {
        let mut data: Vec<f64> = vec![];
        assert!(IqrFences::compute(&mut data, &QuantileMethod::Linear, DEFAULT_FENCE).is_err());
    }

    proptest! {
        #[test]
        fn prop_fences_bracket_quartiles(mut data in prop::collection::vec(-1e6f64..1e6, 1..200)) {
            let fences = IqrFences::compute(&mut data, &QuantileMethod::Linear, DEFAULT_FENCE).unwrap();
            prop_assert!(fences.lower <= fences.q1);
            prop_assert!(fences.q1 <= fences.q3);
            prop_assert!(fences.q3 <= fences.upper);
        }
    }
}
