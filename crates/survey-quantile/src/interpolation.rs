//! Order-statistic quantiles with selectable interpolation
//!
//! The estimate for probability `p` sits at fractional rank
//! `h = (n - 1) * p` in the sorted sample. The methods differ in how they
//! resolve a fractional rank, matching the usual dataframe conventions.

use crate::traits::{validate, QuantileEstimator};
use crate::HarrellDavis;
use serde::{Deserialize, Serialize};
use survey_core::Result;

/// Quantile estimation methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantileMethod {
    /// Linear interpolation between the neighbouring order statistics
    #[default]
    Linear,
    /// The lower neighbour
    Lower,
    /// The upper neighbour
    Higher,
    /// Mean of both neighbours
    Midpoint,
    /// The closer neighbour, ties to the even rank
    Nearest,
    /// Harrell-Davis weighted estimator
    HarrellDavis,
}

impl QuantileMethod {
    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Lower => "lower",
            Self::Higher => "higher",
            Self::Midpoint => "midpoint",
            Self::Nearest => "nearest",
            Self::HarrellDavis => "harrell_davis",
        }
    }
}

impl QuantileEstimator for QuantileMethod {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        validate(sorted_data, p)?;
        let (lo, frac) = fractional_rank(sorted_data.len(), p);
        let a = sorted_data[lo];
        let b = sorted_data[(lo + 1).min(sorted_data.len() - 1)];

        match self {
            Self::Linear => Ok(a + frac * (b - a)),
            Self::Lower => Ok(a),
            Self::Higher => Ok(if frac > 0.0 { b } else { a }),
            Self::Midpoint => Ok(if frac > 0.0 { (a + b) / 2.0 } else { a }),
            Self::Nearest => Ok(if frac < 0.5 || (frac == 0.5 && lo % 2 == 0) { a } else { b }),
            Self::HarrellDavis => HarrellDavis.quantile_sorted(sorted_data, p),
        }
    }

    fn name(&self) -> &'static str {
        QuantileMethod::name(self)
    }
}

/// Integer part and fraction of the rank `(n - 1) * p`
fn fractional_rank(n: usize, p: f64) -> (usize, f64) {
    let h = (n - 1) as f64 * p;
    let lo = h.floor();
    (lo as usize, h - lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const DATA: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];

    #[test]
    fn test_linear_matches_dataframe_default() {
        let q = QuantileMethod::Linear;
        assert_relative_eq!(q.quantile_sorted(&DATA, 0.25).unwrap(), 2.25);
        assert_relative_eq!(q.quantile_sorted(&DATA, 0.75).unwrap(), 4.75);
        assert_relative_eq!(q.quantile_sorted(&DATA, 0.5).unwrap(), 3.5);
        assert_relative_eq!(q.quantile_sorted(&DATA, 0.0).unwrap(), 1.0);
        assert_relative_eq!(q.quantile_sorted(&DATA, 1.0).unwrap(), 100.0);
    }

    #[test]
    fn test_neighbour_methods() {
        // h = 1.25 for p = 0.25
        assert_eq!(QuantileMethod::Lower.quantile_sorted(&DATA, 0.25).unwrap(), 2.0);
        assert_eq!(QuantileMethod::Higher.quantile_sorted(&DATA, 0.25).unwrap(), 3.0);
        assert_eq!(QuantileMethod::Midpoint.quantile_sorted(&DATA, 0.25).unwrap(), 2.5);
        assert_eq!(QuantileMethod::Nearest.quantile_sorted(&DATA, 0.25).unwrap(), 2.0);
        // h = 3.75
        assert_eq!(QuantileMethod::Nearest.quantile_sorted(&DATA, 0.75).unwrap(), 5.0);
    }

    #[test]
    fn test_nearest_ties_to_even_rank() {
        let data = [10.0, 20.0, 30.0];
        // h = 0.5 -> rank 0 is even
        assert_eq!(QuantileMethod::Nearest.quantile_sorted(&data, 0.25).unwrap(), 10.0);
        // h = 1.5 -> rank 1 is odd, take rank 2
        assert_eq!(QuantileMethod::Nearest.quantile_sorted(&data, 0.75).unwrap(), 30.0);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let mut data = vec![100.0, 3.0, 1.0, 5.0, 2.0, 4.0];
        let qs = QuantileMethod::Linear.quantiles(&mut data, &[0.25, 0.75]).unwrap();
        assert_eq!(qs, vec![2.25, 4.75]);
        assert_eq!(data, DATA.to_vec());
    }

    #[test]
    fn test_single_value_and_errors() {
        assert_eq!(QuantileMethod::Linear.quantile_sorted(&[42.0], 0.3).unwrap(), 42.0);
        assert!(QuantileMethod::Linear.quantile_sorted(&[], 0.5).is_err());
        assert!(QuantileMethod::Linear.quantile_sorted(&DATA, 1.5).is_err());
        assert!(QuantileMethod::Linear.quantile_sorted(&[1.0, f64::NAN], 0.5).is_err());
    }

    #[test]
    fn test_serde_names() {
        let method: QuantileMethod = serde_json::from_str("\"harrell_davis\"").unwrap();
        assert_eq!(method, QuantileMethod::HarrellDavis);
        assert_eq!(method.name(), "harrell_davis");
    }

    proptest! {
        #[test]
        fn linear_quantile_within_sample_range(
            mut data in prop::collection::vec(-1e6f64..1e6, 1..50),
            p in 0.0f64..=1.0,
        ) {
            let q = QuantileMethod::Linear.quantile(&mut data, p).unwrap();
            prop_assert!(q >= data[0] - 1e-9);
            prop_assert!(q <= data[data.len() - 1] + 1e-9);
        }
    }
}
