//! Wald (normal approximation) interval for a proportion

use crate::types::standard_normal;
use crate::{ConfidenceInterval, ConfidenceLevel};
use statrs::distribution::ContinuousCDF;
use survey_core::{Error, Result};

/// Critical value used by the original prevalence charts (~90% two-sided)
pub const DEFAULT_Z: f64 = 1.6456;

/// Wald interval `p ± z·√(p(1−p)/n)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaldInterval {
    z: f64,
}

impl Default for WaldInterval {
    fn default() -> Self {
        Self { z: DEFAULT_Z }
    }
}

impl WaldInterval {
    /// Interval with an explicit critical value
    pub fn with_z(z: f64) -> Result<Self> {
        if !(z.is_finite() && z > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Critical value {z} must be finite and positive"
            )));
        }
        Ok(Self { z })
    }

    /// Interval for a confidence level, z = Φ⁻¹(1 − α/2)
    pub fn for_level(level: ConfidenceLevel) -> Result<Self> {
        Self::with_z(level.z()?)
    }

    /// The critical value
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Half-width of the interval for proportion `rate` over `n` trials
    pub fn half_width(&self, rate: f64, n: usize) -> Result<f64> {
        if n == 0 {
            return Err(Error::InsufficientData { expected: 1, actual: 0 });
        }
        if !(0.0..=1.0).contains(&rate) {
            return Err(Error::invalid_probability(rate));
        }
        Ok(self.z * (rate * (1.0 - rate) / n as f64).sqrt())
    }

    /// Interval for `successes` out of `n`
    pub fn proportion(&self, successes: usize, n: usize) -> Result<ConfidenceInterval> {
        if n == 0 {
            return Err(Error::InsufficientData { expected: 1, actual: 0 });
        }
        if successes > n {
            return Err(Error::InvalidInput(format!(
                "{successes} successes exceed {n} trials"
            )));
        }
        let rate = successes as f64 / n as f64;
        let margin = self.half_width(rate, n)?;
        // 2Φ(z) − 1 rounds to 1 for very large z; report it as-is
        let level = 2.0 * standard_normal()?.cdf(self.z) - 1.0;
        Ok(ConfidenceInterval::new(rate - margin, rate + margin, rate, level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_half_width() {
        let wald = WaldInterval::default();
        let hw = wald.half_width(0.3, 100).unwrap();
        assert_relative_eq!(hw, 1.6456 * (0.21f64 / 100.0).sqrt());
        assert_relative_eq!(hw * 100.0, 7.54, epsilon = 0.01);
    }

    #[test]
    fn test_proportion_interval() {
        let ci = WaldInterval::default().proportion(30, 100).unwrap();
        assert_relative_eq!(ci.estimate, 0.3);
        assert_relative_eq!(ci.margin_of_error(), 0.0754, epsilon = 1e-4);
        assert_relative_eq!(ci.confidence_level, 0.90, epsilon = 1e-3);
    }

    #[test]
    fn test_degenerate_inputs() {
        let wald = WaldInterval::default();
        assert!(wald.proportion(1, 0).is_err());
        assert!(wald.proportion(5, 4).is_err());
        assert_eq!(wald.half_width(1.0, 10).unwrap(), 0.0);
        assert!(WaldInterval::with_z(-1.0).is_err());
    }

    #[test]
    fn test_extreme_critical_values() {
        let wide = WaldInterval::with_z(10.0).unwrap();
        let ci = wide.proportion(30, 100).unwrap();
        assert_relative_eq!(ci.margin_of_error(), wide.half_width(0.3, 100).unwrap(), epsilon = 1e-12);
        assert_relative_eq!(ci.confidence_level, 1.0);

        let narrow = WaldInterval::with_z(1e-12).unwrap();
        let ci = narrow.proportion(30, 100).unwrap();
        assert!(ci.confidence_level >= 0.0 && ci.confidence_level < 1e-9);
    }

    #[test]
    fn test_for_level() {
        let wald = WaldInterval::for_level(ConfidenceLevel::NINETY_FIVE).unwrap();
        assert_relative_eq!(wald.z(), 1.96, epsilon = 1e-3);
    }

    proptest! {
        #[test]
        fn prop_interval_within_unit_margin(n in 1usize..10_000, frac in 0.0f64..=1.0) {
            let successes = ((n as f64) * frac).floor() as usize;
            let ci = WaldInterval::default().proportion(successes, n).unwrap();
            prop_assert!(ci.lower <= ci.estimate && ci.estimate <= ci.upper);
            // z·√(p(1−p)/n) is largest at p = 0.5
            prop_assert!(ci.margin_of_error() <= DEFAULT_Z * 0.5 / (n as f64).sqrt() + 1e-12);
        }
    }
}
