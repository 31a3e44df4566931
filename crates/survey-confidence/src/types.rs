//! Common types for confidence intervals

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt;
use survey_core::{Error, Result};

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.90 for 90% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{}, {}], estimate: {}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Two-sided confidence level in (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);

    /// Create a new confidence level
    pub fn new(level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "Confidence level {level} must be in (0, 1)"
            )));
        }
        Ok(Self(level))
    }

    /// Level implied by a two-sided normal critical value
    pub fn from_z(z: f64) -> Result<Self> {
        if !(z.is_finite() && z > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Critical value {z} must be finite and positive"
            )));
        }
        Self::new(2.0 * standard_normal()?.cdf(z) - 1.0)
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Two-sided normal critical value, Φ⁻¹(1 - α/2)
    pub fn z(&self) -> Result<f64> {
        Ok(standard_normal()?.inverse_cdf(1.0 - self.alpha() / 2.0))
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

pub(crate) fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_z_values() {
        assert_relative_eq!(ConfidenceLevel::NINETY.z().unwrap(), 1.6449, epsilon = 1e-4);
        assert_relative_eq!(ConfidenceLevel::NINETY_FIVE.z().unwrap(), 1.9600, epsilon = 1e-4);
    }

    #[test]
    fn test_from_z_round_trip() {
        let level = ConfidenceLevel::from_z(1.96).unwrap();
        assert_relative_eq!(level.value(), 0.95, epsilon = 1e-3);
        assert!(ConfidenceLevel::from_z(0.0).is_err());
    }

    #[test]
    fn test_invalid_levels() {
        assert!(ConfidenceLevel::new(0.0).is_err());
        assert!(ConfidenceLevel::new(1.0).is_err());
        assert!(ConfidenceLevel::new(f64::NAN).is_err());
        assert!(serde_json::from_str::<ConfidenceLevel>("1.5").is_err());
    }

    #[test]
    fn test_interval_helpers() {
        let ci = ConfidenceInterval::new(0.2, 0.4, 0.3, 0.9);
        assert_relative_eq!(ci.width(), 0.2);
        assert_relative_eq!(ci.margin_of_error(), 0.1);
        assert!(ci.contains(0.3));
        assert!(!ci.contains(0.41));
        assert_eq!(ConfidenceLevel::NINETY.to_string(), "90.0%");
    }
}
