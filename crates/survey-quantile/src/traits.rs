//! Core traits for quantile estimation

use survey_core::{Error, Result};

/// Main trait for quantile estimation over `f64` samples
pub trait QuantileEstimator {
    /// Estimate a single quantile
    ///
    /// # Warning
    /// This method will sort the data in place! If you need to preserve the original
    /// order, use `quantile_sorted()` with pre-sorted data or make a copy first.
    fn quantile(&self, data: &mut [f64], p: f64) -> Result<f64> {
        data.sort_by(f64::total_cmp);
        self.quantile_sorted(data, p)
    }

    /// Estimate a single quantile from pre-sorted data
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate multiple quantiles
    ///
    /// # Warning
    /// Sorts `data` in place.
    fn quantiles(&self, data: &mut [f64], ps: &[f64]) -> Result<Vec<f64>> {
        data.sort_by(f64::total_cmp);
        self.quantiles_sorted(data, ps)
    }

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter().map(|&p| self.quantile_sorted(sorted_data, p)).collect()
    }

    /// Name of the estimator
    fn name(&self) -> &'static str;
}

/// Shared argument checks for quantile estimators
pub(crate) fn validate(sorted_data: &[f64], p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_probability(p));
    }
    if sorted_data.is_empty() {
        return Err(Error::empty_input("quantile"));
    }
    if sorted_data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("quantile sample"));
    }
    Ok(())
}
