//! Quantile estimation for survey statistics
//!
//! Provides the [`QuantileEstimator`] trait and two families of estimators:
//!
//! - [`QuantileMethod`]: order statistics with linear/lower/higher/midpoint/
//!   nearest resolution of fractional ranks (`Linear` is the dataframe default)
//! - [`HarrellDavis`]: Beta-weighted sum of all order statistics
//!
//! # Example
//!
//! ```rust
//! use survey_quantile::{QuantileEstimator, QuantileMethod};
//!
//! let mut ages = vec![34.0, 29.0, 51.0, 41.0, 38.0];
//! let q = QuantileMethod::Linear.quantiles(&mut ages, &[0.25, 0.75]).unwrap();
//! assert_eq!(q, vec![34.0, 41.0]);
//! ```

mod harrell_davis;
mod interpolation;
mod traits;

pub use harrell_davis::HarrellDavis;
pub use interpolation::QuantileMethod;
pub use traits::QuantileEstimator;
