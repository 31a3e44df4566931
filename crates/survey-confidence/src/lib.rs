//! Confidence intervals and prevalence estimation
//!
//! - [`ConfidenceLevel`] / [`ConfidenceInterval`]: validated levels and intervals
//! - [`WaldInterval`]: normal-approximation interval for a proportion
//! - [`PrevalenceEstimator`]: top-N answer rates against a fixed respondent
//!   denominator, with Wald half-widths in percentage points
//!
//! A zero denominator is a domain error, never a NaN width.
//!
//! # Example
//!
//! ```rust
//! use survey_confidence::WaldInterval;
//!
//! let ci = WaldInterval::default().proportion(30, 100).unwrap();
//! assert!((ci.margin_of_error() * 100.0 - 7.54).abs() < 0.01);
//! ```

mod prevalence;
mod types;
mod wald;

pub use prevalence::{PrevalenceEstimate, PrevalenceEstimator, PrevalenceQuery, DEFAULT_TOP_N};
pub use types::{ConfidenceInterval, ConfidenceLevel};
pub use wald::{WaldInterval, DEFAULT_Z};
