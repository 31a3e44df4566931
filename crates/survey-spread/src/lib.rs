//! Spread measurements and outlier detection for survey features
//!
//! - [`IqrFences`]: quartiles, interquartile range and Tukey fences
//! - [`OutlierDetector`]: per-feature IQR outliers merged into one
//!   de-duplicated list, with a summary for every requested feature
//!
//! # Example
//!
//! ```rust
//! use survey_core::{WideColumn, WideTable};
//! use survey_spread::OutlierDetector;
//!
//! let table = WideTable::from_columns(vec![
//!     WideColumn::from_numbers("age", &[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]),
//! ]).unwrap();
//!
//! let report = OutlierDetector::new().detect(&table, &["age", "salary"]).unwrap();
//! assert_eq!(report.outliers(), &[100]);
//! assert_eq!(report.summaries()[1], "Feature 'salary' not found");
//! ```

mod iqr;
mod outliers;

pub use iqr::{IqrFences, DEFAULT_FENCE};
pub use outliers::{FeatureOutcome, FeatureReport, OutlierDetector, OutlierReport};
