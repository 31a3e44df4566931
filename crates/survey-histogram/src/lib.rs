//! Counting and binning of survey answers
//!
//! - [`DistributionAggregator`]: count and percentage per (wave, answer)
//! - [`TrendBuilder`]: waves × answers percentage pivots for trend plots
//! - [`NumericAnswerHistogram`]: per-wave equal-width histograms of numeric answers
//!
//! All builders borrow the survey table and return freshly computed tables.
//!
//! # Example
//!
//! ```rust
//! use survey_core::{SurveyRecord, SurveyTable};
//! use survey_histogram::{DistributionAggregator, TrendBuilder};
//!
//! let table = SurveyTable::new(vec![
//!     SurveyRecord::new("u1", 2, "Male", 2016),
//!     SurveyRecord::new("u2", 2, "Female", 2016),
//! ]);
//!
//! let dist = DistributionAggregator::aggregate(&table, 2);
//! assert_eq!(dist.total(2016), 2);
//!
//! let pivot = TrendBuilder::pivot(&table, 2);
//! assert_eq!(pivot.get(2016, "Male"), Some(50.0));
//! ```

mod distribution;
mod histogram;
mod trend;

pub use distribution::{DistributionAggregator, DistributionRow, DistributionTable};
pub use histogram::{HistogramBin, NumericAnswerHistogram, WaveHistogram};
pub use trend::{PivotedTrendTable, TrendBuilder, TrendComparison, TrendContext, TrendPanel};
