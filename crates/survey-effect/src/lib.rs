//! Relationships between survey answers
//!
//! # Overview
//!
//! Questions are compared after their text answers are coerced onto a
//! numeric scale. Two views are provided:
//!
//! - **Correlation**: [`CorrelationBuilder`] produces a named, symmetric
//!   [`CorrelationMatrix`] of pairwise-complete Pearson coefficients and the
//!   upper-triangle [`TriangleMask`] a heatmap hides
//! - **Paired comparison**: [`PairedComparison`] melts question pairs to long
//!   form on a shared numeric or ordinal axis
//!
//! Undefined correlations (too few complete pairs, constant columns,
//! non-numeric columns) are `None` rather than errors.
//!
//! # Example
//!
//! ```rust
//! use survey_core::{WideColumn, WideTable};
//! use survey_effect::CorrelationBuilder;
//!
//! let table = WideTable::from_columns(vec![
//!     WideColumn::from_strs("treatment", &["Yes", "No", "Maybe"]),
//!     WideColumn::from_strs("family_history", &["Yes", "No", "No"]),
//! ])
//! .unwrap();
//!
//! let result = CorrelationBuilder::default().build(&table).unwrap();
//! assert!(result.matrix.is_symmetric());
//! assert_eq!(result.mask.count_suppressed(), 3);
//! ```

mod builder;
mod comparison;
mod correlation;
mod matrix;

pub use builder::{CorrelationBuilder, CorrelationResult};
pub use comparison::{ComparisonPanel, ComparisonRow, PairedComparison, Scale};
pub use correlation::{has_variance, pairwise_complete, pearson_correlation};
pub use matrix::{CorrelationMatrix, Triangle, TriangleMask};
