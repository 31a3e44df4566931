//! Statistics and derived tables for long-format survey datasets
//!
//! This crate re-exports the survey-stats workspace:
//!
//! - [`survey_core`]: records, tables, wide reshaping and answer coercion
//! - [`survey_quantile`]: quantile estimators used by the outlier fences
//! - [`survey_spread`]: Tukey-fence outlier detection
//! - [`survey_histogram`]: answer distributions, trend pivots, numeric histograms
//! - [`survey_confidence`]: Wald intervals and top-N prevalence
//! - [`survey_effect`]: correlation matrices and paired comparisons
//! - `survey_polars` (feature `polars`): the same analyses on Polars DataFrames
//!
//! [`AnalysisConfig`] builds the configured analysers from one JSON document.
//!
//! # Example
//!
//! ```rust
//! use survey_stats::prelude::*;
//!
//! let table = SurveyTable::new(vec![
//!     SurveyRecord::new("u1", 1, "34", 2016),
//!     SurveyRecord::new("u1", 115, "Mood Disorder", 2016),
//!     SurveyRecord::new("u2", 1, "29", 2016),
//! ]);
//!
//! let config = AnalysisConfig::default();
//! let estimates = config
//!     .prevalence_estimator()
//!     .unwrap()
//!     .estimate(&table, &PrevalenceQuery::new(1, 115, 2016))
//!     .unwrap();
//! assert_eq!(estimates[0].percentage, 50.0);
//! ```

mod config;

pub use config::{AnalysisConfig, OutlierConfig, PrevalenceConfig};

pub use survey_confidence;
pub use survey_core;
pub use survey_effect;
pub use survey_histogram;
pub use survey_quantile;
pub use survey_spread;

#[cfg(feature = "polars")]
pub use survey_polars;

/// Commonly used types
pub mod prelude {
    pub use crate::AnalysisConfig;
    pub use survey_confidence::{
        ConfidenceInterval, ConfidenceLevel, PrevalenceEstimate, PrevalenceEstimator,
        PrevalenceQuery, WaldInterval,
    };
    pub use survey_core::{
        AnswerCoercer, Coercion, CoercionStrategy, Error, OrdinalMapping, OrdinalValue, QuestionId,
        Result, SurveyId, SurveyRecord, SurveyTable, WideColumn, WideTable,
    };
    pub use survey_effect::{
        CorrelationBuilder, CorrelationMatrix, CorrelationResult, PairedComparison, TriangleMask,
    };
    pub use survey_histogram::{
        DistributionAggregator, DistributionTable, NumericAnswerHistogram, PivotedTrendTable,
        TrendBuilder,
    };
    pub use survey_quantile::{QuantileEstimator, QuantileMethod};
    pub use survey_spread::{FeatureOutcome, OutlierDetector, OutlierReport};

    #[cfg(feature = "polars")]
    pub use survey_polars::{IntoFrame, SurveyFrameExt};
}
