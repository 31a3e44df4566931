//! Survey analyses run directly on Polars frames

use super::ingest::{survey_table, wide_table};
use crate::{IntoFrame, Result, SurveyFrameExt};
use polars::prelude::*;
use survey_confidence::{PrevalenceEstimator, PrevalenceQuery};
use survey_core::{QuestionId, SurveyTable, WideTable};
use survey_effect::CorrelationBuilder;
use survey_histogram::{DistributionAggregator, TrendBuilder};
use survey_spread::{OutlierDetector, OutlierReport};

impl SurveyFrameExt for DataFrame {
    fn to_survey_table(&self) -> Result<SurveyTable> {
        survey_table(self)
    }

    fn to_wide_table(&self, index_column: Option<&str>) -> Result<WideTable> {
        wide_table(self, index_column)
    }

    fn answer_distribution(&self, question: QuestionId) -> Result<DataFrame> {
        let table = self.to_survey_table()?;
        DistributionAggregator::aggregate(&table, question).into_frame()
    }

    fn answer_trend(&self, question: QuestionId) -> Result<DataFrame> {
        let table = self.to_survey_table()?;
        TrendBuilder::pivot(&table, question).into_frame()
    }

    fn prevalence(&self, estimator: &PrevalenceEstimator, query: &PrevalenceQuery) -> Result<DataFrame> {
        let table = self.to_survey_table()?;
        estimator.estimate(&table, query)?.as_slice().into_frame()
    }

    fn correlation(&self, builder: &CorrelationBuilder) -> Result<DataFrame> {
        let table = self.to_wide_table(None)?;
        builder.build(&table)?.matrix.into_frame()
    }

    fn feature_outliers(&self, detector: &OutlierDetector, features: &[&str]) -> Result<OutlierReport> {
        let table = self.to_wide_table(None)?;
        Ok(detector.detect(&table, features)?)
    }
}
