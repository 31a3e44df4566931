//! Extension traits for survey statistics on Polars DataFrames

use crate::Result;
use polars::prelude::*;
use survey_confidence::{PrevalenceEstimator, PrevalenceQuery};
use survey_core::{QuestionId, SurveyTable, WideTable};
use survey_effect::CorrelationBuilder;
use survey_spread::{OutlierDetector, OutlierReport};

/// Column holding the respondent id in a long survey frame
pub const USER_ID: &str = "UserID";
/// Column holding the question id in a long survey frame
pub const QUESTION_ID: &str = "QuestionID";
/// Column holding the answer text in a long survey frame
pub const ANSWER_TEXT: &str = "AnswerText";
/// Column holding the survey wave in a long survey frame
pub const SURVEY_ID: &str = "SurveyID";

/// Extension trait for survey analysis on Polars DataFrames
///
/// Long-format methods expect the `UserID`, `QuestionID`, `AnswerText` and
/// `SurveyID` columns. Wide-format methods treat every column as a feature.
pub trait SurveyFrameExt {
    /// Read a long survey frame into a [`SurveyTable`]
    ///
    /// Columns of any dtype are cast: ids to integers, answers and user ids
    /// to text. A missing column is [`crate::Error::InvalidColumn`].
    fn to_survey_table(&self) -> Result<SurveyTable>;

    /// Read a wide frame into a [`WideTable`]
    ///
    /// # Arguments
    /// * `index_column` - column holding respondent ids; rows are numbered
    ///   `0..height` when `None`
    fn to_wide_table(&self, index_column: Option<&str>) -> Result<WideTable>;

    /// Count and percentage per (SurveyID, AnswerText) for one question
    ///
    /// # Returns
    /// DataFrame with columns `SurveyID`, `AnswerText`, `Count`, `Percentage`
    fn answer_distribution(&self, question: QuestionId) -> Result<DataFrame>;

    /// Waves × answers percentage pivot for one question
    ///
    /// # Returns
    /// DataFrame with a `SurveyID` column and one column per answer
    fn answer_trend(&self, question: QuestionId) -> Result<DataFrame>;

    /// Top-N answer prevalence with Wald half-widths
    ///
    /// # Returns
    /// DataFrame with columns `AnswerText`, `Count`, `PrevalenceRate`,
    /// `Percentage`, `CI%`
    fn prevalence(&self, estimator: &PrevalenceEstimator, query: &PrevalenceQuery) -> Result<DataFrame>;

    /// Pairwise correlation of the columns of a wide frame
    ///
    /// # Returns
    /// DataFrame with a `Feature` column and one nullable `Float64` column
    /// per feature
    fn correlation(&self, builder: &CorrelationBuilder) -> Result<DataFrame>;

    /// Tukey-fence outliers in the named columns of a wide frame
    fn feature_outliers(&self, detector: &OutlierDetector, features: &[&str]) -> Result<OutlierReport>;
}

/// Render a computed table as a DataFrame
///
/// Implemented for references so the source table stays usable.
pub trait IntoFrame {
    fn into_frame(self) -> Result<DataFrame>;
}
