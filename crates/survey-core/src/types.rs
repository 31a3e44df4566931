//! Record types for long-format survey data

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a survey question
pub type QuestionId = i64;

/// Identifier of a survey wave (the survey year in practice)
pub type SurveyId = i64;

/// Identifier of a respondent
pub type RespondentId = String;

/// One answer of one respondent to one question in one survey wave
///
/// Numeric answers are stored as their text representation. A `None`
/// answer is a null cell: it is never a category and never coerces to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub user_id: RespondentId,
    pub question_id: QuestionId,
    pub answer: Option<String>,
    pub survey_id: SurveyId,
}

impl SurveyRecord {
    /// Create an answered record
    pub fn new(
        user_id: impl Into<RespondentId>,
        question_id: QuestionId,
        answer: impl Into<String>,
        survey_id: SurveyId,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            question_id,
            answer: Some(answer.into()),
            survey_id,
        }
    }

    /// Create a record whose answer cell is null
    pub fn unanswered(user_id: impl Into<RespondentId>, question_id: QuestionId, survey_id: SurveyId) -> Self {
        Self {
            user_id: user_id.into(),
            question_id,
            answer: None,
            survey_id,
        }
    }

    /// The answer text, if present
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }
}

impl fmt::Display for SurveyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "user={} question={} survey={} answer={}",
            self.user_id,
            self.question_id,
            self.survey_id,
            self.answer.as_deref().unwrap_or("<null>")
        )
    }
}
