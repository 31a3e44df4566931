//! Polars integration for survey statistics
//!
//! [`SurveyFrameExt`] reads long survey frames (`UserID`, `QuestionID`,
//! `AnswerText`, `SurveyID`) and wide feature frames, runs the survey-stats
//! analyses on them and returns DataFrames. [`IntoFrame`] renders the computed
//! tables with the column names the charts expect.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use survey_polars::SurveyFrameExt;
//!
//! let df = df![
//!     "UserID" => ["u1", "u2", "u3"],
//!     "QuestionID" => [2, 2, 2],
//!     "AnswerText" => ["Male", "Female", "Male"],
//!     "SurveyID" => [2016, 2016, 2016],
//! ]?;
//!
//! let dist = df.answer_distribution(2)?;
//! assert_eq!(dist.get_column_names(), ["SurveyID", "AnswerText", "Count", "Percentage"]);
//! ```

mod error;
mod methods;
mod traits;

pub use error::{Error, Result};
pub use traits::*;
