//! Core types for survey statistics
//!
//! This crate provides what every other survey-stats crate builds on:
//!
//! 1. **Records and tables** - the long-format [`SurveyRecord`] /
//!    [`SurveyTable`] and the per-respondent [`WideTable`]
//! 2. **Answer coercion** - mapping categorical answers onto an ordinal
//!    scale with an explicit [`CoercionStrategy`]
//! 3. **Errors** - the shared [`Error`] type
//!
//! # Example
//!
//! ```rust
//! use survey_core::{SurveyRecord, SurveyTable};
//!
//! let table = SurveyTable::new(vec![
//!     SurveyRecord::new("u1", 1, "34", 2016),
//!     SurveyRecord::new("u2", 1, "29", 2017),
//! ]);
//!
//! assert_eq!(table.waves(), vec![2016, 2017]);
//! let wide = table.to_wide(&[1], None).unwrap();
//! assert_eq!(wide.height(), 2);
//! ```

pub mod coercion;
pub mod error;
pub mod table;
pub mod types;
pub mod wide;

pub use coercion::{
    parse_numeric, AnswerCoercer, Coercion, CoercionStep, CoercionStrategy, OrdinalMapping,
    OrdinalValue,
};
pub use error::{Error, Result};
pub use table::SurveyTable;
pub use types::{QuestionId, RespondentId, SurveyId, SurveyRecord};
pub use wide::{WideColumn, WideTable};
