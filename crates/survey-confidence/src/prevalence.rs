//! Prevalence rates of the most common answers
//!
//! The denominator is the number of respondents who answered a reference
//! question in one fixed survey wave. Each of the top-N answers of a target
//! question gets a rate against that denominator and a Wald half-width.

use crate::{ConfidenceLevel, WaldInterval};
use serde::{Deserialize, Serialize};
use survey_core::{Error, QuestionId, Result, SurveyId, SurveyTable};
use tracing::{debug, instrument};

/// Default number of categories reported
pub const DEFAULT_TOP_N: usize = 3;

/// Which questions and waves feed a prevalence estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrevalenceQuery {
    /// Question whose answer count in `denominator_wave` is the denominator
    pub reference_question: QuestionId,
    /// Question whose answers are the categories
    pub target_question: QuestionId,
    /// The single wave the denominator is counted in
    pub denominator_wave: SurveyId,
    /// Restrict target answers to one wave; all waves when `None`
    pub target_wave: Option<SurveyId>,
}

impl PrevalenceQuery {
    /// Query over all waves of the target question
    pub fn new(reference_question: QuestionId, target_question: QuestionId, denominator_wave: SurveyId) -> Self {
        Self {
            reference_question,
            target_question,
            denominator_wave,
            target_wave: None,
        }
    }

    /// Only count target answers from `wave`
    pub fn with_target_wave(mut self, wave: SurveyId) -> Self {
        self.target_wave = Some(wave);
        self
    }
}

/// Rate and interval half-width for one answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrevalenceEstimate {
    pub category: String,
    pub count: usize,
    /// count / denominator
    pub rate: f64,
    /// rate × 100
    pub percentage: f64,
    /// Interval half-width in percentage points
    pub half_width: f64,
}

impl PrevalenceEstimate {
    /// Interval bounds in percentage points
    pub fn bounds(&self) -> (f64, f64) {
        (self.percentage - self.half_width, self.percentage + self.half_width)
    }
}

/// Top-N prevalence estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrevalenceEstimator {
    top_n: usize,
    interval: WaldInterval,
}

impl Default for PrevalenceEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PrevalenceEstimator {
    /// Top 3 answers, z = 1.6456
    pub fn new() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            interval: WaldInterval::default(),
        }
    }

    /// Number of answers to report
    pub fn with_top_n(mut self, top_n: usize) -> Result<Self> {
        if top_n == 0 {
            return Err(Error::InvalidParameter("top_n must be positive".to_string()));
        }
        self.top_n = top_n;
        Ok(self)
    }

    /// Explicit critical value
    pub fn with_z(mut self, z: f64) -> Result<Self> {
        self.interval = WaldInterval::with_z(z)?;
        Ok(self)
    }

    /// Critical value derived from a confidence level
    pub fn with_confidence_level(mut self, level: ConfidenceLevel) -> Result<Self> {
        self.interval = WaldInterval::for_level(level)?;
        Ok(self)
    }

    /// Number of answers reported
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// The critical value
    pub fn z(&self) -> f64 {
        self.interval.z()
    }

    /// Non-null answers to the reference question in the denominator wave
    pub fn denominator(table: &SurveyTable, query: &PrevalenceQuery) -> usize {
        table
            .question_in_wave(query.reference_question, query.denominator_wave)
            .filter(|r| r.answer.is_some())
            .count()
    }

    /// Estimate prevalence of the top-N target answers
    ///
    /// Answers are ranked by count; equal counts keep first-encountered order.
    #[instrument(skip(self, table), fields(records = table.len()))]
    pub fn estimate(&self, table: &SurveyTable, query: &PrevalenceQuery) -> Result<Vec<PrevalenceEstimate>> {
        let denominator = Self::denominator(table, query);
        if denominator == 0 {
            return Err(Error::NoRespondents {
                question: query.reference_question,
                wave: query.denominator_wave,
            });
        }

        let mut counts: Vec<(&str, usize)> = Vec::new();
        let answers = table
            .question(query.target_question)
            .filter(|r| query.target_wave.map_or(true, |w| r.survey_id == w))
            .filter_map(|r| r.answer());
        for answer in answers {
            match counts.iter_mut().find(|(c, _)| *c == answer) {
                Some((_, n)) => *n += 1,
                None => counts.push((answer, 1)),
            }
        }
        // Stable sort keeps first-encountered order among ties
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(self.top_n);

        debug!(denominator, categories = counts.len(), "prevalence inputs");

        counts
            .into_iter()
            .map(|(category, count)| {
                if count > denominator {
                    return Err(Error::InvalidInput(format!(
                        "'{category}' has {count} answers but only {denominator} respondents"
                    )));
                }
                let rate = count as f64 / denominator as f64;
                Ok(PrevalenceEstimate {
                    category: category.to_string(),
                    count,
                    rate,
                    percentage: rate * 100.0,
                    half_width: self.interval.half_width(rate, denominator)? * 100.0,
                })
            })
            .collect()
    }
}
