//! Side-by-side comparison of two questions' answers
//!
//! Each question pair is melted to long form so both questions can be drawn
//! on a shared axis. Purely numeric answers keep their numeric values;
//! anything else goes through the ordinal mapping only.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use survey_core::{
    parse_numeric, AnswerCoercer, Error, OrdinalValue, QuestionId, RespondentId, Result, WideTable,
};
use tracing::{debug, instrument};

/// Value axis used for a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Every present answer was made of digits
    Numeric,
    /// Answers were placed on the No/Some/Yes scale
    Ordinal,
}

/// One melted cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub user_id: RespondentId,
    pub question_id: QuestionId,
    pub label: String,
    pub value: Option<f64>,
}

/// Long-form values for one question pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPanel {
    pub questions: (QuestionId, QuestionId),
    pub scale: Scale,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonPanel {
    /// Axis ticks for ordinal panels
    pub fn tick_labels(&self) -> Option<Vec<(f64, &'static str)>> {
        match self.scale {
            Scale::Ordinal => Some(
                OrdinalValue::LEVELS
                    .iter()
                    .map(|level| (level.value(), level.label()))
                    .collect(),
            ),
            Scale::Numeric => None,
        }
    }

    /// Present values for one question of the pair
    pub fn values(&self, question: QuestionId) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|row| row.question_id == question)
            .filter_map(|row| row.value)
            .collect()
    }
}

/// Builds [`ComparisonPanel`]s from a wide table whose columns are named by
/// question id
#[derive(Debug, Clone, Default)]
pub struct PairedComparison {
    coercer: AnswerCoercer,
}

impl PairedComparison {
    pub fn new(coercer: AnswerCoercer) -> Self {
        Self { coercer }
    }

    #[instrument(skip(self, table, labels), fields(pairs = pairs.len()))]
    pub fn compare(
        &self,
        table: &WideTable,
        pairs: &[(QuestionId, QuestionId)],
        labels: &HashMap<QuestionId, String>,
    ) -> Result<Vec<ComparisonPanel>> {
        pairs
            .iter()
            .map(|&pair| self.panel(table, pair, labels))
            .collect()
    }

    fn panel(
        &self,
        table: &WideTable,
        (first, second): (QuestionId, QuestionId),
        labels: &HashMap<QuestionId, String>,
    ) -> Result<ComparisonPanel> {
        let mut melted = Vec::with_capacity(table.height() * 2);
        for question in [first, second] {
            let name = question.to_string();
            let column = table
                .column(&name)
                .ok_or_else(|| Error::InvalidColumn(name.clone()))?;
            let label = labels.get(&question).cloned().unwrap_or(name);
            for (user_id, answer) in table.index().iter().zip(column.iter()) {
                melted.push((user_id, question, label.clone(), answer));
            }
        }

        let scale = if melted
            .iter()
            .filter_map(|(_, _, _, answer)| *answer)
            .all(is_digits)
        {
            Scale::Numeric
        } else {
            Scale::Ordinal
        };
        debug!(first, second, ?scale, "comparison panel");

        let rows = melted
            .into_iter()
            .map(|(user_id, question_id, label, answer)| ComparisonRow {
                user_id: user_id.clone(),
                question_id,
                label,
                value: answer.and_then(|text| match scale {
                    Scale::Numeric => parse_numeric(text),
                    Scale::Ordinal => self.coercer.mapping().get(text).map(OrdinalValue::value),
                }),
            })
            .collect();

        Ok(ComparisonPanel {
            questions: (first, second),
            scale,
            rows,
        })
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
