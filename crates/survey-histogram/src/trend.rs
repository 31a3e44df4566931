//! Percentage pivots of answers across survey waves
//!
//! A question's answers are counted per (wave, answer), pivoted to one row
//! per wave and one column per answer, and each row normalised to 100.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use survey_core::{Error, QuestionId, Result, SurveyId, SurveyTable};
use tracing::{debug, instrument};

/// Waves × categories matrix of percentages
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawTrendTable")]
pub struct PivotedTrendTable {
    partitions: Vec<SurveyId>,
    categories: Vec<String>,
    cells: Vec<Vec<f64>>,
}

impl PivotedTrendTable {
    /// Waves, ascending
    pub fn partitions(&self) -> &[SurveyId] {
        &self.partitions
    }

    /// Categories, ascending
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Row-major cells, one row per wave
    pub fn cells(&self) -> &[Vec<f64>] {
        &self.cells
    }

    /// True when no wave had answers
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// The percentages of one wave, aligned with `categories()`
    pub fn row(&self, partition: SurveyId) -> Option<&[f64]> {
        let i = self.partitions.binary_search(&partition).ok()?;
        Some(&self.cells[i])
    }

    /// Percentage of `category` in `partition`
    pub fn get(&self, partition: SurveyId, category: &str) -> Option<f64> {
        let j = self.categories.iter().position(|c| c == category)?;
        self.row(partition).map(|row| row[j])
    }

    /// One category across all waves, as (wave, percentage) points
    pub fn series(&self, category: &str) -> Option<Vec<(SurveyId, f64)>> {
        let j = self.categories.iter().position(|c| c == category)?;
        Some(
            self.partitions
                .iter()
                .zip(&self.cells)
                .map(|(&wave, row)| (wave, row[j]))
                .collect(),
        )
    }
}

#[derive(Deserialize)]
struct RawTrendTable {
    partitions: Vec<SurveyId>,
    categories: Vec<String>,
    cells: Vec<Vec<f64>>,
}

impl TryFrom<RawTrendTable> for PivotedTrendTable {
    type Error = Error;

    /// Waves must be strictly ascending and cells one row per wave, one
    /// column per category
    fn try_from(raw: RawTrendTable) -> Result<Self> {
        if raw.partitions.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidInput(
                "Trend waves must be strictly ascending".to_string(),
            ));
        }
        if raw.cells.len() != raw.partitions.len() {
            return Err(Error::size_mismatch(raw.partitions.len(), raw.cells.len(), "trend rows"));
        }
        if let Some(row) = raw.cells.iter().find(|row| row.len() != raw.categories.len()) {
            return Err(Error::size_mismatch(raw.categories.len(), row.len(), "trend columns"));
        }
        Ok(Self {
            partitions: raw.partitions,
            categories: raw.categories,
            cells: raw.cells,
        })
    }
}

/// Which employer context a panel describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendContext {
    Current,
    Previous,
}

impl fmt::Display for TrendContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str("Current"),
            Self::Previous => f.write_str("Previous"),
        }
    }
}

/// The pivot of one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPanel {
    pub context: TrendContext,
    pub question_id: QuestionId,
    pub table: PivotedTrendTable,
}

/// Current and previous context pivots under a shared description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendComparison {
    pub label: String,
    pub current: TrendPanel,
    pub previous: TrendPanel,
}

impl TrendComparison {
    /// Both panels, current first
    pub fn panels(&self) -> [&TrendPanel; 2] {
        [&self.current, &self.previous]
    }
}

/// Builds percentage pivots for trend plots
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendBuilder;

impl TrendBuilder {
    /// Pivot a pair of questions, `(current, previous)`
    pub fn build(
        table: &SurveyTable,
        questions: (QuestionId, QuestionId),
        label: impl Into<String>,
    ) -> TrendComparison {
        let (current, previous) = questions;
        TrendComparison {
            label: label.into(),
            current: TrendPanel {
                context: TrendContext::Current,
                question_id: current,
                table: Self::pivot(table, current),
            },
            previous: TrendPanel {
                context: TrendContext::Previous,
                question_id: previous,
                table: Self::pivot(table, previous),
            },
        }
    }

    /// Pivot one question to waves × categories percentages
    ///
    /// Absent (wave, category) pairs count 0. Waves without answers are
    /// dropped rather than divided by zero.
    #[instrument(skip(table), fields(records = table.len()))]
    pub fn pivot(table: &SurveyTable, question: QuestionId) -> PivotedTrendTable {
        let mut counts: BTreeMap<SurveyId, BTreeMap<&str, usize>> = BTreeMap::new();
        let mut categories: BTreeSet<&str> = BTreeSet::new();
        for record in table.question(question) {
            if let Some(answer) = record.answer() {
                *counts.entry(record.survey_id).or_default().entry(answer).or_default() += 1;
                categories.insert(answer);
            }
        }

        let categories: Vec<&str> = categories.into_iter().collect();
        let mut partitions = Vec::with_capacity(counts.len());
        let mut cells = Vec::with_capacity(counts.len());
        for (wave, row_counts) in counts {
            let total: usize = row_counts.values().sum();
            if total == 0 {
                debug!(question, wave, "dropping wave without answers");
                continue;
            }
            partitions.push(wave);
            cells.push(
                categories
                    .iter()
                    .map(|c| row_counts.get(c).copied().unwrap_or(0) as f64 / total as f64 * 100.0)
                    .collect(),
            );
        }

        PivotedTrendTable {
            partitions,
            categories: categories.into_iter().map(str::to_string).collect(),
            cells,
        }
    }
}
