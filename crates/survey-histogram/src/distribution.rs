//! Answer counts and percentages per survey wave

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use survey_core::{QuestionId, SurveyId, SurveyTable};
use tracing::{debug, instrument};

/// One (wave, answer) group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    pub partition: SurveyId,
    pub category: String,
    pub count: usize,
    /// Share of the wave's answers, 0..=100
    pub percentage: f64,
}

/// Count and percentage rows sorted by (wave, category)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DistributionTable {
    question: QuestionId,
    rows: Vec<DistributionRow>,
}

impl DistributionTable {
    /// The question the table describes
    pub fn question(&self) -> QuestionId {
        self.question
    }

    /// All rows
    pub fn rows(&self) -> &[DistributionRow] {
        &self.rows
    }

    /// True when the question had no answers ("no data")
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct waves, ascending
    pub fn partitions(&self) -> Vec<SurveyId> {
        let mut waves: Vec<SurveyId> = self.rows.iter().map(|r| r.partition).collect();
        waves.dedup();
        waves
    }

    /// Distinct categories, ascending
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.rows.iter().map(|r| r.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    /// Rows of one wave
    pub fn rows_for(&self, partition: SurveyId) -> impl Iterator<Item = &DistributionRow> + '_ {
        self.rows.iter().filter(move |r| r.partition == partition)
    }

    /// Number of answers in one wave
    pub fn total(&self, partition: SurveyId) -> usize {
        self.rows_for(partition).map(|r| r.count).sum()
    }
}

/// Groups a question's answers by wave and answer text
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributionAggregator;

impl DistributionAggregator {
    /// Count each answer per wave and express it as a share of the wave
    ///
    /// Null answers are not a category and are skipped. A question with no
    /// answers yields an empty table.
    #[instrument(skip(table), fields(records = table.len()))]
    pub fn aggregate(table: &SurveyTable, question: QuestionId) -> DistributionTable {
        let mut counts: BTreeMap<(SurveyId, &str), usize> = BTreeMap::new();
        for record in table.question(question) {
            if let Some(answer) = record.answer() {
                *counts.entry((record.survey_id, answer)).or_default() += 1;
            }
        }

        if counts.is_empty() {
            debug!(question, "no answers for question");
            return DistributionTable {
                question,
                rows: Vec::new(),
            };
        }

        let mut totals: BTreeMap<SurveyId, usize> = BTreeMap::new();
        for (&(wave, _), &count) in &counts {
            *totals.entry(wave).or_default() += count;
        }

        let rows = counts
            .into_iter()
            .map(|((wave, category), count)| DistributionRow {
                partition: wave,
                category: category.to_string(),
                count,
                percentage: count as f64 / totals[&wave] as f64 * 100.0,
            })
            .collect();

        DistributionTable { question, rows }
    }
}
