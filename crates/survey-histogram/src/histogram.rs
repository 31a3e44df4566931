//! Per-wave histograms of numeric answers
//!
//! Answers to a question that parse as numbers (ages, counts) are filtered
//! to an inclusive range and binned with equal-width bins per survey wave.

use serde::{Deserialize, Serialize};
use std::fmt;
use survey_core::{parse_numeric, Error, QuestionId, Result, SurveyId, SurveyTable};
use tracing::{debug, instrument};

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
}

impl HistogramBin {
    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}): count={}", self.left, self.right, self.count)
    }
}

/// Numeric answers of one wave and their bins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveHistogram {
    pub wave: SurveyId,
    pub values: Vec<f64>,
    pub bins: Vec<HistogramBin>,
}

impl WaveHistogram {
    /// Number of binned values
    pub fn total(&self) -> usize {
        self.values.len()
    }
}

/// Builder for per-wave numeric answer histograms
#[derive(Debug, Clone, PartialEq)]
pub struct NumericAnswerHistogram {
    question: QuestionId,
    min: f64,
    max: f64,
    bins: usize,
}

impl NumericAnswerHistogram {
    /// Histogram of `question` with no range filter and 10 bins
    pub fn new(question: QuestionId) -> Self {
        Self {
            question,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            bins: 10,
        }
    }

    /// Keep only answers in `[min, max]`
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Number of equal-width bins
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// One histogram per wave, waves in first-seen order
    #[instrument(skip(self, table), fields(question = self.question))]
    pub fn build(&self, table: &SurveyTable) -> Result<Vec<WaveHistogram>> {
        if self.bins == 0 {
            return Err(Error::InvalidParameter("Histogram needs at least one bin".to_string()));
        }
        if self.min > self.max {
            return Err(Error::InvalidParameter(format!(
                "Histogram range [{}, {}] is empty",
                self.min, self.max
            )));
        }

        let mut waves: Vec<(SurveyId, Vec<f64>)> = Vec::new();
        for record in table.question(self.question) {
            let Some(value) = record.answer().and_then(parse_numeric) else {
                continue;
            };
            if value < self.min || value > self.max {
                continue;
            }
            match waves.iter_mut().find(|(w, _)| *w == record.survey_id) {
                Some((_, values)) => values.push(value),
                None => waves.push((record.survey_id, vec![value])),
            }
        }

        debug!(waves = waves.len(), "binned numeric answers");
        Ok(waves
            .into_iter()
            .map(|(wave, values)| {
                let bins = equal_width_bins(&values, self.bins);
                WaveHistogram { wave, values, bins }
            })
            .collect())
    }
}

/// Equal-width bins over `min..=max` of the values; the last bin is closed
fn equal_width_bins(values: &[f64], n_bins: usize) -> Vec<HistogramBin> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![HistogramBin {
            left: min,
            right: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / n_bins as f64;
    let mut bins: Vec<HistogramBin> = (0..n_bins)
        .map(|i| HistogramBin {
            left: min + i as f64 * width,
            right: if i + 1 == n_bins { max } else { min + (i + 1) as f64 * width },
            count: 0,
        })
        .collect();
    for &value in values {
        let idx = (((value - min) / width) as usize).min(n_bins - 1);
        bins[idx].count += 1;
    }
    bins
}
