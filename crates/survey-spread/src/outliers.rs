//! IQR outlier detection across survey features
//!
//! Each requested feature is inspected independently. A feature that is not
//! in the table is reported and skipped; it never fails the batch. Outlier
//! values are truncated to whole numbers and merged into one de-duplicated
//! list, while the per-feature report keeps the detail the merged list loses.

use crate::iqr::{IqrFences, DEFAULT_FENCE};
use std::fmt;
use survey_core::{parse_numeric, Error, Result, WideTable};
use survey_quantile::QuantileMethod;
use tracing::{debug, instrument, warn};

/// What happened when a single feature was inspected
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureOutcome {
    /// The feature is not a column of the table
    NotFound,
    /// The column has no value that parses as a number
    NoNumericData,
    /// Every value lies within the fences
    NoOutliers { fences: IqrFences },
    /// Distinct truncated outlier values in first-seen order
    Outliers { fences: IqrFences, values: Vec<i64> },
}

impl FeatureOutcome {
    /// Outlier values of this feature (empty unless outliers were found)
    pub fn values(&self) -> &[i64] {
        match self {
            Self::Outliers { values, .. } => values,
            _ => &[],
        }
    }

    /// Fences used, when the feature had numeric data
    pub fn fences(&self) -> Option<&IqrFences> {
        match self {
            Self::NoOutliers { fences } | Self::Outliers { fences, .. } => Some(fences),
            _ => None,
        }
    }
}

/// Outcome for one named feature
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureReport {
    pub feature: String,
    pub outcome: FeatureOutcome,
}

impl fmt::Display for FeatureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            FeatureOutcome::NotFound => write!(f, "Feature '{}' not found", self.feature),
            FeatureOutcome::NoNumericData => {
                write!(f, "No numeric data in '{}'", self.feature)
            }
            FeatureOutcome::NoOutliers { .. } => write!(f, "No outliers in '{}'", self.feature),
            FeatureOutcome::Outliers { values, .. } => {
                write!(f, "Unique outliers in '{}': {:?}", self.feature, values)
            }
        }
    }
}

/// Merged outliers plus the per-feature summaries
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutlierReport {
    outliers: Vec<i64>,
    features: Vec<FeatureReport>,
}

impl OutlierReport {
    /// Distinct outlier values across all features, first-seen order
    pub fn outliers(&self) -> &[i64] {
        &self.outliers
    }

    /// One report per requested feature, in request order
    pub fn features(&self) -> &[FeatureReport] {
        &self.features
    }

    /// Report for a feature by name
    pub fn feature(&self, name: &str) -> Option<&FeatureReport> {
        self.features.iter().find(|r| r.feature == name)
    }

    /// Human-readable summary line per feature
    pub fn summaries(&self) -> Vec<String> {
        self.features.iter().map(ToString::to_string).collect()
    }

    fn push(&mut self, report: FeatureReport) {
        for value in report.outcome.values() {
            if !self.outliers.contains(value) {
                self.outliers.push(*value);
            }
        }
        self.features.push(report);
    }
}

/// IQR outlier detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierDetector {
    fence: f64,
    method: QuantileMethod,
}

impl Default for OutlierDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlierDetector {
    /// Tukey fences at 1.5 IQR with linearly interpolated quartiles
    pub fn new() -> Self {
        Self {
            fence: DEFAULT_FENCE,
            method: QuantileMethod::Linear,
        }
    }

    /// Use a different fence multiplier
    pub fn with_fence(mut self, fence: f64) -> Result<Self> {
        if !fence.is_finite() || fence < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Fence multiplier {fence} must be finite and non-negative"
            )));
        }
        self.fence = fence;
        Ok(self)
    }

    /// Use a different quartile method
    pub fn with_method(mut self, method: QuantileMethod) -> Self {
        self.method = method;
        self
    }

    /// Fence multiplier in use
    pub fn fence(&self) -> f64 {
        self.fence
    }

    /// Quartile method in use
    pub fn method(&self) -> QuantileMethod {
        self.method
    }

    /// Inspect `features` of a wide table
    ///
    /// Cells that are missing or do not parse as numbers are excluded.
    #[instrument(skip(self, table), fields(rows = table.height()))]
    pub fn detect(&self, table: &WideTable, features: &[&str]) -> Result<OutlierReport> {
        let mut report = OutlierReport::default();
        for &feature in features {
            let outcome = match table.column(feature) {
                None => {
                    warn!(feature, "feature not found");
                    FeatureOutcome::NotFound
                }
                Some(column) => {
                    let values: Vec<f64> = column.iter().flatten().filter_map(parse_numeric).collect();
                    self.detect_values(&values)?
                }
            };
            let feature_report = FeatureReport {
                feature: feature.to_string(),
                outcome,
            };
            debug!("{feature_report}");
            report.push(feature_report);
        }
        Ok(report)
    }

    /// Inspect one numeric sample
    ///
    /// Non-finite values are ignored. Outliers whose truncated value does not
    /// fit in an `i64` are logged and left out of the list.
    pub fn detect_values(&self, values: &[f64]) -> Result<FeatureOutcome> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Ok(FeatureOutcome::NoNumericData);
        }

        let mut sorted = finite.clone();
        let fences = IqrFences::compute(&mut sorted, &self.method, self.fence)?;

        let mut outliers: Vec<i64> = Vec::new();
        for value in finite.into_iter().filter(|v| fences.is_outlier(*v)) {
            let truncated = value.trunc();
            // i64 covers [-2^63, 2^63); `as` would saturate outside it
            if !(truncated >= i64::MIN as f64 && truncated < i64::MAX as f64) {
                warn!(value, "outlier outside the integer range, skipped");
                continue;
            }
            let truncated = truncated as i64;
            if !outliers.contains(&truncated) {
                outliers.push(truncated);
            }
        }

        Ok(if outliers.is_empty() {
            FeatureOutcome::NoOutliers { fences }
        } else {
            FeatureOutcome::Outliers {
                fences,
                values: outliers,
            }
        })
    }
}
