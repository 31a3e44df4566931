//! Analysis configuration
//!
//! Every field has a default, so a partial JSON document only overrides what
//! it names:
//!
//! ```json
//! {
//!   "outliers": { "fence": 3.0 },
//!   "prevalence": { "top_n": 5, "confidence_level": 0.95 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use survey_confidence::{ConfidenceLevel, PrevalenceEstimator, DEFAULT_TOP_N, DEFAULT_Z};
use survey_core::{AnswerCoercer, CoercionStrategy, Error, OrdinalMapping, Result};
use survey_effect::{CorrelationBuilder, PairedComparison};
use survey_quantile::QuantileMethod;
use survey_spread::{OutlierDetector, DEFAULT_FENCE};
use tracing::debug;

/// Tukey fence settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierConfig {
    pub fence: f64,
    pub method: QuantileMethod,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            fence: DEFAULT_FENCE,
            method: QuantileMethod::default(),
        }
    }
}

/// Prevalence settings; at most one of `confidence_level` and `z` may be set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrevalenceConfig {
    pub top_n: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<ConfidenceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Default for PrevalenceConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            confidence_level: None,
            z: None,
        }
    }
}

/// Settings for a full survey analysis
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub mapping: OrdinalMapping,
    pub coercion: CoercionStrategy,
    pub outliers: OutlierConfig,
    pub prevalence: PrevalenceConfig,
}

impl AnalysisConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        debug!(
            mapping_entries = config.mapping.len(),
            fence = config.outliers.fence,
            top_n = config.prevalence.top_n,
            "loaded analysis config"
        );
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn coercer(&self) -> AnswerCoercer {
        AnswerCoercer::new(self.mapping.clone(), self.coercion.clone())
    }

    pub fn outlier_detector(&self) -> Result<OutlierDetector> {
        OutlierDetector::new()
            .with_fence(self.outliers.fence)
            .map(|detector| detector.with_method(self.outliers.method))
    }

    pub fn prevalence_estimator(&self) -> Result<PrevalenceEstimator> {
        let estimator = PrevalenceEstimator::new().with_top_n(self.prevalence.top_n)?;
        match (self.prevalence.confidence_level, self.prevalence.z) {
            (Some(_), Some(_)) => Err(Error::InvalidParameter(
                "Set either prevalence.confidence_level or prevalence.z, not both".to_string(),
            )),
            (Some(level), None) => estimator.with_confidence_level(level),
            (None, Some(z)) => estimator.with_z(z),
            (None, None) => estimator.with_z(DEFAULT_Z),
        }
    }

    pub fn correlation_builder(&self) -> CorrelationBuilder {
        CorrelationBuilder::new(self.coercer())
    }

    pub fn paired_comparison(&self) -> PairedComparison {
        PairedComparison::new(self.coercer())
    }
}
