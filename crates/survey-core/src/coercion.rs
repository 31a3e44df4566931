//! Answer coercion: free-text survey answers to numbers
//!
//! Categorical answers are mapped onto a three-point ordinal scale
//! (0, 0.5, 1) through an [`OrdinalMapping`]. Answers that are already
//! numeric pass through verbatim. Everything else is a coercion gap and
//! stays missing; a gap is never defaulted to 0.
//!
//! The order in which mapping and numeric parsing are tried is an explicit
//! [`CoercionStrategy`].
//!
//! # Example
//!
//! ```rust
//! use survey_core::{AnswerCoercer, Coercion, OrdinalValue};
//!
//! let coercer = AnswerCoercer::default();
//! assert_eq!(coercer.coerce(Some("Yes, all of them")), Coercion::Ordinal(OrdinalValue::Affirmative));
//! assert_eq!(coercer.coerce(Some("42")), Coercion::Numeric(42.0));
//! assert_eq!(coercer.coerce(Some("I don't know")), Coercion::Undefined);
//! assert_eq!(coercer.coerce(None).value(), None);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A point on the three-level ordinal answer scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrdinalValue {
    /// "No", "None of them"
    Negative,
    /// "Some did", "Maybe"
    Partial,
    /// "Yes", "Yes, all of them"
    Affirmative,
}

impl OrdinalValue {
    /// All levels in ascending order
    pub const LEVELS: [OrdinalValue; 3] = [Self::Negative, Self::Partial, Self::Affirmative];

    /// Numeric value on the 0..=1 scale
    pub fn value(self) -> f64 {
        match self {
            Self::Negative => 0.0,
            Self::Partial => 0.5,
            Self::Affirmative => 1.0,
        }
    }

    /// Short axis label for the level
    pub fn label(self) -> &'static str {
        match self {
            Self::Negative => "No",
            Self::Partial => "Some",
            Self::Affirmative => "Yes",
        }
    }
}

impl fmt::Display for OrdinalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable lookup from answer text to an ordinal level
///
/// Matching is exact (case and whitespace sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrdinalMapping {
    entries: BTreeMap<String, OrdinalValue>,
}

impl OrdinalMapping {
    /// An empty mapping
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace an entry
    pub fn with_entry(mut self, text: impl Into<String>, value: OrdinalValue) -> Self {
        self.entries.insert(text.into(), value);
        self
    }

    /// Look up an answer
    pub fn get(&self, text: &str) -> Option<OrdinalValue> {
        self.entries.get(text).copied()
    }

    /// Number of mapped phrasings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is mapped
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the mapped phrasings
    pub fn iter(&self) -> impl Iterator<Item = (&str, OrdinalValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Default for OrdinalMapping {
    fn default() -> Self {
        use OrdinalValue::{Affirmative, Negative, Partial};
        Self::empty()
            .with_entry("Yes", Affirmative)
            .with_entry("Yes, all of them", Affirmative)
            .with_entry("No", Negative)
            .with_entry("None of them", Negative)
            .with_entry("Some did", Partial)
            .with_entry("Some of them", Partial)
            .with_entry("Maybe", Partial)
    }
}

/// Outcome of coercing a single answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coercion {
    /// The answer matched the ordinal mapping
    Ordinal(OrdinalValue),
    /// The answer was numeric text
    Numeric(f64),
    /// Null answer or text that neither maps nor parses
    Undefined,
}

impl Coercion {
    /// The numeric value, `None` for a coercion gap
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Ordinal(level) => Some(level.value()),
            Self::Numeric(value) => Some(value),
            Self::Undefined => None,
        }
    }

    /// True for a coercion gap
    pub fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }
}

/// One step of a coercion strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoercionStep {
    /// Look the text up in the ordinal mapping
    MapOrdinal,
    /// Parse the text as a finite number
    ParseNumeric,
}

/// Ordered list of coercion steps; the first step that yields a value wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CoercionStep>", into = "Vec<CoercionStep>")]
pub struct CoercionStrategy {
    steps: Vec<CoercionStep>,
}

impl CoercionStrategy {
    /// Build a strategy from explicit steps
    pub fn new(steps: Vec<CoercionStep>) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::InvalidParameter(
                "Coercion strategy needs at least one step".to_string(),
            ));
        }
        Ok(Self { steps })
    }

    /// Mapping only: numeric text becomes missing
    pub fn ordinal_only() -> Self {
        Self {
            steps: vec![CoercionStep::MapOrdinal],
        }
    }

    /// Numeric parsing only: categorical text becomes missing
    pub fn numeric_only() -> Self {
        Self {
            steps: vec![CoercionStep::ParseNumeric],
        }
    }

    /// The steps in evaluation order
    pub fn steps(&self) -> &[CoercionStep] {
        &self.steps
    }
}

impl Default for CoercionStrategy {
    /// Mapped value, else the original text parsed as a number, else missing
    fn default() -> Self {
        Self {
            steps: vec![CoercionStep::MapOrdinal, CoercionStep::ParseNumeric],
        }
    }
}

impl TryFrom<Vec<CoercionStep>> for CoercionStrategy {
    type Error = Error;

    fn try_from(steps: Vec<CoercionStep>) -> Result<Self> {
        Self::new(steps)
    }
}

impl From<CoercionStrategy> for Vec<CoercionStep> {
    fn from(strategy: CoercionStrategy) -> Self {
        strategy.steps
    }
}

/// Parse answer text as a finite number
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected so
/// they can never leak into downstream means or quantiles.
pub fn parse_numeric(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Pure per-answer coercion with an injected mapping and strategy
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnswerCoercer {
    mapping: OrdinalMapping,
    strategy: CoercionStrategy,
}

impl AnswerCoercer {
    /// Create a coercer
    pub fn new(mapping: OrdinalMapping, strategy: CoercionStrategy) -> Self {
        Self { mapping, strategy }
    }

    /// Same mapping, different strategy
    pub fn with_strategy(mut self, strategy: CoercionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The mapping in use
    pub fn mapping(&self) -> &OrdinalMapping {
        &self.mapping
    }

    /// The strategy in use
    pub fn strategy(&self) -> &CoercionStrategy {
        &self.strategy
    }

    /// Coerce one answer
    pub fn coerce(&self, answer: Option<&str>) -> Coercion {
        let Some(text) = answer else {
            return Coercion::Undefined;
        };
        for step in &self.strategy.steps {
            let coerced = match step {
                CoercionStep::MapOrdinal => self.mapping.get(text).map(Coercion::Ordinal),
                CoercionStep::ParseNumeric => parse_numeric(text).map(Coercion::Numeric),
            };
            if let Some(coerced) = coerced {
                return coerced;
            }
        }
        Coercion::Undefined
    }

    /// Coerce one answer straight to its numeric value
    pub fn coerce_value(&self, answer: Option<&str>) -> Option<f64> {
        self.coerce(answer).value()
    }

    /// Coerce a sequence of answers
    pub fn coerce_all<'a, I>(&self, answers: I) -> Vec<Option<f64>>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        answers.into_iter().map(|a| self.coerce_value(a)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_declared_domain() {
        let coercer = AnswerCoercer::default();
        for yes in ["Yes", "Yes, all of them"] {
            assert_eq!(coercer.coerce_value(Some(yes)), Some(1.0));
        }
        for no in ["No", "None of them"] {
            assert_eq!(coercer.coerce_value(Some(no)), Some(0.0));
        }
        for some in ["Some did", "Some of them", "Maybe"] {
            assert_eq!(coercer.coerce_value(Some(some)), Some(0.5));
        }
    }

    #[test]
    fn test_null_is_undefined_not_zero() {
        let coercer = AnswerCoercer::default();
        assert_eq!(coercer.coerce(None), Coercion::Undefined);
        assert_eq!(coercer.coerce_value(None), None);
    }

    #[test]
    fn test_numeric_pass_through() {
        let coercer = AnswerCoercer::default();
        assert_eq!(coercer.coerce(Some("37")), Coercion::Numeric(37.0));
        assert_eq!(coercer.coerce(Some(" 2.5 ")), Coercion::Numeric(2.5));
        assert_eq!(coercer.coerce(Some("-1")), Coercion::Numeric(-1.0));
    }

    #[test]
    fn test_decimal_answers_parse() {
        let coercer = AnswerCoercer::default();
        let values = coercer.coerce_all([Some("0.1"), Some("1e-3"), Some("  37.25"), Some("-0.7")]);
        let expected = [0.1, 0.001, 37.25, -0.7];
        for (value, expected) in values.into_iter().zip(expected) {
            assert_relative_eq!(value.unwrap(), expected);
        }
        let mean: f64 = [Some("0.5"), Some("Maybe"), Some("Yes")]
            .into_iter()
            .filter_map(|a| coercer.coerce_value(a))
            .sum::<f64>()
            / 3.0;
        assert_relative_eq!(mean, 2.0 / 3.0);
    }

    #[test]
    fn test_unmapped_text_is_gap() {
        let coercer = AnswerCoercer::default();
        assert!(coercer.coerce(Some("I don't know")).is_undefined());
        assert!(coercer.coerce(Some("yes")).is_undefined());
        assert!(coercer.coerce(Some("NaN")).is_undefined());
        assert!(coercer.coerce(Some("inf")).is_undefined());
        assert!(coercer.coerce(Some("")).is_undefined());
    }

    #[test]
    fn test_strategies() {
        let ordinal = AnswerCoercer::default().with_strategy(CoercionStrategy::ordinal_only());
        assert_eq!(ordinal.coerce_value(Some("Maybe")), Some(0.5));
        assert_eq!(ordinal.coerce_value(Some("12")), None);

        let numeric = AnswerCoercer::default().with_strategy(CoercionStrategy::numeric_only());
        assert_eq!(numeric.coerce_value(Some("Maybe")), None);
        assert_eq!(numeric.coerce_value(Some("12")), Some(12.0));

        assert!(CoercionStrategy::new(vec![]).is_err());
    }

    #[test]
    fn test_mapping_precedence_over_parsing() {
        // A mapping may claim numeric-looking text; mapping runs first by default
        let mapping = OrdinalMapping::default().with_entry("1", OrdinalValue::Partial);
        let coercer = AnswerCoercer::new(mapping.clone(), CoercionStrategy::default());
        assert_eq!(coercer.coerce_value(Some("1")), Some(0.5));

        let reversed = AnswerCoercer::new(
            mapping,
            CoercionStrategy::new(vec![CoercionStep::ParseNumeric, CoercionStep::MapOrdinal]).unwrap(),
        );
        assert_eq!(reversed.coerce_value(Some("1")), Some(1.0));
    }

    #[test]
    fn test_mapping_serde_round_trip() {
        let json = r#"{"Often":"affirmative","Rarely":"partial","Never":"negative"}"#;
        let mapping: OrdinalMapping = serde_json::from_str(json).unwrap();
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get("Rarely"), Some(OrdinalValue::Partial));

        let strategy: CoercionStrategy = serde_json::from_str(r#"["parse_numeric"]"#).unwrap();
        assert_eq!(strategy, CoercionStrategy::numeric_only());
        assert!(serde_json::from_str::<CoercionStrategy>("[]").is_err());
    }

    #[test]
    fn test_coerce_all() {
        let coercer = AnswerCoercer::default();
        let values = coercer.coerce_all([Some("Yes"), None, Some("7"), Some("What?")]);
        assert_eq!(values, vec![Some(1.0), None, Some(7.0), None]);
    }

    proptest! {
        #[test]
        fn coercion_never_panics(text in ".*") {
            let coercer = AnswerCoercer::default();
            match coercer.coerce(Some(&text)) {
                Coercion::Ordinal(level) => prop_assert!(OrdinalValue::LEVELS.contains(&level)),
                Coercion::Numeric(v) => prop_assert!(v.is_finite()),
                Coercion::Undefined => {}
            }
        }

        #[test]
        fn mapped_answers_land_on_scale(idx in 0usize..7) {
            let mapping = OrdinalMapping::default();
            let (text, _) = mapping.iter().nth(idx).unwrap();
            let value = AnswerCoercer::default().coerce_value(Some(text)).unwrap();
            prop_assert!(value == 0.0 || value == 0.5 || value == 1.0);
        }
    }
}
