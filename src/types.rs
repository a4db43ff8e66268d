//! Core types and data structures

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Classification strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Character n-gram statistics (whatlang trigram profiles)
    Traditional,
    /// Pre-trained probabilistic model (lingua)
    Pretrained,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Traditional => f.write_str("Traditional"),
            Strategy::Pretrained => f.write_str("Pre-trained"),
        }
    }
}

/// Which strategies a request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    Traditional,
    Pretrained,
    #[default]
    Both,
    /// Any other value, including null or non-strings; selects no strategy
    #[serde(other)]
    Unrecognized,
}

impl DetectionMethod {
    /// Parse a method name; unknown names are `Unrecognized`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "traditional" => DetectionMethod::Traditional,
            "pretrained" => DetectionMethod::Pretrained,
            "both" => DetectionMethod::Both,
            _ => DetectionMethod::Unrecognized,
        }
    }
}

/// Accept any JSON value for `method`, mapping non-matching ones to `Unrecognized`
fn lenient_method<'de, D>(deserializer: D) -> Result<DetectionMethod, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(DetectionMethod::from_name)
        .unwrap_or(DetectionMethod::Unrecognized))
}

impl DetectionMethod {
    /// Whether this method runs the given strategy.
    pub fn includes(self, strategy: Strategy) -> bool {
        matches!(
            (self, strategy),
            (DetectionMethod::Both, _)
                | (DetectionMethod::Traditional, Strategy::Traditional)
                | (DetectionMethod::Pretrained, Strategy::Pretrained)
        )
    }
}

/// Body of `POST /detect`
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_method")]
    pub method: DetectionMethod,
}

/// Result of the traditional n-gram strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraditionalResult {
    pub language: String,
    pub language_code: String,
    /// Percentage in [0, 100], two decimals
    pub confidence: f64,
    pub method: String,
    pub analysis: NgramAnalysis,
}

/// Descriptive character n-gram statistics; informational only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramAnalysis {
    pub total_bigrams: usize,
    pub unique_bigrams: usize,
    pub total_trigrams: usize,
    pub unique_trigrams: usize,
    pub common_bigrams: Vec<(String, usize)>,
    pub common_trigrams: Vec<(String, usize)>,
}

/// Result of the pre-trained model strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PretrainedResult {
    pub language: String,
    pub language_code: String,
    pub confidence: f64,
    pub method: String,
    pub alternatives: Vec<LanguageCandidate>,
    pub total_candidates: usize,
}

/// One ranked candidate language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageCandidate {
    pub language: String,
    pub language_code: String,
    pub confidence: f64,
}

/// Per-strategy outcome; a failure serializes as `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrategyOutcome<T> {
    Failed { error: String },
    Ok(T),
}

impl<T> From<crate::Result<T>> for StrategyOutcome<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(value) => StrategyOutcome::Ok(value),
            Err(e) => StrategyOutcome::Failed {
                error: e.to_string(),
            },
        }
    }
}

/// Response of `POST /detect`, keyed by the strategies that ran
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traditional: Option<StrategyOutcome<TraditionalResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretrained: Option<StrategyOutcome<PretrainedResult>>,
}
