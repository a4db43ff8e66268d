use crate::{
    config::DetectionConfig,
    types::{LanguageCandidate, PretrainedResult, Strategy, TraditionalResult},
    Error, Result,
};
use std::sync::Arc;

pub mod language_names;
pub mod lingua_detector;
pub mod ngram;
pub mod whatlang_detector;

pub use language_names::resolve_name;
pub use ngram::extract_character_ngrams;

const TRADITIONAL_LABEL: &str = "Traditional N-gram Analysis";
const PRETRAINED_LABEL: &str = "Pre-trained Model (Lingua)";

/// Single best guess from an n-gram classifier.
pub trait TraditionalClassifier: Send + Sync {
    /// Returns `(iso_code, confidence)` with confidence in `[0, 1]`.
    fn classify(&self, text: &str) -> Result<(String, f64)>;
}

/// Ranked guesses from a pre-trained probabilistic model.
pub trait PretrainedClassifier: Send + Sync {
    /// Returns `(iso_code, probability)` pairs, most likely first.
    fn classify(&self, text: &str) -> Result<Vec<(String, f64)>>;
}

/// Convert a `[0, 1]` score to a percentage with two decimals.
pub fn to_percentage(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    let percent = (score * 100.0).clamp(0.0, 100.0);
    (percent * 100.0).round() / 100.0
}

/// Detection facade over the two strategies
pub struct MultiDetector {
    traditional: Arc<dyn TraditionalClassifier>,
    pretrained: Arc<dyn PretrainedClassifier>,
    top_ngrams: usize,
    max_alternatives: usize,
}

impl MultiDetector {
    /// Build the facade from the whatlang and lingua backends
    pub fn new(config: &DetectionConfig) -> Self {
        tracing::info!("Initializing language detection");

        let traditional = Arc::new(whatlang_detector::WhatlangDetector::new());
        let pretrained = Arc::new(lingua_detector::LinguaDetector::new(
            config.preload_models,
        ));

        tracing::info!("Language detection initialized");

        Self::with_classifiers(traditional, pretrained, config)
    }

    /// Build the facade around arbitrary classifier backends
    pub fn with_classifiers(
        traditional: Arc<dyn TraditionalClassifier>,
        pretrained: Arc<dyn PretrainedClassifier>,
        config: &DetectionConfig,
    ) -> Self {
        Self {
            traditional,
            pretrained,
            top_ngrams: config.top_ngrams,
            max_alternatives: config.max_alternatives,
        }
    }

    /// Detect with the n-gram classifier and attach n-gram statistics
    pub fn classify_traditional(&self, text: &str) -> Result<TraditionalResult> {
        let (code, confidence) = self.traditional.classify(text)?;

        let analysis = ngram::analyze(text, self.top_ngrams);

        tracing::debug!(language = %code, confidence, "traditional detection");

        Ok(TraditionalResult {
            language: resolve_name(&code),
            language_code: code,
            confidence: to_percentage(confidence),
            method: TRADITIONAL_LABEL.to_string(),
            analysis,
        })
    }

    /// Detect with the pre-trained model and report ranked alternatives
    pub fn classify_pretrained(&self, text: &str) -> Result<PretrainedResult> {
        let ranked = self.pretrained.classify(text)?;

        let (code, probability) = ranked.first().cloned().ok_or_else(|| {
            Error::classification(Strategy::Pretrained, "model returned no candidates")
        })?;

        let alternatives = ranked
            .iter()
            .take(self.max_alternatives)
            .map(|(alt_code, alt_probability)| LanguageCandidate {
                language: resolve_name(alt_code),
                language_code: alt_code.clone(),
                confidence: to_percentage(*alt_probability),
            })
            .collect();

        tracing::debug!(language = %code, probability, candidates = ranked.len(), "pretrained detection");

        Ok(PretrainedResult {
            language: resolve_name(&code),
            language_code: code,
            confidence: to_percentage(probability),
            method: PRETRAINED_LABEL.to_string(),
            alternatives,
            total_candidates: ranked.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTraditional(&'static str, f64);

    impl TraditionalClassifier for FixedTraditional {
        fn classify(&self, _text: &str) -> Result<(String, f64)> {
            Ok((self.0.to_string(), self.1))
        }
    }

    struct FixedPretrained(Vec<(&'static str, f64)>);

    impl PretrainedClassifier for FixedPretrained {
        fn classify(&self, _text: &str) -> Result<Vec<(String, f64)>> {
            Ok(self
                .0
                .iter()
                .map(|(code, p)| (code.to_string(), *p))
                .collect())
        }
    }

    fn detector(traditional: FixedTraditional, pretrained: FixedPretrained) -> MultiDetector {
        MultiDetector::with_classifiers(
            Arc::new(traditional),
            Arc::new(pretrained),
            &DetectionConfig::default(),
        )
    }

    #[test]
    fn test_to_percentage() {
        assert_eq!(to_percentage(0.999_994), 100.0);
        assert_eq!(to_percentage(0.123_456), 12.35);
        assert_eq!(to_percentage(1.7), 100.0);
        assert_eq!(to_percentage(-0.2), 0.0);
        assert_eq!(to_percentage(f64::NAN), 0.0);
    }

    #[test]
    fn test_traditional_result_shape() {
        let d = detector(
            FixedTraditional("en", 0.87654),
            FixedPretrained(vec![("en", 1.0)]),
        );
        let result = d.classify_traditional("Hello world").unwrap();

        assert_eq!(result.language, "English");
        assert_eq!(result.language_code, "en");
        assert_eq!(result.confidence, 87.65);
        assert_eq!(result.method, TRADITIONAL_LABEL);
        assert_eq!(result.analysis.total_bigrams, 10);
        assert!(result.analysis.common_trigrams.len() <= 5);
    }

    #[test]
    fn test_unknown_code_is_uppercased() {
        let d = detector(
            FixedTraditional("eo", 0.5),
            FixedPretrained(vec![("la", 0.6), ("it", 0.4)]),
        );
        assert_eq!(d.classify_traditional("Saluton mondo").unwrap().language, "EO");
        assert_eq!(d.classify_pretrained("Lorem ipsum").unwrap().language, "LA");
    }

    #[test]
    fn test_pretrained_alternatives_are_capped() {
        let d = detector(
            FixedTraditional("en", 0.9),
            FixedPretrained(vec![
                ("es", 0.5),
                ("pt", 0.2),
                ("it", 0.1),
                ("fr", 0.1),
                ("ca", 0.05),
                ("gl", 0.03),
                ("ro", 0.02),
            ]),
        );
        let result = d.classify_pretrained("Hola amigos").unwrap();

        assert_eq!(result.language, "Spanish");
        assert_eq!(result.confidence, 50.0);
        assert_eq!(result.total_candidates, 7);
        assert_eq!(result.alternatives.len(), 5);
        assert_eq!(result.alternatives[0].language_code, "es");
        assert_eq!(result.alternatives[4].language, "Catalan");
        assert_eq!(result.method, PRETRAINED_LABEL);
    }

    #[test]
    fn test_empty_ranking_is_an_error() {
        let d = detector(FixedTraditional("en", 0.9), FixedPretrained(vec![]));
        let err = d.classify_pretrained("anything").unwrap_err();
        assert!(matches!(
            err,
            Error::Classification {
                strategy: Strategy::Pretrained,
                ..
            }
        ));
    }

    #[test]
    fn test_real_backends_agree_on_english() {
        let d = MultiDetector::new(&DetectionConfig::default());
        let text = "The quick brown fox jumps over the lazy dog while the children watch.";

        let traditional = d.classify_traditional(text).unwrap();
        let pretrained = d.classify_pretrained(text).unwrap();

        assert_eq!(traditional.language_code, "en");
        assert_eq!(pretrained.language_code, "en");
        assert_eq!(pretrained.language, "English");
        assert!(pretrained.confidence > 50.0);
    }

    #[test]
    fn test_real_backends_on_two_word_input() {
        let d = MultiDetector::new(&DetectionConfig::default());
        let two_decimals = |c: f64| (c * 100.0).round() / 100.0 == c;

        let traditional = d.classify_traditional("Hello world").unwrap();
        assert!(!traditional.language_code.is_empty());
        assert!(!traditional.language.is_empty());
        assert!((0.0..=100.0).contains(&traditional.confidence));
        assert!(two_decimals(traditional.confidence));
        assert_eq!(traditional.analysis.total_bigrams, 10);

        let pretrained = d.classify_pretrained("Hello world").unwrap();
        assert!(!pretrained.language.is_empty());
        assert!((0.0..=100.0).contains(&pretrained.confidence));
        assert!(two_decimals(pretrained.confidence));
        assert!(pretrained.alternatives.len() <= 5);
        assert!(pretrained.total_candidates >= pretrained.alternatives.len());
        assert_eq!(pretrained.alternatives[0].language_code, pretrained.language_code);
        assert!(pretrained
            .alternatives
            .iter()
            .all(|alt| (0.0..=100.0).contains(&alt.confidence) && two_decimals(alt.confidence)));
    }
}
