//! Lingua-based language detector (High accuracy, slower)
//!
//! Uses the lingua crate's pre-trained n-gram models. This backs the
//! "pretrained" strategy and yields a ranked list of candidates.

use crate::{types::Strategy, Error, Result};
use lingua::{LanguageDetector, LanguageDetectorBuilder};

use super::PretrainedClassifier;

/// Lingua-based language detector
pub struct LinguaDetector {
    detector: LanguageDetector,
}

impl LinguaDetector {
    /// Create a new Lingua detector over every supported language.
    ///
    /// Models are loaded lazily on first use unless `preload` is set.
    pub fn new(preload: bool) -> Self {
        tracing::info!(preload, "Initializing Lingua language detector");

        let mut builder = LanguageDetectorBuilder::from_all_languages();
        if preload {
            builder.with_preloaded_language_models();
        }

        Self {
            detector: builder.build(),
        }
    }
}

impl PretrainedClassifier for LinguaDetector {
    fn classify(&self, text: &str) -> Result<Vec<(String, f64)>> {
        let ranked: Vec<(String, f64)> = self
            .detector
            .compute_language_confidence_values(text)
            .into_iter()
            .filter(|(_, confidence)| *confidence > 0.0)
            .map(|(lang, confidence)| (lang.iso_code_639_1().to_string(), confidence))
            .collect();

        if ranked.is_empty() {
            return Err(Error::classification(
                Strategy::Pretrained,
                "no language features found in text",
            ));
        }

        Ok(ranked)
    }
}
