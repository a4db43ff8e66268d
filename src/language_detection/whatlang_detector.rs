//! Whatlang-based language detector
//!
//! Uses the whatlang crate for fast, trigram-based language detection.
//! This backs the "traditional" strategy.

use crate::{types::Strategy, Error, Result};
use whatlang::Detector;

use super::TraditionalClassifier;

/// Whatlang-based language detector
pub struct WhatlangDetector {
    detector: Detector,
}

impl WhatlangDetector {
    /// Create a new Whatlang detector
    pub fn new() -> Self {
        tracing::info!("Initializing Whatlang language detector");
        Self {
            detector: Detector::new(),
        }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl TraditionalClassifier for WhatlangDetector {
    fn classify(&self, text: &str) -> Result<(String, f64)> {
        let info = self.detector.detect(text).ok_or_else(|| {
            Error::classification(Strategy::Traditional, "no language features found in text")
        })?;

        let code = iso_639_1(info.lang().code());
        Ok((code.to_string(), info.confidence()))
    }
}

/// Map whatlang's ISO 639-3 codes onto ISO 639-1 where one exists.
fn iso_639_1(code: &'static str) -> &'static str {
    match code {
        "afr" => "af",
        "aka" => "ak",
        "amh" => "am",
        "ara" => "ar",
        "aze" => "az",
        "bel" => "be",
        "ben" => "bn",
        "bul" => "bg",
        "cat" => "ca",
        "ces" => "cs",
        "cmn" => "zh", // whatlang uses Cmn for Mandarin
        "cym" => "cy",
        "dan" => "da",
        "deu" => "de",
        "ell" => "el",
        "eng" => "en",
        "epo" => "eo",
        "est" => "et",
        "fin" => "fi",
        "fra" => "fr",
        "guj" => "gu",
        "heb" => "he",
        "hin" => "hi",
        "hrv" => "hr",
        "hun" => "hu",
        "hye" => "hy",
        "ind" => "id",
        "ita" => "it",
        "jav" => "jv",
        "jpn" => "ja",
        "kan" => "kn",
        "kat" => "ka",
        "khm" => "km",
        "kor" => "ko",
        "lat" => "la",
        "lav" => "lv",
        "lit" => "lt",
        "mal" => "ml",
        "mar" => "mr",
        "mkd" => "mk",
        "mya" => "my",
        "nep" => "ne",
        "nld" => "nl",
        "nob" => "no",
        "ori" => "or",
        "pan" => "pa",
        "pes" => "fa",
        "pol" => "pl",
        "por" => "pt",
        "ron" => "ro",
        "rus" => "ru",
        "sin" => "si",
        "slk" => "sk",
        "slv" => "sl",
        "sna" => "sn",
        "spa" => "es",
        "srp" => "sr",
        "swe" => "sv",
        "tam" => "ta",
        "tel" => "te",
        "tgl" => "tl",
        "tha" => "th",
        "tuk" => "tk",
        "tur" => "tr",
        "ukr" => "uk",
        "urd" => "ur",
        "uzb" => "uz",
        "vie" => "vi",
        "yid" => "yi",
        "zul" => "zu",
        // Fallback to 3-letter code if not explicitly mapped
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detector_creation() {
        let detector = WhatlangDetector::new();
        let (code, confidence) = detector
            .classify("This is a longer English sentence to ensure correct detection.")
            .unwrap();
        assert_eq!(code, "en");
        assert!((0.0..=1.0).contains(&confidence));

        let (code_fr, _) = detector
            .classify("Bonjour tout le monde, comment allez-vous aujourd'hui?")
            .unwrap();
        assert_eq!(code_fr, "fr");
    }

    #[test]
    fn test_no_letters_is_an_error() {
        let detector = WhatlangDetector::new();
        let err = detector.classify("1234 5678 !!!").unwrap_err();
        assert!(err.to_string().starts_with("Traditional detection failed"));
    }

    #[test]
    fn test_iso_mapping() {
        assert_eq!(iso_639_1("deu"), "de");
        assert_eq!(iso_639_1("pes"), "fa");
        assert_eq!(iso_639_1("xyz"), "xyz");
    }
}
