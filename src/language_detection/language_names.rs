//! ISO 639-1 code to display name lookup

use std::collections::HashMap;
use std::sync::OnceLock;

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("nl", "Dutch"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("no", "Norwegian"),
    ("fi", "Finnish"),
    ("pl", "Polish"),
    ("cs", "Czech"),
    ("hu", "Hungarian"),
    ("tr", "Turkish"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("tl", "Filipino"),
    ("sw", "Swahili"),
    ("am", "Amharic"),
    ("he", "Hebrew"),
    ("fa", "Persian"),
    ("ur", "Urdu"),
    ("bn", "Bengali"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("ml", "Malayalam"),
    ("kn", "Kannada"),
    ("gu", "Gujarati"),
    ("pa", "Punjabi"),
    ("or", "Odia"),
    ("as", "Assamese"),
    ("mr", "Marathi"),
    ("ne", "Nepali"),
    ("si", "Sinhala"),
    ("my", "Myanmar"),
    ("km", "Khmer"),
    ("lo", "Lao"),
    ("ka", "Georgian"),
    ("hy", "Armenian"),
    ("az", "Azerbaijani"),
    ("kk", "Kazakh"),
    ("ky", "Kyrgyz"),
    ("uz", "Uzbek"),
    ("tk", "Turkmen"),
    ("mn", "Mongolian"),
    ("bo", "Tibetan"),
    ("dz", "Dzongkha"),
    ("eu", "Basque"),
    ("ca", "Catalan"),
    ("gl", "Galician"),
    ("cy", "Welsh"),
    ("ga", "Irish"),
    ("gd", "Scottish Gaelic"),
    ("is", "Icelandic"),
    ("mt", "Maltese"),
    ("sq", "Albanian"),
    ("mk", "Macedonian"),
    ("bg", "Bulgarian"),
    ("hr", "Croatian"),
    ("sr", "Serbian"),
    ("bs", "Bosnian"),
    ("sl", "Slovenian"),
    ("sk", "Slovak"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("et", "Estonian"),
    ("ro", "Romanian"),
    ("el", "Greek"),
    ("uk", "Ukrainian"),
    ("be", "Belarusian"),
];

static NAME_TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, &'static str> {
    NAME_TABLE.get_or_init(|| LANGUAGE_NAMES.iter().copied().collect())
}

/// Get the display name for a language code.
///
/// Unknown codes fall back to the uppercased code itself. An empty code
/// resolves to `"UNKNOWN"` so the result is never empty.
pub fn resolve_name(code: &str) -> String {
    match table().get(code) {
        Some(name) => (*name).to_string(),
        None if code.is_empty() => "UNKNOWN".to_string(),
        None => code.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(resolve_name("en"), "English");
        assert_eq!(resolve_name("gd"), "Scottish Gaelic");
        assert_eq!(resolve_name("be"), "Belarusian");
    }

    #[test]
    fn test_unknown_code_falls_back_to_uppercase() {
        assert_eq!(resolve_name("xx"), "XX");
        assert_eq!(resolve_name("epo"), "EPO");
    }

    #[test]
    fn test_resolve_is_total() {
        for code in ["", "a", "zz", "la", "en"] {
            assert!(!resolve_name(code).is_empty(), "empty name for {:?}", code);
        }
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        assert_eq!(table().len(), LANGUAGE_NAMES.len());
    }
}
