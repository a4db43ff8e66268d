//! Character n-gram statistics
//!
//! Purely descriptive: counts are reported alongside the traditional
//! result and never feed back into classification.

use std::collections::HashMap;

use crate::types::NgramAnalysis;

/// Lowercase, trim and collapse every whitespace run to a single space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Extract overlapping character n-grams from normalized text.
pub fn extract_character_ngrams(text: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = normalize(text).chars().collect();
    chars
        .windows(n)
        .map(|window| window.iter().collect())
        .collect()
}

/// The `limit` most frequent n-grams. Ties keep first-occurrence order.
pub fn most_common(ngrams: &[String], limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, ngram) in ngrams.iter().enumerate() {
        counts.entry(ngram.as_str()).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(ngram, (count, first_seen))| (ngram, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(ngram, count, _)| (ngram.to_string(), count))
        .collect()
}

fn unique_count(ngrams: &[String]) -> usize {
    ngrams
        .iter()
        .map(String::as_str)
        .collect::<std::collections::HashSet<_>>()
        .len()
}

/// Bigram and trigram summary over `text`.
pub fn analyze(text: &str, top: usize) -> NgramAnalysis {
    let bigrams = extract_character_ngrams(text, 2);
    let trigrams = extract_character_ngrams(text, 3);

    NgramAnalysis {
        total_bigrams: bigrams.len(),
        unique_bigrams: unique_count(&bigrams),
        total_trigrams: trigrams.len(),
        unique_trigrams: unique_count(&trigrams),
        common_bigrams: most_common(&bigrams, top),
        common_trigrams: most_common(&trigrams, top),
    }
}
