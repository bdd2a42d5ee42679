//! Local text analytics: word counts, keyword density, readability, and the
//! heuristic SEO score.
//!
//! Nothing here calls the generation boundary; every function is a pure
//! computation over the text it is given.

use std::collections::HashMap;

/// Number of whitespace-delimited tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keyword density in percent for each keyword.
///
/// Occurrences are non-overlapping case-insensitive substring matches.
/// Keywords absent from the text map to 0.0; with an empty text everything
/// maps to 0.0 (there is nothing to divide by).
pub fn keyword_density(content: &str, keywords: &[String]) -> HashMap<String, f64> {
    let content_lower = content.to_lowercase();
    let total_words = word_count(content);

    let mut density = HashMap::new();
    for keyword in keywords {
        let value = if total_words == 0 {
            0.0
        } else {
            let count = content_lower.matches(keyword.to_lowercase().as_str()).count();
            count as f64 / total_words as f64 * 100.0
        };
        density.insert(keyword.clone(), value);
    }
    density
}

/// Flesch reading ease:
/// `206.835 − 1.015·(words/sentences) − 84.6·(syllables/words)`.
///
/// Sentences are the `.`/`!`/`?`-delimited segments containing at least one
/// alphanumeric character (never fewer than one); syllables use a
/// vowel-group heuristic. An empty text scores 0.0.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
        .max(1);

    let syllables: usize = words.iter().map(|word| syllable_count(word)).sum();

    206.835
        - 1.015 * (words.len() as f64 / sentences as f64)
        - 84.6 * (syllables as f64 / words.len() as f64)
}

/// Heuristic syllable count: vowel groups, with a trailing silent `e`
/// discounted, never fewer than one.
fn syllable_count(word: &str) -> usize {
    let lower = word.to_lowercase();
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut count = 0;
    let mut prev_vowel = false;
    for c in lower.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if lower.ends_with('e') && !lower.ends_with("le") && count > 1 {
        count -= 1;
    }

    count.max(1)
}

/// Heuristic SEO score in [0, 100].
///
/// Per keyword: +20 for a density inside the 1–3% band (inclusive), +10 for
/// any other non-zero density, nothing when absent. +10 for an H2 heading
/// marker (`##` or `<h2>`), +10 for 1000+ words. The total is capped at 100
/// regardless of keyword count.
pub fn seo_score(content: &str, keywords: &[String]) -> f64 {
    let content_lower = content.to_lowercase();
    let total_words = word_count(content);

    let mut score: f64 = 0.0;
    for keyword in keywords {
        let density = if total_words == 0 {
            0.0
        } else {
            let count = content_lower.matches(keyword.to_lowercase().as_str()).count();
            count as f64 / total_words as f64
        };

        if (0.01..=0.03).contains(&density) {
            score += 20.0;
        } else if density > 0.0 {
            score += 10.0;
        }
    }

    if content_lower.contains("<h2>") || content.contains("##") {
        score += 10.0;
    }
    if total_words >= 1000 {
        score += 10.0;
    }

    score.min(100.0)
}
