//! Pure parsers for free-text model responses.
//!
//! Generation output is parsed best-effort: every routine here is total and
//! falls back to a documented default instead of returning an error. Each
//! parser is a pure function so crafted response strings can exercise it
//! directly.

use crate::pipeline::types::{CompetitorInsight, InsightType, RiskLevel};

/// Fallback grammar score when a rating response carries no numeric token
pub const DEFAULT_GRAMMAR_SCORE: f64 = 85.0;

/// Split a comma-separated keyword list, trimming each token.
///
/// Empty tokens are preserved: a trailing comma yields an empty keyword.
pub fn split_keyword_list(text: &str) -> Vec<String> {
    text.split(',').map(|kw| kw.trim().to_string()).collect()
}

/// Parse a numbered-list response into items, one per non-blank line.
///
/// A leading `"N. "` prefix is stripped by keeping the remainder after the
/// first `". "` occurrence; lines without one are kept whole.
pub fn parse_numbered_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(". ") {
            Some((_, rest)) => rest.to_string(),
            None => line.to_string(),
        })
        .collect()
}

/// Zip the first three response lines with the fixed insight labels.
///
/// Lines are taken raw from a newline split (blank lines included) and
/// trimmed into the description. Fewer than three lines produce fewer
/// insights.
pub fn parse_competitor_insights(text: &str) -> Vec<CompetitorInsight> {
    let labels = [
        InsightType::Strategy,
        InsightType::ContentGap,
        InsightType::KeywordFocus,
    ];

    text.split('\n')
        .take(3)
        .zip(labels)
        .map(|(line, insight_type)| CompetitorInsight {
            insight_type,
            description: line.trim().to_string(),
        })
        .collect()
}

/// Extract a 0-100 quality score from a free-text rating response.
///
/// Takes the last whitespace token made of digits and dots (at least one
/// digit). A token that does not parse as a number, or a response with no
/// candidate at all, falls back to [`DEFAULT_GRAMMAR_SCORE`]. The result is
/// clamped to [0, 100].
pub fn parse_grammar_score(text: &str) -> f64 {
    let candidate = text
        .split_whitespace()
        .filter(|token| token.chars().all(|c| c.is_ascii_digit() || c == '.'))
        .filter(|token| token.chars().any(|c| c.is_ascii_digit()))
        .last();

    match candidate.and_then(|token| token.parse::<f64>().ok()) {
        Some(score) => score.clamp(0.0, 100.0),
        None => DEFAULT_GRAMMAR_SCORE,
    }
}

/// Scan a response for a risk/competition label.
///
/// Case-insensitive substring scan in the fixed order Low → Medium → High;
/// the first label found wins and `default` is returned when none appears.
pub fn parse_risk_label(text: &str, default: RiskLevel) -> RiskLevel {
    let lower = text.to_lowercase();
    for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
        if lower.contains(level.needle()) {
            return level;
        }
    }
    default
}

/// First `n` characters of a text (character, not byte, boundaries)
pub fn char_prefix(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}
