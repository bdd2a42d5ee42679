//! Quality review stage: grammar estimate, keyword density, plagiarism
//! risk, and improvement suggestions.

use anyhow::{Context, Result};
use openai_client::TextGenerator;
use seo_pipeline_sdk::{log_agent_complete, log_agent_start};
use std::collections::{HashMap, HashSet};

use crate::pipeline::metrics;
use crate::pipeline::parse::{char_prefix, parse_grammar_score, parse_risk_label};
use crate::pipeline::types::{Article, QualityReport, RiskLevel};

const STAGE_ID: &str = "quality";

/// Reviews a finished article.
///
/// The density map is recomputed here rather than reusing the writing
/// stage's internal calculation; the report's map is the authoritative one.
pub struct QualityStage<'a> {
    generator: &'a dyn TextGenerator,
}

impl<'a> QualityStage<'a> {
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self { generator }
    }

    /// Run the full quality review for an article
    pub async fn run(&self, article: &Article) -> Result<QualityReport> {
        let grammar_score = self.check_grammar(&article.content).await?;
        let keyword_density = metrics::keyword_density(&article.content, &article.keywords);
        let plagiarism_risk = self.check_plagiarism_risk(&article.content).await?;
        let suggestions = build_suggestions(article, &keyword_density);

        Ok(QualityReport {
            grammar_score,
            readability_score: article.readability_score,
            keyword_density,
            plagiarism_risk,
            suggestions,
        })
    }

    async fn check_grammar(&self, content: &str) -> Result<f64> {
        log_agent_start!(STAGE_ID, "Grammar Reviewer", "Rating grammar quality");

        let system_prompt = "Analyze the text for grammar, spelling, and style issues. \
Rate the overall quality from 0-100.";

        let prompt = format!(
            "Analyze this content for grammar quality:\n\n{}...",
            char_prefix(content, 1000)
        );

        let response = self
            .generator
            .generate(system_prompt, &prompt)
            .await
            .context("Grammar rating call failed")?;

        let score = parse_grammar_score(&response);
        log_agent_complete!(STAGE_ID, "Grammar Reviewer", format!("{:.0}/100", score));
        Ok(score)
    }

    async fn check_plagiarism_risk(&self, content: &str) -> Result<RiskLevel> {
        log_agent_start!(STAGE_ID, "Originality Reviewer", "Assessing plagiarism risk");

        let system_prompt = "Assess if this content appears to be original or potentially \
plagiarized. Return: 'Low', 'Medium', or 'High' risk.";

        let prompt = format!(
            "Assess plagiarism risk for:\n\n{}...",
            char_prefix(content, 500)
        );

        let response = self
            .generator
            .generate(system_prompt, &prompt)
            .await
            .context("Plagiarism assessment call failed")?;

        log_agent_complete!(STAGE_ID, "Originality Reviewer");
        Ok(parse_risk_label(&response, RiskLevel::Low))
    }
}

/// Rule-based improvement suggestions; no generation call.
fn build_suggestions(article: &Article, density: &HashMap<String, f64>) -> Vec<String> {
    let mut suggestions = Vec::new();

    if article.readability_score < 60.0 {
        suggestions.push("Consider simplifying sentences for better readability".to_string());
    }

    // One suggestion per offending keyword, in article keyword order.
    let mut seen = HashSet::new();
    for keyword in &article.keywords {
        if !seen.insert(keyword) {
            continue;
        }
        if let Some(&value) = density.get(keyword) {
            if value > 3.0 {
                suggestions.push(format!(
                    "Reduce keyword density for '{}' - currently {:.1}%",
                    keyword, value
                ));
            }
        }
    }

    if article.word_count < 1000 {
        suggestions.push("Consider expanding content for better SEO performance".to_string());
    }

    suggestions
}
