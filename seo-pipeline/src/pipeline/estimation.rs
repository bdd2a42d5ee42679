//! Performance estimation stage: ranking bucket, traffic potential,
//! competition level, and success probability.

use anyhow::{Context, Result};
use openai_client::TextGenerator;
use seo_pipeline_sdk::{log_agent_complete, log_agent_start};

use crate::pipeline::parse::parse_risk_label;
use crate::pipeline::types::{Article, PerformanceEstimate, QualityReport, RiskLevel};

const STAGE_ID: &str = "estimation";

/// Estimates how an article will perform in search.
pub struct EstimationStage<'a> {
    generator: &'a dyn TextGenerator,
}

impl<'a> EstimationStage<'a> {
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self { generator }
    }

    /// Run the full estimation stage for an article and its quality report
    pub async fn run(
        &self,
        article: &Article,
        quality_report: &QualityReport,
    ) -> Result<PerformanceEstimate> {
        let estimated_ranking = estimate_ranking(article, quality_report);
        let traffic_potential = estimate_traffic(article);
        let competition_level = self.assess_competition(&article.keywords).await?;
        let success_probability =
            success_probability(article, quality_report, estimated_ranking);

        Ok(PerformanceEstimate {
            estimated_ranking,
            traffic_potential,
            competition_level,
            success_probability,
        })
    }

    async fn assess_competition(&self, keywords: &[String]) -> Result<RiskLevel> {
        log_agent_start!(STAGE_ID, "Competition Analyst", "Assessing keyword competition");

        let system_prompt = "Assess the competition level for these keywords in SEO. \
Return: 'Low', 'Medium', or 'High'.";

        let prompt = format!("Keywords: {}", keywords.join(", "));

        let response = self
            .generator
            .generate(system_prompt, &prompt)
            .await
            .context("Competition assessment call failed")?;

        log_agent_complete!(STAGE_ID, "Competition Analyst");
        Ok(parse_risk_label(&response, RiskLevel::Medium))
    }
}

/// Weighted quality composite bucketed into fixed ranking positions.
///
/// Composite = 0.4·seo + 0.2·grammar + 0.2·readability +
/// 0.2·(100 − Σ densities). The density term subtracts the SUM across
/// keywords, so articles targeting many keywords are penalized more than an
/// average would — kept as-is (see DESIGN.md).
pub fn estimate_ranking(article: &Article, quality_report: &QualityReport) -> u32 {
    let density_sum: f64 = quality_report.keyword_density.values().sum();

    let base_score = article.seo_score * 0.4
        + quality_report.grammar_score * 0.2
        + quality_report.readability_score * 0.2
        + (100.0 - density_sum) * 0.2;

    if base_score >= 90.0 {
        1
    } else if base_score >= 80.0 {
        3
    } else if base_score >= 70.0 {
        7
    } else if base_score >= 60.0 {
        15
    } else {
        25
    }
}

/// Word count doubled, scaled by the SEO score, truncated to an integer.
pub fn estimate_traffic(article: &Article) -> u32 {
    let base_traffic = article.word_count as f64 * 2.0;
    (base_traffic * (article.seo_score / 100.0)) as u32
}

/// Mean of the three quality scores scaled by a ranking factor, held to
/// [0, 95]. Pure function of its inputs.
pub fn success_probability(
    article: &Article,
    quality_report: &QualityReport,
    ranking: u32,
) -> f64 {
    let quality_score = (article.seo_score
        + quality_report.grammar_score
        + quality_report.readability_score)
        / 3.0;

    let ranking_factor = ((51.0 - ranking as f64) / 50.0).max(0.0);

    ((quality_score / 100.0) * ranking_factor * 100.0).clamp(0.0, 95.0)
}
