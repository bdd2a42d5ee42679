//! Market research stage: trending keywords, competitor insights, and
//! synthetic search metrics for a business profile.

use anyhow::{Context, Result};
use openai_client::TextGenerator;
use rand::Rng;
use seo_pipeline_sdk::{log_agent_complete, log_agent_start};
use std::collections::HashMap;

use crate::pipeline::parse::{parse_competitor_insights, split_keyword_list};
use crate::pipeline::types::{BusinessProfile, CompetitorInsight, ResearchResult};

const STAGE_ID: &str = "research";

/// Produces keyword candidates, competitor insight snippets, and synthetic
/// search metrics from a business profile.
///
/// Search volume and difficulty are NOT fetched from any data source:
/// volumes are sampled uniformly from [100, 5000] and difficulty is a flat
/// 0.5 per keyword, standing in for a real SEO data API.
pub struct MarketResearchStage<'a> {
    generator: &'a dyn TextGenerator,
}

impl<'a> MarketResearchStage<'a> {
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self { generator }
    }

    /// Run the full research stage for a profile
    pub async fn run(&self, profile: &BusinessProfile) -> Result<ResearchResult> {
        let trending_keywords = self.generate_trending_keywords(profile).await?;
        let competitor_insights = self.analyze_competitors(profile).await?;
        let search_volume = synthesize_search_volumes(&trending_keywords);
        let difficulty = trending_keywords
            .iter()
            .map(|kw| (kw.clone(), 0.5))
            .collect();

        Ok(ResearchResult {
            trending_keywords,
            competitor_insights,
            search_volume,
            difficulty,
        })
    }

    async fn generate_trending_keywords(&self, profile: &BusinessProfile) -> Result<Vec<String>> {
        log_agent_start!(STAGE_ID, "Keyword Researcher", "Generating trending keywords");

        let system_prompt = "You are a market research expert. Generate trending keywords \
related to the given business information. Focus on long-tail keywords with \
commercial intent.";

        let prompt = format!(
            r#"Business Type: {}
Product/Service: {}
Target Audience: {}
Niche Keywords: {}

Generate 10 trending keywords that would be valuable for SEO content.
Return as a comma-separated list."#,
            profile.business_type,
            profile.product_service,
            profile.target_audience,
            profile.niche_keywords.join(", ")
        );

        let response = self
            .generator
            .generate(system_prompt, &prompt)
            .await
            .context("Keyword generation call failed")?;

        let keywords = split_keyword_list(&response);
        log_agent_complete!(
            STAGE_ID,
            "Keyword Researcher",
            format!("{} candidates", keywords.len())
        );
        Ok(keywords)
    }

    async fn analyze_competitors(&self, profile: &BusinessProfile) -> Result<Vec<CompetitorInsight>> {
        log_agent_start!(STAGE_ID, "Competitor Analyst", "Collecting competitor insights");

        let system_prompt = "You are analyzing competitors for SEO strategy. \
Provide insights about what competitors might be doing well.";

        let prompt = format!(
            r#"Business: {} - {}

Provide 3 competitor insights in the format:
1. Strategy: [strategy description]
2. Content Gap: [content opportunity]
3. Keyword Focus: [keyword strategy]"#,
            profile.business_type, profile.product_service
        );

        let response = self
            .generator
            .generate(system_prompt, &prompt)
            .await
            .context("Competitor insight call failed")?;

        let insights = parse_competitor_insights(&response);
        log_agent_complete!(STAGE_ID, "Competitor Analyst");
        Ok(insights)
    }
}

/// Uniform random search volume in [100, 5000] per keyword.
///
/// Stand-in for a real search volume API; duplicate keywords collapse to a
/// single map entry.
pub fn synthesize_search_volumes(keywords: &[String]) -> HashMap<String, u32> {
    let mut rng = rand::thread_rng();
    keywords
        .iter()
        .map(|kw| (kw.clone(), rng.gen_range(100..=5000)))
        .collect()
}
