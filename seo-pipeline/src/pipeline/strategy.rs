//! SEO strategy stage: primary keyword selection, long-tail variations,
//! titles, meta descriptions, and internal link hints.

use anyhow::{Context, Result};
use openai_client::TextGenerator;
use seo_pipeline_sdk::{log_agent_complete, log_agent_message, log_agent_start};

use crate::pipeline::parse::{parse_numbered_lines, split_keyword_list};
use crate::pipeline::types::{ResearchResult, SeoStrategy};

const STAGE_ID: &str = "strategy";

/// Cap on primary keywords carried into the strategy
const PRIMARY_KEYWORD_LIMIT: usize = 5;

/// Derives a complete SEO strategy from research output.
///
/// Meta descriptions cost one generation call per title, so latency grows
/// linearly with title count.
pub struct StrategyStage<'a> {
    generator: &'a dyn TextGenerator,
}

impl<'a> StrategyStage<'a> {
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self { generator }
    }

    /// Run the full strategy stage over research output
    pub async fn run(&self, research: &ResearchResult) -> Result<SeoStrategy> {
        let primary_keywords = select_primary_keywords(research);
        let long_tail_keywords = self.generate_long_tail_keywords(&primary_keywords).await?;
        let titles = self
            .suggest_titles(&primary_keywords, &long_tail_keywords)
            .await?;
        let meta_descriptions = self.generate_meta_descriptions(&titles).await?;
        let internal_link_hints = suggest_internal_links(&primary_keywords);

        Ok(SeoStrategy {
            primary_keywords,
            long_tail_keywords,
            titles,
            meta_descriptions,
            internal_link_hints,
        })
    }

    async fn generate_long_tail_keywords(&self, primary_keywords: &[String]) -> Result<Vec<String>> {
        log_agent_start!(STAGE_ID, "Long-tail Generator", "Expanding primary keywords");

        let system_prompt = "Generate long-tail keyword variations that are specific \
and have commercial intent. Focus on question-based and location-based variations.";

        let prompt = format!(
            r#"Primary Keywords: {}

Generate 8 long-tail keyword variations (3-5 words each).
Return as comma-separated list."#,
            primary_keywords.join(", ")
        );

        let response = self
            .generator
            .generate(system_prompt, &prompt)
            .await
            .context("Long-tail keyword call failed")?;

        log_agent_complete!(STAGE_ID, "Long-tail Generator");
        Ok(split_keyword_list(&response))
    }

    async fn suggest_titles(
        &self,
        primary_keywords: &[String],
        long_tail_keywords: &[String],
    ) -> Result<Vec<String>> {
        log_agent_start!(STAGE_ID, "Title Writer", "Drafting article titles");

        let system_prompt = "Create compelling, SEO-optimized article titles that include \
target keywords naturally. Make them click-worthy but not clickbait.";

        let all_keywords: Vec<&str> = primary_keywords
            .iter()
            .chain(long_tail_keywords)
            .take(8)
            .map(String::as_str)
            .collect();

        let prompt = format!(
            r#"Keywords to target: {}

Generate 5 article titles that incorporate these keywords naturally.
Make them engaging and SEO-friendly.
Return as numbered list."#,
            all_keywords.join(", ")
        );

        let response = self
            .generator
            .generate(system_prompt, &prompt)
            .await
            .context("Title suggestion call failed")?;

        let titles = parse_numbered_lines(&response);
        log_agent_complete!(STAGE_ID, "Title Writer", format!("{} titles", titles.len()));
        Ok(titles)
    }

    /// One generation call per title, deliberately not batched, so the
    /// result stays index-aligned with `titles` by construction.
    async fn generate_meta_descriptions(&self, titles: &[String]) -> Result<Vec<String>> {
        log_agent_start!(STAGE_ID, "Meta Writer", "Writing meta descriptions");

        let system_prompt = "Write compelling meta descriptions (150-160 characters) \
that encourage clicks while accurately describing the content.";

        let mut meta_descriptions = Vec::with_capacity(titles.len());
        for (i, title) in titles.iter().enumerate() {
            log_agent_message!(
                STAGE_ID,
                "Meta Writer",
                format!("{}/{}: {}", i + 1, titles.len(), title)
            );

            let prompt = format!("Write a meta description for this article title: {}", title);
            let response = self
                .generator
                .generate(system_prompt, &prompt)
                .await
                .context("Meta description call failed")?;

            meta_descriptions.push(response.trim().to_string());
        }

        log_agent_complete!(STAGE_ID, "Meta Writer");
        Ok(meta_descriptions)
    }
}

/// Top keywords by search volume, descending, truncated to five.
///
/// The sort is stable, so keywords tied on volume keep their research
/// order; keywords without volume data count as zero.
pub fn select_primary_keywords(research: &ResearchResult) -> Vec<String> {
    let mut keywords = research.trending_keywords.clone();
    keywords.sort_by_key(|kw| {
        std::cmp::Reverse(research.search_volume.get(kw).copied().unwrap_or(0))
    });
    keywords.truncate(PRIMARY_KEYWORD_LIMIT);
    keywords
}

/// Anchor-text suggestions for the first three primary keywords; purely
/// local, no generation call.
pub fn suggest_internal_links(primary_keywords: &[String]) -> Vec<String> {
    primary_keywords
        .iter()
        .take(3)
        .map(|kw| format!("Learn more about {}", kw))
        .collect()
}
