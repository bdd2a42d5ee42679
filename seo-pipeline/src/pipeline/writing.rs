//! Article writing stage: body, meta description, and derived metrics.

use anyhow::{Context, Result};
use openai_client::TextGenerator;
use seo_pipeline_sdk::{log_agent_complete, log_agent_start};

use crate::pipeline::metrics;
use crate::pipeline::types::Article;

const STAGE_ID: &str = "writing";

/// Writes one article and computes its local metrics.
///
/// The target length is embedded in the prompt only; nothing enforces that
/// the returned body actually matches it.
pub struct WritingStage<'a> {
    generator: &'a dyn TextGenerator,
}

impl<'a> WritingStage<'a> {
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self { generator }
    }

    /// Write an article for a title/keyword set and derive its metrics
    pub async fn run(
        &self,
        title: &str,
        keywords: &[String],
        content_type: &str,
        target_length: usize,
    ) -> Result<Article> {
        let content = self
            .write_article(title, keywords, content_type, target_length)
            .await?;
        let meta_description = self.generate_meta_description(title, &content).await?;

        let word_count = metrics::word_count(&content);
        let readability_score = metrics::flesch_reading_ease(&content);
        let seo_score = metrics::seo_score(&content, keywords);

        Ok(Article {
            title: title.to_string(),
            meta_description,
            content,
            keywords: keywords.to_vec(),
            word_count,
            readability_score,
            seo_score,
        })
    }

    async fn write_article(
        &self,
        title: &str,
        keywords: &[String],
        content_type: &str,
        target_length: usize,
    ) -> Result<String> {
        log_agent_start!(STAGE_ID, "Article Writer", format!("Writing: {}", title));

        let system_prompt = format!(
            r#"You are an expert SEO content writer. Write a {} that is informative, engaging, and optimized for search engines.

Guidelines:
- Target length: ~{} words
- Use keywords naturally (not stuffed)
- Include H2 and H3 headings
- Write in a conversational yet professional tone
- Include actionable insights
- Use short paragraphs for readability"#,
            content_type, target_length
        );

        let prompt = format!(
            r#"Title: {}
Target Keywords: {}
Content Type: {}

Write a comprehensive article following SEO best practices.
Include:
1. Engaging introduction
2. Well-structured body with subheadings
3. Practical examples or tips
4. Strong conclusion with call-to-action"#,
            title,
            keywords.join(", "),
            content_type
        );

        let content = self
            .generator
            .generate(&system_prompt, &prompt)
            .await
            .context("Article writing call failed")?;

        log_agent_complete!(
            STAGE_ID,
            "Article Writer",
            format!("{} words", metrics::word_count(&content))
        );
        Ok(content)
    }

    async fn generate_meta_description(&self, title: &str, content: &str) -> Result<String> {
        log_agent_start!(STAGE_ID, "Meta Writer", "Summarizing article");

        let system_prompt = "Write a compelling meta description (150-160 characters) \
that summarizes the article and encourages clicks.";

        // The first ~50 words are enough context for a one-line summary.
        let content_preview = content
            .split_whitespace()
            .take(50)
            .collect::<Vec<_>>()
            .join(" ");

        let prompt = format!(
            "Title: {}\nContent preview: {}\n\nWrite meta description:",
            title, content_preview
        );

        let meta = self
            .generator
            .generate(system_prompt, &prompt)
            .await
            .context("Meta description call failed")?;

        log_agent_complete!(STAGE_ID, "Meta Writer");
        Ok(meta)
    }
}
