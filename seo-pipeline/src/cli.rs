//! CLI argument definitions for the SEO content pipeline.

use clap::{Parser, Subcommand};

/// SEO content pipeline orchestrator
///
/// Turns a business description into an SEO content plan and articles:
///
/// - `plan` — market research → strategy → content calendar
/// - `article` — write, review, and score a single article
/// - `calendar` — generate an article for every scheduled day of a plan
#[derive(Parser, Debug)]
#[command(name = "seo-pipeline")]
#[command(about = "Multi-stage SEO content generation pipeline")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Also print the resulting bundle as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a complete SEO content plan from a business profile
    Plan {
        /// Path to a business profile YAML file
        #[arg(long, value_name = "PATH")]
        business: String,

        /// Planning horizon in days
        #[arg(long, default_value_t = 7)]
        days: usize,

        /// Output path for the plan bundle
        #[arg(long, value_name = "PATH", default_value = "plan.yaml")]
        out: String,
    },

    /// Generate one article with quality review and performance estimate
    Article {
        /// Article title
        #[arg(long)]
        title: String,

        /// Comma-separated target keywords
        #[arg(long, value_name = "LIST")]
        keywords: String,

        /// Content type embedded in the writing prompt
        #[arg(long, default_value = "blog_post")]
        content_type: String,

        /// Output path for the article bundle
        #[arg(long, value_name = "PATH", default_value = "article.yaml")]
        out: String,
    },

    /// Generate articles for every scheduled day of a saved plan
    Calendar {
        /// Path to a plan bundle YAML produced by `plan`
        #[arg(long, value_name = "PATH")]
        plan: String,

        /// Output path for the generated article batch
        #[arg(long, value_name = "PATH", default_value = "articles.yaml")]
        out: String,
    },
}
