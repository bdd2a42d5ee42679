//! Data records for the SEO content pipeline.
//!
//! Every stage consumes one of these records and produces the next one.
//! All records are immutable value types once returned by their producing
//! stage; downstream stages only read them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Pipeline Input
// ============================================================================

/// Business description supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// Kind of business (e.g. "SaaS", "local bakery")
    pub business_type: String,

    /// What the business sells
    pub product_service: String,

    /// Who the content should reach
    pub target_audience: String,

    /// Seed keywords describing the niche
    #[serde(default)]
    pub niche_keywords: Vec<String>,

    /// Writing tone for generated content
    #[serde(default = "default_tone")]
    pub tone: String,

    /// Preferred article length in words
    #[serde(default = "default_length")]
    pub preferred_length: usize,
}

fn default_tone() -> String {
    "professional".to_string()
}

fn default_length() -> usize {
    1500
}

// ============================================================================
// Research Types
// ============================================================================

/// Output of the market research stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResult {
    /// Keyword candidates, in generation order (uniqueness not enforced)
    pub trending_keywords: Vec<String>,

    /// Up to three labeled competitor observations
    pub competitor_insights: Vec<CompetitorInsight>,

    /// Synthetic monthly search volume per keyword
    pub search_volume: HashMap<String, u32>,

    /// Synthetic ranking difficulty per keyword, in [0, 1]
    pub difficulty: HashMap<String, f64>,
}

/// Single competitor observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorInsight {
    /// Positional label; assigned by response line order, not content
    pub insight_type: InsightType,

    /// The response line, trimmed
    pub description: String,
}

/// Fixed labels zipped with the first three insight response lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    Strategy,
    ContentGap,
    KeywordFocus,
}

// ============================================================================
// Strategy Types
// ============================================================================

/// Output of the SEO strategy stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoStrategy {
    /// At most five keywords, ordered by descending search volume
    pub primary_keywords: Vec<String>,

    /// Long-tail variations of the primary keywords
    pub long_tail_keywords: Vec<String>,

    /// Suggested article titles
    pub titles: Vec<String>,

    /// Meta descriptions, index-aligned 1:1 with `titles`
    pub meta_descriptions: Vec<String>,

    /// Internal link anchor-text suggestions
    pub internal_link_hints: Vec<String>,
}

// ============================================================================
// Planning Types
// ============================================================================

/// Output of the content planning stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPlan {
    /// Requested planning horizon; the schedule may be shorter when fewer
    /// titles are available
    pub horizon_days: usize,

    /// One row per scheduled publication day
    pub schedule: Vec<ScheduledPost>,

    /// Keywords assigned to each title
    pub keyword_mapping: HashMap<String, Vec<String>>,

    /// Catalog of content types this plan draws from
    pub content_types: Vec<String>,
}

/// One scheduled publication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledPost {
    /// Publication date, `YYYY-MM-DD`
    pub date: String,

    /// Article title
    pub title: String,

    /// Target keywords, comma-joined
    pub keywords: String,

    /// Content type drawn from the fixed planning cycle
    pub content_type: String,

    /// Always "planned" at creation
    pub status: String,
}

// ============================================================================
// Article Types
// ============================================================================

/// Output of the writing stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub meta_description: String,

    /// Full article body as returned by the model
    pub content: String,

    /// Keywords the article targets
    pub keywords: Vec<String>,

    /// Whitespace-delimited token count of `content`
    pub word_count: usize,

    /// Flesch reading ease of `content`
    pub readability_score: f64,

    /// Heuristic SEO score in [0, 100]
    pub seo_score: f64,
}

// ============================================================================
// Review Types
// ============================================================================

/// Output of the quality review stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Model-estimated grammar quality, clamped to [0, 100]
    pub grammar_score: f64,

    /// Copied from the reviewed article
    pub readability_score: f64,

    /// Authoritative density map, percent per article keyword
    pub keyword_density: HashMap<String, f64>,

    /// Plagiarism risk label (default Low when unparsable)
    pub plagiarism_risk: RiskLevel,

    /// Rule-based improvement suggestions
    pub suggestions: Vec<String>,
}

/// Three-level label shared by plagiarism risk and competition level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Lowercase form used when scanning model responses
    pub fn needle(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Output of the performance estimation stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceEstimate {
    /// Search ranking bucket: one of 1, 3, 7, 15, 25
    pub estimated_ranking: u32,

    /// Estimated monthly visits
    pub traffic_potential: u32,

    /// Competition label (default Medium when unparsable)
    pub competition_level: RiskLevel,

    /// Success probability in [0, 95]
    pub success_probability: f64,
}

// ============================================================================
// Operation Bundles
// ============================================================================

/// Result of plan generation: research → strategy → planning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanBundle {
    pub research: ResearchResult,
    pub strategy: SeoStrategy,
    pub plan: ContentPlan,
}

/// Result of article generation: writing → quality → estimation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleBundle {
    pub article: Article,
    pub quality_report: QualityReport,
    pub performance_estimate: PerformanceEstimate,
}

/// Article bundle tied to its calendar slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledArticle {
    /// Date of the schedule row this article was generated for
    pub scheduled_date: String,

    #[serde(flatten)]
    pub bundle: ArticleBundle,
}
