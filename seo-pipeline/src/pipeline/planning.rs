//! Content planning stage: dated publication schedule and keyword mapping.
//!
//! Purely local — the plan is derived from the strategy without any
//! generation call.

use chrono::{Duration, Local, NaiveDate};
use std::collections::HashMap;

use crate::pipeline::types::{ContentPlan, ScheduledPost, SeoStrategy};

/// Content types cycled across schedule rows, indexed by day offset
pub const CONTENT_TYPE_CYCLE: [&str; 5] = ["how-to", "listicle", "guide", "comparison", "tutorial"];

/// Content type catalog carried on the plan record
const CONTENT_TYPE_CATALOG: [&str; 5] = [
    "blog_post",
    "how_to_guide",
    "listicle",
    "product_review",
    "comparison",
];

/// Builds a dated content calendar from a strategy.
pub struct PlanningStage {
    start_date: NaiveDate,
}

impl PlanningStage {
    /// Plan starting today
    pub fn new() -> Self {
        Self {
            start_date: Local::now().date_naive(),
        }
    }

    /// Plan starting at a fixed date (used by tests)
    pub fn starting(start_date: NaiveDate) -> Self {
        Self { start_date }
    }

    /// Build a content plan over `days` days.
    ///
    /// The schedule holds min(days, titles) rows; titles beyond the horizon
    /// are dropped, not queued. `horizon_days` records the requested
    /// horizon either way.
    pub fn run(&self, strategy: &SeoStrategy, days: usize) -> ContentPlan {
        ContentPlan {
            horizon_days: days,
            schedule: self.build_schedule(strategy, days),
            keyword_mapping: map_keywords_to_titles(strategy),
            content_types: CONTENT_TYPE_CATALOG.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn build_schedule(&self, strategy: &SeoStrategy, days: usize) -> Vec<ScheduledPost> {
        let count = days.min(strategy.titles.len());

        // Every row repeats the first two primary keywords. A known
        // simplification, kept as-is (see DESIGN.md).
        let daily_keywords = strategy
            .primary_keywords
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");

        (0..count)
            .map(|i| ScheduledPost {
                date: (self.start_date + Duration::days(i as i64))
                    .format("%Y-%m-%d")
                    .to_string(),
                title: strategy.titles[i].clone(),
                keywords: daily_keywords.clone(),
                content_type: CONTENT_TYPE_CYCLE[i % CONTENT_TYPE_CYCLE.len()].to_string(),
                status: "planned".to_string(),
            })
            .collect()
    }
}

impl Default for PlanningStage {
    fn default() -> Self {
        Self::new()
    }
}

/// Title i targets the slice [2i, 2i+3) of (primary + long-tail) keywords.
///
/// Slices running past the end of the list shrink, possibly to empty; that
/// is not an error.
fn map_keywords_to_titles(strategy: &SeoStrategy) -> HashMap<String, Vec<String>> {
    let all_keywords: Vec<String> = strategy
        .primary_keywords
        .iter()
        .chain(&strategy.long_tail_keywords)
        .cloned()
        .collect();

    let mut mapping = HashMap::new();
    for (i, title) in strategy.titles.iter().enumerate() {
        let start = (i * 2).min(all_keywords.len());
        let end = (i * 2 + 3).min(all_keywords.len());
        mapping.insert(title.clone(), all_keywords[start..end].to_vec());
    }
    mapping
}
