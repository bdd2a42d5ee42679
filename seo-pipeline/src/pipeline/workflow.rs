//! Main workflow orchestration for the SEO content pipeline.
//!
//! Composes the stages into the three pipeline operations:
//! 1. Plan generation: research → strategy → planning
//! 2. Article generation: writing → quality review → performance estimate
//! 3. Calendar batch: article generation for every scheduled row
//!
//! Stages run strictly sequentially — each consumes the previous stage's
//! completed output — and fresh stage instances are constructed per
//! invocation, so concurrent callers never share mutable state.

use anyhow::Result;
use openai_client::{OpenAiClient, TextGenerator};
use seo_pipeline_sdk::{
    log_info, log_phase_complete_console, log_phase_start_console, log_progress, log_warning,
};

use crate::config::Settings;
use crate::pipeline::estimation::EstimationStage;
use crate::pipeline::planning::PlanningStage;
use crate::pipeline::quality::QualityStage;
use crate::pipeline::research::MarketResearchStage;
use crate::pipeline::strategy::StrategyStage;
use crate::pipeline::types::{
    ArticleBundle, BusinessProfile, ContentPlan, PlanBundle, ScheduledArticle,
};
use crate::pipeline::writing::WritingStage;

/// SEO content workflow over a text generation boundary
pub struct SeoWorkflow {
    generator: Box<dyn TextGenerator>,
    settings: Settings,
}

impl SeoWorkflow {
    /// Build a workflow backed by the OpenAI client configured in `settings`
    pub fn new(settings: Settings) -> Self {
        let generator = Box::new(OpenAiClient::new(settings.client_config()));
        Self {
            generator,
            settings,
        }
    }

    /// Build a workflow over an arbitrary generator (used by tests)
    pub fn with_generator(generator: Box<dyn TextGenerator>, settings: Settings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// Generate a complete SEO content plan: research → strategy → planning
    pub async fn generate_complete_plan(
        &self,
        profile: &BusinessProfile,
        days: usize,
    ) -> Result<PlanBundle> {
        log_phase_start_console!(1, "Market Research", "Keyword and competitor research");
        let research = MarketResearchStage::new(self.generator.as_ref())
            .run(profile)
            .await?;
        log_phase_complete_console!(1);

        log_phase_start_console!(2, "SEO Strategy", "Primary keywords, titles, and metas");
        let strategy = StrategyStage::new(self.generator.as_ref())
            .run(&research)
            .await?;
        log_phase_complete_console!(2);

        log_phase_start_console!(3, "Content Planning", "Calendar and keyword mapping");
        let plan = PlanningStage::new().run(&strategy, days);
        if plan.schedule.len() < days {
            log_warning!(
                "Scheduled {} of {} requested days ({} titles available)",
                plan.schedule.len(),
                days,
                strategy.titles.len()
            );
        }
        log_phase_complete_console!(3);

        Ok(PlanBundle {
            research,
            strategy,
            plan,
        })
    }

    /// Generate one article with quality review and performance estimate
    pub async fn generate_article(
        &self,
        title: &str,
        keywords: &[String],
        content_type: &str,
    ) -> Result<ArticleBundle> {
        log_info!("Generating article: {}", title);

        let article = WritingStage::new(self.generator.as_ref())
            .run(
                title,
                keywords,
                content_type,
                self.settings.default_article_length,
            )
            .await?;

        let quality_report = QualityStage::new(self.generator.as_ref())
            .run(&article)
            .await?;

        let performance_estimate = EstimationStage::new(self.generator.as_ref())
            .run(&article, &quality_report)
            .await?;

        Ok(ArticleBundle {
            article,
            quality_report,
            performance_estimate,
        })
    }

    /// Generate an article bundle for every scheduled row, one at a time
    pub async fn generate_calendar_articles(
        &self,
        plan: &ContentPlan,
    ) -> Result<Vec<ScheduledArticle>> {
        let mut articles = Vec::with_capacity(plan.schedule.len());

        for (i, post) in plan.schedule.iter().enumerate() {
            log_progress!(i + 1, plan.schedule.len(), "articles");

            let keywords: Vec<String> = post
                .keywords
                .split(", ")
                .map(str::to_string)
                .collect();

            let bundle = self
                .generate_article(&post.title, &keywords, &post.content_type)
                .await?;

            articles.push(ScheduledArticle {
                scheduled_date: post.date.clone(),
                bundle,
            });
        }

        Ok(articles)
    }
}
