//! Integration tests for the SEO content workflow.
//!
//! The pipeline is driven end-to-end against a scripted in-memory
//! generator, so every generation call is deterministic and no network is
//! involved.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use openai_client::{async_trait, TextGenerator};
use seo_pipeline::config::Settings;
use seo_pipeline::pipeline::types::{
    BusinessProfile, ContentPlan, PlanBundle, RiskLevel, ScheduledPost, SeoStrategy,
};
use seo_pipeline::pipeline::workflow::SeoWorkflow;
use std::collections::HashMap;

/// Generator that replays a fixed script of responses in call order
struct ScriptedGenerator {
    responses: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    fn new(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        _system_instruction: &str,
        _user_instruction: &str,
    ) -> openai_client::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| "ok".to_string()))
    }
}

fn workflow_with_script(responses: &[&str]) -> SeoWorkflow {
    SeoWorkflow::with_generator(Box::new(ScriptedGenerator::new(responses)), Settings::default())
}

fn saas_profile() -> BusinessProfile {
    BusinessProfile {
        business_type: "SaaS".to_string(),
        product_service: "CRM platform".to_string(),
        target_audience: "small business owners".to_string(),
        niche_keywords: vec!["crm".to_string()],
        tone: "professional".to_string(),
        preferred_length: 1500,
    }
}

const TEN_KEYWORDS: &str = "crm for startups, best crm software, crm pricing comparison, \
crm with email automation, free crm tools, crm for small business, crm onboarding checklist, \
crm integrations guide, mobile crm apps, crm reporting dashboards";

const THREE_INSIGHTS: &str = "1. Strategy: Competitors publish weekly comparison posts\n\
2. Content Gap: Few articles cover migration costs\n\
3. Keyword Focus: Heavy investment in long-tail buyer terms";

const EIGHT_LONG_TAIL: &str = "crm for startups pricing, best crm for founders, \
crm with email sync, affordable crm for teams, crm setup step by step, \
crm vs spreadsheets guide, simple crm for sales, crm demo checklist";

const FIVE_TITLES: &str = "1. How to Choose a CRM for Your Startup\n\
2. Best CRM Software Compared\n\
3. CRM Pricing: What You Will Pay\n\
4. Email Automation in Modern CRMs\n\
5. Free CRM Tools Worth Trying";

#[tokio::test]
async fn test_plan_generation_end_to_end() {
    let generator = Box::new(ScriptedGenerator::new(&[
        TEN_KEYWORDS,
        THREE_INSIGHTS,
        EIGHT_LONG_TAIL,
        FIVE_TITLES,
        "Meta one.",
        "Meta two.",
        "Meta three.",
        "Meta four.",
        "Meta five.",
    ]));
    let workflow = SeoWorkflow::with_generator(generator, Settings::default());

    let bundle = workflow
        .generate_complete_plan(&saas_profile(), 7)
        .await
        .unwrap();

    // Research: 10 candidates, volume map covering all of them.
    assert_eq!(bundle.research.trending_keywords.len(), 10);
    for keyword in &bundle.research.trending_keywords {
        let volume = bundle.research.search_volume[keyword];
        assert!((100..=5000).contains(&volume));
        assert_eq!(bundle.research.difficulty[keyword], 0.5);
    }
    assert_eq!(bundle.research.competitor_insights.len(), 3);

    // Strategy: exactly min(5, candidates) primaries, drawn from research.
    assert_eq!(bundle.strategy.primary_keywords.len(), 5);
    for keyword in &bundle.strategy.primary_keywords {
        assert!(bundle.research.trending_keywords.contains(keyword));
    }
    assert_eq!(bundle.strategy.long_tail_keywords.len(), 8);
    assert_eq!(bundle.strategy.titles.len(), 5);
    assert_eq!(
        bundle.strategy.meta_descriptions.len(),
        bundle.strategy.titles.len()
    );
    assert_eq!(bundle.strategy.meta_descriptions[0], "Meta one.");
    assert_eq!(bundle.strategy.internal_link_hints.len(), 3);
    assert!(bundle.strategy.internal_link_hints[0].starts_with("Learn more about "));

    // Plan: 7 requested days but only 5 titles -> 5 rows, rotating types.
    assert_eq!(bundle.plan.horizon_days, 7);
    assert_eq!(bundle.plan.schedule.len(), 5);
    let types: Vec<&str> = bundle
        .plan
        .schedule
        .iter()
        .map(|p| p.content_type.as_str())
        .collect();
    assert_eq!(types, vec!["how-to", "listicle", "guide", "comparison", "tutorial"]);

    let expected_daily = bundle.strategy.primary_keywords[..2].join(", ");
    for post in &bundle.plan.schedule {
        assert_eq!(post.keywords, expected_daily);
        assert_eq!(post.status, "planned");
    }

    for title in &bundle.strategy.titles {
        assert!(bundle.plan.keyword_mapping.contains_key(title));
    }
}

#[tokio::test]
async fn test_plan_generation_call_count() {
    let generator = ScriptedGenerator::new(&[
        TEN_KEYWORDS,
        THREE_INSIGHTS,
        EIGHT_LONG_TAIL,
        FIVE_TITLES,
        "m1",
        "m2",
        "m3",
        "m4",
        "m5",
    ]);
    let calls_handle = std::sync::Arc::new(generator);
    let workflow = SeoWorkflow::with_generator(
        Box::new(SharedGenerator(calls_handle.clone())),
        Settings::default(),
    );

    workflow
        .generate_complete_plan(&saas_profile(), 7)
        .await
        .unwrap();

    // keywords + insights + long-tail + titles + one meta per title.
    assert_eq!(calls_handle.calls(), 9);
}

/// Arc wrapper so a test can keep a handle on the scripted generator
struct SharedGenerator(std::sync::Arc<ScriptedGenerator>);

#[async_trait]
impl TextGenerator for SharedGenerator {
    async fn generate(
        &self,
        system_instruction: &str,
        user_instruction: &str,
    ) -> openai_client::Result<String> {
        self.0.generate(system_instruction, user_instruction).await
    }
}

fn sample_body() -> String {
    let mut body = String::from("## Choosing a CRM\n\n");
    for _ in 0..50 {
        body.push_str("The crm helps small teams close more deals every week. ");
    }
    body
}

#[tokio::test]
async fn test_article_generation_end_to_end() {
    let body = sample_body();
    let workflow = workflow_with_script(&[
        body.as_str(),
        "A practical guide to choosing a CRM for your startup.",
        "Overall quality: 87",
        "This content reads as original. Risk: Low",
        "Competition for these keywords is High",
    ]);

    let keywords = vec!["crm".to_string()];
    let bundle = workflow
        .generate_article("How to Choose a CRM", &keywords, "how-to")
        .await
        .unwrap();

    // Writing stage metrics.
    assert_eq!(bundle.article.word_count, 504);
    assert_eq!(bundle.article.seo_score, 20.0);
    assert_eq!(
        bundle.article.meta_description,
        "A practical guide to choosing a CRM for your startup."
    );
    assert_eq!(bundle.article.keywords, keywords);

    // Quality stage: parsed grammar score, label scan, recomputed density.
    assert_eq!(bundle.quality_report.grammar_score, 87.0);
    assert_eq!(bundle.quality_report.plagiarism_risk, RiskLevel::Low);
    assert_eq!(
        bundle.quality_report.keyword_density.keys().len(),
        1
    );
    let density = bundle.quality_report.keyword_density["crm"];
    assert!((density - 51.0 / 504.0 * 100.0).abs() < 1e-9);
    assert!(bundle
        .quality_report
        .suggestions
        .iter()
        .any(|s| s.contains("Reduce keyword density for 'crm'")));
    assert!(bundle
        .quality_report
        .suggestions
        .iter()
        .any(|s| s.contains("expanding content")));

    // Estimation stage.
    assert!([1, 3, 7, 15, 25].contains(&bundle.performance_estimate.estimated_ranking));
    assert_eq!(
        bundle.performance_estimate.competition_level,
        RiskLevel::High
    );
    assert!((0.0..=95.0).contains(&bundle.performance_estimate.success_probability));
    // 504 words * 2 * (20/100), truncated.
    assert_eq!(bundle.performance_estimate.traffic_potential, 201);
}

#[tokio::test]
async fn test_article_generation_uses_parse_defaults() {
    let workflow = workflow_with_script(&[
        "Tiny body without keywords.",
        "Meta.",
        "no score in this response",
        "cannot tell",
        "unsure about these keywords",
    ]);

    let bundle = workflow
        .generate_article("Defaults", &["absent".to_string()], "blog_post")
        .await
        .unwrap();

    assert_eq!(bundle.quality_report.grammar_score, 85.0);
    assert_eq!(bundle.quality_report.plagiarism_risk, RiskLevel::Low);
    assert_eq!(
        bundle.performance_estimate.competition_level,
        RiskLevel::Medium
    );
    assert_eq!(bundle.quality_report.keyword_density["absent"], 0.0);
}

fn two_row_plan() -> ContentPlan {
    ContentPlan {
        horizon_days: 2,
        schedule: vec![
            ScheduledPost {
                date: "2026-08-06".to_string(),
                title: "First Post".to_string(),
                keywords: "crm, sales tools".to_string(),
                content_type: "how-to".to_string(),
                status: "planned".to_string(),
            },
            ScheduledPost {
                date: "2026-08-07".to_string(),
                title: "Second Post".to_string(),
                keywords: "crm, sales tools".to_string(),
                content_type: "listicle".to_string(),
                status: "planned".to_string(),
            },
        ],
        keyword_mapping: HashMap::new(),
        content_types: vec!["blog_post".to_string()],
    }
}

#[tokio::test]
async fn test_calendar_articles_follow_schedule() {
    let responses: Vec<&str> = vec![
        // First article: body, meta, grammar, plagiarism, competition.
        "Body one with enough text to score.",
        "Meta one.",
        "90",
        "Low",
        "Medium",
        // Second article.
        "Body two with enough text to score.",
        "Meta two.",
        "80",
        "Low",
        "Medium",
    ];
    let workflow = workflow_with_script(&responses);

    let articles = workflow
        .generate_calendar_articles(&two_row_plan())
        .await
        .unwrap();

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].scheduled_date, "2026-08-06");
    assert_eq!(articles[1].scheduled_date, "2026-08-07");
    assert_eq!(articles[0].bundle.article.title, "First Post");
    assert_eq!(
        articles[0].bundle.article.keywords,
        vec!["crm".to_string(), "sales tools".to_string()]
    );
    assert_eq!(articles[0].bundle.quality_report.grammar_score, 90.0);
    assert_eq!(articles[1].bundle.quality_report.grammar_score, 80.0);
}

#[tokio::test]
async fn test_plan_with_empty_keyword_tokens_survives() {
    // A trailing comma in the keyword response yields an empty keyword;
    // the pipeline carries it through rather than erroring.
    let workflow = workflow_with_script(&[
        "alpha, beta,",
        THREE_INSIGHTS,
        "lt one, lt two",
        "1. Only Title",
        "Meta.",
    ]);

    let bundle = workflow
        .generate_complete_plan(&saas_profile(), 7)
        .await
        .unwrap();

    assert_eq!(bundle.research.trending_keywords.len(), 3);
    assert!(bundle
        .research
        .trending_keywords
        .contains(&String::new()));
    assert_eq!(bundle.plan.schedule.len(), 1);
}

#[test]
fn test_plan_bundle_serializes_for_transport() {
    let strategy = SeoStrategy {
        primary_keywords: vec!["crm".to_string()],
        long_tail_keywords: vec![],
        titles: vec!["T".to_string()],
        meta_descriptions: vec!["M".to_string()],
        internal_link_hints: vec![],
    };

    let plan = two_row_plan();
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["horizon_days"], 2);
    assert_eq!(json["schedule"][0]["status"], "planned");

    let yaml = serde_yaml::to_string(&strategy).unwrap();
    let back: SeoStrategy = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back.titles, strategy.titles);

    let bundle_yaml = serde_yaml::to_string(&PlanBundle {
        research: seo_pipeline::pipeline::types::ResearchResult {
            trending_keywords: vec![],
            competitor_insights: vec![],
            search_volume: HashMap::new(),
            difficulty: HashMap::new(),
        },
        strategy,
        plan,
    })
    .unwrap();
    let back: PlanBundle = serde_yaml::from_str(&bundle_yaml).unwrap();
    assert_eq!(back.plan.schedule.len(), 2);
}
