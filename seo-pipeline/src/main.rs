use anyhow::Result;
use clap::Parser;
use std::path::Path;

use seo_pipeline::cli::{Args, Command};
use seo_pipeline::config::Settings;
use seo_pipeline::files::{load_yaml, save_yaml};
use seo_pipeline::pipeline::parse::split_keyword_list;
use seo_pipeline::pipeline::types::{BusinessProfile, PlanBundle};
use seo_pipeline::pipeline::workflow::SeoWorkflow;
use seo_pipeline_sdk::{log_info, log_state_file};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    let settings = Settings::from_env()?;
    let workflow = SeoWorkflow::new(settings);

    match args.command {
        Command::Plan {
            business,
            days,
            out,
        } => {
            let profile: BusinessProfile = load_yaml(Path::new(&business))?;
            log_info!("Planning content for a {} business", profile.business_type);

            let bundle = workflow.generate_complete_plan(&profile, days).await?;
            save_yaml(&bundle, Path::new(&out))?;
            log_state_file!(3, out, "Plan bundle (research, strategy, calendar)");

            if args.json {
                println!("{}", serde_json::to_string_pretty(&bundle)?);
            }
        }

        Command::Article {
            title,
            keywords,
            content_type,
            out,
        } => {
            let keywords = split_keyword_list(&keywords);
            let bundle = workflow
                .generate_article(&title, &keywords, &content_type)
                .await?;
            save_yaml(&bundle, Path::new(&out))?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&bundle)?);
            }
        }

        Command::Calendar { plan, out } => {
            let bundle: PlanBundle = load_yaml(Path::new(&plan))?;
            log_info!(
                "Generating {} scheduled articles",
                bundle.plan.schedule.len()
            );

            let articles = workflow.generate_calendar_articles(&bundle.plan).await?;
            save_yaml(&articles, Path::new(&out))?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&articles)?);
            }
        }
    }

    Ok(())
}
