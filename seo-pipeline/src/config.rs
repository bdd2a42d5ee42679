//! Process configuration loaded once at startup.
//!
//! `Settings` is constructed at process entry (after `dotenv` has populated
//! the environment) and threaded by reference into the workflow and stages.
//! Nothing reads the environment after startup and there is no ambient
//! global.

use anyhow::{Context, Result};
use openai_client::ClientConfig;

/// Pipeline-wide settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Credential for the text generation API
    pub api_key: String,

    /// Reserved for a real SEO data API; search volumes are synthesized
    /// locally until one is wired in
    pub serp_api_key: Option<String>,

    /// Generation endpoint base URL
    pub api_base: String,

    /// Model identifier
    pub model: String,

    /// Token cap per generation call
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Target article length in words
    pub default_article_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            serp_api_key: None,
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 2000,
            temperature: 0.7,
            default_article_length: 1500,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// `OPENAI_API_KEY` is required; everything else falls back to the
    /// defaults above.
    pub fn from_env() -> Result<Self> {
        let defaults = Settings::default();

        Ok(Settings {
            api_key: std::env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY is not set (put it in the environment or a .env file)")?,
            serp_api_key: std::env::var("SERP_API_KEY").ok(),
            api_base: std::env::var("OPENAI_API_BASE").unwrap_or(defaults.api_base),
            model: std::env::var("SEO_MODEL").unwrap_or(defaults.model),
            max_tokens: env_parsed("SEO_MAX_TOKENS", defaults.max_tokens),
            temperature: env_parsed("SEO_TEMPERATURE", defaults.temperature),
            default_article_length: env_parsed(
                "SEO_ARTICLE_LENGTH",
                defaults.default_article_length,
            ),
        })
    }

    /// The slice of these settings the chat client needs
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_key: self.api_key.clone(),
            api_base: self.api_base.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

/// Parse an environment variable, falling back to `default` when the
/// variable is unset or unparsable.
fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
