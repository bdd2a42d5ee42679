//! One-shot chat completion client.
//!
//! Each [`OpenAiClient::generate`] call performs exactly one outbound HTTP
//! request. There is no retry and no explicit timeout; the underlying
//! transport's defaults apply, and failures propagate to the caller
//! unchanged.

use async_trait::async_trait;

use crate::error::{ClientError, Result};
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

/// Configuration for the chat completion client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credential, sent as a bearer token
    pub api_key: String,

    /// Endpoint base URL, without the `/chat/completions` suffix
    pub api_base: String,

    /// Model identifier
    pub model: String,

    /// Maximum number of tokens to generate per call
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 2000,
            temperature: 0.7,
        }
    }
}

/// Text generation boundary used by pipeline stages.
///
/// A generator takes a system instruction and a user instruction and
/// returns the raw response text. Implementations must be safe for
/// concurrent use; the pipeline shares one generator across stages.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text from a system instruction and a user instruction
    async fn generate(&self, system_instruction: &str, user_instruction: &str) -> Result<String>;
}

/// Client for OpenAI-compatible chat completion APIs
pub struct OpenAiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl OpenAiClient {
    /// Create a new client from configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one chat completion request and return the first choice's text.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] for connection/decode failures,
    /// [`ClientError::Api`] for non-2xx responses, and
    /// [`ClientError::EmptyCompletion`] when the response carries no choices.
    pub async fn generate(
        &self,
        system_instruction: &str,
        user_instruction: &str,
    ) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(system_instruction),
                ChatMessage::user(user_instruction),
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let url = format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response.json().await?;

        if let Some(ref _usage) = completion.usage {
            #[cfg(debug_assertions)]
            eprintln!(
                "chat completion usage: {} in / {} out",
                _usage.prompt_tokens, _usage.completion_tokens
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ClientError::EmptyCompletion)
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, system_instruction: &str, user_instruction: &str) -> Result<String> {
        OpenAiClient::generate(self, system_instruction, user_instruction).await
    }
}
