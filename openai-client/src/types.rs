//! Wire types for the chat completions endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST {api_base}/chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,

    /// Conversation messages, in order
    pub messages: Vec<ChatMessage>,

    /// Maximum number of tokens to generate
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

/// Single chat message with a role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system", "user", "assistant")
    pub role: String,

    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Build a system-role message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Build a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response body of a chat completion call
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Generated choices (the client reads the first)
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Token usage, when the API reports it
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// One generated completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The assistant message carrying the generated text
    pub message: ChatMessage,
}

/// Token usage counts
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Number of prompt tokens
    pub prompt_tokens: u32,

    /// Number of completion tokens
    pub completion_tokens: u32,

    /// Total tokens billed for the call
    pub total_tokens: u32,
}
