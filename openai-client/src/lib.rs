//! Minimal async client for OpenAI-compatible chat completion APIs.
//!
//! The crate exposes exactly the surface the content pipeline needs:
//! a [`TextGenerator`] trait (system instruction + user instruction in,
//! raw response text out) and [`OpenAiClient`], its production
//! implementation over `reqwest`.
//!
//! # Example
//!
//! ```no_run
//! use openai_client::{ClientConfig, OpenAiClient};
//!
//! # async fn example() -> openai_client::Result<()> {
//! let client = OpenAiClient::new(ClientConfig {
//!     api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
//!     ..ClientConfig::default()
//! });
//!
//! let text = client
//!     .generate("You are a helpful assistant.", "Say hello.")
//!     .await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export async_trait so downstream fakes can implement TextGenerator
// without depending on the macro crate directly.
pub use async_trait::async_trait;

pub use client::{ClientConfig, OpenAiClient, TextGenerator};
pub use error::{ClientError, Result};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Choice, Usage};
