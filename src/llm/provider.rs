// src/llm/provider.rs

use async_trait::async_trait;
use serde_json::Value;

/// Errors surfaced by a generative provider. Agents treat every variant as
/// "fall back to demo data".
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed provider response: {0}")]
    Malformed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// A generated image as returned by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct ImageOutput {
    pub url: String,
    pub revised_prompt: Option<String>,
}

/// Anything that can write ad copy as JSON and render an image from a prompt
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Single-turn completion constrained to a JSON object
    async fn complete_json(&self, prompt: &str) -> ProviderResult<Value>;

    /// Generate one image and return where it lives
    async fn generate_image(&self, prompt: &str) -> ProviderResult<ImageOutput>;
}
