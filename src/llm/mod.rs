// src/llm/mod.rs
// Generative provider seam: trait, error type and the OpenAI implementation

pub mod openai;
pub mod provider;

pub use openai::OpenAiClient;
pub use provider::{GenerativeProvider, ImageOutput, ProviderError, ProviderResult};
