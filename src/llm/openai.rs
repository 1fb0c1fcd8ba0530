// src/llm/openai.rs

//! Low-level OpenAI client for chat completions (JSON mode) and image generation.
//! Plain reqwest; no SDK.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use super::provider::{GenerativeProvider, ImageOutput, ProviderError, ProviderResult};
use crate::config::AdConfig;

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    api_base: String,
    copy_model: String,
    image_model: String,
    image_size: String,
    image_quality: String,
}

impl OpenAiClient {
    pub fn from_config(config: &AdConfig) -> ProviderResult<Self> {
        let client = Client::builder().timeout(config.openai_timeout()).build()?;

        Ok(Self {
            client,
            api_key: config.openai_api_key.clone(),
            api_base: config.openai_base_url.trim_end_matches('/').to_string(),
            copy_model: config.copy_model.clone(),
            image_model: config.image_model.clone(),
            image_size: config.image_size.clone(),
            image_quality: config.image_quality.clone(),
        })
    }

    async fn post_json(&self, endpoint: &str, body: &Value) -> ProviderResult<Value> {
        let url = format!("{}/{}", self.api_base, endpoint);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Pull the JSON object out of a chat-completions response
pub(crate) fn extract_json_content(raw: &Value) -> ProviderResult<Value> {
    let content = raw["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| ProviderError::Malformed("no message content in completion".into()))?;

    let parsed: Value = serde_json::from_str(content)?;
    if !parsed.is_object() {
        return Err(ProviderError::Malformed(
            "completion content is not a JSON object".into(),
        ));
    }
    Ok(parsed)
}

/// Pull the first image out of an images/generations response
pub(crate) fn extract_image(raw: &Value) -> ProviderResult<ImageOutput> {
    let first = &raw["data"][0];
    let url = first["url"]
        .as_str()
        .ok_or_else(|| ProviderError::Malformed("no image url in response".into()))?;

    Ok(ImageOutput {
        url: url.to_string(),
        revised_prompt: first["revised_prompt"].as_str().map(str::to_string),
    })
}

#[async_trait]
impl GenerativeProvider for OpenAiClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete_json(&self, prompt: &str) -> ProviderResult<Value> {
        debug!(model = %self.copy_model, "requesting ad copy completion");
        let body = json!({
            "model": self.copy_model,
            "messages": [{ "role": "user", "content": prompt }],
            "response_format": { "type": "json_object" }
        });

        let raw = self.post_json("chat/completions", &body).await?;
        extract_json_content(&raw)
    }

    async fn generate_image(&self, prompt: &str) -> ProviderResult<ImageOutput> {
        debug!(model = %self.image_model, "requesting ad visual");
        let body = json!({
            "model": self.image_model,
            "prompt": prompt,
            "size": self.image_size,
            "quality": self.image_quality,
            "n": 1
        });

        let raw = self.post_json("images/generations", &body).await?;
        extract_image(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_content() {
        let raw = json!({
            "choices": [{
                "message": { "content": "{\"headline\":\"Hi\",\"body\":\"B\",\"cta\":\"Go\"}" }
            }]
        });
        let parsed = extract_json_content(&raw).unwrap();
        assert_eq!(parsed["headline"], "Hi");
    }

    #[test]
    fn test_extract_json_content_rejects_non_object() {
        let raw = json!({ "choices": [{ "message": { "content": "[1,2]" } }] });
        assert!(matches!(
            extract_json_content(&raw),
            Err(ProviderError::Malformed(_))
        ));

        let raw = json!({ "choices": [] });
        assert!(extract_json_content(&raw).is_err());

        let raw = json!({ "choices": [{ "message": { "content": "not json" } }] });
        assert!(matches!(
            extract_json_content(&raw),
            Err(ProviderError::Serialization(_))
        ));
    }

    #[test]
    fn test_extract_image() {
        let raw = json!({
            "data": [{ "url": "https://example.com/a.png", "revised_prompt": "sharper" }]
        });
        let image = extract_image(&raw).unwrap();
        assert_eq!(image.url, "https://example.com/a.png");
        assert_eq!(image.revised_prompt.as_deref(), Some("sharper"));

        assert!(extract_image(&json!({ "data": [] })).is_err());
    }

    #[test]
    fn test_from_config_trims_base_url() {
        let config = AdConfig {
            openai_base_url: "http://localhost:9999/v1/".to_string(),
            ..AdConfig::default()
        };
        let client = OpenAiClient::from_config(&config).unwrap();
        assert_eq!(client.api_base, "http://localhost:9999/v1");
        assert_eq!(client.name(), "openai");
    }
}
