// src/agents/pipeline.rs
// Runs creative → design → variation → platform for one request

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::creative::generate_copy;
use super::design::generate_images;
use super::platform::{PlatformAdaptation, adapt_for_platforms};
use super::tone::{agent_reply, detect_tone, refinement_summary};
use super::types::{AdCopy, AdImage, Brief, Variation};
use super::variation::generate_variations;
use crate::config::AdConfig;
use crate::llm::{GenerativeProvider, OpenAiClient, ProviderResult};

pub const AGENT_NAMES: [&str; 4] = ["creative", "design", "variation", "platform"];

#[derive(Debug, Serialize)]
pub struct GenerateResult {
    pub job_id: Uuid,
    pub brief: Brief,
    pub copy: AdCopy,
    pub images: Vec<AdImage>,
    pub variations: Vec<Variation>,
    pub platforms: BTreeMap<String, PlatformAdaptation>,
    pub generated_at: String,
}

#[derive(Debug, Serialize)]
pub struct Refinement {
    pub copy: AdCopy,
    pub variations: Vec<Variation>,
    pub refinement_applied: String,
    pub message: String,
}

/// The four agents wired together. Without a provider everything comes
/// from the demo tables.
#[derive(Clone, Default)]
pub struct AdPipeline {
    provider: Option<Arc<dyn GenerativeProvider>>,
}

impl AdPipeline {
    pub fn demo() -> Self {
        Self { provider: None }
    }

    pub fn with_provider(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn from_config(config: &AdConfig) -> ProviderResult<Self> {
        if !config.live_mode() {
            return Ok(Self::demo());
        }
        let client = OpenAiClient::from_config(config)?;
        Ok(Self::with_provider(Arc::new(client)))
    }

    pub fn is_live(&self) -> bool {
        self.provider.is_some()
    }

    fn provider(&self) -> Option<&dyn GenerativeProvider> {
        self.provider.as_deref()
    }

    pub async fn generate(&self, brief: Brief) -> GenerateResult {
        let mut rng = StdRng::from_os_rng();
        self.generate_with_rng(brief, &mut rng).await
    }

    pub async fn generate_with_rng<R>(&self, brief: Brief, rng: &mut R) -> GenerateResult
    where
        R: Rng + Send + ?Sized,
    {
        let copy = generate_copy(&brief, self.provider(), rng).await;
        let images = generate_images(&brief, &copy, self.provider(), rng).await;
        let variations = generate_variations(&brief, &copy, rng);
        let platforms = adapt_for_platforms(&copy, &images, &brief.platforms);

        let result = GenerateResult {
            job_id: Uuid::new_v4(),
            brief,
            copy,
            images,
            variations,
            platforms,
            generated_at: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        };

        info!(
            job_id = %result.job_id,
            product = %result.brief.product_name,
            tone = %result.copy.tone,
            platforms = result.platforms.len(),
            "creative generated"
        );
        result
    }

    pub async fn refine(&self, message: &str, brief: Brief) -> Refinement {
        let mut rng = StdRng::from_os_rng();
        self.refine_with_rng(message, brief, &mut rng).await
    }

    /// Re-run copy and variations, switching tone when the message asks for one
    pub async fn refine_with_rng<R>(&self, message: &str, brief: Brief, rng: &mut R) -> Refinement
    where
        R: Rng + Send + ?Sized,
    {
        let tone = detect_tone(message);
        let brief = match tone {
            Some(tone) => brief.with_tone(tone.as_str()),
            None => brief,
        };

        let copy = generate_copy(&brief, self.provider(), rng).await;
        let variations = generate_variations(&brief, &copy, rng);
        let message = agent_reply(&copy, rng);

        Refinement {
            copy,
            variations,
            refinement_applied: refinement_summary(tone),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::types::Tone;
    use crate::llm::{ImageOutput, ProviderError};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    struct ScriptedProvider;

    #[async_trait]
    impl GenerativeProvider for ScriptedProvider {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn complete_json(&self, _prompt: &str) -> ProviderResult<Value> {
            Ok(json!({
                "headline": "Run Lighter Today",
                "body": "The lightest shoe we have ever made.",
                "cta": "Buy Now",
                "tone": "urgent"
            }))
        }

        async fn generate_image(&self, _prompt: &str) -> ProviderResult<ImageOutput> {
            Ok(ImageOutput {
                url: "https://oaidalleapiprodscus.blob.core.windows.net/img.png".to_string(),
                revised_prompt: None,
            })
        }
    }

    struct BrokenProvider;

    #[async_trait]
    impl GenerativeProvider for BrokenProvider {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn complete_json(&self, _prompt: &str) -> ProviderResult<Value> {
            Err(ProviderError::Status {
                status: 500,
                body: "upstream exploded".to_string(),
            })
        }

        async fn generate_image(&self, _prompt: &str) -> ProviderResult<ImageOutput> {
            Err(ProviderError::Malformed("no data".to_string()))
        }
    }

    fn brief() -> Brief {
        Brief::new("Aero Shoe", "Lightweight running shoe", "marathon runners")
            .with_platforms(["instagram", "google"])
    }

    #[tokio::test]
    async fn test_demo_generate() {
        let mut rng = StdRng::seed_from_u64(12);
        let result = AdPipeline::demo().generate_with_rng(brief(), &mut rng).await;

        assert_eq!(result.copy.tone, Tone::Professional);
        assert_eq!(result.images.len(), 3);
        assert_eq!(result.images[0].style, "fashion");
        assert_eq!(result.variations.len(), 4);
        assert!(result.variations[0].is_primary);
        assert_eq!(result.platforms.len(), 2);
        assert_eq!(
            result.platforms["instagram"].primary_image.as_deref(),
            Some(result.images[0].url.as_str())
        );
        assert!(result.generated_at.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_provider_generate() {
        let pipeline = AdPipeline::with_provider(Arc::new(ScriptedProvider));
        assert!(pipeline.is_live());

        let mut rng = StdRng::seed_from_u64(12);
        let result = pipeline.generate_with_rng(brief(), &mut rng).await;

        assert_eq!(result.copy.headline, "Run Lighter Today");
        assert_eq!(result.copy.tone, Tone::Urgent);
        assert_eq!(result.copy.product_name, "Aero Shoe");
        assert_eq!(result.images.len(), 1);
        assert_eq!(result.images[0].style, "ai-generated");
        assert_eq!(result.variations[0].tone, Tone::Urgent);
        assert_eq!(result.variations[0].headline, "Run Lighter Today");
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_once() {
        let pipeline = AdPipeline::with_provider(Arc::new(BrokenProvider));
        let mut rng = StdRng::seed_from_u64(12);
        let result = pipeline.generate_with_rng(brief(), &mut rng).await;

        assert_eq!(result.copy.tone, Tone::Professional);
        assert_eq!(result.images.len(), 3);
        assert!(result.images.iter().all(|i| i.url.starts_with("https://images.unsplash.com/")));
    }

    #[tokio::test]
    async fn test_refine_switches_tone() {
        let mut rng = StdRng::seed_from_u64(8);
        let refinement = AdPipeline::demo()
            .refine_with_rng("make it more playful", brief(), &mut rng)
            .await;

        assert_eq!(refinement.copy.tone, Tone::Playful);
        assert_eq!(refinement.refinement_applied, "Tone adjusted to 'playful'");
        assert_eq!(refinement.variations[0].tone, Tone::Playful);
        assert!(!refinement.message.is_empty());
    }

    #[tokio::test]
    async fn test_refine_without_tone_keeps_brief_tone() {
        let mut rng = StdRng::seed_from_u64(8);
        let refinement = AdPipeline::demo()
            .refine_with_rng("shorter please", brief().with_tone("emotional"), &mut rng)
            .await;

        assert_eq!(refinement.copy.tone, Tone::Emotional);
        assert_eq!(refinement.refinement_applied, "Copy refreshed");
    }

    #[test]
    fn test_from_config_demo_by_default() {
        let pipeline = AdPipeline::from_config(&AdConfig::default()).unwrap();
        assert!(!pipeline.is_live());
    }
}
