// src/agents/creative.rs
// Creative agent: turns a brief into headline, body and CTA

use rand::Rng;
use serde_json::Value;
use tracing::{debug, warn};

use super::templates::pick_copy;
use super::types::{AdCopy, Brief, CopyLines, Tone};
use crate::llm::{GenerativeProvider, ProviderError, ProviderResult};

pub fn build_copy_prompt(brief: &Brief) -> String {
    format!(
        "You are an expert advertising copywriter. Generate compelling ad copy for:\n\
         Product: {}\n\
         Description: {}\n\
         Target Audience: {}\n\
         Tone: {}\n\n\
         Return a JSON object with keys: headline, body, cta, tone, product_name, audience.\n\
         Keep headline under 10 words, body under 50 words, cta under 5 words.",
        brief.product_name, brief.description, brief.audience, brief.tone
    )
}

fn required_field(value: &Value, key: &str) -> ProviderResult<String> {
    value[key]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ProviderError::Malformed(format!("copy is missing '{key}'")))
}

/// Validate provider JSON. Product and audience always come from the brief.
pub fn parse_provider_copy(value: &Value, brief: &Brief) -> ProviderResult<AdCopy> {
    let lines = CopyLines {
        headline: required_field(value, "headline")?,
        body: required_field(value, "body")?,
        cta: required_field(value, "cta")?,
    };
    let tone = value["tone"]
        .as_str()
        .and_then(Tone::parse)
        .unwrap_or_else(|| brief.resolved_tone());

    Ok(AdCopy::from_lines(lines, tone, brief))
}

/// Template copy for the brief's tone
pub fn demo_copy<R: Rng + ?Sized>(brief: &Brief, rng: &mut R) -> AdCopy {
    let tone = brief.resolved_tone();
    let lines = pick_copy(tone, &brief.product_name, &brief.audience, rng);
    AdCopy::from_lines(lines, tone, brief)
}

async fn provider_copy(provider: &dyn GenerativeProvider, brief: &Brief) -> ProviderResult<AdCopy> {
    let value = provider.complete_json(&build_copy_prompt(brief)).await?;
    parse_provider_copy(&value, brief)
}

/// Provider copy when one is configured, template copy otherwise or on any failure
pub async fn generate_copy<R>(
    brief: &Brief,
    provider: Option<&dyn GenerativeProvider>,
    rng: &mut R,
) -> AdCopy
where
    R: Rng + Send + ?Sized,
{
    if let Some(provider) = provider {
        match provider_copy(provider, brief).await {
            Ok(copy) => {
                debug!(provider = provider.name(), tone = %copy.tone, "copy generated");
                return copy;
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "copy generation failed, falling back to templates");
            }
        }
    }

    demo_copy(brief, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    fn brief() -> Brief {
        Brief::new("Aero Shoe", "Lightweight running shoe", "marathon runners").with_tone("playful")
    }

    #[test]
    fn test_prompt_mentions_brief() {
        let prompt = build_copy_prompt(&brief());
        assert!(prompt.contains("Product: Aero Shoe"));
        assert!(prompt.contains("Target Audience: marathon runners"));
        assert!(prompt.contains("Tone: playful"));
    }

    #[test]
    fn test_parse_provider_copy_overrides_identity() {
        let value = json!({
            "headline": "Run Lighter",
            "body": "Feel every mile less.",
            "cta": "Try It",
            "tone": "urgent",
            "product_name": "Something Else",
            "audience": "nobody"
        });
        let copy = parse_provider_copy(&value, &brief()).unwrap();
        assert_eq!(copy.headline, "Run Lighter");
        assert_eq!(copy.tone, Tone::Urgent);
        assert_eq!(copy.product_name, "Aero Shoe");
        assert_eq!(copy.audience, "marathon runners");
    }

    #[test]
    fn test_parse_provider_copy_defaults_tone_to_brief() {
        let value = json!({ "headline": "H", "body": "B", "cta": "C", "tone": "snarky" });
        let copy = parse_provider_copy(&value, &brief()).unwrap();
        assert_eq!(copy.tone, Tone::Playful);
    }

    #[test]
    fn test_parse_provider_copy_requires_fields() {
        let value = json!({ "headline": "H", "body": "  ", "cta": "C" });
        let err = parse_provider_copy(&value, &brief()).unwrap_err();
        assert!(err.to_string().contains("body"));
    }

    #[test]
    fn test_demo_copy_unknown_tone_is_professional() {
        let mut rng = StdRng::seed_from_u64(5);
        let copy = demo_copy(&brief().with_tone("whimsical"), &mut rng);
        assert_eq!(copy.tone, Tone::Professional);
        assert_eq!(copy.product_name, "Aero Shoe");
    }

    #[tokio::test]
    async fn test_generate_copy_without_provider_uses_templates() {
        let mut rng = StdRng::seed_from_u64(9);
        let copy = generate_copy(&brief(), None, &mut rng).await;
        assert_eq!(copy.tone, Tone::Playful);
        assert!(!copy.headline.contains("{product}"));
    }
}
