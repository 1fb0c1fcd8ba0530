// src/agents/design.rs
// Design agent: picks or generates the visuals for a brief

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

use super::types::{AdCopy, AdImage, Brief};
use crate::llm::GenerativeProvider;

const DEMO_IMAGE_COUNT: usize = 3;
pub const AI_GENERATED_STYLE: &str = "ai-generated";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCategory {
    Tech,
    Food,
    Fashion,
    Fitness,
    Lifestyle,
    Default,
}

impl ImageCategory {
    /// Detection order; the first category with a matching keyword wins
    const DETECTION_ORDER: [ImageCategory; 5] = [
        ImageCategory::Tech,
        ImageCategory::Food,
        ImageCategory::Fashion,
        ImageCategory::Fitness,
        ImageCategory::Lifestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageCategory::Tech => "tech",
            ImageCategory::Food => "food",
            ImageCategory::Fashion => "fashion",
            ImageCategory::Fitness => "fitness",
            ImageCategory::Lifestyle => "lifestyle",
            ImageCategory::Default => "default",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            ImageCategory::Tech => &["tech", "app", "software", "device", "phone", "laptop", "computer"],
            ImageCategory::Food => &["food", "drink", "eat", "restaurant", "meal", "snack", "beverage"],
            ImageCategory::Fashion => &["fashion", "cloth", "wear", "style", "outfit", "dress", "shoe"],
            ImageCategory::Fitness => &["fit", "gym", "workout", "health", "sport", "exercise", "yoga"],
            ImageCategory::Lifestyle => &["life", "home", "family", "travel", "people", "social"],
            ImageCategory::Default => &[],
        }
    }

    /// Curated Unsplash shots (free, no auth)
    pub fn demo_urls(&self) -> &'static [&'static str] {
        match self {
            ImageCategory::Tech => &[
                "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800&q=80",
                "https://images.unsplash.com/photo-1531297484001-80022131f5a1?w=800&q=80",
                "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=800&q=80",
            ],
            ImageCategory::Lifestyle => &[
                "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=800&q=80",
                "https://images.unsplash.com/photo-1529156069898-49953e39b3ac?w=800&q=80",
                "https://images.unsplash.com/photo-1511988617509-a57c8a288659?w=800&q=80",
            ],
            ImageCategory::Food => &[
                "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=800&q=80",
                "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=800&q=80",
                "https://images.unsplash.com/photo-1498837167922-ddd27525d352?w=800&q=80",
            ],
            ImageCategory::Fashion => &[
                "https://images.unsplash.com/photo-1445205170230-053b83016050?w=800&q=80",
                "https://images.unsplash.com/photo-1490481651871-ab68de25d43d?w=800&q=80",
                "https://images.unsplash.com/photo-1539109136881-3be0616acf4b?w=800&q=80",
            ],
            ImageCategory::Fitness => &[
                "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?w=800&q=80",
                "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=800&q=80",
                "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&q=80",
            ],
            ImageCategory::Default => &[
                "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=800&q=80",
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&q=80",
                "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?w=800&q=80",
            ],
        }
    }
}

/// Keyword match over product name and description
pub fn detect_category(brief: &Brief) -> ImageCategory {
    let text = format!("{} {}", brief.product_name, brief.description).to_lowercase();

    ImageCategory::DETECTION_ORDER
        .into_iter()
        .find(|category| category.keywords().iter().any(|k| text.contains(k)))
        .unwrap_or(ImageCategory::Default)
}

pub fn build_image_prompt(brief: &Brief) -> String {
    format!(
        "Professional advertising photo for {}. {}. Target audience: {}. \
         Style: modern, clean, high-quality commercial photography. No text overlay.",
        brief.product_name, brief.description, brief.audience
    )
}

pub fn demo_images<R: Rng + ?Sized>(brief: &Brief, rng: &mut R) -> Vec<AdImage> {
    let category = detect_category(brief);
    let prompt = format!(
        "Ad visual for {} targeting {}",
        brief.product_name, brief.audience
    );

    category
        .demo_urls()
        .choose_multiple(rng, DEMO_IMAGE_COUNT)
        .enumerate()
        .map(|(i, url)| AdImage {
            url: url.to_string(),
            prompt: prompt.clone(),
            style: category.as_str().to_string(),
            index: i + 1,
        })
        .collect()
}

/// One generated image when a provider is configured, curated stock otherwise
pub async fn generate_images<R>(
    brief: &Brief,
    _copy: &AdCopy,
    provider: Option<&dyn GenerativeProvider>,
    rng: &mut R,
) -> Vec<AdImage>
where
    R: Rng + Send + ?Sized,
{
    if let Some(provider) = provider {
        let prompt = build_image_prompt(brief);
        match provider.generate_image(&prompt).await {
            Ok(image) => {
                debug!(provider = provider.name(), "image generated");
                return vec![AdImage {
                    url: image.url,
                    prompt,
                    style: AI_GENERATED_STYLE.to_string(),
                    index: 1,
                }];
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "image generation failed, falling back to stock images");
            }
        }
    }

    demo_images(brief, rng)
}
