// src/agents/platform.rs
// Platform agent: fits the copy to each network's limits and layouts

use serde::Serialize;
use std::collections::BTreeMap;

use super::types::{AdCopy, AdImage};

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AdFormat {
    pub name: &'static str,
    pub ratio: &'static str,
    pub width: u32,
    pub height: u32,
    pub css_ratio: &'static str,
}

/// Maximum characters per copy field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CopyLimits {
    pub headline: usize,
    pub body: usize,
    pub cta: usize,
}

#[derive(Debug, Serialize)]
pub struct PlatformSpec {
    #[serde(skip)]
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub formats: &'static [AdFormat],
    pub copy_limits: CopyLimits,
    pub tips: &'static str,
    pub audience_reach: &'static str,
    pub best_for: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdaptedCopy {
    pub headline: String,
    pub body: String,
    pub cta: String,
}

#[derive(Debug, Serialize)]
pub struct PlatformAdaptation {
    #[serde(flatten)]
    pub spec: &'static PlatformSpec,
    pub adapted_copy: AdaptedCopy,
    pub primary_image: Option<String>,
    pub primary_format: Option<&'static AdFormat>,
}

pub static PLATFORMS: &[PlatformSpec] = &[
    PlatformSpec {
        key: "instagram",
        name: "Instagram",
        icon: "📸",
        color: "#E1306C",
        formats: &[
            AdFormat { name: "Feed Post", ratio: "1:1", width: 1080, height: 1080, css_ratio: "1/1" },
            AdFormat { name: "Story", ratio: "9:16", width: 1080, height: 1920, css_ratio: "9/16" },
            AdFormat { name: "Reel Cover", ratio: "9:16", width: 1080, height: 1920, css_ratio: "9/16" },
        ],
        copy_limits: CopyLimits { headline: 40, body: 125, cta: 20 },
        tips: "Use bold visuals, minimal text. Stories perform best with motion.",
        audience_reach: "2B+ users",
        best_for: "Visual brands, lifestyle, fashion, food",
    },
    PlatformSpec {
        key: "facebook",
        name: "Facebook",
        icon: "👥",
        color: "#1877F2",
        formats: &[
            AdFormat { name: "Feed Ad", ratio: "1.91:1", width: 1200, height: 628, css_ratio: "1.91/1" },
            AdFormat { name: "Square Post", ratio: "1:1", width: 1080, height: 1080, css_ratio: "1/1" },
            AdFormat { name: "Story", ratio: "9:16", width: 1080, height: 1920, css_ratio: "9/16" },
        ],
        copy_limits: CopyLimits { headline: 40, body: 125, cta: 20 },
        tips: "Longer copy works well. Include social proof and clear value proposition.",
        audience_reach: "3B+ users",
        best_for: "All demographics, retargeting, lead generation",
    },
    PlatformSpec {
        key: "twitter",
        name: "Twitter / X",
        icon: "🐦",
        color: "#000000",
        formats: &[
            AdFormat { name: "Promoted Tweet", ratio: "16:9", width: 1200, height: 675, css_ratio: "16/9" },
            AdFormat { name: "Card Image", ratio: "2:1", width: 800, height: 400, css_ratio: "2/1" },
        ],
        copy_limits: CopyLimits { headline: 70, body: 280, cta: 20 },
        tips: "Be concise and punchy. Use trending hashtags. Engage with replies.",
        audience_reach: "550M+ users",
        best_for: "Tech, news, real-time marketing, B2B",
    },
    PlatformSpec {
        key: "linkedin",
        name: "LinkedIn",
        icon: "💼",
        color: "#0A66C2",
        formats: &[
            AdFormat { name: "Sponsored Content", ratio: "1.91:1", width: 1200, height: 627, css_ratio: "1.91/1" },
            AdFormat { name: "Square Ad", ratio: "1:1", width: 1080, height: 1080, css_ratio: "1/1" },
        ],
        copy_limits: CopyLimits { headline: 70, body: 150, cta: 20 },
        tips: "Professional tone works best. Lead with value, include industry insights.",
        audience_reach: "900M+ professionals",
        best_for: "B2B, recruiting, professional services, SaaS",
    },
    PlatformSpec {
        key: "google",
        name: "Google Display",
        icon: "🔍",
        color: "#4285F4",
        formats: &[
            AdFormat { name: "Leaderboard", ratio: "728:90", width: 728, height: 90, css_ratio: "728/90" },
            AdFormat { name: "Medium Rectangle", ratio: "300:250", width: 300, height: 250, css_ratio: "300/250" },
            AdFormat { name: "Large Rectangle", ratio: "336:280", width: 336, height: 280, css_ratio: "336/280" },
        ],
        copy_limits: CopyLimits { headline: 30, body: 90, cta: 15 },
        tips: "Keep it simple. Strong CTA. Test multiple sizes for best reach.",
        audience_reach: "90% of internet users",
        best_for: "Retargeting, brand awareness, search intent",
    },
];

pub fn find_platform(key: &str) -> Option<&'static PlatformSpec> {
    let key = key.trim();
    PLATFORMS.iter().find(|p| p.key.eq_ignore_ascii_case(key))
}

/// Keep at most `limit` characters; never splits a code point
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

pub fn adapt_copy(copy: &AdCopy, limits: CopyLimits) -> AdaptedCopy {
    AdaptedCopy {
        headline: truncate_chars(&copy.headline, limits.headline),
        body: truncate_chars(&copy.body, limits.body),
        cta: truncate_chars(&copy.cta, limits.cta),
    }
}

/// Adaptations keyed by platform. An empty selection means every platform;
/// unknown keys are skipped.
pub fn adapt_for_platforms(
    copy: &AdCopy,
    images: &[AdImage],
    platforms: &[String],
) -> BTreeMap<String, PlatformAdaptation> {
    let selected: Vec<&'static PlatformSpec> = if platforms.is_empty() {
        PLATFORMS.iter().collect()
    } else {
        platforms.iter().filter_map(|key| find_platform(key)).collect()
    };

    let primary_image = images.first().map(|image| image.url.clone());

    selected
        .into_iter()
        .map(|spec| {
            let adaptation = PlatformAdaptation {
                spec,
                adapted_copy: adapt_copy(copy, spec.copy_limits),
                primary_image: primary_image.clone(),
                primary_format: spec.formats.first(),
            };
            (spec.key.to_string(), adaptation)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::types::Tone;

    fn copy() -> AdCopy {
        AdCopy {
            headline: "H".repeat(100),
            body: "B".repeat(400),
            cta: "Grab Yours Now! 🛒 Right Now".to_string(),
            tone: Tone::Playful,
            product_name: "Aero".to_string(),
            audience: "runners".to_string(),
        }
    }

    fn image(url: &str) -> AdImage {
        AdImage {
            url: url.to_string(),
            prompt: "p".to_string(),
            style: "tech".to_string(),
            index: 1,
        }
    }

    #[test]
    fn test_truncate_chars_respects_code_points() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("🎉🎉🎉", 2), "🎉🎉");
        assert_eq!(truncate_chars("short", 20), "short");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_adapt_applies_limits() {
        let platforms = vec!["google".to_string(), "twitter".to_string()];
        let result = adapt_for_platforms(&copy(), &[image("https://a"), image("https://b")], &platforms);

        assert_eq!(result.len(), 2);
        let google = &result["google"];
        assert_eq!(google.adapted_copy.headline.chars().count(), 30);
        assert_eq!(google.adapted_copy.body.chars().count(), 90);
        assert_eq!(google.adapted_copy.cta.chars().count(), 15);
        assert_eq!(google.primary_image.as_deref(), Some("https://a"));
        assert_eq!(google.primary_format.map(|f| f.name), Some("Leaderboard"));

        let twitter = &result["twitter"];
        assert_eq!(twitter.adapted_copy.body.chars().count(), 280);
    }

    #[test]
    fn test_empty_selection_means_all_and_unknown_skipped() {
        let all = adapt_for_platforms(&copy(), &[], &[]);
        assert_eq!(all.len(), PLATFORMS.len());
        assert!(all.values().all(|p| p.primary_image.is_none()));

        let some = adapt_for_platforms(&copy(), &[], &["myspace".to_string(), "LinkedIn".to_string()]);
        assert_eq!(some.len(), 1);
        assert!(some.contains_key("linkedin"));
    }

    #[test]
    fn test_serialized_shape_flattens_spec() {
        let result = adapt_for_platforms(&copy(), &[image("https://a")], &["instagram".to_string()]);
        let value = serde_json::to_value(&result).unwrap();
        let instagram = &value["instagram"];

        assert_eq!(instagram["name"], "Instagram");
        assert_eq!(instagram["copy_limits"]["headline"], 40);
        assert_eq!(instagram["formats"].as_array().unwrap().len(), 3);
        assert_eq!(instagram["primary_format"]["ratio"], "1:1");
        assert_eq!(instagram["adapted_copy"]["cta"], "Grab Yours Now! 🛒 Ri");
        assert!(instagram.get("key").is_none());
    }
}
