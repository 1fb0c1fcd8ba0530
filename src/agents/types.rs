// src/agents/types.rs
// Domain types shared by the four agents and the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_PRODUCT_NAME: &str = "Our Product";
pub const DEFAULT_AUDIENCE: &str = "customers";
pub const DEFAULT_PLATFORMS: [&str; 4] = ["instagram", "facebook", "twitter", "linkedin"];

/// Voice of a piece of copy. Declaration order is the canonical order used
/// for variations and keyword detection.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Playful,
    Urgent,
    Emotional,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Playful, Tone::Urgent, Tone::Emotional];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Playful => "playful",
            Tone::Urgent => "urgent",
            Tone::Emotional => "emotional",
        }
    }

    /// Exact, case-sensitive parse; `None` for anything that is not a known tone
    pub fn parse(raw: &str) -> Option<Tone> {
        Tone::ALL.into_iter().find(|tone| tone.as_str() == raw)
    }

    /// Lenient parse used for generation: unknown tones write professional copy
    pub fn resolve(raw: &str) -> Tone {
        Tone::parse(raw).unwrap_or_default()
    }

    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_tone() -> String {
    Tone::Professional.as_str().to_string()
}

fn default_platforms() -> Vec<String> {
    DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect()
}

/// Product brief handed to every agent. Agents only ever borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brief {
    pub product_name: String,
    pub description: String,
    pub audience: String,
    pub tone: String,
    pub platforms: Vec<String>,
}

impl Default for Brief {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            description: String::new(),
            audience: DEFAULT_AUDIENCE.to_string(),
            tone: default_tone(),
            platforms: default_platforms(),
        }
    }
}

impl Brief {
    pub fn new(
        product_name: impl Into<String>,
        description: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            description: description.into(),
            audience: audience.into(),
            ..Self::default()
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    pub fn resolved_tone(&self) -> Tone {
        Tone::resolve(&self.tone)
    }
}

/// Headline, body and call to action before they are attached to a tone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyLines {
    pub headline: String,
    pub body: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdCopy {
    pub headline: String,
    pub body: String,
    pub cta: String,
    pub tone: Tone,
    pub product_name: String,
    pub audience: String,
}

impl AdCopy {
    pub fn from_lines(lines: CopyLines, tone: Tone, brief: &Brief) -> Self {
        Self {
            headline: lines.headline,
            body: lines.body,
            cta: lines.cta,
            tone,
            product_name: brief.product_name.clone(),
            audience: brief.audience.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdImage {
    pub url: String,
    pub prompt: String,
    pub style: String,
    pub index: usize,
}

/// Typical results for a tone, shown next to each variation
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PerformanceHint {
    pub best_for: &'static str,
    pub avg_ctr: &'static str,
    pub conversion: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Variation {
    pub tone: Tone,
    pub headline: String,
    pub body: String,
    pub cta: String,
    pub is_primary: bool,
    pub performance_hint: &'static PerformanceHint,
}
