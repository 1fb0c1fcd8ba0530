// src/agents/tone.rs
// Reading tone intent out of a free-text refinement request

use rand::Rng;

use super::types::{AdCopy, Tone};

fn keywords(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Professional => &["professional", "formal", "business", "corporate", "serious", "b2b"],
        Tone::Playful => &["playful", "fun", "funny", "casual", "light", "humorous", "witty", "young"],
        Tone::Urgent => &["urgent", "urgency", "scarcity", "limited", "hurry", "fast", "quick", "now", "sale"],
        Tone::Emotional => &["emotional", "heartfelt", "touching", "warm", "inspiring", "story", "feel"],
    }
}

/// First tone (canonical order) with a keyword contained in the message.
/// Matching is substring-based, so "funny" and "fun" both hit playful.
pub fn detect_tone(message: &str) -> Option<Tone> {
    let message = message.to_lowercase();
    Tone::ALL
        .into_iter()
        .find(|tone| keywords(*tone).iter().any(|kw| message.contains(kw)))
}

pub fn refinement_summary(tone: Option<Tone>) -> String {
    match tone {
        Some(tone) => format!("Tone adjusted to '{tone}'"),
        None => "Copy refreshed".to_string(),
    }
}

/// Friendly chat reply for the refinement panel
pub fn agent_reply<R: Rng + ?Sized>(copy: &AdCopy, rng: &mut R) -> String {
    match rng.random_range(0..4) {
        0 => format!(
            "✅ Got it! I've updated the copy to match your request. The new headline is: \"{}\"",
            copy.headline
        ),
        1 => "🎯 Done! I've refined the creative based on your feedback. Check out the updated version!"
            .to_string(),
        2 => "✨ Updated! Here's the refreshed copy with your adjustments applied.".to_string(),
        _ => format!(
            "🚀 Refined! The new headline reads: \"{}\" — let me know if you'd like more changes!",
            copy.headline
        ),
    }
}
