// src/agents/templates.rs
// Canned copy used in demo mode and for non-primary tone variations

use rand::Rng;
use rand::seq::IndexedRandom;

use super::types::{CopyLines, PerformanceHint, Tone};

const PRODUCT_PLACEHOLDER: &str = "{product}";
const AUDIENCE_PLACEHOLDER: &str = "{audience}";

pub struct ToneTemplates {
    pub headlines: &'static [&'static str],
    pub bodies: &'static [&'static str],
    pub ctas: &'static [&'static str],
}

static PROFESSIONAL: ToneTemplates = ToneTemplates {
    headlines: &[
        "Elevate Your Everyday. Discover {product}.",
        "The Smart Choice for {audience}. Meet {product}.",
        "Performance Meets Purpose — {product}.",
    ],
    bodies: &[
        "Designed for those who demand more, {product} delivers unmatched quality and reliability. Join thousands of satisfied customers who've made the switch.",
        "{product} is engineered for {audience} who refuse to compromise. Experience the difference that thoughtful design makes.",
        "When performance matters, professionals choose {product}. Built to exceed expectations, every single time.",
    ],
    ctas: &["Shop Now", "Learn More", "Get Started Today", "Explore {product}"],
};

static PLAYFUL: ToneTemplates = ToneTemplates {
    headlines: &[
        "Life's Too Short for Boring. Try {product}! 🎉",
        "Say Hello to Your New Favorite Thing: {product} ✨",
        "Fun Just Got an Upgrade — {product} is Here! 🚀",
    ],
    bodies: &[
        "Why settle for ordinary when {product} makes everything extraordinary? Your {audience} friends are already obsessed — don't miss out!",
        "Spoiler alert: once you try {product}, there's no going back. It's that good. Seriously. 😍",
        "{product} is the upgrade you didn't know you needed. Perfect for {audience} who love to stand out from the crowd!",
    ],
    ctas: &["Grab Yours Now! 🛒", "I Want One!", "Let's Go! 🎯", "Yes, Please!"],
};

static URGENT: ToneTemplates = ToneTemplates {
    headlines: &[
        "Limited Time: {product} at an Unbeatable Price",
        "Don't Miss Out — {product} Selling Fast!",
        "Last Chance: {product} Offer Ends Soon ⏰",
    ],
    bodies: &[
        "This exclusive offer on {product} won't last. {audience} are snapping these up fast — secure yours before it's gone.",
        "Only a few left! {product} has been flying off the shelves. Act now and get yours before stock runs out.",
        "Flash sale ending soon. {product} — the solution {audience} have been waiting for — now at its lowest price ever.",
    ],
    ctas: &[
        "Claim Your Deal Now",
        "Buy Before It's Gone",
        "Order Now — Limited Stock",
        "Get It Today",
    ],
};

static EMOTIONAL: ToneTemplates = ToneTemplates {
    headlines: &[
        "{product}: Because You Deserve the Best",
        "For the Moments That Matter — {product}",
        "Give Yourself (or Someone You Love) {product} 💙",
    ],
    bodies: &[
        "Some things just make life better. {product} is one of them. Crafted with care for {audience} who appreciate the finer things.",
        "Every day is an opportunity to live better. {product} helps {audience} do exactly that — one moment at a time.",
        "The people you love deserve the best. {product} is a gift that keeps giving, bringing joy to {audience} everywhere.",
    ],
    ctas: &[
        "Start Your Journey",
        "Feel the Difference",
        "Make Someone Happy",
        "Shop with Heart",
    ],
};

static PROFESSIONAL_HINT: PerformanceHint = PerformanceHint {
    best_for: "B2B, LinkedIn, decision-makers",
    avg_ctr: "2.1%",
    conversion: "High",
    icon: "💼",
};

static PLAYFUL_HINT: PerformanceHint = PerformanceHint {
    best_for: "Instagram, Gen Z, lifestyle brands",
    avg_ctr: "3.4%",
    conversion: "Medium",
    icon: "🎉",
};

static URGENT_HINT: PerformanceHint = PerformanceHint {
    best_for: "Retargeting, flash sales, limited offers",
    avg_ctr: "4.2%",
    conversion: "Very High",
    icon: "⚡",
};

static EMOTIONAL_HINT: PerformanceHint = PerformanceHint {
    best_for: "Facebook, storytelling, brand awareness",
    avg_ctr: "2.8%",
    conversion: "High",
    icon: "💙",
};

pub fn templates_for(tone: Tone) -> &'static ToneTemplates {
    match tone {
        Tone::Professional => &PROFESSIONAL,
        Tone::Playful => &PLAYFUL,
        Tone::Urgent => &URGENT,
        Tone::Emotional => &EMOTIONAL,
    }
}

pub fn performance_hint(tone: Tone) -> &'static PerformanceHint {
    match tone {
        Tone::Professional => &PROFESSIONAL_HINT,
        Tone::Playful => &PLAYFUL_HINT,
        Tone::Urgent => &URGENT_HINT,
        Tone::Emotional => &EMOTIONAL_HINT,
    }
}

/// Replace every `{product}` and `{audience}` placeholder
pub fn fill_template(text: &str, product_name: &str, audience: &str) -> String {
    text.replace(PRODUCT_PLACEHOLDER, product_name)
        .replace(AUDIENCE_PLACEHOLDER, audience)
}

fn pick<R: Rng + ?Sized>(options: &'static [&'static str], rng: &mut R) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

/// Draw one headline, body and CTA for `tone` and fill them in
pub fn pick_copy<R: Rng + ?Sized>(
    tone: Tone,
    product_name: &str,
    audience: &str,
    rng: &mut R,
) -> CopyLines {
    let templates = templates_for(tone);

    CopyLines {
        headline: fill_template(pick(templates.headlines, rng), product_name, audience),
        body: fill_template(pick(templates.bodies, rng), product_name, audience),
        cta: fill_template(pick(templates.ctas, rng), product_name, audience),
    }
}
