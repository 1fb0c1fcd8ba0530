// src/agents/variation.rs
// Variation agent: one A/B candidate per tone, primary first

use rand::Rng;

use super::templates::{performance_hint, pick_copy};
use super::types::{AdCopy, Brief, Tone, Variation};

pub fn generate_variations<R: Rng + ?Sized>(
    brief: &Brief,
    base_copy: &AdCopy,
    rng: &mut R,
) -> Vec<Variation> {
    let mut variations: Vec<Variation> = Tone::ALL
        .into_iter()
        .map(|tone| {
            if tone == base_copy.tone {
                Variation {
                    tone,
                    headline: base_copy.headline.clone(),
                    body: base_copy.body.clone(),
                    cta: base_copy.cta.clone(),
                    is_primary: true,
                    performance_hint: performance_hint(tone),
                }
            } else {
                let lines = pick_copy(tone, &brief.product_name, &brief.audience, rng);
                Variation {
                    tone,
                    headline: lines.headline,
                    body: lines.body,
                    cta: lines.cta,
                    is_primary: false,
                    performance_hint: performance_hint(tone),
                }
            }
        })
        .collect();

    variations.sort_by_key(|v| (!v.is_primary, v.tone.position()));
    variations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::creative::demo_copy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_primary_first_then_canonical_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let brief = Brief::new("Aero", "shoe", "runners").with_tone("urgent");
        let base = demo_copy(&brief, &mut rng);

        let variations = generate_variations(&brief, &base, &mut rng);
        let tones: Vec<Tone> = variations.iter().map(|v| v.tone).collect();
        assert_eq!(
            tones,
            vec![Tone::Urgent, Tone::Professional, Tone::Playful, Tone::Emotional]
        );

        assert!(variations[0].is_primary);
        assert_eq!(variations[0].headline, base.headline);
        assert_eq!(variations[0].cta, base.cta);
        assert_eq!(variations.iter().filter(|v| v.is_primary).count(), 1);
    }

    #[test]
    fn test_hints_match_tone() {
        let mut rng = StdRng::seed_from_u64(2);
        let brief = Brief::new("Aero", "shoe", "runners");
        let base = demo_copy(&brief, &mut rng);

        for variation in generate_variations(&brief, &base, &mut rng) {
            assert_eq!(variation.performance_hint, performance_hint(variation.tone));
            assert!(!variation.headline.contains("{product}"));
        }
    }
}
