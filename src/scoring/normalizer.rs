//! Converts raw scene features into contextualized category scores.
//!
//! Violence and gore are density scores (matches per hundred words) scaled by
//! multipliers derived from the scene's archetype similarities. The other
//! categories use fixed per-category formulas; see [`contextualize`].

use crate::core::{Archetype, Category, CategoryScores, FeatureVector, ScoreVector};

use super::UnitScore;

// Compared in f32, the precision of `ContextScores`.

/// Narrated, testimonial or suspense-only violence.
const DISCUSSION_THRESHOLD: f32 = 0.55;
const THRILLER_THRESHOLD: f32 = 0.5;
const DISCUSSION_DAMPENER: f64 = 0.3;

const STYLIZED_THRESHOLD: f32 = 0.5;
const STYLIZED_VIOLENCE: f64 = 0.6;
const STYLIZED_GORE: f64 = 0.7;

const GRAPHIC_THRESHOLD: f32 = 0.6;
const GRAPHIC_VIOLENCE: f64 = 1.3;
const GRAPHIC_GORE: f64 = 1.4;

const HORROR_THRESHOLD: f32 = 0.55;
const HORROR_VIOLENCE: f64 = 1.2;
const HORROR_GORE: f64 = 1.3;

const SEXUAL_CONTEXT_THRESHOLD: f32 = 0.6;
const ROMANCE_THRESHOLD: f32 = 0.5;
const ROMANCE_CEILING: f64 = 0.3;

const DRUG_ABUSE_THRESHOLD: f32 = 0.55;
const CHILD_ENDANGERMENT_THRESHOLD: f32 = 0.5;
const UNCONFIRMED_CHILD_CEILING: f64 = 0.5;

/// Context multipliers for violence and gore, in that order.
pub fn violence_multipliers(features: &FeatureVector) -> (f64, f64) {
    let ctx = |a: Archetype| features.context.get(a);
    let (mut violence, mut gore) = (1.0, 1.0);

    if ctx(Archetype::DiscussionViolence) > DISCUSSION_THRESHOLD
        || ctx(Archetype::ThrillerTension) > THRILLER_THRESHOLD
    {
        violence *= DISCUSSION_DAMPENER;
        gore *= DISCUSSION_DAMPENER;
    } else if ctx(Archetype::StylizedAction) > STYLIZED_THRESHOLD {
        violence *= STYLIZED_VIOLENCE;
        gore *= STYLIZED_GORE;
    }

    if ctx(Archetype::GraphicViolence) > GRAPHIC_THRESHOLD {
        violence *= GRAPHIC_VIOLENCE;
        gore *= GRAPHIC_GORE;
    }
    if ctx(Archetype::HorrorViolence) > HORROR_THRESHOLD {
        violence *= HORROR_VIOLENCE;
        gore *= HORROR_GORE;
    }
    (violence, gore)
}

/// Score one scene.
///
/// | category   | formula                                                          |
/// |------------|------------------------------------------------------------------|
/// | violence   | `count / length * 100 * multiplier`                              |
/// | gore       | `count / length * 100 * multiplier`                              |
/// | sex_act    | `1.5 * count` in sexual context, `min(0.3, 0.5 * count)` in romance, else `count` |
/// | nudity     | `count / 3`                                                      |
/// | profanity  | `count / (length / 100)`                                         |
/// | drugs      | `count / 2` in drug-abuse context, else `count / 5`              |
/// | child_risk | `count / 2` in endangerment context, else `min(0.5, count / 5)`  |
///
/// Every result is clamped to `[0, 1]`.
pub fn contextualize(features: &FeatureVector) -> ScoreVector {
    let length = features.length.max(1) as f64;
    let count = |c: Category| features.counts.get(c) as f64;
    let ctx = |a: Archetype| features.context.get(a);

    let (violence_mult, gore_mult) = violence_multipliers(features);
    let density = |c: Category| count(c) / length * 100.0;

    let sexual = count(Category::Sexual);
    let sex_act = if ctx(Archetype::SexualContent) > SEXUAL_CONTEXT_THRESHOLD && sexual > 0.0 {
        UnitScore::new(sexual * 1.5)
    } else if ctx(Archetype::MildRomance) > ROMANCE_THRESHOLD {
        UnitScore::capped(sexual * 0.5, ROMANCE_CEILING)
    } else {
        UnitScore::new(sexual)
    };

    let drugs = if ctx(Archetype::DrugAbuse) > DRUG_ABUSE_THRESHOLD {
        count(Category::Drugs) / 2.0
    } else {
        count(Category::Drugs) / 5.0
    };

    let child = count(Category::ChildRisk);
    let child_risk = if child == 0.0 {
        UnitScore::ZERO
    } else if ctx(Archetype::ChildEndangerment) > CHILD_ENDANGERMENT_THRESHOLD {
        UnitScore::new(child / 2.0)
    } else {
        UnitScore::capped(child / 5.0, UNCONFIRMED_CHILD_CEILING)
    };

    let scores = CategoryScores {
        violence: UnitScore::new(density(Category::Violence) * violence_mult),
        gore: UnitScore::new(density(Category::Gore) * gore_mult),
        sex_act,
        nudity: UnitScore::new(count(Category::Nudity) / 3.0),
        profanity: UnitScore::new(count(Category::Profanity) / (length / 100.0)),
        drugs: UnitScore::new(drugs),
        child_risk,
    };

    ScoreVector {
        scores,
        excerpts: features.excerpts.clone(),
        context: features.context.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CategoryCounts, CategoryExcerpts, ContextScores};
    use proptest::prelude::*;

    fn features(counts: &[(Category, usize)], length: usize, context: ContextScores) -> FeatureVector {
        let mut c = CategoryCounts::default();
        for (category, n) in counts {
            c.set(*category, *n);
        }
        FeatureVector {
            counts: c,
            excerpts: CategoryExcerpts::new(),
            length,
            context,
        }
    }

    fn close(a: UnitScore, b: f64) -> bool {
        (a.value() - b).abs() < 1e-9
    }

    #[test]
    fn violence_is_density_per_hundred_words() {
        let fv = features(&[(Category::Violence, 1)], 400, ContextScores::new());
        assert!(close(contextualize(&fv).scores.violence, 0.25));
    }

    #[test]
    fn discussion_context_dampens_violence_and_gore() {
        let ctx = ContextScores::new().with(Archetype::DiscussionViolence, 0.6);
        let fv = features(&[(Category::Violence, 1), (Category::Gore, 1)], 200, ctx);
        let scores = contextualize(&fv).scores;
        assert!(close(scores.violence, 0.15));
        assert!(close(scores.gore, 0.15));
    }

    #[test]
    fn stylized_dampener_only_without_discussion() {
        let ctx = ContextScores::new()
            .with(Archetype::ThrillerTension, 0.51)
            .with(Archetype::StylizedAction, 0.9);
        let fv = features(&[(Category::Violence, 1)], 1000, ctx);
        assert_eq!(violence_multipliers(&fv), (0.3, 0.3));

        let ctx = ContextScores::new().with(Archetype::StylizedAction, 0.9);
        let fv = features(&[], 1000, ctx);
        assert_eq!(violence_multipliers(&fv), (0.6, 0.7));
    }

    #[test]
    fn amplifiers_stack_with_dampener() {
        let ctx = ContextScores::new()
            .with(Archetype::DiscussionViolence, 0.7)
            .with(Archetype::GraphicViolence, 0.7)
            .with(Archetype::HorrorViolence, 0.7);
        let (v, g) = violence_multipliers(&features(&[], 100, ctx));
        assert!((v - 0.3 * 1.3 * 1.2).abs() < 1e-12);
        assert!((g - 0.3 * 1.4 * 1.3).abs() < 1e-12);
    }

    #[test]
    fn thresholds_are_strict() {
        let ctx = ContextScores::new().with(Archetype::DiscussionViolence, 0.55);
        assert_eq!(violence_multipliers(&features(&[], 100, ctx)), (1.0, 1.0));

        let ctx = ContextScores::new()
            .with(Archetype::ThrillerTension, 0.5)
            .with(Archetype::GraphicViolence, 0.6)
            .with(Archetype::HorrorViolence, 0.55);
        assert_eq!(violence_multipliers(&features(&[], 100, ctx)), (1.0, 1.0));
    }

    #[test]
    fn similarity_equal_to_threshold_keeps_neutral_formula() {
        let ctx = ContextScores::new()
            .with(Archetype::SexualContent, 0.6)
            .with(Archetype::DrugAbuse, 0.55)
            .with(Archetype::ChildEndangerment, 0.5);
        let fv = features(
            &[(Category::Sexual, 1), (Category::Drugs, 1), (Category::ChildRisk, 1)],
            100,
            ctx,
        );
        let scores = contextualize(&fv).scores;
        assert!(close(scores.sex_act, 1.0));
        assert!(close(scores.drugs, 0.2));
        assert!(close(scores.child_risk, 0.2));

        let ctx = ContextScores::new().with(Archetype::MildRomance, 0.5);
        let fv = features(&[(Category::Sexual, 1)], 100, ctx);
        assert!(close(contextualize(&fv).scores.sex_act, 1.0));
    }

    #[test]
    fn romance_caps_sexual_score() {
        let ctx = ContextScores::new().with(Archetype::MildRomance, 0.8);
        let fv = features(&[(Category::Sexual, 4)], 100, ctx);
        assert!(close(contextualize(&fv).scores.sex_act, 0.3));
    }

    #[test]
    fn sexual_context_amplifies_single_match() {
        let ctx = ContextScores::new()
            .with(Archetype::SexualContent, 0.65)
            .with(Archetype::MildRomance, 0.8);
        let fv = features(&[(Category::Sexual, 1)], 100, ctx);
        assert!(close(contextualize(&fv).scores.sex_act, 1.0));
    }

    #[test]
    fn drugs_and_child_risk_depend_on_context() {
        let neutral = features(&[(Category::Drugs, 1), (Category::ChildRisk, 4)], 100, ContextScores::new());
        let scores = contextualize(&neutral).scores;
        assert!(close(scores.drugs, 0.2));
        assert!(close(scores.child_risk, 0.5));

        let ctx = ContextScores::new()
            .with(Archetype::DrugAbuse, 0.6)
            .with(Archetype::ChildEndangerment, 0.6);
        let confirmed = features(&[(Category::Drugs, 1), (Category::ChildRisk, 1)], 100, ctx);
        let scores = contextualize(&confirmed).scores;
        assert!(close(scores.drugs, 0.5));
        assert!(close(scores.child_risk, 0.5));
    }

    #[test]
    fn no_child_reference_means_zero_risk_even_in_context() {
        let ctx = ContextScores::new().with(Archetype::ChildEndangerment, 0.9);
        let fv = features(&[], 100, ctx);
        assert_eq!(contextualize(&fv).scores.child_risk, UnitScore::ZERO);
    }

    #[test]
    fn profanity_is_density_scaled() {
        let fv = features(&[(Category::Profanity, 1)], 500, ContextScores::new());
        assert!(close(contextualize(&fv).scores.profanity, 0.2));
        let fv = features(&[(Category::Nudity, 2)], 500, ContextScores::new());
        assert!(close(contextualize(&fv).scores.nudity, 2.0 / 3.0));
    }

    #[test]
    fn zero_length_is_treated_as_one_word() {
        let fv = features(&[(Category::Profanity, 1)], 0, ContextScores::new());
        assert_eq!(contextualize(&fv).scores.profanity, UnitScore::MAX);
    }

    proptest! {
        #[test]
        fn scores_always_in_unit_interval(
            counts in prop::array::uniform7(0usize..500),
            length in 0usize..5000,
            sims in prop::array::uniform10(-1.0f32..=1.0),
        ) {
            let mut ctx = ContextScores::new();
            for (archetype, sim) in Archetype::ALL.iter().zip(sims) {
                ctx.set(*archetype, sim);
            }
            let pairs: Vec<(Category, usize)> = Category::ALL.iter().copied().zip(counts).collect();
            let scores = contextualize(&features(&pairs, length, ctx)).scores;
            for category in Category::ALL {
                let v = scores.get(category).value();
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
