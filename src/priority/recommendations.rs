//! Remediation advice for trigger scenes.
//!
//! Each category has a ladder of tiers ordered from most to least severe.
//! Every tier whose threshold the score strictly exceeds contributes its
//! message, most severe first; categories are visited in the fixed category
//! order.

use crate::core::{Category, CategoryScores};

struct Tier {
    threshold: f64,
    message: &'static str,
}

struct Ladder {
    category: Category,
    tiers: &'static [Tier],
}

const fn tier(threshold: f64, message: &'static str) -> Tier {
    Tier { threshold, message }
}

static LADDERS: &[Ladder] = &[
    Ladder {
        category: Category::Violence,
        tiers: &[
            tier(0.7, "Сократите сцены насилия: уберите натуралистичные подробности убийств и избиений"),
            tier(0.4, "Смягчите насилие: покажите последствия вместо самого действия"),
        ],
    },
    Ladder {
        category: Category::Gore,
        tiers: &[
            tier(0.6, "Уберите крупные планы крови и ранений"),
            tier(0.3, "Сократите описание крови и травм"),
        ],
    },
    Ladder {
        category: Category::Sexual,
        tiers: &[
            tier(0.6, "Исключите откровенные сексуальные сцены или замените их затемнением"),
            tier(0.3, "Смягчите сексуальный подтекст сцены"),
        ],
    },
    Ladder {
        category: Category::Nudity,
        tiers: &[tier(0.4, "Уберите наготу из кадра или прикройте её")],
    },
    Ladder {
        category: Category::Profanity,
        tiers: &[
            tier(0.5, "Замените нецензурную лексику нейтральными выражениями"),
            tier(0.3, "Сократите количество грубых выражений"),
        ],
    },
    Ladder {
        category: Category::Drugs,
        tiers: &[tier(0.4, "Уберите сцены употребления наркотиков, алкоголя или табака")],
    },
    Ladder {
        category: Category::ChildRisk,
        tiers: &[tier(0.5, "Исключите сцены, где несовершеннолетние подвергаются опасности")],
    },
];

pub const NO_ISSUES: &str = "Существенных проблем не выявлено";

/// Advice for one scene's scores; never empty.
pub fn recommend(scores: &CategoryScores) -> Vec<String> {
    let advice: Vec<String> = LADDERS
        .iter()
        .flat_map(|ladder| {
            let score = scores.get(ladder.category).value();
            ladder
                .tiers
                .iter()
                .filter(move |t| score > t.threshold)
                .map(|t| t.message.to_string())
        })
        .collect();

    if advice.is_empty() {
        vec![NO_ISSUES.to_string()]
    } else {
        advice
    }
}
