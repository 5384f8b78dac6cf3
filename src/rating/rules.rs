//! Ordered rating rule table.
//!
//! Rules are evaluated top-down and the first satisfied one decides the
//! rating. Every predicate is monotone in every score and the table's
//! ratings never increase going down, so raising any document score can
//! never lower the rating.

use crate::core::{Category, CategoryScores, DocumentScoreVector, Rating, RatingResult, MAX_EXCERPTS};

/// One reason a rule can report, with the excerpts backing it.
pub struct Finding {
    pub reason: &'static str,
    pub applies: fn(&CategoryScores) -> bool,
    /// Pooled excerpts pulled as evidence: category and how many.
    pub evidence: &'static [(Category, usize)],
}

pub struct RatingRule {
    pub rating: Rating,
    pub when: fn(&CategoryScores) -> bool,
    pub findings: &'static [Finding],
}

fn violence(s: &CategoryScores) -> f64 {
    s.violence.value()
}

fn gore(s: &CategoryScores) -> f64 {
    s.gore.value()
}

fn sex(s: &CategoryScores) -> f64 {
    s.sex_act.value()
}

fn explicit(s: &CategoryScores) -> bool {
    sex(s) >= 0.75 || gore(s) >= 0.95
}

fn child_endangered(s: &CategoryScores) -> bool {
    s.child_risk.value() > 0.7 && (sex(s) >= 0.5 || violence(s) >= 0.8)
}

fn severe_violence(s: &CategoryScores) -> bool {
    (violence(s) >= 0.8 && gore(s) >= 0.7) || gore(s) >= 0.75
}

fn strong_violence(s: &CategoryScores) -> bool {
    violence(s) >= 0.65 || gore(s) >= 0.5
}

fn sexual_or_nudity(s: &CategoryScores) -> bool {
    sex(s) >= 0.35 || s.nudity.value() >= 0.4
}

fn moderate(s: &CategoryScores) -> bool {
    violence(s) >= 0.4 || s.profanity.value() >= 0.5 || s.drugs.value() >= 0.4
}

fn mild(s: &CategoryScores) -> bool {
    violence(s) >= 0.2 || s.profanity.value() >= 0.3
}

fn explicit_sex(s: &CategoryScores) -> bool {
    sex(s) >= 0.75
}

fn explicit_gore(s: &CategoryScores) -> bool {
    gore(s) >= 0.95
}

fn violence_high(s: &CategoryScores) -> bool {
    violence(s) >= 0.8
}

fn gore_high(s: &CategoryScores) -> bool {
    gore(s) >= 0.7
}

fn violence_strong(s: &CategoryScores) -> bool {
    violence(s) >= 0.65
}

fn gore_strong(s: &CategoryScores) -> bool {
    gore(s) >= 0.5
}

fn violence_moderate(s: &CategoryScores) -> bool {
    violence(s) >= 0.4
}

fn profanity_moderate(s: &CategoryScores) -> bool {
    s.profanity.value() >= 0.5
}

fn drugs_moderate(s: &CategoryScores) -> bool {
    s.drugs.value() >= 0.4
}

fn always(_: &CategoryScores) -> bool {
    true
}

const INTENSE_VIOLENCE: &str = "интенсивное насилие и сцены убийств";
const BLOOD_AND_INJURY: &str = "изображение крови и телесных повреждений";

pub static RATING_RULES: &[RatingRule] = &[
    RatingRule {
        rating: Rating::EighteenPlus,
        when: explicit,
        findings: &[
            Finding {
                reason: "эксплицитные сцены сексуального характера",
                applies: explicit_sex,
                evidence: &[(Category::Sexual, 2)],
            },
            Finding {
                reason: "графическое изображение жестокости и крови",
                applies: explicit_gore,
                evidence: &[(Category::Gore, 2)],
            },
        ],
    },
    RatingRule {
        rating: Rating::EighteenPlus,
        when: child_endangered,
        findings: &[Finding {
            reason: "опасные или жестокие сцены с участием несовершеннолетних",
            applies: always,
            evidence: &[(Category::Violence, 2), (Category::ChildRisk, 2)],
        }],
    },
    RatingRule {
        rating: Rating::SixteenPlus,
        when: severe_violence,
        findings: &[
            Finding {
                reason: INTENSE_VIOLENCE,
                applies: violence_high,
                evidence: &[(Category::Violence, 2)],
            },
            Finding {
                reason: BLOOD_AND_INJURY,
                applies: gore_high,
                evidence: &[(Category::Gore, 2)],
            },
        ],
    },
    RatingRule {
        rating: Rating::SixteenPlus,
        when: strong_violence,
        findings: &[
            Finding {
                reason: INTENSE_VIOLENCE,
                applies: violence_strong,
                evidence: &[(Category::Violence, 2)],
            },
            Finding {
                reason: BLOOD_AND_INJURY,
                applies: gore_strong,
                evidence: &[(Category::Gore, 2)],
            },
        ],
    },
    RatingRule {
        rating: Rating::SixteenPlus,
        when: sexual_or_nudity,
        findings: &[Finding {
            reason: "сексуальный контент и нагота",
            applies: always,
            evidence: &[(Category::Sexual, 2), (Category::Nudity, 2)],
        }],
    },
    RatingRule {
        rating: Rating::TwelvePlus,
        when: moderate,
        findings: &[
            Finding {
                reason: "умеренное насилие и угрозы",
                applies: violence_moderate,
                evidence: &[(Category::Violence, 1)],
            },
            Finding {
                reason: "ненормативная лексика",
                applies: profanity_moderate,
                evidence: &[(Category::Profanity, 1)],
            },
            Finding {
                reason: "употребление алкоголя, табака или наркотиков",
                applies: drugs_moderate,
                evidence: &[(Category::Drugs, 1)],
            },
        ],
    },
    RatingRule {
        rating: Rating::SixPlus,
        when: mild,
        findings: &[Finding {
            reason: "незначительное насилие или редкая грубая лексика",
            applies: always,
            evidence: &[],
        }],
    },
    RatingRule {
        rating: Rating::ZeroPlus,
        when: always,
        findings: &[Finding {
            reason: "контент без возрастных ограничений",
            applies: always,
            evidence: &[],
        }],
    },
];

/// Rate a document. Total: the last rule always matches.
pub fn classify(document: &DocumentScoreVector) -> RatingResult {
    let scores = &document.scores;
    let Some(rule) = RATING_RULES.iter().find(|rule| (rule.when)(scores)) else {
        return RatingResult {
            rating: Rating::ZeroPlus,
            reasons: Vec::new(),
            evidence: Vec::new(),
        };
    };

    let mut reasons = Vec::new();
    let mut evidence = Vec::new();
    for finding in rule.findings.iter().filter(|f| (f.applies)(scores)) {
        reasons.push(finding.reason.to_string());
        for (category, count) in finding.evidence {
            evidence.extend(document.excerpts.get(*category).iter().take(*count).cloned());
        }
    }
    evidence.truncate(MAX_EXCERPTS);

    RatingResult {
        rating: rule.rating,
        reasons,
        evidence,
    }
}
