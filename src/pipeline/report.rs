//! Serializable analysis result for one document.

use serde::Serialize;

use crate::core::{CategoryScores, Rating, RatingResult};
use crate::priority::{recommend, TriggerScene};

const SCORE_DECIMALS: i32 = 3;
const SCENE_SCORE_DECIMALS: i32 = 2;

/// The per-document record written by every output format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub file: String,
    pub predicted_rating: Rating,
    pub reasons: Vec<String>,
    pub evidence_excerpts: Vec<String>,
    pub aggregated_scores: CategoryScores,
    pub top_trigger_scenes: Vec<TriggerSceneReport>,
    pub total_scenes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerSceneReport {
    pub scene_id: usize,
    pub heading: String,
    pub sample_text: String,
    pub weight: f64,
    pub scores: CategoryScores,
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    pub fn new(
        file: impl Into<String>,
        rating: RatingResult,
        aggregated: &CategoryScores,
        triggers: &[TriggerScene<'_>],
        total_scenes: usize,
        sample_chars: usize,
    ) -> Self {
        Self {
            file: file.into(),
            predicted_rating: rating.rating,
            reasons: rating.reasons,
            evidence_excerpts: rating.evidence,
            aggregated_scores: aggregated.rounded(SCORE_DECIMALS),
            top_trigger_scenes: triggers
                .iter()
                .map(|t| TriggerSceneReport::new(t, sample_chars))
                .collect(),
            total_scenes,
        }
    }
}

impl TriggerSceneReport {
    fn new(trigger: &TriggerScene<'_>, sample_chars: usize) -> Self {
        Self {
            scene_id: trigger.scene.id,
            heading: trigger.scene.heading.clone(),
            sample_text: sample_text(&trigger.scene.text, sample_chars),
            weight: round_to(trigger.weight, SCORE_DECIMALS),
            scores: trigger.scores.scores.rounded(SCENE_SCORE_DECIMALS),
            recommendations: recommend(&trigger.scores.scores),
        }
    }
}

/// First `limit` characters with newlines flattened, always followed by `...`.
pub fn sample_text(text: &str, limit: usize) -> String {
    let mut sample: String = text
        .chars()
        .take(limit)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    sample.push_str("...");
    sample
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
