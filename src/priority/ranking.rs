//! Trigger-scene selection: the heaviest scenes by weighted severity.

use crate::config::RankingConfig;
use crate::core::{Scene, ScoreVector};

/// A ranked view over one scene and its scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerScene<'a> {
    pub scene: &'a Scene,
    pub scores: &'a ScoreVector,
    pub weight: f64,
}

/// Scenes sorted by descending weight, insignificant ones dropped, at most
/// `config.top_scenes` returned. Equal weights keep document order.
///
/// `scenes` and `scored` are parallel slices.
pub fn rank_scenes<'a>(
    scenes: &'a [Scene],
    scored: &'a [ScoreVector],
    config: &RankingConfig,
) -> Vec<TriggerScene<'a>> {
    debug_assert_eq!(scenes.len(), scored.len());
    let mut ranked: Vec<TriggerScene<'a>> = scenes
        .iter()
        .zip(scored)
        .map(|(scene, scores)| TriggerScene {
            scene,
            scores,
            weight: config.weights.weigh(&scores.scores),
        })
        .filter(|t| t.weight > config.min_weight)
        .collect();
    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    ranked.truncate(config.top_scenes);
    ranked
}
