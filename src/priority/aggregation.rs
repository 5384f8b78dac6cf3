//! Reduction of per-scene scores to one document score vector.

use tracing::debug;

use crate::config::AggregationConfig;
use crate::core::{Category, CategoryExcerpts, CategoryScores, DocumentScoreVector, ScoreVector};
use crate::scoring::{blend, UnitScore};

/// Blend each category across scenes with its group statistic and pool the
/// excerpts in scene order, first five per category.
///
/// An empty scene list yields an all-zero document.
pub fn aggregate(scenes: &[ScoreVector], config: &AggregationConfig) -> DocumentScoreVector {
    let mut scores = CategoryScores::default();
    let mut excerpts = CategoryExcerpts::new();

    for category in Category::ALL {
        let values: Vec<f64> = scenes
            .iter()
            .map(|s| s.scores.get(category).value())
            .collect();
        let group = config.blend_for(category);
        scores.set(
            category,
            UnitScore::new(blend(
                &values,
                group.max_weight,
                group.percentile_weight,
                group.percentile,
            )),
        );

        for scene in scenes {
            excerpts.extend_capped(category, scene.excerpts.get(category).iter().cloned());
        }
    }

    debug!(scenes = scenes.len(), "aggregated document scores");
    DocumentScoreVector { scores, excerpts }
}
