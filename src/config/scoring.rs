//! Aggregation and trigger-scene ranking weights.

use serde::{Deserialize, Serialize};

use crate::core::{Category, CategoryScores};

/// `max_weight * max + percentile_weight * percentile(percentile)` over scenes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BlendConfig {
    pub max_weight: f64,
    pub percentile_weight: f64,
    /// Percentile on the 0-100 scale.
    pub percentile: f64,
}

impl BlendConfig {
    pub const fn new(max_weight: f64, percentile_weight: f64, percentile: f64) -> Self {
        Self {
            max_weight,
            percentile_weight,
            percentile,
        }
    }

    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if (0.0..=1.0).contains(&weight) {
            Ok(())
        } else {
            Err(format!("{name} must be between 0.0 and 1.0"))
        }
    }

    pub fn collect_validations(&self, group: &str) -> Vec<Result<(), String>> {
        let sum = self.max_weight + self.percentile_weight;
        vec![
            Self::validate_weight(self.max_weight, &format!("aggregation.{group}.max_weight")),
            Self::validate_weight(
                self.percentile_weight,
                &format!("aggregation.{group}.percentile_weight"),
            ),
            if (sum - 1.0).abs() > 0.001 {
                Err(format!(
                    "aggregation.{group} weights must sum to 1.0, but sum to {sum:.3}"
                ))
            } else {
                Ok(())
            },
            if self.percentile > 0.0 && self.percentile <= 100.0 {
                Ok(())
            } else {
                Err(format!(
                    "aggregation.{group}.percentile must be in (0, 100]"
                ))
            },
        ]
    }
}

fn default_intensity() -> BlendConfig {
    BlendConfig::new(0.7, 0.3, 95.0)
}

fn default_peak() -> BlendConfig {
    BlendConfig::new(0.85, 0.15, 90.0)
}

fn default_frequency() -> BlendConfig {
    BlendConfig::new(0.0, 1.0, 90.0)
}

/// How scene scores reduce to document scores, per category group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregationConfig {
    /// Violence and gore: an outlier dominates but needs upper-tail support.
    #[serde(default = "default_intensity")]
    pub intensity: BlendConfig,

    /// Sexual content, nudity and child risk: peak-dominated.
    #[serde(default = "default_peak")]
    pub peak: BlendConfig,

    /// Profanity and drugs: frequency-sensitive.
    #[serde(default = "default_frequency")]
    pub frequency: BlendConfig,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            intensity: default_intensity(),
            peak: default_peak(),
            frequency: default_frequency(),
        }
    }
}

impl AggregationConfig {
    pub fn blend_for(&self, category: Category) -> &BlendConfig {
        match category {
            Category::Violence | Category::Gore => &self.intensity,
            Category::Sexual | Category::Nudity | Category::ChildRisk => &self.peak,
            Category::Profanity | Category::Drugs => &self.frequency,
        }
    }

    pub fn collect_validations(&self) -> Vec<Result<(), String>> {
        let mut results = self.intensity.collect_validations("intensity");
        results.extend(self.peak.collect_validations("peak"));
        results.extend(self.frequency.collect_validations("frequency"));
        results
    }
}

/// Per-category weights of the trigger-scene ranking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RankingWeights {
    pub violence: f64,
    pub gore: f64,
    pub sex_act: f64,
    pub nudity: f64,
    pub profanity: f64,
    pub drugs: f64,
    pub child_risk: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            violence: 0.5,
            gore: 0.8,
            sex_act: 0.9,
            nudity: 0.0,
            profanity: 0.3,
            drugs: 0.3,
            child_risk: 0.7,
        }
    }
}

impl RankingWeights {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Violence => self.violence,
            Category::Gore => self.gore,
            Category::Sexual => self.sex_act,
            Category::Nudity => self.nudity,
            Category::Profanity => self.profanity,
            Category::Drugs => self.drugs,
            Category::ChildRisk => self.child_risk,
        }
    }

    /// Weighted sum of a scene's scores.
    pub fn weigh(&self, scores: &CategoryScores) -> f64 {
        Category::ALL
            .iter()
            .map(|c| self.get(*c) * scores.get(*c).value())
            .sum()
    }
}

fn default_min_weight() -> f64 {
    0.1
}

fn default_top_scenes() -> usize {
    5
}

fn default_sample_chars() -> usize {
    300
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingConfig {
    #[serde(default)]
    pub weights: RankingWeights,

    /// Scenes weighing this much or less are not trigger scenes.
    #[serde(default = "default_min_weight")]
    pub min_weight: f64,

    #[serde(default = "default_top_scenes")]
    pub top_scenes: usize,

    /// Characters of scene text shown in a trigger-scene sample.
    #[serde(default = "default_sample_chars")]
    pub sample_chars: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            weights: RankingWeights::default(),
            min_weight: default_min_weight(),
            top_scenes: default_top_scenes(),
            sample_chars: default_sample_chars(),
        }
    }
}

impl RankingConfig {
    pub fn collect_validations(&self) -> Vec<Result<(), String>> {
        let mut results: Vec<Result<(), String>> = Category::ALL
            .iter()
            .map(|c| {
                let w = self.weights.get(*c);
                if w >= 0.0 && w.is_finite() {
                    Ok(())
                } else {
                    Err(format!("ranking.weights.{c} must be a non-negative number"))
                }
            })
            .collect();
        if self.min_weight < 0.0 {
            results.push(Err("ranking.min_weight must not be negative".to_string()));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_groups_map_to_blends() {
        let config = AggregationConfig::default();
        assert_eq!(config.blend_for(Category::Gore).percentile, 95.0);
        assert_eq!(config.blend_for(Category::ChildRisk).max_weight, 0.85);
        assert_eq!(config.blend_for(Category::Drugs).percentile_weight, 1.0);
    }

    #[test]
    fn defaults_validate() {
        assert!(AggregationConfig::default()
            .collect_validations()
            .iter()
            .all(Result::is_ok));
        assert!(RankingConfig::default()
            .collect_validations()
            .iter()
            .all(Result::is_ok));
    }

    #[test]
    fn blend_weights_must_sum_to_one() {
        let errors: Vec<String> = BlendConfig::new(0.7, 0.7, 95.0)
            .collect_validations("intensity")
            .into_iter()
            .filter_map(Result::err)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("sum to 1.400"));
    }

    #[test]
    fn percentile_must_be_positive() {
        assert!(BlendConfig::new(0.0, 1.0, 0.0)
            .collect_validations("frequency")
            .iter()
            .any(Result::is_err));
    }

    #[test]
    fn ranking_weight_ignores_nudity_by_default() {
        let weights = RankingWeights::default();
        let scores = CategoryScores::default()
            .with(Category::Nudity, 1.0)
            .with(Category::Gore, 0.5);
        assert!((weights.weigh(&scores) - 0.4).abs() < 1e-12);
    }
}
