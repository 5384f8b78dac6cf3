use serde::{Deserialize, Serialize};

use super::embedding::{EmbeddingBackend, EmbeddingConfig};
use super::lexicon::LexiconConfig;
use super::parallel::ParallelConfig;
use super::scoring::{AggregationConfig, RankingConfig};
use crate::errors::{Error, Result};

/// Root configuration structure for scriptrate
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScriptRateConfig {
    /// Worker pool for scene scoring
    #[serde(default)]
    pub parallel: ParallelConfig,

    /// Keyword matching settings
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Scene-to-document reduction
    #[serde(default)]
    pub aggregation: AggregationConfig,

    /// Trigger-scene ranking
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Context embedding backend
    #[serde(default)]
    pub embedding: EmbeddingConfig,
}

impl ScriptRateConfig {
    /// Defaults with the hashing embedder: no model download, word-overlap context only.
    pub fn offline() -> Self {
        Self {
            embedding: EmbeddingConfig {
                backend: EmbeddingBackend::Hashing,
                ..EmbeddingConfig::default()
            },
            ..Self::default()
        }
    }

    /// Every validation message across all sections.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut results = vec![self.parallel.validate()];
        results.extend(self.lexicon.collect_validations());
        results.extend(self.aggregation.collect_validations());
        results.extend(self.ranking.collect_validations());
        results.extend(self.embedding.collect_validations());
        results.into_iter().filter_map(|r| r.err()).collect()
    }

    pub fn validate(&self) -> Result<()> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Configuration(errors.join("; ")))
        }
    }
}
