//! Immutable per-process scoring state.
//!
//! A [`ScoringContext`] bundles everything the per-scene stage reads: the
//! compiled lexicon (patterns plus suppression guards), the archetype index
//! with its precomputed exemplar embeddings, and the embedding backend. It is
//! built once, before the first document, and then shared by reference
//! across worker threads without locking.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{EmbeddingBackend, EmbeddingConfig, ScriptRateConfig};
use crate::core::{FeatureVector, Scene};
use crate::errors::{Error, Result};
use crate::lexicon::Lexicon;
use crate::semantic::{ArchetypeIndex, Embedder, HashingEmbedder, EXEMPLARS};

pub struct ScoringContext {
    lexicon: Lexicon,
    index: ArchetypeIndex,
    embedder: Arc<dyn Embedder>,
}

impl fmt::Debug for ScoringContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringContext")
            .field("embedder", &self.embedder.name())
            .field("dimensions", &self.index.dimensions())
            .field("exemplars", &self.index.exemplar_count())
            .field("patterns", &self.lexicon.pattern_count(None))
            .field("guards", &self.lexicon.guard_count())
            .finish()
    }
}

impl ScoringContext {
    /// Compile the lexicon, open the configured embedding backend and embed
    /// every archetype exemplar.
    pub fn new(config: &ScriptRateConfig) -> Result<Self> {
        let embedder = embedder_from_config(&config.embedding)?;
        Self::with_embedder(config, embedder)
    }

    /// Same as [`ScoringContext::new`] with a caller-supplied backend.
    pub fn with_embedder(config: &ScriptRateConfig, embedder: Arc<dyn Embedder>) -> Result<Self> {
        let lexicon = Lexicon::compile(&config.lexicon)?;
        let index = ArchetypeIndex::build(embedder.as_ref(), EXEMPLARS)?;
        info!(
            embedder = embedder.name(),
            dimensions = index.dimensions(),
            exemplars = index.exemplar_count(),
            patterns = lexicon.pattern_count(None),
            "scoring context ready"
        );
        Ok(Self {
            lexicon,
            index,
            embedder,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn index(&self) -> &ArchetypeIndex {
        &self.index
    }

    pub fn embedder(&self) -> &dyn Embedder {
        self.embedder.as_ref()
    }

    /// Lexical matches, word length and archetype similarities of one scene.
    pub fn scene_features(&self, scene: &Scene) -> Result<FeatureVector> {
        let (counts, excerpts) = self.lexicon.extract(&scene.text);
        let context = self.index.classify(self.embedder.as_ref(), &scene.text)?;
        let length = scene.text.split_whitespace().count().max(1);
        debug!(
            scene = scene.id,
            words = length,
            matches = counts.total(),
            "scene features"
        );
        Ok(FeatureVector {
            counts,
            excerpts,
            length,
            context,
        })
    }
}

/// Open the embedding backend named in the configuration.
pub fn embedder_from_config(config: &EmbeddingConfig) -> Result<Arc<dyn Embedder>> {
    match config.backend {
        EmbeddingBackend::Hashing => {
            let embedder = HashingEmbedder::new(config.dimensions)
                .map_err(|e| Error::ModelInitialization(e.to_string()))?;
            Ok(Arc::new(embedder))
        }
        EmbeddingBackend::Onnx => onnx_embedder(config),
    }
}

#[cfg(feature = "onnx")]
fn onnx_embedder(config: &EmbeddingConfig) -> Result<Arc<dyn Embedder>> {
    let embedder = crate::semantic::OnnxEmbedder::load(config)
        .map_err(|e| Error::ModelInitialization(e.to_string()))?;
    Ok(Arc::new(embedder))
}

#[cfg(not(feature = "onnx"))]
fn onnx_embedder(_config: &EmbeddingConfig) -> Result<Arc<dyn Embedder>> {
    Err(Error::Configuration(
        "the onnx embedding backend requires building with the `onnx` feature".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Archetype, Category};

    fn scene(text: &str) -> Scene {
        Scene {
            id: 0,
            heading: "INT. KITCHEN - NIGHT".into(),
            text: text.into(),
        }
    }

    #[test]
    fn offline_context_uses_hashing_backend() {
        let context = ScoringContext::new(&ScriptRateConfig::offline()).unwrap();
        assert_eq!(context.embedder().name(), "hashing");
        assert_eq!(context.index().dimensions(), 384);
        assert!(context.lexicon().pattern_count(None) > 0);
    }

    #[test]
    fn scene_features_count_words_and_matches() {
        let context = ScoringContext::new(&ScriptRateConfig::offline()).unwrap();
        let features = context
            .scene_features(&scene("He killed the soldier with a knife and ran."))
            .unwrap();
        assert_eq!(features.length, 9);
        assert!(features.counts.get(Category::Violence) >= 1);
        assert_eq!(features.context.len(), Archetype::COUNT);
    }

    #[test]
    fn exemplar_wording_reaches_its_archetype() {
        let context = ScoringContext::new(&ScriptRateConfig::offline()).unwrap();
        let features = context
            .scene_features(&scene("Testimony about violent event."))
            .unwrap();
        assert!(features.context.get(Archetype::DiscussionViolence) > 0.99);
        assert_eq!(
            crate::scoring::violence_multipliers(&features),
            (0.3, 0.3)
        );
    }

    #[test]
    fn empty_scene_length_is_floored() {
        let context = ScoringContext::new(&ScriptRateConfig::offline()).unwrap();
        let features = context.scene_features(&scene("   ")).unwrap();
        assert_eq!(features.length, 1);
        assert_eq!(features.counts.total(), 0);
    }

    #[test]
    fn zero_dimensions_fail_initialisation() {
        let mut config = ScriptRateConfig::offline();
        config.embedding.dimensions = 0;
        let err = ScoringContext::new(&config).unwrap_err();
        assert!(err.is_fatal());
    }

    #[cfg(not(feature = "onnx"))]
    #[test]
    fn onnx_backend_without_feature_is_a_configuration_error() {
        let config = EmbeddingConfig {
            backend: EmbeddingBackend::Onnx,
            ..EmbeddingConfig::default()
        };
        assert!(matches!(
            embedder_from_config(&config),
            Err(Error::Configuration(_))
        ));
    }
}
