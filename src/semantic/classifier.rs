use tracing::debug;

use crate::core::{Archetype, ContextScores};
use crate::errors::{Error, Result};

use super::archetypes::ArchetypeExemplar;
use super::normalize::cosine_similarity;
use super::{Embedder, EmbeddingError};

/// Exemplar embeddings grouped by archetype, computed once and then only read.
#[derive(Debug, Clone)]
pub struct ArchetypeIndex {
    groups: Vec<(Archetype, Vec<Vec<f32>>)>,
    dimensions: usize,
}

impl ArchetypeIndex {
    /// Embed every exemplar. Any failure here is a model initialisation error.
    pub fn build(embedder: &dyn Embedder, exemplars: &[ArchetypeExemplar]) -> Result<Self> {
        let dimensions = embedder.dimensions();
        let phrases: Vec<&str> = exemplars.iter().map(|e| e.phrase).collect();
        let vectors = embedder
            .embed_batch(&phrases)
            .map_err(|e| Error::ModelInitialization(format!("embedding exemplars: {e}")))?;

        if vectors.len() != exemplars.len() {
            return Err(Error::ModelInitialization(format!(
                "embedder returned {} vectors for {} exemplars",
                vectors.len(),
                exemplars.len()
            )));
        }

        let mut groups: Vec<(Archetype, Vec<Vec<f32>>)> = Archetype::ALL
            .iter()
            .map(|archetype| (*archetype, Vec::new()))
            .collect();
        for (exemplar, vector) in exemplars.iter().zip(vectors) {
            if vector.len() != dimensions {
                return Err(Error::ModelInitialization(format!(
                    "exemplar `{}` embedded to {} dimensions, expected {dimensions}",
                    exemplar.phrase,
                    vector.len()
                )));
            }
            if let Some((_, slot)) = groups.iter_mut().find(|(a, _)| *a == exemplar.archetype) {
                slot.push(vector);
            }
        }

        if let Some((missing, _)) = groups.iter().find(|(_, vectors)| vectors.is_empty()) {
            return Err(Error::ModelInitialization(format!(
                "archetype {missing} has no exemplars"
            )));
        }

        debug!(
            exemplars = exemplars.len(),
            dimensions,
            backend = embedder.name(),
            "built archetype index"
        );
        Ok(Self { groups, dimensions })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn exemplar_count(&self) -> usize {
        self.groups.iter().map(|(_, vectors)| vectors.len()).sum()
    }

    /// Maximum cosine similarity of `embedding` to each archetype's exemplars.
    pub fn classify_embedding(
        &self,
        embedding: &[f32],
    ) -> std::result::Result<ContextScores, EmbeddingError> {
        if embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            });
        }
        let mut scores = ContextScores::new();
        for (archetype, exemplars) in &self.groups {
            let best = exemplars
                .iter()
                .map(|exemplar| cosine_similarity(embedding, exemplar))
                .fold(f32::NEG_INFINITY, f32::max);
            scores.set(*archetype, best);
        }
        Ok(scores)
    }

    /// Embed `text` once and score it against every archetype.
    pub fn classify(&self, embedder: &dyn Embedder, text: &str) -> Result<ContextScores> {
        let embedding = embedder.embed(text)?;
        Ok(self.classify_embedding(&embedding)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Locale;
    use crate::semantic::{HashingEmbedder, EXEMPLARS};

    struct FixedEmbedder {
        dims: usize,
        produced: usize,
    }

    impl Embedder for FixedEmbedder {
        fn name(&self) -> &str {
            "fixed"
        }

        fn dimensions(&self) -> usize {
            self.dims
        }

        fn embed(&self, _text: &str) -> std::result::Result<Vec<f32>, EmbeddingError> {
            Ok(vec![1.0; self.produced])
        }
    }

    struct FailingEmbedder;

    impl Embedder for FailingEmbedder {
        fn name(&self) -> &str {
            "failing"
        }

        fn dimensions(&self) -> usize {
            8
        }

        fn embed(&self, _text: &str) -> std::result::Result<Vec<f32>, EmbeddingError> {
            Err(EmbeddingError::ModelInit("weights missing".into()))
        }
    }

    #[test]
    fn builds_index_over_all_exemplars() {
        let embedder = HashingEmbedder::new(384).unwrap();
        let index = ArchetypeIndex::build(&embedder, EXEMPLARS).unwrap();
        assert_eq!(index.exemplar_count(), EXEMPLARS.len());
        assert_eq!(index.dimensions(), 384);
    }

    #[test]
    fn every_archetype_gets_a_score() {
        let embedder = HashingEmbedder::new(384).unwrap();
        let index = ArchetypeIndex::build(&embedder, EXEMPLARS).unwrap();
        let scores = index
            .classify(&embedder, "He injected the heroin and slumped against the wall.")
            .unwrap();
        assert_eq!(scores.len(), Archetype::COUNT);
        assert!(scores.iter().all(|(_, s)| (0.0..=1.0 + 1e-5).contains(&s)));
    }

    #[test]
    fn exemplar_text_scores_highest_on_its_own_archetype() {
        let embedder = HashingEmbedder::new(384).unwrap();
        let index = ArchetypeIndex::build(&embedder, EXEMPLARS).unwrap();
        let scores = index
            .classify(&embedder, "characters taking illegal drugs")
            .unwrap();
        assert!((scores.get(Archetype::DrugAbuse) - 1.0).abs() < 1e-5);
        assert!(scores.get(Archetype::MildRomance) < 0.5);
    }

    #[test]
    fn embedder_failure_is_model_initialization() {
        let err = ArchetypeIndex::build(&FailingEmbedder, EXEMPLARS).unwrap_err();
        assert!(matches!(err, Error::ModelInitialization(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn wrong_exemplar_dimension_is_rejected() {
        let embedder = FixedEmbedder {
            dims: 8,
            produced: 4,
        };
        let err = ArchetypeIndex::build(&embedder, EXEMPLARS).unwrap_err();
        assert!(matches!(err, Error::ModelInitialization(_)));
    }

    #[test]
    fn archetype_without_exemplars_is_rejected() {
        let embedder = HashingEmbedder::new(16).unwrap();
        let partial = [ArchetypeExemplar {
            archetype: Archetype::DrugAbuse,
            locale: Locale::En,
            phrase: "drug use",
        }];
        let err = ArchetypeIndex::build(&embedder, &partial).unwrap_err();
        assert!(err.to_string().contains("has no exemplars"));
    }

    #[test]
    fn scene_embedding_dimension_is_checked() {
        let embedder = HashingEmbedder::new(32).unwrap();
        let index = ArchetypeIndex::build(&embedder, EXEMPLARS).unwrap();
        let err = index.classify_embedding(&[0.5; 7]).unwrap_err();
        assert!(matches!(
            err,
            EmbeddingError::DimensionMismatch {
                expected: 32,
                actual: 7
            }
        ));
    }
}
