//! Text embedding capability and the built-in hashing backend.

use xxhash_rust::xxh64::xxh64;

use super::normalize::l2_normalize;
use super::EmbeddingError;

/// Anything that can turn text into a fixed-dimension vector.
///
/// Implementations must be deterministic for a given instance: the same text
/// always maps to the same vector, otherwise scores are not comparable
/// across scenes of one run.
pub trait Embedder: Send + Sync {
    /// Short backend name for logs and reports.
    fn name(&self) -> &str;

    fn dimensions(&self) -> usize;

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }
}

const HASH_SEED: u64 = 0x5c3e_a7d1_0b42_96f8;

/// Feature-hashing bag of words: lowercase unigrams plus adjacent bigrams,
/// square-root term weighting, L2-normalized.
///
/// All components are non-negative, so cosine similarities lie in `[0, 1]`.
/// It needs no model files and is the default backend.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Result<Self, EmbeddingError> {
        if dimensions == 0 {
            return Err(EmbeddingError::Config(
                "hashing embedder needs at least one dimension".into(),
            ));
        }
        Ok(Self { dimensions })
    }

    fn bucket(&self, feature: &str) -> usize {
        (xxh64(feature.as_bytes(), HASH_SEED) % self.dimensions as u64) as usize
    }
}

impl Embedder for HashingEmbedder {
    fn name(&self) -> &str {
        "hashing"
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        let mut vector = vec![0.0f32; self.dimensions];
        for token in &tokens {
            vector[self.bucket(token)] += 1.0;
        }
        for pair in tokens.windows(2) {
            vector[self.bucket(&format!("{} {}", pair[0], pair[1]))] += 1.0;
        }
        for x in vector.iter_mut() {
            *x = x.sqrt();
        }
        l2_normalize(&mut vector);
        Ok(vector)
    }
}
