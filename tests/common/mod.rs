//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use scriptrate::semantic::{Embedder, EmbeddingError};
use scriptrate::{ScoringContext, ScriptAnalyzer, ScriptRateConfig};
use tempfile::TempDir;

/// Embeds everything to the zero vector, so every archetype similarity is 0
/// and every context multiplier stays neutral.
pub struct ZeroEmbedder {
    pub dims: usize,
}

impl Embedder for ZeroEmbedder {
    fn name(&self) -> &str {
        "zero"
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(vec![0.0; self.dims])
    }
}

/// One axis per marker word: a text lights up every axis whose marker it
/// contains. Exemplars sharing a marker with a scene get similarity 1, all
/// others 0, which makes context rules easy to trigger deliberately.
pub struct TopicEmbedder {
    pub markers: Vec<&'static str>,
}

impl Embedder for TopicEmbedder {
    fn name(&self) -> &str {
        "topic"
    }

    fn dimensions(&self) -> usize {
        self.markers.len()
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let lowered = text.to_lowercase();
        let hits: Vec<f32> = self
            .markers
            .iter()
            .map(|m| if lowered.contains(m) { 1.0 } else { 0.0 })
            .collect();
        let norm = hits.iter().map(|x| x * x).sum::<f32>().sqrt();
        Ok(hits.iter().map(|x| if norm > 0.0 { x / norm } else { 0.0 }).collect())
    }
}

pub fn topic_analyzer(markers: Vec<&'static str>) -> ScriptAnalyzer {
    let config = ScriptRateConfig::offline();
    let context = ScoringContext::with_embedder(&config, Arc::new(TopicEmbedder { markers }))
        .expect("context builds with the topic embedder");
    ScriptAnalyzer::with_context(config, context).expect("offline config is valid")
}

pub fn neutral_analyzer() -> ScriptAnalyzer {
    let config = ScriptRateConfig::offline();
    let context = ScoringContext::with_embedder(&config, Arc::new(ZeroEmbedder { dims: 16 }))
        .expect("context builds with the zero embedder");
    ScriptAnalyzer::with_context(config, context).expect("default config is valid")
}

pub fn hashing_analyzer() -> ScriptAnalyzer {
    ScriptAnalyzer::new(ScriptRateConfig::offline()).expect("offline analyzer builds")
}

const FILLER: [&str; 11] = [
    "morning", "light", "falls", "across", "the", "old", "wooden", "table", "near", "the",
    "window",
];

/// `n` words that match no lexicon pattern.
pub fn filler(n: usize) -> String {
    FILLER
        .iter()
        .cycle()
        .take(n)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn write_files(files: &[(&str, &[u8])]) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let paths = files
        .iter()
        .map(|(name, content)| {
            let path = temp_dir.path().join(name);
            fs::write(&path, content).expect("Failed to write test file");
            path
        })
        .collect();
    (temp_dir, paths)
}
