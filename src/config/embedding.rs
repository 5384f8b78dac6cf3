use serde::{Deserialize, Serialize};

/// Which embedding backend scores scene context.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingBackend {
    /// Deterministic feature hashing, no model files; word overlap only
    Hashing,
    /// Sentence-transformer through ONNX Runtime (needs the `onnx` feature)
    Onnx,
}

/// The sentence-transformer when it is compiled in, hashing otherwise.
impl Default for EmbeddingBackend {
    fn default() -> Self {
        if cfg!(feature = "onnx") {
            Self::Onnx
        } else {
            Self::Hashing
        }
    }
}

fn default_dimensions() -> usize {
    384
}

fn default_model() -> String {
    "sentence-transformers/all-MiniLM-L6-v2".to_string()
}

fn default_max_tokens() -> usize {
    256
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbeddingConfig {
    #[serde(default)]
    pub backend: EmbeddingBackend,

    /// Vector size; must match the model's hidden size for `onnx`.
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,

    /// Hugging Face model repository for the `onnx` backend.
    #[serde(default = "default_model")]
    pub model: String,

    /// Model download cache; the hf-hub default when unset.
    #[serde(default)]
    pub cache_dir: Option<String>,

    /// Tokens kept per scene by the `onnx` backend.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            backend: EmbeddingBackend::default(),
            dimensions: default_dimensions(),
            model: default_model(),
            cache_dir: None,
            max_tokens: default_max_tokens(),
        }
    }
}

impl EmbeddingConfig {
    pub fn collect_validations(&self) -> Vec<Result<(), String>> {
        let mut results = Vec::new();
        if self.dimensions == 0 {
            results.push(Err("embedding.dimensions must be at least 1".to_string()));
        }
        if self.max_tokens == 0 {
            results.push(Err("embedding.max_tokens must be at least 1".to_string()));
        }
        if self.backend == EmbeddingBackend::Onnx && self.model.trim().is_empty() {
            results.push(Err("embedding.model must name a model repository".to_string()));
        }
        results
    }
}
