//! Embedding error types.

use thiserror::Error;

/// Errors from embedding backends.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Model or tokenizer could not be loaded.
    #[error("Model initialization failed: {0}")]
    ModelInit(String),

    /// Inference failed.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// A vector does not have the dimension the backend advertises.
    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),
}
