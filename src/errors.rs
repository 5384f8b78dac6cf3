//! Error types for scriptrate operations.
//!
//! Only two things can go wrong in a well-formed run: the extraction
//! collaborator cannot turn an input into text, or the process-wide
//! reference data (lexicon, embedding model, archetype exemplars) cannot be
//! initialised. Everything between segmentation and rating is total, so
//! there is no "empty document" error: short or marker-less documents fall
//! back to a single full-document scene.
//!
//! # Example
//!
//! ```rust
//! use scriptrate::errors::Error;
//!
//! let err = Error::extraction("script.pdf", "PDF input is not supported");
//! assert!(!err.is_fatal());
//! assert_eq!(err.category(), "extraction");
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::semantic::EmbeddingError;

/// Main error type for scriptrate operations
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be resolved to text
    #[error("Extraction error for {}: {message}", path.display())]
    Extraction {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Embedding model or archetype exemplars could not be loaded
    #[error("Model initialization failed: {0}")]
    ModelInitialization(String),

    /// Embedding a scene failed after initialisation
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    /// A lexicon or suppression pattern failed to compile
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an extraction error without an underlying IO source
    pub fn extraction(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Extraction {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an extraction error wrapping the IO failure that caused it
    pub fn extraction_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Extraction {
            path: path.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Fatal errors prevent any document from being analyzed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ModelInitialization(_) | Self::Lexicon(_))
    }

    /// Short machine-readable category, recorded per document in batch output.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Extraction { .. } => "extraction",
            Self::ModelInitialization(_) => "model_initialization",
            Self::Embedding(_) => "embedding",
            Self::Lexicon(_) => "lexicon",
            Self::Configuration(_) => "configuration",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::Toml(_) => "toml",
        }
    }
}

/// Result type alias for scriptrate operations
pub type Result<T> = std::result::Result<T, Error>;
