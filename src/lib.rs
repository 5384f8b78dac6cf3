//! Age-rating classification for screenplays.
//!
//! A script is split into scenes, each scene is scored on seven content
//! categories from keyword evidence adjusted by its semantic context, scene
//! scores are reduced to document scores, and an ordered rule table maps
//! those to a rating with reasons, evidence and the scenes to revise.
//!
//! ```rust
//! use scriptrate::{ScriptAnalyzer, ScriptRateConfig, Rating};
//!
//! // `offline()` selects the hashing embedder; `default()` loads the
//! // sentence-transformer when the `onnx` feature is enabled.
//! let analyzer = ScriptAnalyzer::new(ScriptRateConfig::offline()).unwrap();
//! let report = analyzer
//!     .analyze_text("note.txt", "Two friends share breakfast and talk about the weather.")
//!     .unwrap();
//! assert_eq!(report.predicted_rating, Rating::ZeroPlus);
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod lexicon;
pub mod observability;
pub mod pipeline;
pub mod priority;
pub mod progress;
pub mod rating;
pub mod scoring;
pub mod semantic;

pub use crate::config::ScriptRateConfig;
pub use crate::core::{
    Archetype, Category, CategoryScores, DocumentScoreVector, Rating, RatingResult, Scene,
    ScoreVector,
};
pub use crate::errors::{Error, Result};
pub use crate::pipeline::{
    AnalysisReport, BatchReport, DocumentSource, ScoringContext, ScriptAnalyzer,
};
pub use crate::semantic::{Embedder, HashingEmbedder};
