//! Core data model shared by every analysis stage.
//!
//! Entities are created fresh per analysis call: scenes come out of the
//! segmenter, feature vectors out of the lexical matcher and semantic
//! classifier, score vectors out of the normalizer, and a single document
//! score vector out of the aggregator. The category and archetype sets are
//! closed enums and never grow at runtime.

pub mod types;

pub use types::{
    Archetype, Category, CategoryCounts, CategoryExcerpts, CategoryScores, ContextScores,
    DocumentScoreVector, FeatureVector, Rating, RatingResult, Scene, ScoreVector, MAX_EXCERPTS,
};
