//! Semantic context classification.
//!
//! Scenes are embedded once and compared against the exemplar phrases of
//! each context archetype; the best cosine similarity per archetype becomes
//! that archetype's score. The embedding backend sits behind [`Embedder`] so
//! scoring never depends on a concrete model.

pub mod archetypes;
pub mod classifier;
pub mod embedder;
pub mod errors;
pub mod normalize;
#[cfg(feature = "onnx")]
pub mod onnx;

pub use archetypes::{ArchetypeExemplar, EXEMPLARS};
pub use classifier::ArchetypeIndex;
pub use embedder::{Embedder, HashingEmbedder};
pub use errors::EmbeddingError;
pub use normalize::{cosine_similarity, l2_normalize};
#[cfg(feature = "onnx")]
pub use onnx::OnnxEmbedder;
