//! Scene scoring: the unit score type, context normalization and the order
//! statistics used when reducing scenes to a document.

pub mod normalizer;
pub mod percentile;
pub mod score_types;

pub use normalizer::{contextualize, violence_multipliers};
pub use percentile::{blend, percentile};
pub use score_types::UnitScore;
