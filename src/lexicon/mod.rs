//! Bilingual keyword lexicon with window-based false-positive suppression.

pub mod matcher;
pub mod patterns;
pub mod suppression;

use serde::{Deserialize, Serialize};

pub use matcher::{CategoryMatch, Lexicon};
pub use patterns::{LexiconEntry, LEXICON};
pub use suppression::{SuppressionEntry, SUPPRESSIONS};

/// Language a pattern or exemplar is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ru,
}
