use serde::{Deserialize, Serialize};

use crate::core::MAX_EXCERPTS;

fn default_window_chars() -> usize {
    50
}

fn default_max_excerpts() -> usize {
    MAX_EXCERPTS
}

fn default_min_excerpt_chars() -> usize {
    10
}

/// Keyword matching settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexiconConfig {
    /// Characters of context taken on each side of a match.
    #[serde(default = "default_window_chars")]
    pub window_chars: usize,

    /// Excerpts kept per category and scene, at most 5.
    #[serde(default = "default_max_excerpts")]
    pub max_excerpts: usize,

    /// Trimmed windows shorter than this are parsing noise and are dropped.
    #[serde(default = "default_min_excerpt_chars")]
    pub min_excerpt_chars: usize,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            window_chars: default_window_chars(),
            max_excerpts: default_max_excerpts(),
            min_excerpt_chars: default_min_excerpt_chars(),
        }
    }
}

impl LexiconConfig {
    pub fn collect_validations(&self) -> Vec<Result<(), String>> {
        vec![
            if self.window_chars == 0 {
                Err("lexicon.window_chars must be at least 1".to_string())
            } else {
                Ok(())
            },
            if (1..=MAX_EXCERPTS).contains(&self.max_excerpts) {
                Ok(())
            } else {
                Err(format!(
                    "lexicon.max_excerpts must be between 1 and {MAX_EXCERPTS}"
                ))
            },
        ]
    }
}
