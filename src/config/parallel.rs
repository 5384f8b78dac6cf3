//! Parallelism configuration for per-scene feature extraction.

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// Controls the bounded worker pool used for scene scoring.
///
/// Aggregation and rating always run on the calling thread once every scene
/// is scored.
///
/// # Example
///
/// ```rust
/// use scriptrate::config::ParallelConfig;
///
/// let config = ParallelConfig::default().with_max_concurrency(2);
/// assert!(config.enabled);
/// assert_eq!(config.max_concurrency, Some(2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Score scenes on a worker pool (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Worker threads; `None` uses every available core.
    #[serde(default)]
    pub max_concurrency: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_concurrency: None,
        }
    }
}

impl ParallelConfig {
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            max_concurrency: None,
        }
    }

    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = Some(max);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        match self.max_concurrency {
            Some(0) => Err("parallel.max_concurrency must be at least 1".to_string()),
            _ => Ok(()),
        }
    }
}
