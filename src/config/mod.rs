//! Configuration loaded from `.scriptrate.toml`.
//!
//! Every section is optional and falls back to the calibrated defaults.
//! Rating thresholds, context multipliers and recommendation ladders are not
//! configurable; they live next to the code that applies them.

mod core;
mod embedding;
mod lexicon;
mod loader;
mod parallel;
mod scoring;

pub use self::core::ScriptRateConfig;
pub use embedding::{EmbeddingBackend, EmbeddingConfig};
pub use lexicon::LexiconConfig;
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;
pub use scoring::{AggregationConfig, BlendConfig, RankingConfig, RankingWeights};
