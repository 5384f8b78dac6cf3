//! Setup and initialization functions for CLI
//!
//! Translates command-line overrides into configuration before the
//! analyzer is built.

use crate::config::{EmbeddingBackend, ParallelConfig, ScriptRateConfig};

/// Get the number of worker threads to use
pub fn get_worker_count(jobs: usize) -> usize {
    if jobs == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    } else {
        jobs
    }
}

/// Parallel settings for `--jobs`: 1 runs sequentially, 0 uses every core.
pub fn parallel_for_jobs(base: &ParallelConfig, jobs: Option<usize>) -> ParallelConfig {
    match jobs {
        None => base.clone(),
        Some(1) => ParallelConfig::sequential(),
        Some(0) => ParallelConfig::default(),
        Some(n) => ParallelConfig::default().with_max_concurrency(n),
    }
}

/// Apply command-line overrides on top of the loaded file configuration.
pub fn apply_overrides(
    mut config: ScriptRateConfig,
    jobs: Option<usize>,
    embedder: Option<EmbeddingBackend>,
) -> ScriptRateConfig {
    config.parallel = parallel_for_jobs(&config.parallel, jobs);
    if let Some(backend) = embedder {
        config.embedding.backend = backend;
    }
    config
}
