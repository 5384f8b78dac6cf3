//! Document analysis driver.
//!
//! Segmentation, aggregation and rating run on the calling thread; only the
//! per-scene stage (lexical matching, context classification, scoring) fans
//! out to rayon. Scene order is preserved through the parallel stage, so the
//! result is identical to a sequential run.

use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, info_span, warn};

use crate::analysis::segment_scenes;
use crate::config::{ParallelConfig, ScriptRateConfig};
use crate::core::{Scene, ScoreVector};
use crate::errors::{Error, Result};
use crate::io::extract_text;
use crate::priority::{aggregate, rank_scenes};
use crate::progress::ProgressConfig;
use crate::rating;
use crate::scoring::contextualize;

use super::batch::{BatchEntry, BatchReport};
use super::context::ScoringContext;
use super::report::AnalysisReport;

/// Name used for documents read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Where a document's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Path(PathBuf),
    Text { name: String, text: String },
}

impl DocumentSource {
    /// Name recorded in reports: the file name for paths.
    pub fn name(&self) -> String {
        match self {
            Self::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Text { name, .. } => name.clone(),
        }
    }

    fn location(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Text { name, .. } => name.clone(),
        }
    }
}

#[derive(Debug)]
pub struct ScriptAnalyzer {
    context: ScoringContext,
    config: ScriptRateConfig,
    pool: Option<rayon::ThreadPool>,
    progress: ProgressConfig,
}

impl ScriptAnalyzer {
    /// Validate `config` and build the scoring context it describes.
    pub fn new(config: ScriptRateConfig) -> Result<Self> {
        config.validate()?;
        let context = ScoringContext::new(&config)?;
        Self::with_context(config, context)
    }

    /// Reuse an already initialised context, e.g. one with a custom embedder.
    pub fn with_context(config: ScriptRateConfig, context: ScoringContext) -> Result<Self> {
        config.validate()?;
        let pool = build_pool(&config.parallel)?;
        Ok(Self {
            context,
            config,
            pool,
            progress: ProgressConfig::hidden(),
        })
    }

    pub fn with_progress(mut self, progress: ProgressConfig) -> Self {
        self.progress = progress;
        self
    }

    pub fn context(&self) -> &ScoringContext {
        &self.context
    }

    pub fn config(&self) -> &ScriptRateConfig {
        &self.config
    }

    /// Rate one document given as text.
    pub fn analyze_text(&self, name: &str, text: &str) -> Result<AnalysisReport> {
        let span = info_span!("analyze_document", file = %name);
        let _enter = span.enter();

        let scenes = segment_scenes(text);
        let scored = self.score_scenes(&scenes)?;
        let document = aggregate(&scored, &self.config.aggregation);
        let result = rating::classify(&document);
        let triggers = rank_scenes(&scenes, &scored, &self.config.ranking);

        info!(
            rating = %result.rating,
            scenes = scenes.len(),
            trigger_scenes = triggers.len(),
            "document rated"
        );

        Ok(AnalysisReport::new(
            name,
            result,
            &document.scores,
            &triggers,
            scenes.len(),
            self.config.ranking.sample_chars,
        ))
    }

    /// Resolve the source to text, then rate it.
    pub fn analyze_source(&self, source: &DocumentSource) -> Result<AnalysisReport> {
        match source {
            DocumentSource::Path(path) => {
                let text = extract_text(path)?;
                self.analyze_text(&source.name(), &text)
            }
            DocumentSource::Text { name, text } => self.analyze_text(name, text),
        }
    }

    /// Rate every source in order, recording failures instead of stopping.
    pub fn analyze_batch(&self, sources: &[DocumentSource]) -> BatchReport {
        let bar = self.progress.document_bar(sources.len() as u64);
        let mut entries = Vec::with_capacity(sources.len());

        for source in sources {
            let started = Instant::now();
            let outcome = self.analyze_source(source);
            let elapsed = started.elapsed().as_millis() as u64;
            entries.push(match outcome {
                Ok(report) => BatchEntry::success(report, elapsed),
                Err(err) => {
                    warn!(file = %source.location(), kind = err.category(), "document failed: {err}");
                    BatchEntry::failed(source.name(), &err, elapsed)
                }
            });
            bar.inc(1);
        }

        bar.finish_and_clear();
        let batch = BatchReport::from_entries(entries);
        info!(
            succeeded = batch.succeeded,
            failed = batch.failed,
            "batch finished"
        );
        batch
    }

    fn score_scenes(&self, scenes: &[Scene]) -> Result<Vec<ScoreVector>> {
        let score = |scene: &Scene| -> Result<ScoreVector> {
            let features = self.context.scene_features(scene)?;
            Ok(contextualize(&features))
        };

        if !self.config.parallel.enabled {
            return scenes.iter().map(score).collect();
        }
        match &self.pool {
            Some(pool) => pool.install(|| scenes.par_iter().map(score).collect()),
            None => scenes.par_iter().map(score).collect(),
        }
    }
}

/// Dedicated pool when concurrency is capped; otherwise rayon's global pool.
fn build_pool(config: &ParallelConfig) -> Result<Option<rayon::ThreadPool>> {
    match (config.enabled, config.max_concurrency) {
        (true, Some(threads)) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("scriptrate-scene-{i}"))
            .build()
            .map(Some)
            .map_err(|e| Error::Configuration(format!("scene worker pool: {e}"))),
        _ => Ok(None),
    }
}
