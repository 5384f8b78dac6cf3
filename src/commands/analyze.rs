use crate::cli::setup::{apply_overrides, get_worker_count};
use crate::config::load_config;
use crate::errors::Error;
use crate::io::{create_writer, OutputFormat};
use crate::pipeline::{DocumentSource, ScriptAnalyzer, STDIN_NAME};
use crate::progress::ProgressConfig;
use anyhow::Result;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

pub const EXIT_OK: i32 = 0;
pub const EXIT_ANALYSIS_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

pub struct AnalyzeConfig {
    pub paths: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub embedder: Option<crate::config::EmbeddingBackend>,
    pub quiet: bool,
}

/// Run the analysis and return the process exit code.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<i32> {
    let file_config = load_config(config.config.as_deref())?;
    let settings = apply_overrides(file_config, config.jobs, config.embedder);
    info!(
        workers = get_worker_count(settings.parallel.max_concurrency.unwrap_or(0)),
        parallel = settings.parallel.enabled,
        backend = ?settings.embedding.backend,
        "starting analysis"
    );

    let analyzer =
        ScriptAnalyzer::new(settings)?.with_progress(ProgressConfig::from_env(config.quiet));
    let sources = read_sources(&config.paths, std::io::stdin())?;
    let mut writer = create_writer(config.format, config.output.as_deref())?;

    if let [source] = sources.as_slice() {
        let report = analyzer.analyze_source(source)?;
        writer.write_report(&report)?;
        return Ok(EXIT_OK);
    }

    let batch = analyzer.analyze_batch(&sources);
    writer.write_batch(&batch)?;
    Ok(if batch.all_succeeded() {
        EXIT_OK
    } else {
        EXIT_ANALYSIS_FAILED
    })
}

/// Paths as given, or the whole of `stdin` when there are none.
pub fn read_sources(
    paths: &[PathBuf],
    mut stdin: impl Read,
) -> crate::errors::Result<Vec<DocumentSource>> {
    if !paths.is_empty() {
        return Ok(paths.iter().cloned().map(DocumentSource::Path).collect());
    }
    let mut bytes = Vec::new();
    stdin
        .read_to_end(&mut bytes)
        .map_err(|e| Error::extraction_io(STDIN_NAME, e))?;
    Ok(vec![DocumentSource::Text {
        name: STDIN_NAME.to_string(),
        text: String::from_utf8_lossy(&bytes).into_owned(),
    }])
}

/// Exit code for an error that ended the run early.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(Error::Configuration(_) | Error::Toml(_)) => EXIT_CONFIG_ERROR,
        _ => EXIT_ANALYSIS_FAILED,
    }
}
