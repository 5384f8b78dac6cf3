//! End-to-end document analysis: scoring context, analyzer, batch driver
//! and the serialized result record.

pub mod analyzer;
pub mod batch;
pub mod context;
pub mod report;

pub use analyzer::{DocumentSource, ScriptAnalyzer, STDIN_NAME};
pub use batch::{BatchEntry, BatchReport, BatchStatus};
pub use context::{embedder_from_config, ScoringContext};
pub use report::{sample_text, AnalysisReport, TriggerSceneReport};
