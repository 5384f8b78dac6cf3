//! Per-document outcomes of a multi-document run.
//!
//! A failing document is recorded, never propagated: partial success is a
//! normal result of a batch.

use serde::Serialize;

use crate::errors::Error;

use super::report::AnalysisReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub file: String,
    pub status: BatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Short error category, see [`Error::category`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AnalysisReport>,
}

impl BatchEntry {
    pub fn success(report: AnalysisReport, duration_ms: u64) -> Self {
        Self {
            file: report.file.clone(),
            status: BatchStatus::Success,
            error: None,
            error_kind: None,
            duration_ms,
            report: Some(report),
        }
    }

    pub fn failed(file: impl Into<String>, error: &Error, duration_ms: u64) -> Self {
        Self {
            file: file.into(),
            status: BatchStatus::Failed,
            error: Some(error.to_string()),
            error_kind: Some(error.category().to_string()),
            duration_ms,
            report: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == BatchStatus::Success
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn from_entries(entries: Vec<BatchEntry>) -> Self {
        let succeeded = entries.iter().filter(|e| e.is_success()).count();
        let failed = entries.len() - succeeded;
        Self {
            entries,
            succeeded,
            failed,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    pub fn reports(&self) -> impl Iterator<Item = &AnalysisReport> {
        self.entries.iter().filter_map(|e| e.report.as_ref())
    }
}
