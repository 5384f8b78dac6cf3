//! Progress feedback for multi-document runs.
//!
//! A single bar counts documents as they finish. It is hidden in quiet mode,
//! when stderr is not a terminal, and when only one document is analyzed.
//!
//! # Progress Behavior
//!
//! - **Quiet Mode**: No progress output (`SCRIPTRATE_QUIET` env var or `--quiet`)
//! - **Non-TTY**: Hidden in CI and piped output

use indicatif::{ProgressBar, ProgressStyle};

pub const TEMPLATE_DOCUMENTS: &str = "{spinner} {msg} {pos}/{len} documents ({percent}%) - {eta}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
}

impl ProgressConfig {
    /// Create progress configuration from environment and CLI arguments
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("SCRIPTRATE_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    pub fn hidden() -> Self {
        Self { quiet_mode: true }
    }

    /// Determine if progress bars should be displayed
    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }

    /// Bar over `len` documents; hidden for single documents.
    pub fn document_bar(&self, len: u64) -> ProgressBar {
        if len < 2 || !self.should_show_progress() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        match ProgressStyle::default_bar().template(TEMPLATE_DOCUMENTS) {
            Ok(style) => pb.set_style(style.progress_chars("█▓▒░  ")),
            Err(e) => tracing::debug!("progress template rejected: {e}"),
        }
        pb.set_message("Rating");
        pb
    }
}
