//! CLI command implementations.
//!
//! - **analyze**: Rate one or more scripts
//! - **init**: Write a default `.scriptrate.toml`

pub mod analyze;
pub mod init;

pub use analyze::{exit_code_for, handle_analyze, AnalyzeConfig};
pub use init::init_config;
