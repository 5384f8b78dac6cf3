//! CLI module for scriptrate
//!
//! - Argument parsing (`args`)
//! - Runtime setup and overrides (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands};
pub use setup::{apply_overrides, get_worker_count, parallel_for_jobs};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
