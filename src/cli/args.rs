use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::EmbeddingBackend;
use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "scriptrate")]
#[command(about = "Age-rating classifier for screenplays", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the age rating of one or more scripts
    Analyze {
        /// Plain-text scripts to analyze (reads stdin when omitted)
        paths: Vec<PathBuf>,

        /// Write JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format for stdout
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Configuration file (skips discovery of .scriptrate.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Scene worker threads (0 = all cores, 1 = sequential)
        #[arg(short = 'j', long = "jobs")]
        jobs: Option<usize>,

        /// Embedding backend for scene context
        #[arg(long, value_enum)]
        embedder: Option<EmbeddingBackend>,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
