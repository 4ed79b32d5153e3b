//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Figma connector CLI
#[derive(Parser, Debug)]
#[command(name = "figma-connector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show connector specification and formula catalog
    Spec,

    /// Test connection to the API
    Check,

    /// Run a formula or action once
    Run {
        /// Formula name (e.g. TestConnection, ComponentCard)
        formula: String,

        /// Arguments as a JSON object keyed by parameter name
        #[arg(long)]
        args: Option<String>,
    },

    /// Run a sync table formula
    Sync {
        /// Sync formula name (e.g. SyncFileComponents)
        formula: String,

        /// Arguments as a JSON object keyed by parameter name
        #[arg(long)]
        args: Option<String>,

        /// Continuation returned by a previous step
        #[arg(long)]
        continuation: Option<String>,

        /// Follow continuations until the upstream is exhausted
        #[arg(long)]
        all: bool,

        /// Stop after this many pages (with --all)
        #[arg(long)]
        max_pages: Option<usize>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
