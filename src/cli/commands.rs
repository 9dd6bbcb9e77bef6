//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dump Meetup events and members for a list of groups
#[derive(Parser, Debug)]
#[command(name = "meetup-dump")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (YAML); flags below override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Group list (JSON array of objects with an `id`)
    #[arg(short, long, global = true)]
    pub groups: Option<PathBuf>,

    /// Root directory holding `events/` and `members/`
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// API root, e.g. https://api.meetup.com/2
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Summary format printed after the run
    #[arg(short, long, global = true, default_value = "pretty")]
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
    /// Dump upcoming and past events, one file per batch of groups
    Events {
        /// Groups per request chain
        #[arg(long)]
        batch_size: Option<usize>,

        /// Keep batch files that already exist instead of re-fetching them
        #[arg(long)]
        skip_existing: bool,
    },

    /// Dump members, one file per group; existing files are kept
    Members,
}

/// Summary output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object
    Json,
    /// Human-readable lines
    Pretty,
}
