//! CLI module
//!
//! Command-line interface for running dumps.
//!
//! # Commands
//!
//! - `events` - Dump events for all groups, 200 groups per request chain
//! - `members` - Dump members for each group, skipping finished groups

mod commands;
mod logging;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use logging::log_filter;
pub use runner::Runner;
