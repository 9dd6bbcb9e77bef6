//! # meetup-dump
//!
//! Pages through the Meetup API v2 for a fixed list of groups and writes the
//! raw JSON results to disk.
//!
//! ## Dumps
//!
//! - **events**: group ids are sent 200 at a time as a comma-joined
//!   `group_id` filter; each batch lands in `data/events/<batch>.json`
//! - **members**: one group at a time into `data/members/<group>.json`;
//!   groups with an existing file are skipped, so an interrupted run can be
//!   restarted
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meetup_dump::{ApiKey, DumpConfig, Dumper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let dumper = Dumper::new(DumpConfig::default(), ApiKey::from_env()?)?;
//!     let summary = dumper.dump_members().await?;
//!     println!("{} groups written", summary.written);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! groups.json ──► groups ──► dump ──► pagination ──► http ──► API
//!                  (batch)    │        (meta.next)
//!                             ▼
//!                           output ──► <dir>/<unit>.json
//! ```
//!
//! Everything runs sequentially. Any error aborts the run and names the
//! batch or group that failed.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Run configuration and API key
pub mod config;

/// Group list loading and batching
pub mod groups;

/// Sequential HTTP client
pub mod http;

/// `meta.next` pagination
pub mod pagination;

/// JSON file output
pub mod output;

/// Events and members dumps
pub mod dump;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{ApiKey, DumpConfig};
pub use dump::{DumpKind, DumpSummary, Dumper, EventsOptions};
pub use error::{Error, Result};
pub use types::{Group, GroupId, RateLimitInfo};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
