//! Dump options and run summary

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Which dump produced a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpKind {
    /// Events, batched
    Events,
    /// Members, per group
    Members,
}

impl fmt::Display for DumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Events => f.write_str("events"),
            Self::Members => f.write_str("members"),
        }
    }
}

/// Options specific to the events dump
#[derive(Debug, Clone, Copy, Default)]
pub struct EventsOptions {
    /// Skip batches whose output file already exists
    pub skip_existing: bool,
}

/// Counters for one completed run
#[derive(Debug, Clone, Serialize)]
pub struct DumpSummary {
    /// Dump that ran
    pub kind: DumpKind,
    /// Groups in the input list
    pub groups: usize,
    /// Units (batches or groups) to process
    pub units: usize,
    /// Units fetched and written
    pub written: usize,
    /// Units left alone because output existed
    pub skipped: usize,
    /// Records written across all units
    pub records: u64,
    /// HTTP requests issued
    pub requests: u64,
    /// Bytes written across all units
    pub bytes: u64,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// When the run finished
    pub finished_at: Option<DateTime<Utc>>,
}

impl DumpSummary {
    /// Start counting a run
    pub fn start(kind: DumpKind, groups: usize, units: usize) -> Self {
        Self {
            kind,
            groups,
            units,
            written: 0,
            skipped: 0,
            records: 0,
            requests: 0,
            bytes: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Count a written unit
    pub fn record_written(&mut self, records: usize, requests: u32, bytes: u64) {
        self.written += 1;
        self.records += records as u64;
        self.requests += u64::from(requests);
        self.bytes += bytes;
    }

    /// Count a skipped unit
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Stamp the finish time
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    /// Wall time of the run, once finished
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|end| end - self.started_at)
    }
}
