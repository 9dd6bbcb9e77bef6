//! Run configuration
//!
//! Every setting has a default matching the Houston dataset layout, so a
//! bare `meetup-dump events` works from the project root. A YAML file can
//! override any subset of fields, and CLI flags override the file.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "MEETUP_API_KEY";

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.meetup.com/2";

/// Groups per events request
pub const DEFAULT_BATCH_SIZE: usize = 200;

// ============================================================================
// Dump Config
// ============================================================================

/// Settings shared by the events and members dumps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// API root; `events` and `members` are appended to it
    pub base_url: String,

    /// Latitude sent with every request
    pub lat: String,

    /// Longitude sent with every request
    pub lon: String,

    /// JSON array of `{"id": ...}` objects
    pub groups_file: PathBuf,

    /// Directory for `<batch>.json` event dumps
    pub events_dir: PathBuf,

    /// Directory for `<group>.json` member dumps
    pub members_dir: PathBuf,

    /// Groups per events request
    pub batch_size: usize,

    /// Extra fields requested for events
    pub event_fields: String,

    /// Event statuses requested
    pub event_status: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lat: "29.761993".to_string(),
            lon: "-95.366302".to_string(),
            groups_file: PathBuf::from("data/groups.json"),
            events_dir: PathBuf::from("data/events"),
            members_dir: PathBuf::from("data/members"),
            batch_size: DEFAULT_BATCH_SIZE,
            event_fields: "announced_at".to_string(),
            event_status: "upcoming,past".to_string(),
            timeout_secs: 30,
        }
    }
}

impl DumpConfig {
    /// Parse a config from YAML text; missing fields keep their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    /// Point both output directories under a common root
    #[must_use]
    pub fn with_output_root(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.events_dir = root.join("events");
        self.members_dir = root.join("members");
        self
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check values that would only fail later, mid-run
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::config("batch_size must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be at least 1"));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }
}

// ============================================================================
// API Key
// ============================================================================

/// API key sent as the `key` query parameter
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key value
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from `MEETUP_API_KEY`
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(API_KEY_ENV)
    }

    /// Read the key from the named variable; unset or blank is an error
    pub fn from_env_var(name: &str) -> Result<Self> {
        match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => Ok(Self(value)),
            _ => Err(Error::missing_env(name)),
        }
    }

    /// The raw key value
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
