//! Dump procedures
//!
//! Both dumps share one shape: load the group list, walk it in units, follow
//! pagination for each unit, write one file per unit. They differ in how
//! units are formed and in whether existing output is reused.
//!
//! | Dump    | Unit              | Output               | Existing file      |
//! |---------|-------------------|----------------------|--------------------|
//! | events  | batch of 200 ids  | `events/<n>.json`    | overwritten        |
//! | members | one group         | `members/<id>.json`  | skipped            |
//!
//! Units run strictly one after another. The first failure stops the run and
//! is reported with the batch or group it happened in.

mod events;
mod members;
mod types;

pub use types::{DumpKind, DumpSummary, EventsOptions};

use crate::config::{ApiKey, DumpConfig};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::PageInfo;
use url::Url;

/// Runs the events and members dumps against one API
#[derive(Debug)]
pub struct Dumper {
    config: DumpConfig,
    api_key: ApiKey,
    client: HttpClient,
}

impl Dumper {
    /// Create a dumper; fails on an invalid config
    pub fn new(config: DumpConfig, api_key: ApiKey) -> Result<Self> {
        config.validate()?;

        let client = HttpClient::with_config(
            HttpClientConfig::builder()
                .timeout(config.timeout())
                .build(),
        )?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    /// First-page URI for an endpoint
    ///
    /// Parameters go on in a fixed order: `group_id`, `lat`, `lon`, `key`,
    /// then `extra`.
    pub(crate) fn start_url(
        &self,
        endpoint: &str,
        group_id: &str,
        extra: &[(&str, &str)],
    ) -> Result<String> {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{endpoint}"))?;

        url.query_pairs_mut()
            .append_pair("group_id", group_id)
            .append_pair("lat", &self.config.lat)
            .append_pair("lon", &self.config.lon)
            .append_pair("key", self.api_key.expose())
            .extend_pairs(extra);

        Ok(url.into())
    }
}

/// One-line progress note for a fetched page
pub(crate) fn page_progress(page: &PageInfo) -> String {
    let so_far = match page.total_count {
        Some(expected) => format!("{} of {}", page.total, expected),
        None => format!("{} so far", page.total),
    };
    let tail = if page.has_next { "more to come" } else { "last page" };
    format!(
        "page {}: {} records ({so_far}), {tail}",
        page.page, page.records
    )
}
