//! Cursor-following fetch loop

use super::types::{Page, PageInfo, PaginationState};
use crate::error::{Error, Result};
use crate::http::{redact_url, HttpClient};
use crate::types::RateLimitInfo;
use serde_json::Value;
use tracing::debug;

/// Records gathered from one chain of pages
#[derive(Debug, Clone, Default)]
pub struct Collected {
    /// Records in response order
    pub records: Vec<Value>,
    /// Requests issued
    pub pages: u32,
}

/// Walks `meta.next` links with a shared client
#[derive(Debug)]
pub struct PageFetcher<'a> {
    client: &'a HttpClient,
}

impl<'a> PageFetcher<'a> {
    /// Create a fetcher on top of a client
    pub fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetch every page starting at `start_url`
    ///
    /// `on_page` runs after each page is decoded. The first failing request
    /// aborts the whole collection; records from earlier pages are dropped.
    pub async fn collect<F>(&self, start_url: &str, mut on_page: F) -> Result<Collected>
    where
        F: FnMut(&PageInfo),
    {
        let mut state = PaginationState::starting_at(start_url);
        let mut records = Vec::new();

        while let Some(url) = state.cursor.take() {
            let (page, rate_limit) = self.fetch_page(&url).await?;
            let next = page.next_page();
            let count = page.results.len();
            let total_count = page.meta.total_count;

            records.extend(page.results);
            state.advance(count, next);

            on_page(&PageInfo {
                page: state.pages,
                records: count,
                total: state.total_fetched,
                total_count,
                rate_limit,
                has_next: !state.done,
            });
        }

        Ok(Collected {
            records,
            pages: state.pages,
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<(Page, RateLimitInfo)> {
        let response = self.client.get(url).await?;
        let rate_limit = RateLimitInfo::from_headers(response.headers());
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;

        let page: Page = serde_json::from_slice(&bytes)
            .map_err(|e| Error::decode(redact_url(url), e.to_string()))?;

        debug!(
            "Fetched {} records from {}",
            page.results.len(),
            redact_url(url)
        );
        Ok((page, rate_limit))
    }
}
