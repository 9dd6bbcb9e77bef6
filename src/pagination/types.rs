//! Pagination types
//!
//! Defines the response envelope and the loop state.

use crate::types::RateLimitInfo;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One decoded response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Records on this page
    pub results: Vec<Value>,
    /// Pagination metadata; `null` reads as empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: PageMeta,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `meta` object of a response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeta {
    /// URI of the next page
    #[serde(default)]
    pub next: Option<String>,
    /// Total count, when the API reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

impl Page {
    /// Where to go after this page
    pub fn next_page(&self) -> NextPage {
        match self.meta.next.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => NextPage::Url(url.to_string()),
            _ => NextPage::Done,
        }
    }
}

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch this URI next
    Url(String),
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// State carried across pages of one collection
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub pages: u32,
    /// Records fetched so far
    pub total_fetched: u64,
    /// Cursor for the next request
    pub cursor: Option<String>,
    /// Whether pagination is complete
    pub done: bool,
}

impl PaginationState {
    /// Start at the given URI
    pub fn starting_at(url: impl Into<String>) -> Self {
        Self {
            cursor: Some(url.into()),
            ..Default::default()
        }
    }

    /// Record a fetched page and move the cursor
    pub fn advance(&mut self, records: usize, next: NextPage) {
        self.pages += 1;
        self.total_fetched += records as u64;
        match next {
            NextPage::Url(url) => self.cursor = Some(url),
            NextPage::Done => {
                self.cursor = None;
                self.done = true;
            }
        }
    }
}

/// What the loop saw on one page, handed to the caller's observer
#[derive(Debug, Clone)]
pub struct PageInfo {
    /// One-based page number
    pub page: u32,
    /// Records on this page
    pub records: usize,
    /// Records collected so far, this page included
    pub total: u64,
    /// Total the API expects across all pages, if it says
    pub total_count: Option<u64>,
    /// Rate limit headers on the response
    pub rate_limit: RateLimitInfo,
    /// Whether another page follows
    pub has_next: bool,
}
