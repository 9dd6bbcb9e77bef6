//! Pagination module
//!
//! Follows the `meta.next` URI of each response body until it runs out.
//!
//! # Overview
//!
//! Every list endpoint answers with the same envelope:
//!
//! ```text
//! {"results": [...], "meta": {"next": "<uri>" | null, ...}}
//! ```
//!
//! [`PageFetcher::collect`] walks that chain from a start URI, concatenating
//! `results` in order. The cursor is the only state carried between
//! requests, and the loop ends the first time it is null, absent, or empty.

mod fetcher;
mod types;

pub use fetcher::{Collected, PageFetcher};
pub use types::{NextPage, Page, PageInfo, PageMeta, PaginationState};

#[cfg(test)]
mod tests;
