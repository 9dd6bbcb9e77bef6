//! HTTP client module
//!
//! A thin async GET client. Requests are issued one at a time and a failure
//! is returned to the caller as-is; there is no retry, backoff, or
//! throttling layer.

mod client;

pub use client::{redact_url, HttpClient, HttpClientConfig};
