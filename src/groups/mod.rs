//! Group list module
//!
//! Loads the static group list and splits it into request units.
//!
//! # Overview
//!
//! - [`load_groups`] reads the JSON array of `{"id": ...}` objects and fails
//!   before any request is made if the file is missing, malformed, or empty.
//! - [`chunk_groups`] yields fixed-size [`Batch`]es for the events dump.
//!   Members walk the list one group at a time.

mod batch;
mod loader;

pub use batch::{chunk_groups, Batch};
pub use loader::{load_groups, parse_groups};
