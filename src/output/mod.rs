//! Output module
//!
//! Writes collected records to disk as plain JSON arrays.
//!
//! # Overview
//!
//! - Events are written per batch as `<events_dir>/<batch index>.json`
//! - Members are written per group as `<members_dir>/<group id>.json`
//! - Files are written to a `.tmp` sibling and renamed into place, so an
//!   interrupted run never leaves a half-written file under the final name

mod writer;

pub use writer::{events_path, existing_size, members_path, write_records};
