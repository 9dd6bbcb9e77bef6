//! Fixed-size batching of groups

use crate::error::{Error, Result};
use crate::types::{Group, GroupId};

/// A run of consecutive groups fetched with one comma-joined filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<'a> {
    /// Zero-based position; names the output file
    pub index: usize,
    /// Groups in list order
    pub groups: &'a [Group],
}

impl Batch<'_> {
    /// Ids in list order
    pub fn ids(&self) -> impl Iterator<Item = &GroupId> {
        self.groups.iter().map(|g| &g.id)
    }

    /// Comma-joined ids for the `group_id` parameter
    pub fn joined_ids(&self) -> String {
        self.ids().map(GroupId::as_str).collect::<Vec<_>>().join(",")
    }

    /// Number of groups in this batch
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the batch holds no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Split groups into batches of at most `size`, preserving order
pub fn chunk_groups(groups: &[Group], size: usize) -> Result<impl Iterator<Item = Batch<'_>>> {
    if size == 0 {
        return Err(Error::config("batch size must be at least 1"));
    }

    Ok(groups
        .chunks(size)
        .enumerate()
        .map(|(index, groups)| Batch { index, groups }))
}
