//! JSON array writer

use crate::error::{Error, Result};
use crate::types::GroupId;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Output file for one events batch
pub fn events_path(dir: impl AsRef<Path>, batch_index: usize) -> PathBuf {
    dir.as_ref().join(format!("{batch_index}.json"))
}

/// Output file for one group's members
pub fn members_path(dir: impl AsRef<Path>, group: &GroupId) -> PathBuf {
    dir.as_ref().join(format!("{group}.json"))
}

/// Size of an existing output file, or `None` if there is none
pub fn existing_size(path: impl AsRef<Path>) -> Option<u64> {
    std::fs::metadata(path.as_ref())
        .ok()
        .filter(std::fs::Metadata::is_file)
        .map(|m| m.len())
}

/// Write records as a compact JSON array, replacing any existing file
///
/// Returns the number of bytes written.
pub async fn write_records(path: impl AsRef<Path>, records: &[Value]) -> Result<u64> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::output(format!("Failed to create {}: {e}", parent.display())))?;
    }

    let contents = serde_json::to_vec(records)?;

    // Write to temp file first, then rename for atomicity
    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &contents)
        .await
        .map_err(|e| Error::output(format!("Failed to write {}: {e}", temp_path.display())))?;

    tokio::fs::rename(&temp_path, path)
        .await
        .map_err(|e| Error::output(format!("Failed to rename {}: {e}", temp_path.display())))?;

    Ok(contents.len() as u64)
}
