//! Group list loader

use crate::error::{Error, Result};
use crate::types::Group;
use std::path::Path;
use tracing::debug;

/// Load the group list from a JSON file
pub fn load_groups(path: impl AsRef<Path>) -> Result<Vec<Group>> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    if !path.is_file() {
        return Err(Error::FileNotFound { path: shown });
    }

    let contents = std::fs::read_to_string(path)?;
    let groups = parse_groups(&contents).map_err(|message| Error::group_list(&shown, message))?;

    debug!("Loaded {} groups from {}", groups.len(), shown);
    Ok(groups)
}

/// Parse group list JSON, returning a plain message on failure
pub fn parse_groups(json: &str) -> std::result::Result<Vec<Group>, String> {
    if json.trim().is_empty() {
        return Err("file is empty".to_string());
    }

    let groups: Vec<Group> = serde_json::from_str(json).map_err(|e| e.to_string())?;
    if groups.is_empty() {
        return Err("no groups listed".to_string());
    }

    Ok(groups)
}
