//! Aggregation, deduplication and artifact serialization.
//!
//! Candidates arrive in discovery order. The first record with a given
//! title wins; titles are compared byte for byte.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::error::{PostSeedError, Result};
use crate::core::types::PostRecord;

/// Drop every record whose title was already seen, keeping order
pub fn dedupe_by_title(records: Vec<PostRecord>) -> Vec<PostRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.title.clone());
            if !fresh {
                tracing::debug!(
                    "Dropping duplicate title {:?} from {}",
                    record.title,
                    record.source
                );
            }
            fresh
        })
        .collect()
}

/// Write records as a pretty-printed JSON array
///
/// Missing parent directories are created. Returns the number of
/// records written.
pub fn write_artifact(path: &Path, records: &[PostRecord]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            PostSeedError::SerializationFailed(format!(
                "Failed to create {}: {e}",
                parent.display()
            ))
        })?;
    }

    let mut json = serde_json::to_string_pretty(records)
        .map_err(|e| PostSeedError::SerializationFailed(e.to_string()))?;
    json.push('\n');

    fs::write(path, json).map_err(|e| {
        PostSeedError::SerializationFailed(format!("Failed to write {}: {e}", path.display()))
    })?;

    Ok(records.len())
}

/// Read a previously written artifact
pub fn read_artifact(path: &Path) -> Result<Vec<PostRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PostSeedError::InvalidPath(format!("Artifact not found: {}", path.display()))
        } else {
            PostSeedError::IoError(e)
        }
    })?;
    Ok(serde_json::from_str(&contents)?)
}
