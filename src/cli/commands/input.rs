//! Reading record batches from JSON files

use crate::domain::{OceoError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads a JSON array of records
///
/// Fields use their snake_case names. Missing fields deserialize as empty and
/// are caught by validation, not here.
///
/// # Errors
///
/// Returns [`OceoError::Io`] if the file cannot be read and
/// [`OceoError::Serialization`] if it is not a JSON array of records.
pub fn read_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| OceoError::Io(format!("Failed to read {}: {e}", path.display())))?;

    let records: Vec<R> = serde_json::from_str(&contents).map_err(|e| {
        OceoError::Serialization(format!("Invalid JSON in {}: {e}", path.display()))
    })?;

    tracing::debug!(path = %path.display(), count = records.len(), "Read input records");
    Ok(records)
}
