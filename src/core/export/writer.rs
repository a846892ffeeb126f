//! CSV serialization of record batches
//!
//! The header row comes from the serde labels on each record type, so the
//! first record determines the columns. Absent optional values are written as
//! empty cells.

use crate::domain::{OceoError, Record, Result};
use chrono::{DateTime, Utc};

/// Serializes records to CSV bytes, header row first
///
/// Columns derived from the current time are computed against `as_of`, so the
/// same batch and instant always produce the same bytes.
///
/// # Errors
///
/// Returns [`OceoError::Serialization`] if a record cannot be written.
pub fn to_csv<R: Record>(records: &[R], as_of: DateTime<Utc>) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for record in records {
        record
            .write_row(&mut writer, as_of)
            .map_err(|e| OceoError::Serialization(format!("{} row: {e}", R::KIND)))?;
    }

    writer
        .into_inner()
        .map_err(|e| OceoError::Serialization(format!("Failed to flush CSV writer: {e}")))
}
