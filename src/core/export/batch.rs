//! Batch validation
//!
//! A batch is uploaded only if every record in it is valid. Validation stops
//! at the first invalid record.

use crate::domain::{Record, ValidationError};

/// Validates every record in order, stopping at the first failure
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first invalid record.
pub fn validate_batch<R: Record>(records: &[R]) -> Result<(), ValidationError> {
    for (index, record) in records.iter().enumerate() {
        if let Err(e) = record.validate() {
            tracing::warn!(
                kind = %R::KIND,
                index = index,
                field = e.field().unwrap_or(""),
                error = %e,
                "Record failed validation"
            );
            return Err(e);
        }
    }

    tracing::debug!(kind = %R::KIND, count = records.len(), "Batch validated");
    Ok(())
}
