//! Record validation contract
//!
//! Every record kind implements [`Record`], which acts as the per-kind
//! descriptor for the upload pipeline: the kind (and with it the file tag),
//! the ordered list of required fields, and the CSV column labels carried by
//! the type's `Serialize` implementation.

use super::errors::ValidationError;
use super::kind::RecordKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io;

/// A record that can be validated and uploaded as one CSV row
pub trait Record: Serialize {
    /// Kind of this record
    const KIND: RecordKind;

    /// Required fields as `(name, value)` pairs, in the order they are checked
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    /// Validates the record
    ///
    /// Required fields are checked in order and the first empty one is
    /// reported.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::FieldMissing`] naming the first missing field.
    fn validate(&self) -> Result<(), ValidationError> {
        check_required(Self::KIND, &self.required_fields())
    }

    /// Writes this record as one CSV row
    ///
    /// `as_of` is the instant the upload is stamped with. Kinds with columns
    /// derived from the current time compute them against it.
    ///
    /// # Errors
    ///
    /// Returns the writer's error if the row cannot be serialized.
    fn write_row<W: io::Write>(
        &self,
        writer: &mut csv::Writer<W>,
        _as_of: DateTime<Utc>,
    ) -> csv::Result<()> {
        writer.serialize(self)
    }
}

/// Checks that every `(name, value)` pair has a non-empty value
///
/// # Errors
///
/// Returns [`ValidationError::FieldMissing`] for the first empty value.
pub fn check_required(
    kind: RecordKind,
    fields: &[(&'static str, &str)],
) -> Result<(), ValidationError> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(ValidationError::FieldMissing {
            kind,
            field: *field,
        }),
        None => Ok(()),
    }
}

/// Validates a record that may be absent
///
/// # Errors
///
/// Returns [`ValidationError::MissingRecord`] for `None`, otherwise whatever
/// [`Record::validate`] reports.
///
/// # Examples
///
/// ```
/// use oceo_sftp::domain::{validate, Vessel, ValidationError};
///
/// let vessel = Vessel::new("ctx-1", "v-1", "imo-9000001", "Northern Star");
/// assert!(validate(Some(&vessel)).is_ok());
///
/// let missing = validate::<Vessel>(None).unwrap_err();
/// assert!(matches!(missing, ValidationError::MissingRecord { .. }));
/// ```
pub fn validate<R: Record>(record: Option<&R>) -> Result<(), ValidationError> {
    match record {
        Some(record) => record.validate(),
        None => Err(ValidationError::MissingRecord { kind: R::KIND }),
    }
}
