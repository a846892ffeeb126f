//! Validate command implementation
//!
//! This module implements the `validate` command, which checks a JSON file of
//! records without loading configuration or contacting the server.

use crate::cli::commands::exit_code;
use crate::cli::commands::input::read_records;
use crate::core::export::validate_batch;
use crate::domain::{
    Crew, CrewCredential, CrewSchedule, CrewSchedulePosition, CrewSeatime, Record, RecordKind,
    Result, Vessel, VesselSchedule, VesselSchedulePosition,
};
use clap::Args;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Record kind (crew, credentials, seatime, vessels, vesselschedules,
    /// vesselschedulepositions, crewschedules, crewschedulepositions)
    #[arg(short, long)]
    pub kind: RecordKind,

    /// JSON file holding an array of records
    #[arg(short, long)]
    pub input: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(kind = %self.kind, input = %self.input.display(), "Validating records");

        println!("🔍 Validating {} records in {}", self.kind, self.input.display());
        println!();

        match validate_kind(self.kind, &self.input) {
            Ok(count) => {
                println!("✅ {count} record(s) valid");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Validation failed");
                println!("   Error: {e}");
                Ok(exit_code(&e))
            }
        }
    }
}

/// Reads `input` as records of `kind` and validates all of them
///
/// Returns the number of records checked.
///
/// # Errors
///
/// Returns the first validation error, or an input error.
pub fn validate_kind(kind: RecordKind, input: &Path) -> Result<usize> {
    match kind {
        RecordKind::Crew => validate_file::<Crew>(input),
        RecordKind::CrewCredential => validate_file::<CrewCredential>(input),
        RecordKind::CrewSeatime => validate_file::<CrewSeatime>(input),
        RecordKind::Vessel => validate_file::<Vessel>(input),
        RecordKind::VesselSchedule => validate_file::<VesselSchedule>(input),
        RecordKind::VesselSchedulePosition => validate_file::<VesselSchedulePosition>(input),
        RecordKind::CrewSchedule => validate_file::<CrewSchedule>(input),
        RecordKind::CrewSchedulePosition => validate_file::<CrewSchedulePosition>(input),
    }
}

fn validate_file<R: Record + DeserializeOwned>(input: &Path) -> Result<usize> {
    let records: Vec<R> = read_records(input)?;
    validate_batch(&records)?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OceoError, ValidationError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_kind_ok() {
        let file = json_file(
            r#"[
                {"context_id": "ctx", "crew_external_id": "c-1", "title": "Master", "endorsements": ["STCW"]},
                {"context_id": "ctx", "crew_external_id": "c-2", "title": "Mate"}
            ]"#,
        );
        assert_eq!(
            validate_kind(RecordKind::CrewCredential, file.path()).unwrap(),
            2
        );
    }

    #[test]
    fn test_validate_kind_reports_seatime_duration() {
        let file = json_file(
            r#"[{"context_id": "ctx", "crew_external_id": "c-1", "vessel_name": "Northern Star"}]"#,
        );
        let err = validate_kind(RecordKind::CrewSeatime, file.path()).unwrap_err();
        match err {
            OceoError::Validation(ValidationError::SeatimeDuration { kind }) => {
                assert_eq!(kind, RecordKind::CrewSeatime)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_exit_codes() {
        let valid = json_file(
            r#"[{"context_id": "ctx", "external_id": "c-1", "first_name": "Ada", "last_name": "Lovelace"}]"#,
        );
        let args = ValidateArgs {
            kind: RecordKind::Crew,
            input: valid.path().to_path_buf(),
        };
        assert_eq!(args.execute().await.unwrap(), 0);

        let invalid = json_file(r#"[{"context_id": "ctx"}]"#);
        let args = ValidateArgs {
            kind: RecordKind::Crew,
            input: invalid.path().to_path_buf(),
        };
        assert_eq!(args.execute().await.unwrap(), 1);
    }
}
