//! Upload command implementation
//!
//! This module implements the `upload` command, which reads a JSON array of
//! records of one kind and uploads them as a single CSV file.

use crate::cli::commands::exit_code;
use crate::cli::commands::input::read_records;
use crate::config::load_config;
use crate::core::export::{ExportCoordinator, UploadReceipt};
use crate::domain::{
    Crew, CrewCredential, CrewSchedule, CrewSchedulePosition, CrewSeatime, Record, RecordKind,
    Result, Vessel, VesselSchedule, VesselSchedulePosition,
};
use clap::Args;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Arguments for the upload command
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Record kind (crew, credentials, seatime, vessels, vesselschedules,
    /// vesselschedulepositions, crewschedules, crewschedulepositions)
    #[arg(short, long)]
    pub kind: RecordKind,

    /// JSON file holding an array of records
    #[arg(short, long)]
    pub input: PathBuf,

    /// Validate and serialize without uploading
    #[arg(long)]
    pub dry_run: bool,
}

impl UploadArgs {
    /// Execute the upload command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(kind = %self.kind, input = %self.input.display(), "Starting upload command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        if self.dry_run {
            tracing::info!("Dry run enabled from CLI");
            config.application.dry_run = true;
        }

        let coordinator = match ExportCoordinator::from_config(&config) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to set up SFTP transport");
                println!("   Error: {e}");
                return Ok(exit_code(&e));
            }
        };

        match upload_kind(&coordinator, self.kind, &self.input).await {
            Ok(Some(receipt)) => {
                Self::print_receipt(&receipt);
                Ok(0)
            }
            Ok(None) => {
                println!("ℹ️  No {} records in {}", self.kind, self.input.display());
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, kind = %self.kind, "Upload failed");
                println!("❌ Upload failed");
                println!("   Error: {e}");
                Ok(exit_code(&e))
            }
        }
    }

    fn print_receipt(receipt: &UploadReceipt) {
        if receipt.dry_run {
            println!("🔍 Dry run, nothing was uploaded");
        } else {
            println!("✅ Upload completed");
        }
        println!();
        println!("  Kind: {}", receipt.kind);
        println!("  Records: {}", receipt.record_count);
        println!("  Bytes: {}", receipt.bytes);
        println!("  Remote Path: {}", receipt.remote_path);
        println!("  Duration: {:.2}s", receipt.duration.as_secs_f64());
        println!();
    }
}

/// Reads `input` as records of `kind` and uploads them
///
/// # Errors
///
/// Returns input, validation or transport errors from the pipeline.
pub async fn upload_kind(
    coordinator: &ExportCoordinator,
    kind: RecordKind,
    input: &Path,
) -> Result<Option<UploadReceipt>> {
    match kind {
        RecordKind::Crew => upload_file::<Crew>(coordinator, input).await,
        RecordKind::CrewCredential => upload_file::<CrewCredential>(coordinator, input).await,
        RecordKind::CrewSeatime => upload_file::<CrewSeatime>(coordinator, input).await,
        RecordKind::Vessel => upload_file::<Vessel>(coordinator, input).await,
        RecordKind::VesselSchedule => upload_file::<VesselSchedule>(coordinator, input).await,
        RecordKind::VesselSchedulePosition => {
            upload_file::<VesselSchedulePosition>(coordinator, input).await
        }
        RecordKind::CrewSchedule => upload_file::<CrewSchedule>(coordinator, input).await,
        RecordKind::CrewSchedulePosition => {
            upload_file::<CrewSchedulePosition>(coordinator, input).await
        }
    }
}

async fn upload_file<R: Record + DeserializeOwned>(
    coordinator: &ExportCoordinator,
    input: &Path,
) -> Result<Option<UploadReceipt>> {
    let records: Vec<R> = read_records(input)?;
    coordinator.upload(&records).await
}
