//! Upload coordination
//!
//! The [`ExportCoordinator`] runs one generic pipeline for every record kind:
//! validate the whole batch, serialize it to CSV, name the file and deliver it.

use crate::adapters::{SftpTransport, Transport};
use crate::config::OceoConfig;
use crate::core::export::batch::validate_batch;
use crate::core::export::naming;
use crate::core::export::summary::UploadReceipt;
use crate::core::export::writer::to_csv;
use crate::domain::{
    Crew, CrewCredential, CrewSchedule, CrewSchedulePosition, CrewSeatime, Record, Result,
    Vessel, VesselSchedule, VesselSchedulePosition,
};
use crate::{log_error_with_context, log_upload_complete, log_upload_start};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

/// Settings the coordinator needs from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Organization name, prefix of every file name
    pub org_name: String,

    /// Remote directory files are written to
    pub remote_dir: String,

    /// Validate and serialize only
    pub dry_run: bool,
}

impl ExportSettings {
    /// Extracts export settings from configuration
    pub fn from_config(config: &OceoConfig) -> Self {
        Self {
            org_name: config.sftp.org_name.clone(),
            remote_dir: config.sftp.remote_dir.clone(),
            dry_run: config.application.dry_run,
        }
    }
}

/// Export coordinator
pub struct ExportCoordinator {
    settings: ExportSettings,
    transport: Arc<dyn Transport>,
}

impl ExportCoordinator {
    /// Create a coordinator that delivers through `transport`
    pub fn new(settings: ExportSettings, transport: Arc<dyn Transport>) -> Self {
        Self {
            settings,
            transport,
        }
    }

    /// Create a coordinator backed by an [`SftpTransport`]
    ///
    /// # Errors
    ///
    /// Returns an error if the configured private key cannot be loaded.
    pub fn from_config(config: &OceoConfig) -> Result<Self> {
        let transport = SftpTransport::new(&config.sftp)?;
        Ok(Self::new(
            ExportSettings::from_config(config),
            Arc::new(transport),
        ))
    }

    /// Settings in effect
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Upload a batch of records as one CSV file
    ///
    /// Returns `Ok(None)` without touching the transport when `records` is
    /// empty. Any invalid record aborts the call before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`OceoError::Validation`](crate::domain::OceoError::Validation)
    /// for the first invalid record, or
    /// [`OceoError::Transport`](crate::domain::OceoError::Transport) when
    /// delivery fails.
    pub async fn upload<R: Record>(&self, records: &[R]) -> Result<Option<UploadReceipt>> {
        self.upload_at(records, Utc::now()).await
    }

    /// Upload stamped with an explicit instant
    ///
    /// `at` supplies the unix seconds in the file name and the reference time
    /// for derived columns such as seatime's days worked.
    ///
    /// # Errors
    ///
    /// Same as [`ExportCoordinator::upload`].
    pub async fn upload_at<R: Record>(
        &self,
        records: &[R],
        at: DateTime<Utc>,
    ) -> Result<Option<UploadReceipt>> {
        if records.is_empty() {
            tracing::info!(kind = %R::KIND, "No records to upload");
            return Ok(None);
        }

        let start_time = Instant::now();
        log_upload_start!(R::KIND, records.len());

        validate_batch(records)?;
        let payload = to_csv(records, at)?;

        let file_name = naming::file_name(&self.settings.org_name, R::KIND, at.timestamp());
        let remote_path = naming::remote_path(&self.settings.remote_dir, &file_name);

        if self.settings.dry_run {
            tracing::info!(
                kind = %R::KIND,
                remote_path = %remote_path,
                bytes = payload.len(),
                "Dry run, skipping delivery"
            );
        } else {
            if let Err(e) = self.transport.deliver(&remote_path, &payload).await {
                tracing::error!(
                    stage = e.stage(),
                    endpoint = %self.transport.endpoint(),
                    remote_path = %remote_path,
                    "Delivery failed"
                );
                log_error_with_context!(&e, "Failed to deliver CSV file");
                return Err(e.into());
            }
            log_upload_complete!(&remote_path, payload.len(), start_time.elapsed());
        }

        let receipt = UploadReceipt {
            kind: R::KIND,
            file_name,
            remote_path,
            record_count: records.len(),
            bytes: payload.len(),
            dry_run: self.settings.dry_run,
            duration: start_time.elapsed(),
        };
        receipt.log_receipt();
        Ok(Some(receipt))
    }

    /// Upload crew members
    ///
    /// # Errors
    ///
    /// See [`ExportCoordinator::upload`].
    pub async fn upload_crew(&self, records: &[Crew]) -> Result<Option<UploadReceipt>> {
        self.upload(records).await
    }

    /// Upload crew credentials
    ///
    /// # Errors
    ///
    /// See [`ExportCoordinator::upload`].
    pub async fn upload_credentials(
        &self,
        records: &[CrewCredential],
    ) -> Result<Option<UploadReceipt>> {
        self.upload(records).await
    }

    /// Upload crew seatime entries
    ///
    /// # Errors
    ///
    /// See [`ExportCoordinator::upload`].
    pub async fn upload_seatime(&self, records: &[CrewSeatime]) -> Result<Option<UploadReceipt>> {
        self.upload(records).await
    }

    /// Upload vessels
    ///
    /// # Errors
    ///
    /// See [`ExportCoordinator::upload`].
    pub async fn upload_vessels(&self, records: &[Vessel]) -> Result<Option<UploadReceipt>> {
        self.upload(records).await
    }

    /// Upload vessel schedules
    ///
    /// # Errors
    ///
    /// See [`ExportCoordinator::upload`].
    pub async fn upload_vessel_schedules(
        &self,
        records: &[VesselSchedule],
    ) -> Result<Option<UploadReceipt>> {
        self.upload(records).await
    }

    /// Upload vessel schedule positions
    ///
    /// # Errors
    ///
    /// See [`ExportCoordinator::upload`].
    pub async fn upload_vessel_schedule_positions(
        &self,
        records: &[VesselSchedulePosition],
    ) -> Result<Option<UploadReceipt>> {
        self.upload(records).await
    }

    /// Upload crew schedules
    ///
    /// # Errors
    ///
    /// See [`ExportCoordinator::upload`].
    pub async fn upload_crew_schedules(
        &self,
        records: &[CrewSchedule],
    ) -> Result<Option<UploadReceipt>> {
        self.upload(records).await
    }

    /// Upload crew schedule positions
    ///
    /// # Errors
    ///
    /// See [`ExportCoordinator::upload`].
    pub async fn upload_crew_schedule_positions(
        &self,
        records: &[CrewSchedulePosition],
    ) -> Result<Option<UploadReceipt>> {
        self.upload(records).await
    }
}
