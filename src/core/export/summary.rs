//! Upload receipts
//!
//! A receipt describes one completed (or dry-run) upload.

use crate::domain::RecordKind;
use std::time::Duration;

/// Result of a single upload call that had records to send
#[derive(Debug, Clone, PartialEq)]
pub struct UploadReceipt {
    /// Kind of the uploaded records
    pub kind: RecordKind,

    /// File name on the server
    pub file_name: String,

    /// Full remote path written to
    pub remote_path: String,

    /// Number of records (CSV data rows)
    pub record_count: usize,

    /// Size of the CSV payload in bytes
    pub bytes: usize,

    /// True when the transport was skipped
    pub dry_run: bool,

    /// Time spent validating, serializing and delivering
    pub duration: Duration,
}

impl UploadReceipt {
    /// Log the receipt
    pub fn log_receipt(&self) {
        tracing::info!(
            kind = %self.kind,
            remote_path = %self.remote_path,
            record_count = self.record_count,
            bytes = self.bytes,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis(),
            "Upload receipt"
        );
    }
}
