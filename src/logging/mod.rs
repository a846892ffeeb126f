//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - JSON-formatted local file logging with rotation
//! - Logging macros for the upload lifecycle
//!
//! # Example
//!
//! ```no_run
//! use oceo_sftp::logging::init_logging;
//! use oceo_sftp::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an upload
///
/// # Example
///
/// ```no_run
/// use oceo_sftp::log_upload_start;
/// use oceo_sftp::domain::RecordKind;
///
/// log_upload_start!(RecordKind::Crew, 42);
/// ```
#[macro_export]
macro_rules! log_upload_start {
    ($kind:expr, $count:expr) => {
        tracing::info!(
            kind = %$kind,
            record_count = $count,
            "Starting upload"
        );
    };
}

/// Log the completion of an upload
///
/// # Example
///
/// ```no_run
/// use oceo_sftp::log_upload_complete;
/// use std::time::Duration;
///
/// log_upload_complete!("./data/acme_crew_1700000000.csv", 2048, Duration::from_millis(350));
/// ```
#[macro_export]
macro_rules! log_upload_complete {
    ($remote_path:expr, $bytes:expr, $duration:expr) => {
        tracing::info!(
            remote_path = %$remote_path,
            bytes = $bytes,
            duration_ms = $duration.as_millis(),
            "Upload completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use oceo_sftp::log_error_with_context;
/// use oceo_sftp::domain::OceoError;
///
/// let error = OceoError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
