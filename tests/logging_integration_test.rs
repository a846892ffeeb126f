//! Integration tests for logging functionality

use oceo_sftp::config::LoggingConfig;
use oceo_sftp::domain::{OceoError, RecordKind};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_init_logging_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };
    assert!(!log_path.exists());

    // Only one subscriber can be installed per process; this is the only
    // test in this binary that installs one.
    let guard = oceo_sftp::logging::init_logging("debug", &config).unwrap();
    assert!(log_path.exists());

    tracing::info!("written to the file layer");
    drop(guard);
}

#[test]
fn test_init_logging_rejects_bad_level() {
    let config = LoggingConfig::default();
    let err = oceo_sftp::logging::init_logging("loud", &config).err().unwrap();
    assert!(matches!(err, OceoError::Configuration(_)));
}

#[test]
fn test_logging_macros_usage() {
    // The macros expand to plain tracing events and work without a subscriber
    oceo_sftp::log_upload_start!(RecordKind::Crew, 3);
    oceo_sftp::log_upload_complete!(
        "./data/acme_crew_1700000000.csv",
        128,
        Duration::from_millis(20)
    );

    let error = OceoError::Io("boom".to_string());
    oceo_sftp::log_error_with_context!(&error, "testing macros");
}
