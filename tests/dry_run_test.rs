//! Integration tests for dry-run mode
//!
//! A dry run validates and serializes exactly like a real upload but never
//! reaches the transport.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use oceo_sftp::adapters::Transport;
use oceo_sftp::config::parse_config;
use oceo_sftp::core::export::{ExportCoordinator, ExportSettings};
use oceo_sftp::domain::{Crew, OceoError, TransportError, Vessel};
use std::sync::Arc;

/// Fails the test if anything tries to deliver
struct UnreachableTransport;

#[async_trait]
impl Transport for UnreachableTransport {
    async fn deliver(&self, remote_path: &str, _contents: &[u8]) -> Result<(), TransportError> {
        panic!("transport called during dry run for {remote_path}");
    }

    fn endpoint(&self) -> String {
        "unreachable".to_string()
    }
}

fn dry_run_coordinator() -> ExportCoordinator {
    let settings = ExportSettings {
        org_name: "acme".to_string(),
        remote_dir: "./data".to_string(),
        dry_run: true,
    };
    ExportCoordinator::new(settings, Arc::new(UnreachableTransport))
}

#[test]
fn test_settings_dry_run_from_config() {
    let config = parse_config(
        r#"
[application]
dry_run = true

[sftp]
org_name = "acme"
host = "sftp.example.com"
username = "acme"
password = "pass"
"#,
    )
    .unwrap();

    let settings = ExportSettings::from_config(&config);
    assert!(settings.dry_run);
    assert_eq!(settings.org_name, "acme");
    assert_eq!(settings.remote_dir, "./data");
}

#[test]
fn test_settings_dry_run_default() {
    let config = parse_config(
        r#"
[sftp]
org_name = "acme"
host = "sftp.example.com"
username = "acme"
password = "pass"
"#,
    )
    .unwrap();

    assert!(!ExportSettings::from_config(&config).dry_run);
}

#[tokio::test]
async fn test_dry_run_returns_receipt() {
    let coordinator = dry_run_coordinator();
    let vessels = vec![
        Vessel::new("ctx", "v-1", "imo-1", "Northern Star"),
        Vessel::new("ctx", "v-2", "imo-2", "Southern Cross"),
    ];

    let receipt = coordinator
        .upload_at(&vessels, Utc.timestamp_opt(1_700_000_000, 0).unwrap())
        .await
        .unwrap()
        .unwrap();

    assert!(receipt.dry_run);
    assert_eq!(receipt.record_count, 2);
    assert_eq!(receipt.remote_path, "./data/acme_vessels_1700000000.csv");
    assert!(receipt.bytes > 0);
}

#[tokio::test]
async fn test_dry_run_still_validates() {
    let coordinator = dry_run_coordinator();
    let crew = vec![Crew::new("ctx", "c-1", "Ada", "")];

    let err = coordinator.upload_crew(&crew).await.unwrap_err();
    match err {
        OceoError::Validation(e) => assert_eq!(e.field(), Some("last_name")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_dry_run_empty_batch() {
    let coordinator = dry_run_coordinator();
    assert!(coordinator.upload_crew(&[]).await.unwrap().is_none());
}
