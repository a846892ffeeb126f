// OCEO SFTP - CSV export client for crew and vessel records
// Copyright (c) 2025 OCEO SFTP Contributors
// Licensed under the MIT License

//! # OCEO SFTP - crew and vessel data export
//!
//! A client that validates crew and vessel records, serializes each batch to
//! a CSV file and writes it to an OCEO SFTP server.
//!
//! ## Overview
//!
//! This library provides:
//! - **Records** for crew, credentials, seatime, vessels and schedules
//! - **Validation** of required fields, reporting the first one missing
//! - **Serialization** of a batch to CSV with labelled columns
//! - **Delivery** of the file over SFTP as `{org}_{kind}_{unix_seconds}.csv`
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The upload pipeline (validate, serialize, name, deliver)
//! - [`adapters`] - The transport trait and its SFTP implementation
//! - [`domain`] - Record types, validation and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oceo_sftp::config::load_config;
//! use oceo_sftp::core::export::ExportCoordinator;
//! use oceo_sftp::domain::Vessel;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("oceo.toml")?;
//!     let coordinator = ExportCoordinator::from_config(&config)?;
//!
//!     let vessels = vec![Vessel::new("ctx-1", "v-1", "imo-9000001", "Northern Star")];
//!     if let Some(receipt) = coordinator.upload_vessels(&vessels).await? {
//!         println!("Uploaded {} vessels to {}", receipt.record_count, receipt.remote_path);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Validation
//!
//! A batch is only sent if every record is valid. The first missing required
//! field is reported and nothing is uploaded:
//!
//! ```rust
//! use oceo_sftp::domain::{Crew, Record};
//!
//! let crew = Crew::new("ctx-1", "crew-1", "", "Lovelace");
//! let err = crew.validate().unwrap_err();
//! assert_eq!(err.field(), Some("first_name"));
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::OceoError`] through the
//! [`domain::Result`] alias. Transport failures carry the stage that failed:
//!
//! ```rust,no_run
//! use oceo_sftp::domain::OceoError;
//!
//! # async fn example(coordinator: oceo_sftp::core::export::ExportCoordinator) {
//! match coordinator.upload_crew(&[]).await {
//!     Ok(_) => {}
//!     Err(OceoError::Transport(e)) => eprintln!("failed at {}: {e}", e.stage()),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
