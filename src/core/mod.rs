//! Core upload logic.
//!
//! # Upload Workflow
//!
//! 1. **Validate**: every record is checked; the first missing field aborts the call
//! 2. **Serialize**: the batch becomes one CSV file with a labelled header row
//! 3. **Name**: `{org}_{tag}_{unix_seconds}.csv` inside the remote directory
//! 4. **Deliver**: the payload is written through the [`Transport`](crate::adapters::Transport)
//! 5. **Report**: an [`UploadReceipt`](export::UploadReceipt) is logged and returned
//!
//! # Example
//!
//! ```rust,no_run
//! use oceo_sftp::config::load_config;
//! use oceo_sftp::core::export::ExportCoordinator;
//! use oceo_sftp::domain::Crew;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("oceo.toml")?;
//! let coordinator = ExportCoordinator::from_config(&config)?;
//!
//! let crew = vec![Crew::new("ctx-1", "crew-1", "Ada", "Lovelace")];
//! if let Some(receipt) = coordinator.upload_crew(&crew).await? {
//!     println!("Wrote {} bytes to {}", receipt.bytes, receipt.remote_path);
//! }
//! # Ok(())
//! # }
//! ```

pub mod export;
