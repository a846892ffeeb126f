//! External system integrations.
//!
//! - [`transport`] - The [`Transport`] trait the exporter delivers through
//! - [`sftp`] - SFTP implementation over SSH
//!
//! The exporter only depends on the trait, so tests substitute an in-memory
//! transport for the SFTP one.
//!
//! ```rust,no_run
//! use oceo_sftp::adapters::{SftpTransport, Transport};
//! use oceo_sftp::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("oceo.toml")?;
//! let transport = SftpTransport::new(&config.sftp)?;
//! transport.deliver("./data/acme_crew_1700000000.csv", b"Context ID\n").await?;
//! # Ok(())
//! # }
//! ```

pub mod sftp;
pub mod transport;

pub use sftp::SftpTransport;
pub use transport::Transport;
