//! Configuration management for the exporter.
//!
//! Configuration lives in a TOML file (`oceo.toml` by default) with support
//! for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `OCEO_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! The loaded [`OceoConfig`] is immutable input to the exporter; nothing in
//! the library reads configuration from global state.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [sftp]
//! org_name = "acme"
//! host = "sftp.oceo.example.com"
//! port = 22
//! username = "acme"
//! private_key_path = "/etc/oceo/id_ed25519"
//! private_key_passphrase = "${OCEO_KEY_PASSPHRASE}"
//! remote_dir = "./data"
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{ApplicationConfig, LoggingConfig, OceoConfig, SftpConfig};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
