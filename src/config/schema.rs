//! Configuration schema types
//!
//! This module defines the configuration structure that maps to `oceo.toml`.

use crate::config::SecretString;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Main exporter configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OceoConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// SFTP destination and credentials
    pub sftp: SftpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl OceoConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.sftp.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (validate and serialize, but don't upload)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// SFTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SftpConfig {
    /// Organization name, used as the prefix of every uploaded file name
    pub org_name: String,

    /// SFTP server host name or address
    pub host: String,

    /// SFTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// User to authenticate as
    pub username: String,

    /// Inline private key (OpenSSH or PEM format)
    #[serde(default)]
    pub private_key: Option<SecretString>,

    /// Path to a private key file
    #[serde(default)]
    pub private_key_path: Option<String>,

    /// Passphrase for an encrypted private key
    #[serde(default)]
    pub private_key_passphrase: Option<SecretString>,

    /// Password, used when no private key is configured
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Remote directory uploaded files are written to
    #[serde(default = "default_remote_dir")]
    pub remote_dir: String,

    /// SSH session inactivity timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Expected server host key fingerprint (`SHA256:...`)
    ///
    /// When unset any host key is accepted.
    #[serde(default)]
    pub host_key_fingerprint: Option<String>,
}

impl SftpConfig {
    fn validate(&self) -> Result<(), String> {
        if self.org_name.trim().is_empty() {
            return Err("sftp.org_name cannot be empty".to_string());
        }

        if self.org_name.contains('/') {
            return Err("sftp.org_name cannot contain '/'".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("sftp.host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("sftp.port must be > 0".to_string());
        }

        if self.username.trim().is_empty() {
            return Err("sftp.username cannot be empty".to_string());
        }

        let has_inline_key = self
            .private_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty());
        let has_key_path = self
            .private_key_path
            .as_ref()
            .is_some_and(|path| !path.trim().is_empty());
        let has_password = self
            .password
            .as_ref()
            .is_some_and(|password| !password.expose_secret().is_empty());

        if has_inline_key && has_key_path {
            return Err(
                "sftp.private_key and sftp.private_key_path are mutually exclusive".to_string(),
            );
        }

        if !has_inline_key && !has_key_path && !has_password {
            return Err(
                "sftp requires one of private_key, private_key_path or password".to_string(),
            );
        }

        if self.remote_dir.trim().is_empty() {
            return Err("sftp.remote_dir cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("sftp.timeout_seconds must be > 0".to_string());
        }

        if let Some(fingerprint) = &self.host_key_fingerprint {
            if !fingerprint.starts_with("SHA256:") {
                return Err(format!(
                    "Invalid sftp.host_key_fingerprint '{fingerprint}'. Must start with SHA256:"
                ));
            }
        }

        Ok(())
    }

    /// Returns `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_port() -> u16 {
    22
}

fn default_remote_dir() -> String {
    "./data".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
