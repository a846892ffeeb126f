//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the configuration file. Secrets are never printed.

use crate::config::{load_config, OceoConfig};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateConfigArgs {}

impl ValidateConfigArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                print_summary(&config);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}

fn auth_method(config: &OceoConfig) -> &'static str {
    if config.sftp.private_key.is_some() {
        "private key (inline)"
    } else if config.sftp.private_key_path.is_some() {
        "private key (file)"
    } else {
        "password"
    }
}

fn print_summary(config: &OceoConfig) {
    println!("Configuration Summary:");
    println!("  Log Level: {}", config.application.log_level);
    println!("  Dry Run: {}", config.application.dry_run);
    println!("  Organization: {}", config.sftp.org_name);
    println!("  SFTP Server: {}", config.sftp.address());
    println!("  Username: {}", config.sftp.username);
    println!("  Authentication: {}", auth_method(config));
    if let Some(path) = &config.sftp.private_key_path {
        println!("  Private Key Path: {path}");
    }
    println!("  Remote Directory: {}", config.sftp.remote_dir);
    println!("  Timeout: {}s", config.sftp.timeout_seconds);
    match &config.sftp.host_key_fingerprint {
        Some(fingerprint) => println!("  Host Key: {fingerprint}"),
        None => println!("  Host Key: not verified"),
    }
    println!("  File Logging: {}", config.logging.local_enabled);
    println!();
}
