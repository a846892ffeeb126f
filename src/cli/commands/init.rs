//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "oceo.toml")]
    pub output: String,

    /// Include comments explaining every option
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing OCEO SFTP configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your organization and server", self.output);
                println!("  2. Create a .env file with OCEO_SFTP_PASSWORD or OCEO_KEY_PASSPHRASE");
                println!("  3. Validate configuration: oceo-sftp validate-config");
                println!("  4. Check a file: oceo-sftp validate --kind crew --input crew.json");
                println!("  5. Upload: oceo-sftp upload --kind crew --input crew.json");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# OCEO SFTP Configuration File

[application]
log_level = "info"
dry_run = false

[sftp]
org_name = "acme"
host = "sftp.oceo.example.com"
port = 22
username = "acme"
private_key_path = "/etc/oceo/id_ed25519"
# private_key_passphrase = "${OCEO_KEY_PASSPHRASE}"
remote_dir = "./data"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with comments
    fn generate_config_with_examples() -> String {
        r#"# OCEO SFTP Configuration File
#
# Values of the form ${VAR_NAME} are replaced with environment variables.
# Any key can also be overridden with OCEO_<SECTION>_<KEY>, for example
# OCEO_SFTP_HOST or OCEO_APPLICATION_DRY_RUN.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (validate and serialize, never connect)
dry_run = false

# ============================================================================
# SFTP Server
# ============================================================================
[sftp]
# Organization name, used as the prefix of every uploaded file:
# {org_name}_{kind}_{unix_seconds}.csv
org_name = "acme"

# Server address
host = "sftp.oceo.example.com"
port = 22

# User to authenticate as
username = "acme"

# Authentication: configure ONE private key source, or a password.
# Inline keys and passphrases should come from the environment.
private_key_path = "/etc/oceo/id_ed25519"
# private_key = "${OCEO_SFTP_PRIVATE_KEY}"
# private_key_passphrase = "${OCEO_KEY_PASSPHRASE}"
# password = "${OCEO_SFTP_PASSWORD}"

# Directory on the server uploaded files are written to
remote_dir = "./data"

# SSH inactivity timeout in seconds
timeout_seconds = 30

# Expected server host key fingerprint. When unset any host key is accepted.
# host_key_fingerprint = "SHA256:..."

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable JSON file logging alongside the console
local_enabled = false

# Log directory
local_path = "./logs"

# Log rotation (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}
