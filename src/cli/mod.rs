//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the exporter using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// OCEO SFTP - upload crew and vessel records as CSV files
#[derive(Parser, Debug)]
#[command(name = "oceo-sftp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "oceo.toml", env = "OCEO_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "OCEO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a JSON file of records as one CSV file
    Upload(commands::upload::UploadArgs),

    /// Validate a JSON file of records without uploading
    Validate(commands::validate::ValidateArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate_config::ValidateConfigArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordKind;

    #[test]
    fn test_cli_parse_upload() {
        let cli = Cli::parse_from([
            "oceo-sftp",
            "upload",
            "--kind",
            "credentials",
            "--input",
            "creds.json",
        ]);
        assert_eq!(cli.config, "oceo.toml");
        match cli.command {
            Commands::Upload(args) => {
                assert_eq!(args.kind, RecordKind::CrewCredential);
                assert_eq!(args.input.to_str(), Some("creds.json"));
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_upload_dry_run() {
        let cli = Cli::parse_from([
            "oceo-sftp",
            "upload",
            "-k",
            "crew_schedule_position",
            "-i",
            "positions.json",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Upload(args) => {
                assert_eq!(args.kind, RecordKind::CrewSchedulePosition);
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_kind() {
        let result = Cli::try_parse_from([
            "oceo-sftp",
            "validate",
            "--kind",
            "cargo",
            "--input",
            "x.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["oceo-sftp", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["oceo-sftp", "--log-level", "debug", "init"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
