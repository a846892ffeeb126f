//! Domain error types
//!
//! This module defines the error hierarchy for the exporter. Validation,
//! serialization and transport failures each have their own variant so callers
//! can tell which stage of an upload failed. Third-party error types are
//! converted to strings and never exposed.

use super::kind::RecordKind;
use thiserror::Error;

/// Main exporter error type
///
/// This is the primary error type used throughout the crate.
#[derive(Debug, Error)]
pub enum OceoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A record failed validation; the whole batch was rejected
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Records could not be converted to CSV
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The SFTP transport failed at some stage
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Record validation errors
///
/// Only the first problem found is reported, never an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty
    #[error("{kind} record is missing required field '{field}'")]
    FieldMissing {
        /// Kind of the offending record
        kind: RecordKind,
        /// Name of the first missing field
        field: &'static str,
    },

    /// Seatime has neither a crewed-on/off pair nor a positive day count
    #[error("{kind} record requires both crewed_on_at and crewed_off_at, or days greater than zero")]
    SeatimeDuration {
        /// Kind of the offending record
        kind: RecordKind,
    },

    /// The record itself is absent
    #[error("{kind} record is missing")]
    MissingRecord {
        /// Kind of the expected record
        kind: RecordKind,
    },
}

impl ValidationError {
    /// Returns the record kind the error refers to
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::FieldMissing { kind, .. }
            | Self::SeatimeDuration { kind }
            | Self::MissingRecord { kind } => *kind,
        }
    }

    /// Returns the missing field name, if the error is about a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::FieldMissing { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// SFTP transport errors
///
/// Each variant names the stage of the delivery that failed.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The private key could not be read or decoded
    #[error("Failed to read private key: {0}")]
    Key(String),

    /// TCP connect or SSH handshake failed
    #[error("Failed to dial SFTP server: {0}")]
    Dial(String),

    /// The server rejected the credentials
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The SFTP subsystem could not be started
    #[error("Failed to create SFTP client: {0}")]
    ClientInit(String),

    /// The remote file could not be created
    #[error("Failed to create remote file {path}: {message}")]
    CreateRemoteFile {
        /// Remote path that was being created
        path: String,
        /// Underlying error message
        message: String,
    },

    /// Writing the payload to the remote file failed
    #[error("Failed to copy data to remote file {path}: {message}")]
    Write {
        /// Remote path that was being written
        path: String,
        /// Underlying error message
        message: String,
    },
}

impl TransportError {
    /// Short name of the failed stage, used as a structured log field
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Key(_) => "key",
            Self::Dial(_) => "dial",
            Self::Authentication(_) => "authentication",
            Self::ClientInit(_) => "client_init",
            Self::CreateRemoteFile { .. } => "create_remote_file",
            Self::Write { .. } => "write",
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for OceoError {
    fn from(err: std::io::Error) -> Self {
        OceoError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for OceoError {
    fn from(err: serde_json::Error) -> Self {
        OceoError::Serialization(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for OceoError {
    fn from(err: csv::Error) -> Self {
        OceoError::Serialization(format!("CSV error: {err}"))
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for OceoError {
    fn from(err: toml::de::Error) -> Self {
        OceoError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oceo_error_display() {
        let err = OceoError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_field_missing_display() {
        let err = ValidationError::FieldMissing {
            kind: RecordKind::Crew,
            field: "first_name",
        };
        assert_eq!(
            err.to_string(),
            "Crew record is missing required field 'first_name'"
        );
        assert_eq!(err.field(), Some("first_name"));
        assert_eq!(err.kind(), RecordKind::Crew);
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: OceoError = ValidationError::MissingRecord {
            kind: RecordKind::Vessel,
        }
        .into();
        assert!(matches!(err, OceoError::Validation(_)));
        assert!(err.to_string().contains("Vessel record is missing"));
    }

    #[test]
    fn test_transport_error_conversion() {
        let err: OceoError = TransportError::Dial("connection refused".to_string()).into();
        assert!(matches!(err, OceoError::Transport(TransportError::Dial(_))));
        assert_eq!(
            err.to_string(),
            "Transport error: Failed to dial SFTP server: connection refused"
        );
    }

    #[test]
    fn test_transport_error_stage() {
        let err = TransportError::Write {
            path: "./data/acme_crew_1.csv".to_string(),
            message: "broken pipe".to_string(),
        };
        assert_eq!(err.stage(), "write");
        assert!(err.to_string().contains("./data/acme_crew_1.csv"));
        assert_eq!(TransportError::Key("bad".into()).stage(), "key");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: OceoError = io_err.into();
        assert!(matches!(err, OceoError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: OceoError = json_err.into();
        assert!(matches!(err, OceoError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: OceoError = toml_err.into();
        assert!(matches!(err, OceoError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_oceo_error_implements_std_error() {
        let err = OceoError::Io("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
