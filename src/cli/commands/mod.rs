//! CLI command implementations
//!
//! Each command returns a process exit code:
//! 0 success, 1 validation failure, 2 configuration error,
//! 3 transport failure, 5 anything else.

pub mod init;
pub mod input;
pub mod upload;
pub mod validate;
pub mod validate_config;

use crate::domain::OceoError;

/// Maps an error to the process exit code reported for it
pub fn exit_code(error: &OceoError) -> i32 {
    match error {
        OceoError::Validation(_) => 1,
        OceoError::Configuration(_) => 2,
        OceoError::Transport(_) => 3,
        OceoError::Serialization(_) | OceoError::Io(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordKind, TransportError, ValidationError};

    #[test]
    fn test_exit_codes() {
        let validation = OceoError::Validation(ValidationError::MissingRecord {
            kind: RecordKind::Crew,
        });
        assert_eq!(exit_code(&validation), 1);
        assert_eq!(exit_code(&OceoError::Configuration("x".to_string())), 2);
        assert_eq!(
            exit_code(&OceoError::Transport(TransportError::Dial("x".to_string()))),
            3
        );
        assert_eq!(exit_code(&OceoError::Io("x".to_string())), 5);
        assert_eq!(exit_code(&OceoError::Serialization("x".to_string())), 5);
    }
}
