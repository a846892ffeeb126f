//! Transport abstraction
//!
//! The exporter hands a finished CSV payload to a [`Transport`] and never
//! deals with connections itself. Every call is independent: implementations
//! open, write and close within one `deliver`.

use crate::domain::TransportError;
use async_trait::async_trait;

/// Delivers a payload to a path on a remote server
#[async_trait]
pub trait Transport: Send + Sync {
    /// Create or overwrite `remote_path` with `contents`
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] naming the stage that failed. Nothing is
    /// retried.
    async fn deliver(&self, remote_path: &str, contents: &[u8]) -> Result<(), TransportError>;

    /// Human readable destination, used in log fields
    fn endpoint(&self) -> String;
}
