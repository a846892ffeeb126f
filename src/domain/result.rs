//! Result type alias for the exporter
//!
//! This module provides a convenient Result type alias that uses `OceoError`
//! as the error type.

use super::errors::OceoError;

/// Result type alias for exporter operations
///
/// # Examples
///
/// ```
/// use oceo_sftp::domain::result::Result;
/// use oceo_sftp::domain::errors::OceoError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(OceoError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, OceoError>;
