//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::OceoConfig;
use super::secret::secret_string;
use crate::domain::errors::OceoError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`OceoConfig`]
/// 4. Applies environment variable overrides (`OCEO_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`OceoError::Configuration`] if the file is missing or unreadable,
/// a referenced environment variable is unset, the TOML is malformed, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use oceo_sftp::config::load_config;
///
/// let config = load_config("oceo.toml").expect("Failed to load config");
/// println!("Uploading to {}", config.sftp.address());
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<OceoConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(OceoError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        OceoError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut config = parse_config(&contents)?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        OceoError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Parses configuration text after `${VAR}` substitution, without env
/// overrides or validation
pub fn parse_config(contents: &str) -> Result<OceoConfig> {
    let contents = substitute_env_vars(contents)?;
    toml::from_str(&contents)
        .map_err(|e| OceoError::Configuration(format!("Failed to parse TOML: {e}")))
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are copied unchanged. All missing variables are reported in
/// one error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| OceoError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(OceoError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `OCEO_*` prefix
///
/// Variables follow the pattern `OCEO_<SECTION>_<KEY>`, for example
/// `OCEO_SFTP_HOST` or `OCEO_APPLICATION_DRY_RUN`. Unparseable numeric values
/// are ignored.
fn apply_env_overrides(config: &mut OceoConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("OCEO_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("OCEO_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // SFTP overrides
    if let Ok(val) = std::env::var("OCEO_SFTP_ORG_NAME") {
        config.sftp.org_name = val;
    }
    if let Ok(val) = std::env::var("OCEO_SFTP_HOST") {
        config.sftp.host = val;
    }
    if let Ok(val) = std::env::var("OCEO_SFTP_PORT") {
        if let Ok(port) = val.parse() {
            config.sftp.port = port;
        }
    }
    if let Ok(val) = std::env::var("OCEO_SFTP_USERNAME") {
        config.sftp.username = val;
    }
    if let Ok(val) = std::env::var("OCEO_SFTP_PASSWORD") {
        config.sftp.password = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("OCEO_SFTP_PRIVATE_KEY") {
        config.sftp.private_key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("OCEO_SFTP_PRIVATE_KEY_PATH") {
        config.sftp.private_key_path = Some(val);
    }
    if let Ok(val) = std::env::var("OCEO_SFTP_PRIVATE_KEY_PASSPHRASE") {
        config.sftp.private_key_passphrase = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("OCEO_SFTP_REMOTE_DIR") {
        config.sftp.remote_dir = val;
    }
    if let Ok(val) = std::env::var("OCEO_SFTP_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.sftp.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("OCEO_SFTP_HOST_KEY_FINGERPRINT") {
        config.sftp.host_key_fingerprint = Some(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("OCEO_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("OCEO_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("OCEO_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
