//! SSH authentication material
//!
//! Private keys are decoded once when the transport is built, so a bad key is
//! reported before any upload is attempted.

use crate::config::{SecretString, SftpConfig};
use crate::domain::TransportError;
use russh::keys::{decode_secret_key, PrivateKey};
use secrecy::ExposeSecret;
use std::fmt;
use std::sync::Arc;

/// How the client proves its identity to the server
#[derive(Clone)]
pub enum AuthMethod {
    /// Public key authentication with a decoded private key
    PublicKey(Arc<PrivateKey>),
    /// Password authentication
    Password(SecretString),
}

impl AuthMethod {
    /// Builds the auth method from configuration
    ///
    /// An inline key or key file wins over a password.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Key`] when the key file cannot be read or the
    /// key cannot be decoded, and [`TransportError::Authentication`] when no
    /// credentials are configured.
    pub fn from_config(config: &SftpConfig) -> Result<Self, TransportError> {
        let passphrase = config
            .private_key_passphrase
            .as_ref()
            .map(|p| p.expose_secret().as_str().to_string());

        if let Some(key) = config
            .private_key
            .as_ref()
            .filter(|key| !key.expose_secret().is_empty())
        {
            return Self::decode(key.expose_secret().as_str(), passphrase.as_deref());
        }

        if let Some(path) = config
            .private_key_path
            .as_ref()
            .filter(|path| !path.trim().is_empty())
        {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| TransportError::Key(format!("{path}: {e}")))?;
            return Self::decode(&contents, passphrase.as_deref());
        }

        match &config.password {
            Some(password) => Ok(AuthMethod::Password(password.clone())),
            None => Err(TransportError::Authentication(
                "no private key or password configured".to_string(),
            )),
        }
    }

    fn decode(key: &str, passphrase: Option<&str>) -> Result<Self, TransportError> {
        let key =
            decode_secret_key(key, passphrase).map_err(|e| TransportError::Key(e.to_string()))?;
        Ok(AuthMethod::PublicKey(Arc::new(key)))
    }

    /// Short name of the method, used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            AuthMethod::PublicKey(_) => "publickey",
            AuthMethod::Password(_) => "password",
        }
    }
}

impl fmt::Debug for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthMethod({}, [REDACTED])", self.name())
    }
}
