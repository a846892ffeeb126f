//! SFTP transport built on russh and russh-sftp
//!
//! Each [`SftpTransport::deliver`] call dials the server, authenticates,
//! starts the `sftp` subsystem, writes one file and disconnects. Failures are
//! tagged with the stage they happened in.

use crate::adapters::sftp::auth::AuthMethod;
use crate::adapters::transport::Transport;
use crate::config::SftpConfig;
use crate::domain::TransportError;
use async_trait::async_trait;
use russh::client::{self, Handle};
use russh::keys::{HashAlg, PrivateKeyWithHashAlg, PublicKey};
use russh::Disconnect;
use russh_sftp::client::SftpSession;
use secrecy::ExposeSecret;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

/// SSH client handler that applies the host key policy
pub(crate) struct HostKeyPolicy {
    expected_fingerprint: Option<String>,
}

impl HostKeyPolicy {
    pub(crate) fn new(expected_fingerprint: Option<String>) -> Self {
        Self {
            expected_fingerprint,
        }
    }

    /// Returns true when a server presenting `fingerprint` may be trusted
    pub(crate) fn accepts(&self, fingerprint: &str) -> bool {
        match &self.expected_fingerprint {
            Some(expected) => expected == fingerprint,
            None => true,
        }
    }
}

impl client::Handler for HostKeyPolicy {
    type Error = russh::Error;

    async fn check_server_key(
        &mut self,
        server_public_key: &PublicKey,
    ) -> Result<bool, Self::Error> {
        let fingerprint = server_public_key.fingerprint(HashAlg::Sha256).to_string();

        if self.expected_fingerprint.is_none() {
            tracing::warn!(
                fingerprint = %fingerprint,
                "No host_key_fingerprint configured, accepting server key without verification"
            );
        }

        let accepted = self.accepts(&fingerprint);
        if !accepted {
            tracing::error!(
                fingerprint = %fingerprint,
                expected = ?self.expected_fingerprint,
                "Server host key does not match configured fingerprint"
            );
        }
        Ok(accepted)
    }
}

/// Transport that writes files to an SFTP server
#[derive(Debug)]
pub struct SftpTransport {
    host: String,
    port: u16,
    username: String,
    auth: AuthMethod,
    timeout: Duration,
    host_key_fingerprint: Option<String>,
}

impl SftpTransport {
    /// Creates a transport from configuration
    ///
    /// Key material is decoded here, no connection is opened.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Key`] for an unreadable or undecodable key.
    pub fn new(config: &SftpConfig) -> Result<Self, TransportError> {
        let auth = AuthMethod::from_config(config)?;

        tracing::debug!(
            host = %config.host,
            port = config.port,
            username = %config.username,
            auth = auth.name(),
            "Created SFTP transport"
        );

        Ok(Self {
            host: config.host.clone(),
            port: config.port,
            username: config.username.clone(),
            auth,
            timeout: Duration::from_secs(config.timeout_seconds),
            host_key_fingerprint: config.host_key_fingerprint.clone(),
        })
    }

    async fn connect(&self) -> Result<Handle<HostKeyPolicy>, TransportError> {
        let ssh_config = Arc::new(client::Config {
            inactivity_timeout: Some(self.timeout),
            ..Default::default()
        });
        let handler = HostKeyPolicy::new(self.host_key_fingerprint.clone());

        let connect = client::connect(ssh_config, (self.host.as_str(), self.port), handler);
        match tokio::time::timeout(self.timeout, connect).await {
            Ok(Ok(session)) => Ok(session),
            Ok(Err(e)) => Err(TransportError::Dial(e.to_string())),
            Err(_) => Err(TransportError::Dial(format!(
                "timed out after {}s connecting to {}",
                self.timeout.as_secs(),
                self.endpoint()
            ))),
        }
    }

    async fn authenticate(&self, session: &mut Handle<HostKeyPolicy>) -> Result<(), TransportError> {
        let result = match &self.auth {
            AuthMethod::PublicKey(key) => {
                let hash_alg = session
                    .best_supported_rsa_hash()
                    .await
                    .map_err(|e| TransportError::Authentication(e.to_string()))?
                    .flatten();
                session
                    .authenticate_publickey(
                        self.username.as_str(),
                        PrivateKeyWithHashAlg::new(Arc::clone(key), hash_alg),
                    )
                    .await
            }
            AuthMethod::Password(password) => {
                session
                    .authenticate_password(
                        self.username.as_str(),
                        password.expose_secret().as_str(),
                    )
                    .await
            }
        }
        .map_err(|e| TransportError::Authentication(e.to_string()))?;

        if !result.success() {
            return Err(TransportError::Authentication(format!(
                "server rejected {} authentication for user '{}'",
                self.auth.name(),
                self.username
            )));
        }
        Ok(())
    }

    async fn open_sftp(&self, session: &Handle<HostKeyPolicy>) -> Result<SftpSession, TransportError> {
        let channel = session
            .channel_open_session()
            .await
            .map_err(|e| TransportError::ClientInit(e.to_string()))?;
        channel
            .request_subsystem(true, "sftp")
            .await
            .map_err(|e| TransportError::ClientInit(e.to_string()))?;
        SftpSession::new(channel.into_stream())
            .await
            .map_err(|e| TransportError::ClientInit(e.to_string()))
    }

    async fn write_file(
        sftp: &SftpSession,
        remote_path: &str,
        contents: &[u8],
    ) -> Result<(), TransportError> {
        let mut file =
            sftp.create(remote_path)
                .await
                .map_err(|e| TransportError::CreateRemoteFile {
                    path: remote_path.to_string(),
                    message: e.to_string(),
                })?;

        let write_error = |e: std::io::Error| TransportError::Write {
            path: remote_path.to_string(),
            message: e.to_string(),
        };
        file.write_all(contents).await.map_err(write_error)?;
        file.shutdown().await.map_err(write_error)?;
        Ok(())
    }
}

#[async_trait]
impl Transport for SftpTransport {
    async fn deliver(&self, remote_path: &str, contents: &[u8]) -> Result<(), TransportError> {
        let mut session = self.connect().await?;
        tracing::debug!(endpoint = %self.endpoint(), "Connected to SFTP server");

        let outcome = async {
            self.authenticate(&mut session).await?;
            let sftp = self.open_sftp(&session).await?;
            Self::write_file(&sftp, remote_path, contents).await
        }
        .await;

        if let Err(e) = session
            .disconnect(Disconnect::ByApplication, "", "English")
            .await
        {
            tracing::warn!(error = %e, "Failed to close SSH session cleanly");
        }

        if outcome.is_ok() {
            tracing::debug!(
                remote_path = %remote_path,
                bytes = contents.len(),
                "Wrote remote file"
            );
        }
        outcome
    }

    fn endpoint(&self) -> String {
        format!("{}@{}:{}", self.username, self.host, self.port)
    }
}
