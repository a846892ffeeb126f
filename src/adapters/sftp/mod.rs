//! SFTP delivery
//!
//! [`SftpTransport`] implements [`Transport`](crate::adapters::Transport)
//! over SSH. Host key checking follows `sftp.host_key_fingerprint`: when it is
//! set the server must present a matching SHA256 fingerprint, otherwise any
//! key is accepted and a warning is logged.

pub mod auth;
pub mod client;

pub use auth::AuthMethod;
pub use client::SftpTransport;
