//! Configuration management for Prism
//!
//! The knob set is deliberately small: a listen address, a transport, a
//! compression algorithm, an optional shared authentication secret, TLS
//! material for QUIC and the client-cache toggle.

pub mod properties;

pub use properties::Properties;

use crate::error::{ListenerError, Result};
use crate::protocol::Compression;
use std::path::{Path, PathBuf};

/// The transport a listener accepts sessions over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportKind {
    /// Raw TCP
    #[default]
    Tcp,
    /// QUIC with TLS
    Quic,
}

/// Main listener configuration
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Address the listener binds to
    pub listen_address: String,
    /// Transport sessions are accepted over
    pub transport: TransportKind,
    /// Payload compression algorithm, agreed with the proxy
    pub compression: Compression,
    /// Shared secret for session authentication; `None` disables it
    pub auth_secret: Option<String>,
    /// TLS certificate path (QUIC only)
    pub tls_cert: Option<PathBuf>,
    /// TLS private key path (QUIC only)
    pub tls_key: Option<PathBuf>,
    /// Whether client-cache blob semantics are enabled for sessions
    pub client_cache: bool,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:19133".to_string(),
            transport: TransportKind::Tcp,
            compression: Compression::Flate,
            auth_secret: None,
            tls_cert: None,
            tls_key: None,
            client_cache: true,
        }
    }
}

impl ListenerConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a properties file, using defaults if absent
    pub fn from_properties_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_properties(&Properties::load_from_file_or_default(path)?)
    }

    /// Create configuration from parsed properties
    pub fn from_properties(properties: &Properties) -> Result<Self> {
        let defaults = Self::default();

        let transport = match properties.get("transport").map(String::as_str) {
            None | Some("tcp") => TransportKind::Tcp,
            Some("quic") => TransportKind::Quic,
            Some(other @ ("kcp" | "spectral")) => {
                return Err(ListenerError::Config(format!(
                    "transport {} is not available in this build",
                    other
                )));
            }
            Some(other) => {
                return Err(ListenerError::Config(format!(
                    "unknown transport {}",
                    other
                )));
            }
        };

        let compression = match properties.get("compression").map(String::as_str) {
            None | Some("flate") => Compression::Flate,
            Some("snappy") => Compression::Snappy,
            Some(other) => {
                return Err(ListenerError::Config(format!(
                    "unknown compression {}",
                    other
                )));
            }
        };

        let auth_secret = properties
            .get("auth-secret")
            .filter(|secret| !secret.is_empty())
            .cloned();

        Ok(Self {
            listen_address: properties
                .get("listen-address")
                .cloned()
                .unwrap_or(defaults.listen_address),
            transport,
            compression,
            auth_secret,
            tls_cert: properties.get("tls-cert").map(PathBuf::from),
            tls_key: properties.get("tls-key").map(PathBuf::from),
            client_cache: properties.get_bool("client-cache", defaults.client_cache),
        })
    }

    /// The TLS certificate and key paths, required by the QUIC transport
    pub fn tls_paths(&self) -> Result<(PathBuf, PathBuf)> {
        match (&self.tls_cert, &self.tls_key) {
            (Some(cert), Some(key)) => Ok((cert.clone(), key.clone())),
            _ => Err(ListenerError::Config(
                "the quic transport requires tls-cert and tls-key".to_string(),
            )),
        }
    }

    /// Set the listen address
    pub fn with_listen_address(mut self, addr: impl Into<String>) -> Self {
        self.listen_address = addr.into();
        self
    }

    /// Set the transport kind
    pub fn with_transport(mut self, transport: TransportKind) -> Self {
        self.transport = transport;
        self
    }

    /// Set the compression algorithm
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Set the shared authentication secret
    pub fn with_auth_secret(mut self, secret: Option<String>) -> Self {
        self.auth_secret = secret;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ListenerConfig::default();
        assert_eq!(config.listen_address, "0.0.0.0:19133");
        assert_eq!(config.transport, TransportKind::Tcp);
        assert_eq!(config.compression, Compression::Flate);
        assert!(config.auth_secret.is_none());
        assert!(config.client_cache);
    }

    #[test]
    fn test_unavailable_transports_are_rejected() {
        let mut properties = Properties::new();
        properties.set("transport", "spectral");
        let err = ListenerConfig::from_properties(&properties).unwrap_err();
        assert!(err.to_string().contains("not available"));
    }

    #[test]
    fn test_from_properties() {
        let mut properties = Properties::new();
        properties.set("listen-address", "127.0.0.1:9000");
        properties.set("transport", "tcp");
        properties.set("compression", "snappy");
        properties.set("auth-secret", "hunter2");
        properties.set("client-cache", "false");

        let config = ListenerConfig::from_properties(&properties).unwrap();
        assert_eq!(config.listen_address, "127.0.0.1:9000");
        assert_eq!(config.compression, Compression::Snappy);
        assert_eq!(config.auth_secret.as_deref(), Some("hunter2"));
        assert!(!config.client_cache);
    }
}
