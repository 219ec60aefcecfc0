//! Error handling for Prism

use thiserror::Error;

/// Main error type for the listener
#[derive(Error, Debug)]
pub enum ListenerError {
    /// IO error
    #[error("Network error: {0}")]
    Io(#[from] std::io::Error),

    /// Protocol error
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Compression error
    #[error("Compression error: {0}")]
    Compression(String),

    /// JSON decoding error (client or identity data)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A packet ID with no registered factory
    #[error("unknown packet ID {0}")]
    UnknownPacket(u32),

    /// A packet body that failed to decode
    #[error("error decoding packet {0}: {1}")]
    PacketDecode(u32, String),

    /// The supplied authenticator rejected the session
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Operation on a connection that has been closed
    #[error("connection closed")]
    Closed,

    /// Second and subsequent calls to close
    #[error("connection already closed")]
    AlreadyClosed,

    /// Remote address string that does not parse as a UDP endpoint
    #[error("Address error: {0}")]
    Address(#[from] std::net::AddrParseError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias
pub type Result<T> = std::result::Result<T, ListenerError>;
