//! Network layer for Prism
//!
//! The pluggable transport abstraction, its TCP and QUIC adapters, and the
//! listener shell that turns accepted streams into bridged sessions.

pub mod listener;
pub mod quic;
pub mod tcp;

pub use listener::Listener;
pub use quic::QuicTransport;
pub use tcp::TcpTransport;

use crate::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

/// A bidirectional byte stream carrying one session
pub trait SessionStream: AsyncRead + AsyncWrite + Send + Unpin {}

impl<T: AsyncRead + AsyncWrite + Send + Unpin> SessionStream for T {}

/// A pluggable stream transport
///
/// A transport listens on an address and yields accepted byte streams, each
/// carrying exactly one session. Closing is idempotent-once: the first close
/// succeeds, later ones report the transport already closed.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Bind the transport to an address
    async fn listen(&mut self, addr: &str) -> Result<()>;

    /// Accept the next session stream
    async fn accept(&self) -> Result<Box<dyn SessionStream>>;

    /// Shut the transport down
    async fn close(&self) -> Result<()>;
}
