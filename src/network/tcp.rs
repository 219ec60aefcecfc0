//! TCP transport adapter
//!
//! The plain transport: one TCP connection per session. Accepted sockets are
//! tuned for the many-small-frames traffic pattern of the bridge.

use crate::error::{ListenerError, Result};
use crate::network::{SessionStream, Transport};
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Transport accepting raw TCP connections
#[derive(Default)]
pub struct TcpTransport {
    listener: Option<TcpListener>,
    closed: CancellationToken,
}

impl TcpTransport {
    /// Create an unbound TCP transport
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn listen(&mut self, addr: &str) -> Result<()> {
        self.listener = Some(TcpListener::bind(addr).await?);
        Ok(())
    }

    async fn accept(&self) -> Result<Box<dyn SessionStream>> {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| ListenerError::Protocol("transport is not listening".to_string()))?;

        tokio::select! {
            _ = self.closed.cancelled() => Err(ListenerError::Closed),
            accepted = listener.accept() => {
                let (stream, addr) = accepted?;
                let _ = stream.set_nodelay(true);
                let _ = stream.set_linger(Some(Duration::from_secs(0)));
                tracing::debug!("Accepted TCP session stream from {}", addr);
                Ok(Box::new(stream) as Box<dyn SessionStream>)
            }
        }
    }

    async fn close(&self) -> Result<()> {
        if self.closed.is_cancelled() {
            return Err(ListenerError::AlreadyClosed);
        }
        self.closed.cancel();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    #[tokio::test]
    async fn test_accept_yields_a_usable_stream() {
        let mut transport = TcpTransport::new();
        transport.listen("127.0.0.1:0").await.unwrap();
        let addr = transport.listener.as_ref().unwrap().local_addr().unwrap();

        let client = tokio::spawn(async move {
            let mut stream = TcpStream::connect(addr).await.unwrap();
            stream.write_all(b"ping").await.unwrap();
        });

        let mut stream = transport.accept().await.unwrap();
        let mut buffer = [0u8; 4];
        stream.read_exact(&mut buffer).await.unwrap();
        assert_eq!(&buffer, b"ping");

        client.await.unwrap();
        transport.close().await.unwrap();
        assert!(transport.close().await.is_err());
    }
}
