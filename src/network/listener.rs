//! Session listener
//!
//! The shell around a transport: accepts its streams and hands each one to
//! the session layer, yielding fully handshaken connections.

use crate::auth::{Authentication, SecretAuthentication};
use crate::config::{ListenerConfig, TransportKind};
use crate::error::Result;
use crate::network::{QuicTransport, TcpTransport, Transport};
use crate::protocol::Compression;
use crate::protocol::packets::world::Disconnect;
use crate::protocol::packets::Packet;
use crate::protocol::registry::global_pool;
use crate::session::Connection;
use std::sync::Arc;

/// Listener accepting bridged sessions from a front-end proxy
pub struct Listener {
    transport: Box<dyn Transport>,
    auth: Option<Arc<dyn Authentication>>,
    compression: Compression,
    client_cache_enabled: bool,
}

impl Listener {
    /// Create a listener bound to an address
    ///
    /// A `None` authenticator disables authentication; a `None` transport
    /// falls back to TCP.
    pub async fn new(
        addr: &str,
        auth: Option<Arc<dyn Authentication>>,
        transport: Option<Box<dyn Transport>>,
    ) -> Result<Listener> {
        let mut transport = transport.unwrap_or_else(|| Box::new(TcpTransport::new()));
        transport.listen(addr).await?;
        tracing::info!("Listening for sessions on {}", addr);

        Ok(Listener {
            transport,
            auth,
            compression: Compression::default(),
            client_cache_enabled: true,
        })
    }

    /// Create a listener from a configuration
    pub async fn from_config(config: &ListenerConfig) -> Result<Listener> {
        let transport: Box<dyn Transport> = match config.transport {
            TransportKind::Tcp => Box::new(TcpTransport::new()),
            TransportKind::Quic => {
                let (cert, key) = config.tls_paths()?;
                Box::new(QuicTransport::from_pem_files(&cert, &key)?)
            }
        };
        let auth: Option<Arc<dyn Authentication>> = config
            .auth_secret
            .as_ref()
            .map(|secret| Arc::new(SecretAuthentication::new(secret.clone())) as Arc<dyn Authentication>);

        let mut listener = Listener::new(&config.listen_address, auth, Some(transport)).await?;
        listener.compression = config.compression;
        listener.client_cache_enabled = config.client_cache;
        Ok(listener)
    }

    /// Accept the next session
    ///
    /// Blocks until a stream is accepted and its backend handshake has
    /// completed.
    pub async fn accept(&self) -> Result<Connection> {
        let stream = self.transport.accept().await?;
        Connection::accept(
            stream,
            self.auth.clone(),
            self.compression,
            global_pool(),
            self.client_cache_enabled,
        )
        .await
    }

    /// Disconnect a session with a reason
    ///
    /// An empty reason hides the disconnection screen on the client.
    pub async fn disconnect(&self, connection: &Connection, reason: &str) -> Result<()> {
        let _ = connection
            .write_packet(Packet::from(Disconnect {
                hide_disconnection_screen: reason.is_empty(),
                message: reason.to_string(),
            }))
            .await;
        connection.close().await
    }

    /// Shut the listener's transport down
    pub async fn close(&self) -> Result<()> {
        self.transport.close().await
    }
}
