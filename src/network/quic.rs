//! QUIC transport adapter
//!
//! Every bidirectional stream of a QUIC connection is surfaced as its own
//! session stream. One acceptor task per connection pushes accepted streams
//! onto a bounded queue drained by [`Transport::accept`]; a terminal
//! stream-accept failure closes the whole connection.

use crate::error::{ListenerError, Result};
use crate::network::{SessionStream, Transport};
use async_trait::async_trait;
use quinn::crypto::rustls::QuicServerConfig;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;

const ALPN_PROTOCOL: &[u8] = b"spectrum";
const IDLE_TIMEOUT: Duration = Duration::from_secs(10);
const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(5);
const INCOMING_QUEUE_CAPACITY: usize = 100;

/// One bidirectional QUIC stream, read and write halves joined
struct QuicStream {
    send: quinn::SendStream,
    recv: quinn::RecvStream,
}

impl AsyncRead for QuicStream {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        Pin::new(&mut self.recv).poll_read(cx, buf)
    }
}

impl AsyncWrite for QuicStream {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<std::io::Result<usize>> {
        AsyncWrite::poll_write(Pin::new(&mut self.send), cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        AsyncWrite::poll_flush(Pin::new(&mut self.send), cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
        AsyncWrite::poll_shutdown(Pin::new(&mut self.send), cx)
    }
}

/// Transport surfacing QUIC streams as session streams
pub struct QuicTransport {
    cert_chain: Vec<CertificateDer<'static>>,
    key: PrivateKeyDer<'static>,
    endpoint: Option<quinn::Endpoint>,
    incoming: Option<Mutex<mpsc::Receiver<Box<dyn SessionStream>>>>,
    closed: CancellationToken,
}

impl QuicTransport {
    /// Create a QUIC transport from a certificate chain and private key
    pub fn new(cert_chain: Vec<CertificateDer<'static>>, key: PrivateKeyDer<'static>) -> Self {
        Self {
            cert_chain,
            key,
            endpoint: None,
            incoming: None,
            closed: CancellationToken::new(),
        }
    }

    /// Create a QUIC transport from PEM certificate and key files
    pub fn from_pem_files(cert_path: &Path, key_path: &Path) -> Result<Self> {
        let cert_file = std::fs::read(cert_path)?;
        let cert_chain = rustls_pemfile::certs(&mut cert_file.as_slice())
            .collect::<std::io::Result<Vec<_>>>()?;

        let key_file = std::fs::read(key_path)?;
        let key = rustls_pemfile::private_key(&mut key_file.as_slice())?
            .ok_or_else(|| ListenerError::Config("no private key in key file".to_string()))?;

        Ok(Self::new(cert_chain, key))
    }

    fn server_config(&self) -> Result<quinn::ServerConfig> {
        let mut crypto = rustls::ServerConfig::builder()
            .with_no_client_auth()
            .with_single_cert(self.cert_chain.clone(), self.key.clone_key())
            .map_err(|err| ListenerError::Config(err.to_string()))?;
        crypto.alpn_protocols = vec![ALPN_PROTOCOL.to_vec()];

        let crypto = QuicServerConfig::try_from(crypto)
            .map_err(|err| ListenerError::Config(err.to_string()))?;
        let mut config = quinn::ServerConfig::with_crypto(Arc::new(crypto));

        let mut transport = quinn::TransportConfig::default();
        transport.max_idle_timeout(Some(
            IDLE_TIMEOUT
                .try_into()
                .map_err(|_| ListenerError::Config("idle timeout out of range".to_string()))?,
        ));
        transport.keep_alive_interval(Some(KEEP_ALIVE_INTERVAL));
        config.transport_config(Arc::new(transport));
        Ok(config)
    }
}

/// Accepts the bidirectional streams of one connection until it dies
async fn drain_connection(
    connection: quinn::Connection,
    incoming: mpsc::Sender<Box<dyn SessionStream>>,
    closed: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = closed.cancelled() => {
                connection.close(0u32.into(), b"listener closed");
                return;
            }
            stream = connection.accept_bi() => match stream {
                Ok((send, recv)) => {
                    let stream = Box::new(QuicStream { send, recv }) as Box<dyn SessionStream>;
                    if incoming.send(stream).await.is_err() {
                        connection.close(0u32.into(), b"listener closed");
                        return;
                    }
                }
                Err(err) => {
                    tracing::debug!("QUIC connection ended: {}", err);
                    connection.close(0u32.into(), b"failed to accept stream");
                    return;
                }
            }
        }
    }
}

#[async_trait]
impl Transport for QuicTransport {
    async fn listen(&mut self, addr: &str) -> Result<()> {
        let endpoint = quinn::Endpoint::server(self.server_config()?, addr.parse()?)?;
        let (sender, receiver) = mpsc::channel(INCOMING_QUEUE_CAPACITY);

        let acceptor = endpoint.clone();
        let closed = self.closed.clone();
        tokio::spawn(async move {
            while let Some(incoming) = acceptor.accept().await {
                let sender = sender.clone();
                let closed = closed.clone();
                tokio::spawn(async move {
                    match incoming.await {
                        Ok(connection) => drain_connection(connection, sender, closed).await,
                        Err(err) => tracing::debug!("QUIC handshake failed: {}", err),
                    }
                });
            }
        });

        self.endpoint = Some(endpoint);
        self.incoming = Some(Mutex::new(receiver));
        Ok(())
    }

    async fn accept(&self) -> Result<Box<dyn SessionStream>> {
        let incoming = self
            .incoming
            .as_ref()
            .ok_or_else(|| ListenerError::Protocol("transport is not listening".to_string()))?;

        let mut incoming = incoming.lock().await;
        tokio::select! {
            _ = self.closed.cancelled() => Err(ListenerError::Closed),
            stream = incoming.recv() => stream.ok_or(ListenerError::Closed),
        }
    }

    async fn close(&self) -> Result<()> {
        if self.closed.is_cancelled() {
            return Err(ListenerError::AlreadyClosed);
        }
        self.closed.cancel();
        if let Some(endpoint) = &self.endpoint {
            endpoint.close(0u32.into(), b"listener closed");
        }
        Ok(())
    }
}
