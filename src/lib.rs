//! Prism Session Listener Library
//!
//! A proxy-terminating session listener for Minecraft Bedrock game servers,
//! written in Rust.
//!
//! A front-end proxy authenticates game clients and relays each session to
//! this backend over a reliable byte stream. Prism terminates that stream:
//! it runs the backend handshake, rewrites entity identifiers in both
//! directions and hands the host a typed packet connection that behaves like
//! a directly connected game client.
//!
//! # Architecture
//!
//! The listener is organized into several key modules:
//!
//! - [`protocol`] - Framed packet codec, compression, typed packets and the
//!   packet registry
//! - [`session`] - Per-connection handshake, identity translation and the
//!   session connection the host reads and writes
//! - [`network`] - Pluggable transports (TCP, QUIC) and the listener shell
//! - [`cache`] - Process-wide client-cache registry keyed by XUID
//! - [`config`] - Configuration management
//!
//! # Example
//!
//! ```rust,no_run
//! use prism::config::ListenerConfig;
//! use prism::network::Listener;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ListenerConfig::default();
//!     let listener = Listener::from_config(&config).await?;
//!     let session = listener.accept().await?;
//!     println!("session for {}", session.identity_data().xuid);
//!     Ok(())
//! }
//! ```

#![deny(
    missing_docs,
    clippy::panic,
)]

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
mod internal;
pub mod logger;
pub mod network;
pub mod protocol;
pub mod session;

pub use error::{ListenerError, Result};
