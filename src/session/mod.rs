//! Per-connection session layer
//!
//! The handshake driver, the identity translation layer and the session
//! connection the host reads and writes packets against.

pub mod connection;
pub mod translate;

pub use connection::Connection;
pub use translate::EntityIdentity;
