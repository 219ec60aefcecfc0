//! Bridging protocol implementation
//!
//! This module contains the framed codec, payload compression, the typed
//! packet set and the packet registry used between the front-end proxy and
//! this backend.

pub mod compression;
pub mod frame;
pub mod game_data;
pub mod header;
pub mod login;
pub mod packets;
pub mod registry;
pub mod types;

pub use compression::Compression;
pub use frame::{FrameReader, FrameWriter};
pub use header::Header;

/// Maximum accepted frame length in bytes
pub const MAX_FRAME_LENGTH: usize = 1024 * 1024 * 16;

/// Decode-hint byte: the proxy must decode the body to inspect it
pub const DECODE_NEEDED: u8 = 0x00;

/// Decode-hint byte: the proxy may forward the body opaquely
pub const DECODE_NOT_NEEDED: u8 = 0x01;

/// Game version reported in the start-game packet
pub const CURRENT_VERSION: &str = "1.21.20";

/// Protocol revision matching [`CURRENT_VERSION`]
pub const CURRENT_PROTOCOL: i32 = 712;

/// Chunk radius granted to every bridged session
pub const DEFAULT_CHUNK_RADIUS: i32 = 16;
