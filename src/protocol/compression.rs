//! Payload compression
//!
//! The compressed blob carries the packet header and body; the decode-hint
//! byte sits outside it and is never compressed. Both ends of a deployment
//! must agree on the algorithm, which is fixed for the connection lifetime.

use crate::error::{ListenerError, Result};
use flate2::Compression as FlateLevel;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use std::io::{Read, Write};

/// Payload compression algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Raw DEFLATE
    #[default]
    Flate,
    /// Snappy block format
    Snappy,
}

impl Compression {
    /// Compress a payload
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Compression::Flate => {
                let mut encoder = DeflateEncoder::new(Vec::new(), FlateLevel::default());
                encoder
                    .write_all(data)
                    .and_then(|_| encoder.finish())
                    .map_err(|e| ListenerError::Compression(e.to_string()))
            }
            Compression::Snappy => snap::raw::Encoder::new()
                .compress_vec(data)
                .map_err(|e| ListenerError::Compression(e.to_string())),
        }
    }

    /// Decompress a payload
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Compression::Flate => {
                let mut decoder = DeflateDecoder::new(data);
                let mut decompressed = Vec::new();
                decoder
                    .read_to_end(&mut decompressed)
                    .map_err(|e| ListenerError::Compression(e.to_string()))?;
                Ok(decompressed)
            }
            Compression::Snappy => snap::raw::Decoder::new()
                .decompress_vec(data)
                .map_err(|e| ListenerError::Compression(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flate_roundtrip() {
        let compression = Compression::Flate;
        let data = b"the quick brown fox jumps over the lazy dog".repeat(8);

        let compressed = compression.compress(&data).unwrap();
        let decompressed = compression.decompress(&compressed).unwrap();

        assert_eq!(data, decompressed.as_slice());
    }

    #[test]
    fn test_snappy_roundtrip() {
        let compression = Compression::Snappy;
        let data = b"the quick brown fox jumps over the lazy dog".repeat(8);

        let compressed = compression.compress(&data).unwrap();
        let decompressed = compression.decompress(&compressed).unwrap();

        assert_eq!(data, decompressed.as_slice());
    }

    #[test]
    fn test_garbage_fails() {
        assert!(Compression::Flate.decompress(&[0xFF; 16]).is_err());
        assert!(Compression::Snappy.decompress(&[0xFF; 16]).is_err());
    }
}
