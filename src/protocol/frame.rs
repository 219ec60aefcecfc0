//! Frame codec
//!
//! Every record on the wire is a 32-bit little-endian length followed by
//! exactly that many payload bytes. The codec is transport independent; it
//! only needs a byte stream.

use crate::error::{ListenerError, Result};
use crate::protocol::MAX_FRAME_LENGTH;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Reads length-prefixed frames from a byte stream
pub struct FrameReader<R> {
    reader: R,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    /// Create a new frame reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read a single frame payload
    ///
    /// Fails on EOF, short reads and lengths above [`MAX_FRAME_LENGTH`].
    pub async fn read_frame(&mut self) -> Result<Vec<u8>> {
        let mut payload = Vec::new();
        self.read_frame_into(&mut payload).await?;
        Ok(payload)
    }

    /// Read a single frame payload into a caller-supplied buffer
    ///
    /// The buffer is cleared first; hot paths pass scratch buffers here to
    /// avoid a per-frame allocation.
    pub async fn read_frame_into(&mut self, payload: &mut Vec<u8>) -> Result<()> {
        let mut length_bytes = [0u8; 4];
        self.reader.read_exact(&mut length_bytes).await?;
        let length = u32::from_le_bytes(length_bytes) as usize;

        if length > MAX_FRAME_LENGTH {
            return Err(ListenerError::Protocol(format!(
                "Frame too large: {} > {}",
                length, MAX_FRAME_LENGTH
            )));
        }

        payload.clear();
        payload.resize(length, 0);
        self.reader.read_exact(payload).await?;
        Ok(())
    }
}

/// Writes length-prefixed frames to a byte stream
pub struct FrameWriter<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin> FrameWriter<W> {
    /// Create a new frame writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a single frame
    ///
    /// One call produces one atomic record; callers that share a stream must
    /// serialise their calls.
    pub async fn write_frame(&mut self, payload: &[u8]) -> Result<()> {
        self.writer
            .write_all(&(payload.len() as u32).to_le_bytes())
            .await?;
        self.writer.write_all(payload).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Shut down the underlying stream
    pub async fn shutdown(&mut self) -> Result<()> {
        self.writer.shutdown().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_frame_roundtrip() {
        let (client, server) = tokio::io::duplex(1024);
        let mut writer = FrameWriter::new(client);
        let mut reader = FrameReader::new(server);

        let payloads: [&[u8]; 3] = [b"", b"\x01", b"hello frame"];
        for payload in payloads {
            writer.write_frame(payload).await.unwrap();
            let read = reader.read_frame().await.unwrap();
            assert_eq!(read, payload);
        }
    }

    #[tokio::test]
    async fn test_frame_length_is_exact() {
        let (client, server) = tokio::io::duplex(1024);
        let mut writer = FrameWriter::new(client);
        writer.write_frame(b"abc").await.unwrap();
        drop(writer);

        let mut raw = Vec::new();
        let mut server = server;
        tokio::io::AsyncReadExt::read_to_end(&mut server, &mut raw)
            .await
            .unwrap();
        assert_eq!(&raw[..4], &3u32.to_le_bytes());
        assert_eq!(&raw[4..], b"abc");
    }

    #[tokio::test]
    async fn test_frame_eof_is_error() {
        let (client, server) = tokio::io::duplex(1024);
        drop(client);

        let mut reader = FrameReader::new(server);
        assert!(reader.read_frame().await.is_err());
    }
}
