//! Bridge control-plane packets
//!
//! These packets never reach a game client; they are spoken only between the
//! front-end proxy and this backend to establish, measure and tear down
//! bridged sessions.

use crate::error::Result;
use crate::protocol::packets::{PacketType, id};
use crate::protocol::types::{
    VarI64, VarU64, read_byte_slice, read_i32, read_string, write_byte_slice, write_i32,
    write_string,
};
use std::io::{Read, Write};

/// Opens a bridged session on behalf of an authenticated game client
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectionRequest {
    /// UDP address of the game client, as seen by the proxy
    pub addr: String,
    /// Token checked by the backend's authenticator
    pub token: String,
    /// JSON-encoded client data blob
    pub client_data: Vec<u8>,
    /// JSON-encoded identity data blob; must contain the XUID
    pub identity_data: Vec<u8>,
    /// Opaque client-cache blob stored for the session lifetime
    pub cache: Vec<u8>,
    /// Protocol revision the client connected with
    pub protocol_id: i32,
}

impl PacketType for ConnectionRequest {
    const ID: u32 = id::CONNECTION_REQUEST;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(ConnectionRequest {
            addr: read_string(reader)?,
            token: read_string(reader)?,
            client_data: read_byte_slice(reader)?,
            identity_data: read_byte_slice(reader)?,
            cache: read_byte_slice(reader)?,
            protocol_id: read_i32(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.addr, writer)?;
        write_string(&self.token, writer)?;
        write_byte_slice(&self.client_data, writer)?;
        write_byte_slice(&self.identity_data, writer)?;
        write_byte_slice(&self.cache, writer)?;
        write_i32(self.protocol_id, writer)?;
        Ok(())
    }
}

/// Acknowledges a connection request with the session's entity identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectionResponse {
    /// Runtime ID assigned to the session
    pub runtime_id: u64,
    /// Unique ID assigned to the session
    pub unique_id: i64,
}

impl PacketType for ConnectionResponse {
    const ID: u32 = id::CONNECTION_RESPONSE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(ConnectionResponse {
            runtime_id: VarU64::read(reader)?.0,
            unique_id: VarI64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.runtime_id).write(writer)?;
        VarI64(self.unique_id).write(writer)?;
        Ok(())
    }
}

/// Asks the peer to flush buffered writes immediately
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flush;

impl PacketType for Flush {
    const ID: u32 = id::FLUSH;

    fn read<R: Read>(_reader: &mut R) -> Result<Self> {
        Ok(Flush)
    }

    fn write<W: Write>(&self, _writer: &mut W) -> Result<()> {
        Ok(())
    }
}

/// Measures session latency via a timestamp ricochet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    /// Millisecond timestamp of the sender
    pub timestamp: i64,
    /// Latency the sender currently attributes to the session
    pub latency: i64,
}

impl PacketType for Latency {
    const ID: u32 = id::LATENCY;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Latency {
            timestamp: VarI64::read(reader)?.0,
            latency: VarI64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.timestamp).write(writer)?;
        VarI64(self.latency).write(writer)?;
        Ok(())
    }
}

/// Moves the session to a different backend
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transfer {
    /// Address of the backend to transfer to
    pub addr: String,
}

impl PacketType for Transfer {
    const ID: u32 = id::TRANSFER;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Transfer {
            addr: read_string(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.addr, writer)
    }
}

/// Replaces the stored client-cache blob for the session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateCache {
    /// New cache blob
    pub cache: Vec<u8>,
    /// Protocol revision the blob was produced for
    pub protocol_id: i32,
}

impl PacketType for UpdateCache {
    const ID: u32 = id::UPDATE_CACHE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(UpdateCache {
            cache: read_byte_slice(reader)?,
            protocol_id: read_i32(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_byte_slice(&self.cache, writer)?;
        write_i32(self.protocol_id, writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_connection_request_roundtrip() {
        let request = ConnectionRequest {
            addr: "1.2.3.4:19132".to_string(),
            token: "secret".to_string(),
            client_data: b"{}".to_vec(),
            identity_data: br#"{"XUID":"ABC"}"#.to_vec(),
            cache: vec![0x00, 0x01],
            protocol_id: 712,
        };

        let mut buffer = Vec::new();
        request.write(&mut buffer).unwrap();

        let decoded = ConnectionRequest::read(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(request, decoded);
    }

    #[test]
    fn test_latency_roundtrip() {
        let latency = Latency {
            timestamp: 123_456,
            latency: -7,
        };

        let mut buffer = Vec::new();
        latency.write(&mut buffer).unwrap();

        let decoded = Latency::read(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(latency, decoded);
    }
}
