//! Packet header
//!
//! A header is a single VarU32 packing the packet ID with the sender and
//! target sub-client identifiers used by split-screen play. The ID occupies
//! the low ten bits.

use crate::error::Result;
use crate::protocol::types::VarU32;
use std::io::{Read, Write};

const PACKET_ID_MASK: u32 = 0x3FF;
const SENDER_SHIFT: u32 = 10;
const TARGET_SHIFT: u32 = 12;
const SUBCLIENT_MASK: u32 = 0x3;

/// The header preceding every packet body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    /// Packet ID
    pub packet_id: u32,
    /// Sub-client that sent the packet
    pub sender_subclient: u8,
    /// Sub-client the packet targets
    pub target_subclient: u8,
}

impl Header {
    /// Create a header for a packet ID with no sub-client bits
    pub fn new(packet_id: u32) -> Self {
        Self {
            packet_id,
            sender_subclient: 0,
            target_subclient: 0,
        }
    }

    /// Read a header from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let value = VarU32::read(reader)?.0;
        Ok(Header {
            packet_id: value & PACKET_ID_MASK,
            sender_subclient: ((value >> SENDER_SHIFT) & SUBCLIENT_MASK) as u8,
            target_subclient: ((value >> TARGET_SHIFT) & SUBCLIENT_MASK) as u8,
        })
    }

    /// Write a header to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let value = (self.packet_id & PACKET_ID_MASK)
            | ((self.sender_subclient as u32 & SUBCLIENT_MASK) << SENDER_SHIFT)
            | ((self.target_subclient as u32 & SUBCLIENT_MASK) << TARGET_SHIFT);
        VarU32(value).write(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_header_roundtrip() {
        let header = Header {
            packet_id: 311,
            sender_subclient: 2,
            target_subclient: 1,
        };

        let mut buffer = Vec::new();
        header.write(&mut buffer).unwrap();

        let mut cursor = Cursor::new(buffer);
        let decoded = Header::read(&mut cursor).unwrap();

        assert_eq!(header, decoded);
    }

    #[test]
    fn test_header_plain_id() {
        let mut buffer = Vec::new();
        Header::new(9).write(&mut buffer).unwrap();
        assert_eq!(buffer, vec![9]);
    }
}
