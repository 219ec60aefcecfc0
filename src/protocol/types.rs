//! Bedrock protocol data types
//!
//! This module implements the primitive wire types shared by the packet set:
//! variable-length integers, length-prefixed strings and byte slices, vectors
//! and the composite entity types (metadata maps, entity links, item stacks).
//!
//! Integers on the wire are little-endian; varints are LEB128 with zigzag
//! encoding for the signed variants.

use crate::error::{ListenerError, Result};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use uuid::Uuid;

/// An unsigned variable-length 32-bit integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarU32(pub u32);

impl VarU32 {
    /// The maximum number of bytes a VarU32 can occupy
    pub const MAX_SIZE: usize = 5;

    /// Read a VarU32 from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut value = 0u32;
        let mut position = 0;

        loop {
            let mut byte = [0u8; 1];
            reader.read_exact(&mut byte)?;
            let byte = byte[0];

            value |= ((byte & 0x7F) as u32) << position;

            if (byte & 0x80) == 0 {
                break;
            }

            position += 7;
            if position >= 35 {
                return Err(ListenerError::Protocol("VarU32 too long".to_string()));
            }
        }

        Ok(VarU32(value))
    }

    /// Write a VarU32 to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut value = self.0;

        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;

            if value != 0 {
                byte |= 0x80;
            }

            writer.write_all(&[byte])?;

            if value == 0 {
                break;
            }
        }

        Ok(())
    }

    /// Get the number of bytes this VarU32 will occupy when written
    pub fn len(&self) -> usize {
        let mut value = self.0;
        let mut size = 0;

        loop {
            value >>= 7;
            size += 1;
            if value == 0 {
                break;
            }
        }

        size
    }

    /// Check if the VarU32 represents zero
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for VarU32 {
    fn from(value: u32) -> Self {
        VarU32(value)
    }
}

impl From<VarU32> for u32 {
    fn from(varint: VarU32) -> Self {
        varint.0
    }
}

/// An unsigned variable-length 64-bit integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarU64(pub u64);

impl VarU64 {
    /// The maximum number of bytes a VarU64 can occupy
    pub const MAX_SIZE: usize = 10;

    /// Read a VarU64 from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut value = 0u64;
        let mut position = 0;

        loop {
            let mut byte = [0u8; 1];
            reader.read_exact(&mut byte)?;
            let byte = byte[0];

            value |= ((byte & 0x7F) as u64) << position;

            if (byte & 0x80) == 0 {
                break;
            }

            position += 7;
            if position >= 70 {
                return Err(ListenerError::Protocol("VarU64 too long".to_string()));
            }
        }

        Ok(VarU64(value))
    }

    /// Write a VarU64 to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut value = self.0;

        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;

            if value != 0 {
                byte |= 0x80;
            }

            writer.write_all(&[byte])?;

            if value == 0 {
                break;
            }
        }

        Ok(())
    }
}

impl From<u64> for VarU64 {
    fn from(value: u64) -> Self {
        VarU64(value)
    }
}

impl From<VarU64> for u64 {
    fn from(varint: VarU64) -> Self {
        varint.0
    }
}

/// A signed variable-length 32-bit integer (zigzag encoded)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarI32(pub i32);

impl VarI32 {
    /// Read a VarI32 from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let encoded = VarU32::read(reader)?.0;
        Ok(VarI32(((encoded >> 1) as i32) ^ -((encoded & 1) as i32)))
    }

    /// Write a VarI32 to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let encoded = ((self.0 as u32) << 1) ^ ((self.0 >> 31) as u32);
        VarU32(encoded).write(writer)
    }
}

impl From<i32> for VarI32 {
    fn from(value: i32) -> Self {
        VarI32(value)
    }
}

impl From<VarI32> for i32 {
    fn from(varint: VarI32) -> Self {
        varint.0
    }
}

/// A signed variable-length 64-bit integer (zigzag encoded)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarI64(pub i64);

impl VarI64 {
    /// Read a VarI64 from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let encoded = VarU64::read(reader)?.0;
        Ok(VarI64(((encoded >> 1) as i64) ^ -((encoded & 1) as i64)))
    }

    /// Write a VarI64 to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let encoded = ((self.0 as u64) << 1) ^ ((self.0 >> 63) as u64);
        VarU64(encoded).write(writer)
    }
}

impl From<i64> for VarI64 {
    fn from(value: i64) -> Self {
        VarI64(value)
    }
}

impl From<VarI64> for i64 {
    fn from(varint: VarI64) -> Self {
        varint.0
    }
}

/// Maximum byte length accepted for strings and byte slices
pub const MAX_SLICE_LENGTH: usize = 1024 * 1024 * 4;

/// Read a VarU32-prefixed UTF-8 string
pub fn read_string<R: Read>(reader: &mut R) -> Result<String> {
    let bytes = read_byte_slice(reader)?;
    String::from_utf8(bytes)
        .map_err(|_| ListenerError::Protocol("Invalid UTF-8 in string".to_string()))
}

/// Write a VarU32-prefixed UTF-8 string
pub fn write_string<W: Write>(value: &str, writer: &mut W) -> Result<()> {
    write_byte_slice(value.as_bytes(), writer)
}

/// Read a VarU32-prefixed byte slice
pub fn read_byte_slice<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let length = VarU32::read(reader)?.0 as usize;
    if length > MAX_SLICE_LENGTH {
        return Err(ListenerError::Protocol(format!(
            "Byte slice too long: {} > {}",
            length, MAX_SLICE_LENGTH
        )));
    }

    let mut bytes = vec![0u8; length];
    reader.read_exact(&mut bytes)?;
    Ok(bytes)
}

/// Write a VarU32-prefixed byte slice
pub fn write_byte_slice<W: Write>(value: &[u8], writer: &mut W) -> Result<()> {
    VarU32(value.len() as u32).write(writer)?;
    writer.write_all(value)?;
    Ok(())
}

/// Read a boolean from a reader
pub fn read_bool<R: Read>(reader: &mut R) -> Result<bool> {
    let mut byte = [0u8; 1];
    reader.read_exact(&mut byte)?;
    Ok(byte[0] != 0)
}

/// Write a boolean to a writer
pub fn write_bool<W: Write>(value: bool, writer: &mut W) -> Result<()> {
    writer.write_all(&[u8::from(value)])?;
    Ok(())
}

/// Read an unsigned byte from a reader
pub fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    let mut byte = [0u8; 1];
    reader.read_exact(&mut byte)?;
    Ok(byte[0])
}

/// Write an unsigned byte to a writer
pub fn write_u8<W: Write>(value: u8, writer: &mut W) -> Result<()> {
    writer.write_all(&[value])?;
    Ok(())
}

/// Read a little-endian u16 from a reader
pub fn read_u16<R: Read>(reader: &mut R) -> Result<u16> {
    let mut bytes = [0u8; 2];
    reader.read_exact(&mut bytes)?;
    Ok(u16::from_le_bytes(bytes))
}

/// Write a little-endian u16 to a writer
pub fn write_u16<W: Write>(value: u16, writer: &mut W) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Read a little-endian u32 from a reader
pub fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}

/// Write a little-endian u32 to a writer
pub fn write_u32<W: Write>(value: u32, writer: &mut W) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Read a little-endian i32 from a reader
pub fn read_i32<R: Read>(reader: &mut R) -> Result<i32> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(i32::from_le_bytes(bytes))
}

/// Write a little-endian i32 to a writer
pub fn write_i32<W: Write>(value: i32, writer: &mut W) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Read a big-endian i32 from a reader
///
/// Used by the play-status packet, whose body predates the little-endian
/// convention of the rest of the protocol.
pub fn read_i32_be<R: Read>(reader: &mut R) -> Result<i32> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(i32::from_be_bytes(bytes))
}

/// Write a big-endian i32 to a writer
pub fn write_i32_be<W: Write>(value: i32, writer: &mut W) -> Result<()> {
    writer.write_all(&value.to_be_bytes())?;
    Ok(())
}

/// Read a little-endian i64 from a reader
pub fn read_i64<R: Read>(reader: &mut R) -> Result<i64> {
    let mut bytes = [0u8; 8];
    reader.read_exact(&mut bytes)?;
    Ok(i64::from_le_bytes(bytes))
}

/// Write a little-endian i64 to a writer
pub fn write_i64<W: Write>(value: i64, writer: &mut W) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Read a little-endian f32 from a reader
pub fn read_f32<R: Read>(reader: &mut R) -> Result<f32> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(f32::from_le_bytes(bytes))
}

/// Write a little-endian f32 to a writer
pub fn write_f32<W: Write>(value: f32, writer: &mut W) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Read a UUID from a reader
pub fn read_uuid<R: Read>(reader: &mut R) -> Result<Uuid> {
    let mut bytes = [0u8; 16];
    reader.read_exact(&mut bytes)?;
    Ok(Uuid::from_bytes(bytes))
}

/// Write a UUID to a writer
pub fn write_uuid<W: Write>(uuid: &Uuid, writer: &mut W) -> Result<()> {
    writer.write_all(uuid.as_bytes())?;
    Ok(())
}

/// A three-component float vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Create a new vector
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Read a vector from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Vec3 {
            x: read_f32(reader)?,
            y: read_f32(reader)?,
            z: read_f32(reader)?,
        })
    }

    /// Write a vector to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_f32(self.x, writer)?;
        write_f32(self.y, writer)?;
        write_f32(self.z, writer)?;
        Ok(())
    }
}

/// A two-component float vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Z component
    pub z: f32,
}

impl Vec2 {
    /// Read a vector from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Vec2 {
            x: read_f32(reader)?,
            z: read_f32(reader)?,
        })
    }

    /// Write a vector to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_f32(self.x, writer)?;
        write_f32(self.z, writer)?;
        Ok(())
    }
}

/// A block position (signed x/z, unsigned y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockPos {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: u32,
    /// Z coordinate
    pub z: i32,
}

impl BlockPos {
    /// Create a new block position
    pub fn new(x: i32, y: u32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Read a block position from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(BlockPos {
            x: VarI32::read(reader)?.0,
            y: VarU32::read(reader)?.0,
            z: VarI32::read(reader)?.0,
        })
    }

    /// Write a block position to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI32(self.x).write(writer)?;
        VarU32(self.y).write(writer)?;
        VarI32(self.z).write(writer)?;
        Ok(())
    }
}

/// Metadata keys whose values carry entity identifiers
pub mod metadata_key {
    /// Owning entity unique ID
    pub const OWNER: u32 = 5;
    /// Targeted entity unique ID
    pub const TARGET: u32 = 6;
    /// Display offset carrier unique ID
    pub const DISPLAY_OFFSET: u32 = 10;
    /// Leash holder unique ID
    pub const LEASH_HOLDER: u32 = 37;
    /// Agent owner unique ID
    pub const AGENT: u32 = 48;
    /// Base entity runtime ID
    pub const BASE_RUNTIME_ID: u32 = 120;
}

/// A single entity metadata value
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    /// Unsigned byte value
    Byte(u8),
    /// 16-bit integer value
    I16(i16),
    /// 32-bit varint value
    I32(i32),
    /// Float value
    F32(f32),
    /// String value
    Str(String),
    /// Block position value
    BlockPos(BlockPos),
    /// 64-bit varint value (entity identifiers live here)
    I64(i64),
    /// Vector value
    Vec3(Vec3),
}

impl MetadataValue {
    fn type_id(&self) -> u32 {
        match self {
            MetadataValue::Byte(_) => 0,
            MetadataValue::I16(_) => 1,
            MetadataValue::I32(_) => 2,
            MetadataValue::F32(_) => 3,
            MetadataValue::Str(_) => 4,
            MetadataValue::BlockPos(_) => 6,
            MetadataValue::I64(_) => 7,
            MetadataValue::Vec3(_) => 8,
        }
    }
}

/// An entity metadata map
///
/// Keys are ordered so that an encode of a decoded map is byte-identical.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata(pub BTreeMap<u32, MetadataValue>);

impl Metadata {
    /// Create an empty metadata map
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a metadata map from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let count = VarU32::read(reader)?.0;
        let mut map = BTreeMap::new();

        for _ in 0..count {
            let key = VarU32::read(reader)?.0;
            let type_id = VarU32::read(reader)?.0;
            let value = match type_id {
                0 => MetadataValue::Byte(read_u8(reader)?),
                1 => {
                    let mut bytes = [0u8; 2];
                    reader.read_exact(&mut bytes)?;
                    MetadataValue::I16(i16::from_le_bytes(bytes))
                }
                2 => MetadataValue::I32(VarI32::read(reader)?.0),
                3 => MetadataValue::F32(read_f32(reader)?),
                4 => MetadataValue::Str(read_string(reader)?),
                6 => MetadataValue::BlockPos(BlockPos::read(reader)?),
                7 => MetadataValue::I64(VarI64::read(reader)?.0),
                8 => MetadataValue::Vec3(Vec3::read(reader)?),
                other => {
                    return Err(ListenerError::Protocol(format!(
                        "Unsupported metadata type {}",
                        other
                    )));
                }
            };
            map.insert(key, value);
        }

        Ok(Metadata(map))
    }

    /// Write a metadata map to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU32(self.0.len() as u32).write(writer)?;

        for (key, value) in &self.0 {
            VarU32(*key).write(writer)?;
            VarU32(value.type_id()).write(writer)?;
            match value {
                MetadataValue::Byte(v) => write_u8(*v, writer)?,
                MetadataValue::I16(v) => writer.write_all(&v.to_le_bytes())?,
                MetadataValue::I32(v) => VarI32(*v).write(writer)?,
                MetadataValue::F32(v) => write_f32(*v, writer)?,
                MetadataValue::Str(v) => write_string(v, writer)?,
                MetadataValue::BlockPos(v) => v.write(writer)?,
                MetadataValue::I64(v) => VarI64(*v).write(writer)?,
                MetadataValue::Vec3(v) => v.write(writer)?,
            }
        }

        Ok(())
    }
}

/// A link between a rider entity and a ridden entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntityLink {
    /// Unique ID of the entity being ridden
    pub ridden_entity_unique_id: i64,
    /// Unique ID of the riding entity
    pub rider_entity_unique_id: i64,
    /// Link type (remove, rider, passenger)
    pub link_type: u8,
    /// Whether the link snaps into place immediately
    pub immediate: bool,
    /// Whether the rider initiated the link
    pub rider_initiated: bool,
}

impl EntityLink {
    /// Read an entity link from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(EntityLink {
            ridden_entity_unique_id: VarI64::read(reader)?.0,
            rider_entity_unique_id: VarI64::read(reader)?.0,
            link_type: read_u8(reader)?,
            immediate: read_bool(reader)?,
            rider_initiated: read_bool(reader)?,
        })
    }

    /// Write an entity link to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.ridden_entity_unique_id).write(writer)?;
        VarI64(self.rider_entity_unique_id).write(writer)?;
        write_u8(self.link_type, writer)?;
        write_bool(self.immediate, writer)?;
        write_bool(self.rider_initiated, writer)?;
        Ok(())
    }

    /// Read a VarU32-prefixed list of entity links
    pub fn read_list<R: Read>(reader: &mut R) -> Result<Vec<Self>> {
        let count = VarU32::read(reader)?.0;
        let mut links = Vec::new();
        for _ in 0..count {
            links.push(EntityLink::read(reader)?);
        }
        Ok(links)
    }

    /// Write a VarU32-prefixed list of entity links
    pub fn write_list<W: Write>(links: &[Self], writer: &mut W) -> Result<()> {
        VarU32(links.len() as u32).write(writer)?;
        for link in links {
            link.write(writer)?;
        }
        Ok(())
    }
}

/// A simplified item stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemStack {
    /// Item network ID; zero means air
    pub network_id: i32,
    /// Stack count
    pub count: u16,
    /// Item metadata value
    pub metadata: u32,
}

impl ItemStack {
    /// Read an item stack from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let network_id = VarI32::read(reader)?.0;
        if network_id == 0 {
            return Ok(ItemStack::default());
        }
        Ok(ItemStack {
            network_id,
            count: read_u16(reader)?,
            metadata: VarU32::read(reader)?.0,
        })
    }

    /// Write an item stack to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI32(self.network_id).write(writer)?;
        if self.network_id == 0 {
            return Ok(());
        }
        write_u16(self.count, writer)?;
        VarU32(self.metadata).write(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_varu32_roundtrip() {
        let values = [0u32, 1, 127, 128, 255, 300, 25565, u32::MAX];

        for &value in &values {
            let varint = VarU32(value);
            let mut buffer = Vec::new();
            varint.write(&mut buffer).unwrap();

            let mut cursor = Cursor::new(buffer);
            let decoded = VarU32::read(&mut cursor).unwrap();

            assert_eq!(varint, decoded);
        }
    }

    #[test]
    fn test_vari64_roundtrip() {
        let values = [0i64, 1, -1, 42, -42, i64::MIN, i64::MAX];

        for &value in &values {
            let varint = VarI64(value);
            let mut buffer = Vec::new();
            varint.write(&mut buffer).unwrap();

            let mut cursor = Cursor::new(buffer);
            let decoded = VarI64::read(&mut cursor).unwrap();

            assert_eq!(varint, decoded);
        }
    }

    #[test]
    fn test_zigzag_small_negative_is_small() {
        // -1 zigzags to 1, which fits in a single byte.
        let mut buffer = Vec::new();
        VarI32(-1).write(&mut buffer).unwrap();
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_string_roundtrip() {
        let test_strings = ["", "Hello", "Hello, 世界!", "🚀"];

        for &s in &test_strings {
            let mut buffer = Vec::new();
            write_string(s, &mut buffer).unwrap();

            let mut cursor = Cursor::new(buffer);
            let decoded = read_string(&mut cursor).unwrap();

            assert_eq!(s, decoded);
        }
    }

    #[test]
    fn test_metadata_roundtrip() {
        let mut metadata = Metadata::new();
        metadata.0.insert(metadata_key::OWNER, MetadataValue::I64(42));
        metadata
            .0
            .insert(metadata_key::BASE_RUNTIME_ID, MetadataValue::I64(7));
        metadata.0.insert(0, MetadataValue::Byte(3));
        metadata.0.insert(4, MetadataValue::Str("Steve".to_string()));

        let mut buffer = Vec::new();
        metadata.write(&mut buffer).unwrap();

        let mut cursor = Cursor::new(buffer);
        let decoded = Metadata::read(&mut cursor).unwrap();

        assert_eq!(metadata, decoded);
    }

    #[test]
    fn test_entity_link_roundtrip() {
        let link = EntityLink {
            ridden_entity_unique_id: 1,
            rider_entity_unique_id: -5,
            link_type: 2,
            immediate: true,
            rider_initiated: false,
        };

        let mut buffer = Vec::new();
        link.write(&mut buffer).unwrap();

        let mut cursor = Cursor::new(buffer);
        let decoded = EntityLink::read(&mut cursor).unwrap();

        assert_eq!(link, decoded);
    }

    #[test]
    fn test_item_stack_air() {
        let stack = ItemStack::default();
        let mut buffer = Vec::new();
        stack.write(&mut buffer).unwrap();
        assert_eq!(buffer, vec![0]);

        let mut cursor = Cursor::new(buffer);
        let decoded = ItemStack::read(&mut cursor).unwrap();
        assert_eq!(stack, decoded);
    }
}
