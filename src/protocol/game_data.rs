//! Game start data
//!
//! The host session layer supplies a [`GameData`] when it starts the game on
//! a bridged session. Most fields pass straight through into the start-game
//! packet; a handful are overridden by the listener (see the session module).

use crate::error::Result;
use crate::protocol::types::{
    BlockPos, VarI32, VarU32, Vec3, read_bool, read_f32, read_string, read_u16, write_bool,
    write_f32, write_string, write_u16,
};
use std::io::{Read, Write};

/// A row of the item table sent alongside the start-game packet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEntry {
    /// Namespaced item name, such as `minecraft:shield`
    pub name: String,
    /// Runtime ID the item is referred to by on this connection
    pub runtime_id: i16,
    /// Whether the item is defined by server-side components
    pub component_based: bool,
}

impl ItemEntry {
    /// Read an item entry from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(ItemEntry {
            name: read_string(reader)?,
            runtime_id: read_u16(reader)? as i16,
            component_based: read_bool(reader)?,
        })
    }

    /// Write an item entry to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.name, writer)?;
        write_u16(self.runtime_id as u16, writer)?;
        write_bool(self.component_based, writer)?;
        Ok(())
    }

    /// Read a VarU32-prefixed list of item entries
    pub fn read_list<R: Read>(reader: &mut R) -> Result<Vec<Self>> {
        let count = VarU32::read(reader)?.0;
        let mut items = Vec::new();
        for _ in 0..count {
            items.push(ItemEntry::read(reader)?);
        }
        Ok(items)
    }

    /// Write a VarU32-prefixed list of item entries
    pub fn write_list<W: Write>(items: &[Self], writer: &mut W) -> Result<()> {
        VarU32(items.len() as u32).write(writer)?;
        for item in items {
            item.write(writer)?;
        }
        Ok(())
    }
}

/// The value carried by a game rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameRuleValue {
    /// Boolean rule
    Bool(bool),
    /// Unsigned integer rule
    Int(u32),
    /// Float rule
    Float(f32),
}

impl Default for GameRuleValue {
    fn default() -> Self {
        GameRuleValue::Bool(false)
    }
}

/// A single world game rule
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameRule {
    /// Rule name
    pub name: String,
    /// Whether the client may edit the rule
    pub editable: bool,
    /// Rule value
    pub value: GameRuleValue,
}

impl GameRule {
    /// Read a game rule from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let name = read_string(reader)?;
        let editable = read_bool(reader)?;
        let value = match VarU32::read(reader)?.0 {
            1 => GameRuleValue::Bool(read_bool(reader)?),
            2 => GameRuleValue::Int(VarU32::read(reader)?.0),
            3 => GameRuleValue::Float(read_f32(reader)?),
            other => {
                return Err(crate::error::ListenerError::Protocol(format!(
                    "Unknown game rule type {}",
                    other
                )));
            }
        };
        Ok(GameRule {
            name,
            editable,
            value,
        })
    }

    /// Write a game rule to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.name, writer)?;
        write_bool(self.editable, writer)?;
        match self.value {
            GameRuleValue::Bool(v) => {
                VarU32(1).write(writer)?;
                write_bool(v, writer)?;
            }
            GameRuleValue::Int(v) => {
                VarU32(2).write(writer)?;
                VarU32(v).write(writer)?;
            }
            GameRuleValue::Float(v) => {
                VarU32(3).write(writer)?;
                write_f32(v, writer)?;
            }
        }
        Ok(())
    }
}

/// A toggled experiment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Experiment {
    /// Experiment name
    pub name: String,
    /// Whether the experiment is enabled
    pub enabled: bool,
}

impl Experiment {
    /// Read an experiment from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Experiment {
            name: read_string(reader)?,
            enabled: read_bool(reader)?,
        })
    }

    /// Write an experiment to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.name, writer)?;
        write_bool(self.enabled, writer)?;
        Ok(())
    }
}

/// A custom block definition row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockEntry {
    /// Namespaced block name
    pub name: String,
}

impl BlockEntry {
    /// Read a block entry from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(BlockEntry {
            name: read_string(reader)?,
        })
    }

    /// Write a block entry to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.name, writer)
    }
}

/// Server-authoritative movement settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerMovementSettings {
    /// Movement authority mode
    pub movement_type: i32,
    /// Rewind history size for corrections
    pub rewind_history_size: i32,
    /// Whether block breaking is server authoritative
    pub server_authoritative_block_breaking: bool,
}

impl PlayerMovementSettings {
    /// Read movement settings from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(PlayerMovementSettings {
            movement_type: VarI32::read(reader)?.0,
            rewind_history_size: VarI32::read(reader)?.0,
            server_authoritative_block_breaking: read_bool(reader)?,
        })
    }

    /// Write movement settings to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI32(self.movement_type).write(writer)?;
        VarI32(self.rewind_history_size).write(writer)?;
        write_bool(self.server_authoritative_block_breaking, writer)?;
        Ok(())
    }
}

/// Data the host supplies to start the game on a session
///
/// Fields mirror the start-game packet; the listener overrides the handful of
/// flags the proxy relies on and passes the rest through untouched.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    /// World difficulty
    pub difficulty: i32,
    /// Unique ID of the player entity, in host space
    pub entity_unique_id: i64,
    /// Runtime ID of the player entity, in host space
    pub entity_runtime_id: u64,
    /// Game mode of the player
    pub player_game_mode: i32,
    /// Spawn position of the player
    pub player_position: Vec3,
    /// Spawn pitch
    pub pitch: f32,
    /// Spawn yaw
    pub yaw: f32,
    /// World generation seed
    pub world_seed: i64,
    /// Dimension the player spawns in
    pub dimension: i32,
    /// World spawn block position
    pub world_spawn: BlockPos,
    /// Editor world type
    pub editor_world_type: i32,
    /// Whether the world was created in the editor
    pub created_in_editor: bool,
    /// Whether the world was exported from the editor
    pub exported_from_editor: bool,
    /// Whether persona skins are disabled
    pub persona_disabled: bool,
    /// Whether custom skins are disabled
    pub custom_skins_disabled: bool,
    /// World game rules
    pub game_rules: Vec<GameRule>,
    /// World time
    pub time: i64,
    /// Custom block definitions
    pub custom_blocks: Vec<BlockEntry>,
    /// Item table of the world
    pub items: Vec<ItemEntry>,
    /// World name shown to the client
    pub world_name: String,
    /// Movement authority settings
    pub player_movement_settings: PlayerMovementSettings,
    /// Game mode of the world
    pub world_game_mode: i32,
    /// Whether the inventory is server authoritative
    pub server_authoritative_inventory: bool,
    /// Permission level of the player
    pub player_permissions: i32,
    /// Experiments enabled on the world
    pub experiments: Vec<Experiment>,
    /// Whether chunks are generated client side
    pub client_side_generation: bool,
    /// Chat restriction level
    pub chat_restriction_level: u8,
    /// Whether player interactions are disabled
    pub disable_player_interactions: bool,
    /// Base game version of the world
    pub base_game_version: String,
    /// Whether block network IDs are hashed
    pub use_block_network_id_hashes: bool,
}

pub(crate) fn read_game_rules<R: Read>(reader: &mut R) -> Result<Vec<GameRule>> {
    let count = VarU32::read(reader)?.0;
    let mut rules = Vec::new();
    for _ in 0..count {
        rules.push(GameRule::read(reader)?);
    }
    Ok(rules)
}

pub(crate) fn write_game_rules<W: Write>(rules: &[GameRule], writer: &mut W) -> Result<()> {
    VarU32(rules.len() as u32).write(writer)?;
    for rule in rules {
        rule.write(writer)?;
    }
    Ok(())
}

pub(crate) fn read_experiments<R: Read>(reader: &mut R) -> Result<Vec<Experiment>> {
    let count = VarU32::read(reader)?.0;
    let mut experiments = Vec::new();
    for _ in 0..count {
        experiments.push(Experiment::read(reader)?);
    }
    Ok(experiments)
}

pub(crate) fn write_experiments<W: Write>(experiments: &[Experiment], writer: &mut W) -> Result<()> {
    VarU32(experiments.len() as u32).write(writer)?;
    for experiment in experiments {
        experiment.write(writer)?;
    }
    Ok(())
}

pub(crate) fn read_block_entries<R: Read>(reader: &mut R) -> Result<Vec<BlockEntry>> {
    let count = VarU32::read(reader)?.0;
    let mut blocks = Vec::new();
    for _ in 0..count {
        blocks.push(BlockEntry::read(reader)?);
    }
    Ok(blocks)
}

pub(crate) fn write_block_entries<W: Write>(blocks: &[BlockEntry], writer: &mut W) -> Result<()> {
    VarU32(blocks.len() as u32).write(writer)?;
    for block in blocks {
        block.write(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_item_entry_roundtrip() {
        let entry = ItemEntry {
            name: "minecraft:shield".to_string(),
            runtime_id: 355,
            component_based: false,
        };

        let mut buffer = Vec::new();
        entry.write(&mut buffer).unwrap();

        let mut cursor = Cursor::new(buffer);
        let decoded = ItemEntry::read(&mut cursor).unwrap();

        assert_eq!(entry, decoded);
    }

    #[test]
    fn test_game_rule_roundtrip() {
        let rules = [
            GameRule {
                name: "doDaylightCycle".to_string(),
                editable: true,
                value: GameRuleValue::Bool(true),
            },
            GameRule {
                name: "randomTickSpeed".to_string(),
                editable: false,
                value: GameRuleValue::Int(3),
            },
        ];

        for rule in &rules {
            let mut buffer = Vec::new();
            rule.write(&mut buffer).unwrap();

            let mut cursor = Cursor::new(buffer);
            let decoded = GameRule::read(&mut cursor).unwrap();

            assert_eq!(*rule, decoded);
        }
    }
}
