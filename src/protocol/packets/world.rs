//! World, command and event packets
//!
//! The start-game flow, world mutations, commands and the remaining packets
//! the bridge inspects for embedded entity identifiers.

use crate::error::{ListenerError, Result};
use crate::protocol::game_data::{
    BlockEntry, Experiment, GameRule, ItemEntry, PlayerMovementSettings, read_block_entries,
    read_experiments, read_game_rules, write_block_entries, write_experiments, write_game_rules,
};
use crate::protocol::packets::{PacketType, id};
use crate::protocol::types::{
    BlockPos, ItemStack, VarI32, VarI64, VarU32, VarU64, Vec3, read_bool, read_byte_slice,
    read_f32, read_i32, read_i32_be, read_i64, read_string, read_u8, read_u32, read_uuid,
    write_bool, write_byte_slice, write_f32, write_i32, write_i32_be, write_i64, write_string,
    write_u8, write_u32, write_uuid,
};
use std::io::{Read, Write};
use uuid::Uuid;

/// Play status: the login succeeded
pub const PLAY_STATUS_LOGIN_SUCCESS: i32 = 0;

/// Event type carried by a mob-killed event
pub const EVENT_MOB_KILLED: i32 = 2;
/// Event type carried by a boss-killed event
pub const EVENT_BOSS_KILLED: i32 = 7;

/// Inventory transaction: balanced normal transaction
pub const TRANSACTION_NORMAL: u32 = 0;
/// Inventory transaction: client/server mismatch
pub const TRANSACTION_MISMATCH: u32 = 1;
/// Inventory transaction: item used on a block or air
pub const TRANSACTION_USE_ITEM: u32 = 2;
/// Inventory transaction: item used on an entity
pub const TRANSACTION_USE_ITEM_ON_ENTITY: u32 = 3;
/// Inventory transaction: item released
pub const TRANSACTION_RELEASE_ITEM: u32 = 4;

/// Map object type: tracked entity
pub const MAP_OBJECT_ENTITY: i32 = 0;
/// Map object type: tracked block
pub const MAP_OBJECT_BLOCK: i32 = 1;

/// Starts the game on the session
///
/// The entity identifiers in here are the session's host-space pair; the
/// translation layer swaps them on the wire.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StartGame {
    /// Unique ID of the player entity
    pub entity_unique_id: i64,
    /// Runtime ID of the player entity
    pub entity_runtime_id: u64,
    /// Game mode of the player
    pub player_game_mode: i32,
    /// Spawn position
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
    /// World difficulty
    pub difficulty: i32,
    /// World game rules
    pub game_rules: Vec<GameRule>,
    /// World time
    pub time: i64,
    /// Whether achievements are disabled
    pub achievements_disabled: bool,
    /// World generator type
    pub generator: i32,
    /// Whether education features are enabled
    pub education_features_enabled: bool,
    /// Whether the world is a multiplayer game
    pub multiplayer_game: bool,
    /// Correlation ID for multiplayer telemetry
    pub multiplayer_correlation_id: String,
    /// Whether commands are enabled
    pub commands_enabled: bool,
    /// World name shown to the client
    pub world_name: String,
    /// Whether LAN broadcasting is enabled
    pub lan_broadcast_enabled: bool,
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
    /// Game version reported to the client
    pub game_version: String,
    /// Whether block network IDs are hashed
    pub use_block_network_id_hashes: bool,
    /// Custom block definitions
    pub blocks: Vec<BlockEntry>,
    /// Item table of the world
    pub items: Vec<ItemEntry>,
}

impl PacketType for StartGame {
    const ID: u32 = id::START_GAME;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(StartGame {
            entity_unique_id: VarI64::read(reader)?.0,
            entity_runtime_id: VarU64::read(reader)?.0,
            player_game_mode: VarI32::read(reader)?.0,
            player_position: Vec3::read(reader)?,
            pitch: read_f32(reader)?,
            yaw: read_f32(reader)?,
            world_seed: read_i64(reader)?,
            dimension: VarI32::read(reader)?.0,
            world_spawn: BlockPos::read(reader)?,
            editor_world_type: VarI32::read(reader)?.0,
            created_in_editor: read_bool(reader)?,
            exported_from_editor: read_bool(reader)?,
            persona_disabled: read_bool(reader)?,
            custom_skins_disabled: read_bool(reader)?,
            difficulty: VarI32::read(reader)?.0,
            game_rules: read_game_rules(reader)?,
            time: VarI64::read(reader)?.0,
            achievements_disabled: read_bool(reader)?,
            generator: VarI32::read(reader)?.0,
            education_features_enabled: read_bool(reader)?,
            multiplayer_game: read_bool(reader)?,
            multiplayer_correlation_id: read_string(reader)?,
            commands_enabled: read_bool(reader)?,
            world_name: read_string(reader)?,
            lan_broadcast_enabled: read_bool(reader)?,
            player_movement_settings: PlayerMovementSettings::read(reader)?,
            world_game_mode: VarI32::read(reader)?.0,
            server_authoritative_inventory: read_bool(reader)?,
            player_permissions: VarI32::read(reader)?.0,
            experiments: read_experiments(reader)?,
            client_side_generation: read_bool(reader)?,
            chat_restriction_level: read_u8(reader)?,
            disable_player_interactions: read_bool(reader)?,
            base_game_version: read_string(reader)?,
            game_version: read_string(reader)?,
            use_block_network_id_hashes: read_bool(reader)?,
            blocks: read_block_entries(reader)?,
            items: ItemEntry::read_list(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.entity_unique_id).write(writer)?;
        VarU64(self.entity_runtime_id).write(writer)?;
        VarI32(self.player_game_mode).write(writer)?;
        self.player_position.write(writer)?;
        write_f32(self.pitch, writer)?;
        write_f32(self.yaw, writer)?;
        write_i64(self.world_seed, writer)?;
        VarI32(self.dimension).write(writer)?;
        self.world_spawn.write(writer)?;
        VarI32(self.editor_world_type).write(writer)?;
        write_bool(self.created_in_editor, writer)?;
        write_bool(self.exported_from_editor, writer)?;
        write_bool(self.persona_disabled, writer)?;
        write_bool(self.custom_skins_disabled, writer)?;
        VarI32(self.difficulty).write(writer)?;
        write_game_rules(&self.game_rules, writer)?;
        VarI64(self.time).write(writer)?;
        write_bool(self.achievements_disabled, writer)?;
        VarI32(self.generator).write(writer)?;
        write_bool(self.education_features_enabled, writer)?;
        write_bool(self.multiplayer_game, writer)?;
        write_string(&self.multiplayer_correlation_id, writer)?;
        write_bool(self.commands_enabled, writer)?;
        write_string(&self.world_name, writer)?;
        write_bool(self.lan_broadcast_enabled, writer)?;
        self.player_movement_settings.write(writer)?;
        VarI32(self.world_game_mode).write(writer)?;
        write_bool(self.server_authoritative_inventory, writer)?;
        VarI32(self.player_permissions).write(writer)?;
        write_experiments(&self.experiments, writer)?;
        write_bool(self.client_side_generation, writer)?;
        write_u8(self.chat_restriction_level, writer)?;
        write_bool(self.disable_player_interactions, writer)?;
        write_string(&self.base_game_version, writer)?;
        write_string(&self.game_version, writer)?;
        write_bool(self.use_block_network_id_hashes, writer)?;
        write_block_entries(&self.blocks, writer)?;
        ItemEntry::write_list(&self.items, writer)?;
        Ok(())
    }
}

/// Announces the item table of the world
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemRegistry {
    /// Item table rows
    pub items: Vec<ItemEntry>,
}

impl PacketType for ItemRegistry {
    const ID: u32 = id::ITEM_REGISTRY;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(ItemRegistry {
            items: ItemEntry::read_list(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        ItemEntry::write_list(&self.items, writer)
    }
}

/// Requests a chunk radius from the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestChunkRadius {
    /// Requested radius in chunks
    pub chunk_radius: i32,
    /// Maximum radius the client supports
    pub max_chunk_radius: u8,
}

impl PacketType for RequestChunkRadius {
    const ID: u32 = id::REQUEST_CHUNK_RADIUS;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(RequestChunkRadius {
            chunk_radius: VarI32::read(reader)?.0,
            max_chunk_radius: read_u8(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI32(self.chunk_radius).write(writer)?;
        write_u8(self.max_chunk_radius, writer)?;
        Ok(())
    }
}

/// Grants a chunk radius to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChunkRadiusUpdated {
    /// Granted radius in chunks
    pub chunk_radius: i32,
}

impl PacketType for ChunkRadiusUpdated {
    const ID: u32 = id::CHUNK_RADIUS_UPDATED;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(ChunkRadiusUpdated {
            chunk_radius: VarI32::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI32(self.chunk_radius).write(writer)
    }
}

/// Reports login and spawn progress to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayStatus {
    /// Status code
    pub status: i32,
}

impl PacketType for PlayStatus {
    const ID: u32 = id::PLAY_STATUS;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(PlayStatus {
            status: read_i32_be(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_i32_be(self.status, writer)
    }
}

/// Disconnects the session with an optional message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Disconnect {
    /// Whether the disconnection screen is hidden
    pub hide_disconnection_screen: bool,
    /// Message shown on the disconnection screen
    pub message: String,
}

impl PacketType for Disconnect {
    const ID: u32 = id::DISCONNECT;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let hide_disconnection_screen = read_bool(reader)?;
        let message = if hide_disconnection_screen {
            String::new()
        } else {
            read_string(reader)?
        };
        Ok(Disconnect {
            hide_disconnection_screen,
            message,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_bool(self.hide_disconnection_screen, writer)?;
        if !self.hide_disconnection_screen {
            write_string(&self.message, writer)?;
        }
        Ok(())
    }
}

/// Updates a boss bar
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BossEvent {
    /// Unique ID of the boss entity
    pub boss_entity_unique_id: i64,
    /// Boss bar event type
    pub event_type: u32,
    /// Unique ID of the player added to or removed from the bar
    pub player_unique_id: i64,
    /// Boss bar title
    pub title: String,
    /// Boss health percentage
    pub health_percentage: f32,
}

impl PacketType for BossEvent {
    const ID: u32 = id::BOSS_EVENT;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(BossEvent {
            boss_entity_unique_id: VarI64::read(reader)?.0,
            event_type: VarU32::read(reader)?.0,
            player_unique_id: VarI64::read(reader)?.0,
            title: read_string(reader)?,
            health_percentage: read_f32(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.boss_entity_unique_id).write(writer)?;
        VarU32(self.event_type).write(writer)?;
        VarI64(self.player_unique_id).write(writer)?;
        write_string(&self.title, writer)?;
        write_f32(self.health_percentage, writer)?;
        Ok(())
    }
}

/// Attaches the camera to an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Camera {
    /// Unique ID of the entity acting as the camera
    pub camera_entity_unique_id: i64,
    /// Unique ID of the player targeted
    pub target_player_unique_id: i64,
}

impl PacketType for Camera {
    const ID: u32 = id::CAMERA;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Camera {
            camera_entity_unique_id: VarI64::read(reader)?.0,
            target_player_unique_id: VarI64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.camera_entity_unique_id).write(writer)?;
        VarI64(self.target_player_unique_id).write(writer)?;
        Ok(())
    }
}

/// An object tracked on a map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedMapObject {
    /// A tracked entity, by unique ID
    Entity(i64),
    /// A tracked block, by position
    Block(BlockPos),
}

impl TrackedMapObject {
    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        match read_i32(reader)? {
            MAP_OBJECT_ENTITY => Ok(TrackedMapObject::Entity(VarI64::read(reader)?.0)),
            MAP_OBJECT_BLOCK => Ok(TrackedMapObject::Block(BlockPos::read(reader)?)),
            other => Err(ListenerError::Protocol(format!(
                "Unknown map object type {}",
                other
            ))),
        }
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            TrackedMapObject::Entity(unique_id) => {
                write_i32(MAP_OBJECT_ENTITY, writer)?;
                VarI64(*unique_id).write(writer)?;
            }
            TrackedMapObject::Block(position) => {
                write_i32(MAP_OBJECT_BLOCK, writer)?;
                position.write(writer)?;
            }
        }
        Ok(())
    }
}

/// Updates a map item held by the client
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientBoundMapItemData {
    /// Unique ID of the map
    pub map_id: i64,
    /// Bitmask of the parts updated
    pub update_flags: u32,
    /// Dimension of the map
    pub dimension: u8,
    /// Whether the map is locked
    pub locked_map: bool,
    /// Objects tracked by the map
    pub tracked_objects: Vec<TrackedMapObject>,
}

impl PacketType for ClientBoundMapItemData {
    const ID: u32 = id::CLIENT_BOUND_MAP_ITEM_DATA;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let map_id = VarI64::read(reader)?.0;
        let update_flags = VarU32::read(reader)?.0;
        let dimension = read_u8(reader)?;
        let locked_map = read_bool(reader)?;

        let count = VarU32::read(reader)?.0;
        let mut tracked_objects = Vec::new();
        for _ in 0..count {
            tracked_objects.push(TrackedMapObject::read(reader)?);
        }

        Ok(ClientBoundMapItemData {
            map_id,
            update_flags,
            dimension,
            locked_map,
            tracked_objects,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.map_id).write(writer)?;
        VarU32(self.update_flags).write(writer)?;
        write_u8(self.dimension, writer)?;
        write_bool(self.locked_map, writer)?;
        VarU32(self.tracked_objects.len() as u32).write(writer)?;
        for object in &self.tracked_objects {
            object.write(writer)?;
        }
        Ok(())
    }
}

/// Updates a command block or a command-block minecart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandBlockUpdate {
    /// Whether a placed block is updated; otherwise a minecart
    pub block: bool,
    /// Position of the command block; only on the wire for blocks
    pub position: BlockPos,
    /// Command block mode; only on the wire for blocks
    pub mode: u32,
    /// Whether redstone is required; only on the wire for blocks
    pub needs_redstone: bool,
    /// Whether the block is conditional; only on the wire for blocks
    pub conditional: bool,
    /// Runtime ID of the minecart; only on the wire for minecarts
    pub minecart_entity_runtime_id: u64,
    /// Command to execute
    pub command: String,
    /// Last output of the command
    pub last_output: String,
    /// Name of the command block
    pub name: String,
    /// Whether the output is tracked
    pub should_track_output: bool,
    /// Delay in ticks before execution
    pub tick_delay: i32,
    /// Whether the first tick executes immediately
    pub execute_on_first_tick: bool,
}

impl PacketType for CommandBlockUpdate {
    const ID: u32 = id::COMMAND_BLOCK_UPDATE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let block = read_bool(reader)?;
        let mut packet = CommandBlockUpdate {
            block,
            ..Default::default()
        };

        if block {
            packet.position = BlockPos::read(reader)?;
            packet.mode = VarU32::read(reader)?.0;
            packet.needs_redstone = read_bool(reader)?;
            packet.conditional = read_bool(reader)?;
        } else {
            packet.minecart_entity_runtime_id = VarU64::read(reader)?.0;
        }

        packet.command = read_string(reader)?;
        packet.last_output = read_string(reader)?;
        packet.name = read_string(reader)?;
        packet.should_track_output = read_bool(reader)?;
        packet.tick_delay = read_i32(reader)?;
        packet.execute_on_first_tick = read_bool(reader)?;
        Ok(packet)
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_bool(self.block, writer)?;
        if self.block {
            self.position.write(writer)?;
            VarU32(self.mode).write(writer)?;
            write_bool(self.needs_redstone, writer)?;
            write_bool(self.conditional, writer)?;
        } else {
            VarU64(self.minecart_entity_runtime_id).write(writer)?;
        }
        write_string(&self.command, writer)?;
        write_string(&self.last_output, writer)?;
        write_string(&self.name, writer)?;
        write_bool(self.should_track_output, writer)?;
        write_i32(self.tick_delay, writer)?;
        write_bool(self.execute_on_first_tick, writer)?;
        Ok(())
    }
}

/// The origin a command was requested from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandOrigin {
    /// Origin type
    pub origin: u32,
    /// UUID of the request
    pub uuid: Uuid,
    /// Request ID
    pub request_id: String,
    /// Unique ID of the requesting player
    pub player_unique_id: i64,
}

impl CommandOrigin {
    /// Read a command origin from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(CommandOrigin {
            origin: VarU32::read(reader)?.0,
            uuid: read_uuid(reader)?,
            request_id: read_string(reader)?,
            player_unique_id: VarI64::read(reader)?.0,
        })
    }

    /// Write a command origin to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU32(self.origin).write(writer)?;
        write_uuid(&self.uuid, writer)?;
        write_string(&self.request_id, writer)?;
        VarI64(self.player_unique_id).write(writer)?;
        Ok(())
    }
}

/// Requests the execution of a command
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandRequest {
    /// Command line, including the leading slash
    pub command: String,
    /// Origin of the request
    pub origin: CommandOrigin,
    /// Whether the request is internal
    pub internal: bool,
    /// Version of the command syntax
    pub version: i32,
}

impl PacketType for CommandRequest {
    const ID: u32 = id::COMMAND_REQUEST;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(CommandRequest {
            command: read_string(reader)?,
            origin: CommandOrigin::read(reader)?,
            internal: read_bool(reader)?,
            version: VarI32::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.command, writer)?;
        self.origin.write(writer)?;
        write_bool(self.internal, writer)?;
        VarI32(self.version).write(writer)?;
        Ok(())
    }
}

/// A single message of a command output
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandOutputMessage {
    /// Whether the command succeeded
    pub success: bool,
    /// Message text or translation key
    pub message: String,
    /// Translation parameters
    pub parameters: Vec<String>,
}

impl CommandOutputMessage {
    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let success = read_bool(reader)?;
        let message = read_string(reader)?;
        let count = VarU32::read(reader)?.0;
        let mut parameters = Vec::new();
        for _ in 0..count {
            parameters.push(read_string(reader)?);
        }
        Ok(CommandOutputMessage {
            success,
            message,
            parameters,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_bool(self.success, writer)?;
        write_string(&self.message, writer)?;
        VarU32(self.parameters.len() as u32).write(writer)?;
        for parameter in &self.parameters {
            write_string(parameter, writer)?;
        }
        Ok(())
    }
}

/// Returns the output of an executed command
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandOutput {
    /// Origin of the original request
    pub origin: CommandOrigin,
    /// Output type
    pub output_type: u8,
    /// Amount of successful invocations
    pub success_count: u32,
    /// Output messages
    pub output_messages: Vec<CommandOutputMessage>,
}

impl PacketType for CommandOutput {
    const ID: u32 = id::COMMAND_OUTPUT;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let origin = CommandOrigin::read(reader)?;
        let output_type = read_u8(reader)?;
        let success_count = VarU32::read(reader)?.0;

        let count = VarU32::read(reader)?.0;
        let mut output_messages = Vec::new();
        for _ in 0..count {
            output_messages.push(CommandOutputMessage::read(reader)?);
        }

        Ok(CommandOutput {
            origin,
            output_type,
            success_count,
            output_messages,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.origin.write(writer)?;
        write_u8(self.output_type, writer)?;
        VarU32(self.success_count).write(writer)?;
        VarU32(self.output_messages.len() as u32).write(writer)?;
        for message in &self.output_messages {
            message.write(writer)?;
        }
        Ok(())
    }
}

/// The typed payload of an event packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventData {
    /// A mob was killed
    MobKilled {
        /// Unique ID of the killer
        killer_entity_unique_id: i64,
        /// Unique ID of the victim
        victim_entity_unique_id: i64,
        /// Cause of the kill
        damage_cause: i32,
    },
    /// A boss was killed
    BossKilled {
        /// Unique ID of the boss
        boss_entity_unique_id: i64,
    },
    /// Any other event, carried opaquely
    Generic {
        /// Event type discriminant
        event_type: i32,
        /// Raw event value
        value: i32,
    },
}

impl Default for EventData {
    fn default() -> Self {
        EventData::Generic {
            event_type: 0,
            value: 0,
        }
    }
}

/// Reports a telemetry event
///
/// The entity identifier is signed on the wire but follows the runtime-ID
/// numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Event {
    /// Identifier of the entity the event concerns
    pub entity_runtime_id: i64,
    /// Whether the entity is a player
    pub use_player_id: u8,
    /// Typed event payload
    pub data: EventData,
}

impl PacketType for Event {
    const ID: u32 = id::EVENT;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let entity_runtime_id = VarI64::read(reader)?.0;
        let event_type = VarI32::read(reader)?.0;
        let use_player_id = read_u8(reader)?;

        let data = match event_type {
            EVENT_MOB_KILLED => EventData::MobKilled {
                killer_entity_unique_id: VarI64::read(reader)?.0,
                victim_entity_unique_id: VarI64::read(reader)?.0,
                damage_cause: VarI32::read(reader)?.0,
            },
            EVENT_BOSS_KILLED => EventData::BossKilled {
                boss_entity_unique_id: VarI64::read(reader)?.0,
            },
            other => EventData::Generic {
                event_type: other,
                value: VarI32::read(reader)?.0,
            },
        };

        Ok(Event {
            entity_runtime_id,
            use_player_id,
            data,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.entity_runtime_id).write(writer)?;
        match &self.data {
            EventData::MobKilled { .. } => VarI32(EVENT_MOB_KILLED).write(writer)?,
            EventData::BossKilled { .. } => VarI32(EVENT_BOSS_KILLED).write(writer)?,
            EventData::Generic { event_type, .. } => VarI32(*event_type).write(writer)?,
        }
        write_u8(self.use_player_id, writer)?;
        match &self.data {
            EventData::MobKilled {
                killer_entity_unique_id,
                victim_entity_unique_id,
                damage_cause,
            } => {
                VarI64(*killer_entity_unique_id).write(writer)?;
                VarI64(*victim_entity_unique_id).write(writer)?;
                VarI32(*damage_cause).write(writer)?;
            }
            EventData::BossKilled {
                boss_entity_unique_id,
            } => {
                VarI64(*boss_entity_unique_id).write(writer)?;
            }
            EventData::Generic { value, .. } => {
                VarI32(*value).write(writer)?;
            }
        }
        Ok(())
    }
}

/// The typed payload of an inventory transaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransactionData {
    /// A balanced normal transaction
    Normal,
    /// A client/server mismatch forcing a resync
    Mismatch,
    /// An item used on a block or air
    UseItem {
        /// Action type of the use
        action_type: u32,
        /// Block position targeted
        block_position: BlockPos,
        /// Face of the block targeted
        block_face: i32,
        /// Hotbar slot of the held item
        hotbar_slot: i32,
        /// The held item
        held_item: ItemStack,
        /// Position of the player
        player_position: Vec3,
        /// Position clicked
        clicked_position: Vec3,
        /// Runtime ID of the block targeted
        block_runtime_id: u32,
    },
    /// An item used on an entity
    UseItemOnEntity {
        /// Runtime ID of the targeted entity
        target_entity_runtime_id: u64,
        /// Action type of the use
        action_type: u32,
        /// Hotbar slot of the held item
        hotbar_slot: i32,
        /// The held item
        held_item: ItemStack,
        /// Position of the player
        player_position: Vec3,
        /// Position clicked
        clicked_position: Vec3,
    },
    /// An item released after charging
    ReleaseItem {
        /// Action type of the release
        action_type: u32,
        /// Hotbar slot of the held item
        hotbar_slot: i32,
        /// The held item
        held_item: ItemStack,
        /// Position of the player's head
        head_position: Vec3,
    },
}

impl Default for TransactionData {
    fn default() -> Self {
        TransactionData::Normal
    }
}

/// Synchronises an inventory action with the server
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InventoryTransaction {
    /// Legacy request ID being responded to
    pub legacy_request_id: i32,
    /// Typed transaction payload
    pub data: TransactionData,
}

impl PacketType for InventoryTransaction {
    const ID: u32 = id::INVENTORY_TRANSACTION;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let legacy_request_id = VarI32::read(reader)?.0;
        let transaction_type = VarU32::read(reader)?.0;

        let data = match transaction_type {
            TRANSACTION_NORMAL => TransactionData::Normal,
            TRANSACTION_MISMATCH => TransactionData::Mismatch,
            TRANSACTION_USE_ITEM => TransactionData::UseItem {
                action_type: VarU32::read(reader)?.0,
                block_position: BlockPos::read(reader)?,
                block_face: VarI32::read(reader)?.0,
                hotbar_slot: VarI32::read(reader)?.0,
                held_item: ItemStack::read(reader)?,
                player_position: Vec3::read(reader)?,
                clicked_position: Vec3::read(reader)?,
                block_runtime_id: VarU32::read(reader)?.0,
            },
            TRANSACTION_USE_ITEM_ON_ENTITY => TransactionData::UseItemOnEntity {
                target_entity_runtime_id: VarU64::read(reader)?.0,
                action_type: VarU32::read(reader)?.0,
                hotbar_slot: VarI32::read(reader)?.0,
                held_item: ItemStack::read(reader)?,
                player_position: Vec3::read(reader)?,
                clicked_position: Vec3::read(reader)?,
            },
            TRANSACTION_RELEASE_ITEM => TransactionData::ReleaseItem {
                action_type: VarU32::read(reader)?.0,
                hotbar_slot: VarI32::read(reader)?.0,
                held_item: ItemStack::read(reader)?,
                head_position: Vec3::read(reader)?,
            },
            other => {
                return Err(ListenerError::Protocol(format!(
                    "Unknown transaction type {}",
                    other
                )));
            }
        };

        Ok(InventoryTransaction {
            legacy_request_id,
            data,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI32(self.legacy_request_id).write(writer)?;
        match &self.data {
            TransactionData::Normal => VarU32(TRANSACTION_NORMAL).write(writer)?,
            TransactionData::Mismatch => VarU32(TRANSACTION_MISMATCH).write(writer)?,
            TransactionData::UseItem {
                action_type,
                block_position,
                block_face,
                hotbar_slot,
                held_item,
                player_position,
                clicked_position,
                block_runtime_id,
            } => {
                VarU32(TRANSACTION_USE_ITEM).write(writer)?;
                VarU32(*action_type).write(writer)?;
                block_position.write(writer)?;
                VarI32(*block_face).write(writer)?;
                VarI32(*hotbar_slot).write(writer)?;
                held_item.write(writer)?;
                player_position.write(writer)?;
                clicked_position.write(writer)?;
                VarU32(*block_runtime_id).write(writer)?;
            }
            TransactionData::UseItemOnEntity {
                target_entity_runtime_id,
                action_type,
                hotbar_slot,
                held_item,
                player_position,
                clicked_position,
            } => {
                VarU32(TRANSACTION_USE_ITEM_ON_ENTITY).write(writer)?;
                VarU64(*target_entity_runtime_id).write(writer)?;
                VarU32(*action_type).write(writer)?;
                VarI32(*hotbar_slot).write(writer)?;
                held_item.write(writer)?;
                player_position.write(writer)?;
                clicked_position.write(writer)?;
            }
            TransactionData::ReleaseItem {
                action_type,
                hotbar_slot,
                held_item,
                head_position,
            } => {
                VarU32(TRANSACTION_RELEASE_ITEM).write(writer)?;
                VarU32(*action_type).write(writer)?;
                VarI32(*hotbar_slot).write(writer)?;
                held_item.write(writer)?;
                head_position.write(writer)?;
            }
        }
        Ok(())
    }
}

/// Opens a container window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerOpen {
    /// Window ID assigned to the container
    pub window_id: u8,
    /// Container type
    pub container_type: u8,
    /// Position of the container block
    pub container_position: BlockPos,
    /// Unique ID of the container entity, or -1
    pub container_entity_unique_id: i64,
}

impl PacketType for ContainerOpen {
    const ID: u32 = id::CONTAINER_OPEN;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(ContainerOpen {
            window_id: read_u8(reader)?,
            container_type: read_u8(reader)?,
            container_position: BlockPos::read(reader)?,
            container_entity_unique_id: VarI64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_u8(self.window_id, writer)?;
        write_u8(self.container_type, writer)?;
        self.container_position.write(writer)?;
        VarI64(self.container_entity_unique_id).write(writer)?;
        Ok(())
    }
}

/// Takes a photo on behalf of another entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreatePhoto {
    /// Unique ID of the entity photographed
    pub entity_unique_id: i64,
    /// Name of the photo
    pub photo_name: String,
    /// Name of the photo item
    pub item_name: String,
}

impl PacketType for CreatePhoto {
    const ID: u32 = id::CREATE_PHOTO;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(CreatePhoto {
            entity_unique_id: read_i64(reader)?,
            photo_name: read_string(reader)?,
            item_name: read_string(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_i64(self.entity_unique_id, writer)?;
        write_string(&self.photo_name, writer)?;
        write_string(&self.item_name, writer)?;
        Ok(())
    }
}

/// Carries arbitrary debug data for development builds
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DebugInfo {
    /// Unique ID of the player the data concerns
    pub player_unique_id: i64,
    /// Raw debug payload
    pub data: Vec<u8>,
}

impl PacketType for DebugInfo {
    const ID: u32 = id::DEBUG_INFO;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(DebugInfo {
            player_unique_id: VarI64::read(reader)?.0,
            data: read_byte_slice(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.player_unique_id).write(writer)?;
        write_byte_slice(&self.data, writer)?;
        Ok(())
    }
}

/// Transfers a photo between client and server
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhotoTransfer {
    /// Name of the photo file
    pub photo_name: String,
    /// Raw photo data
    pub photo_data: Vec<u8>,
    /// ID of the book the photo belongs to
    pub book_id: String,
    /// Photo type
    pub photo_type: u8,
    /// Source type of the photo
    pub source_type: u8,
    /// Unique ID of the photo's owner
    pub owner_entity_unique_id: i64,
}

impl PacketType for PhotoTransfer {
    const ID: u32 = id::PHOTO_TRANSFER;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(PhotoTransfer {
            photo_name: read_string(reader)?,
            photo_data: read_byte_slice(reader)?,
            book_id: read_string(reader)?,
            photo_type: read_u8(reader)?,
            source_type: read_u8(reader)?,
            owner_entity_unique_id: VarI64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.photo_name, writer)?;
        write_byte_slice(&self.photo_data, writer)?;
        write_string(&self.book_id, writer)?;
        write_u8(self.photo_type, writer)?;
        write_u8(self.source_type, writer)?;
        VarI64(self.owner_entity_unique_id).write(writer)?;
        Ok(())
    }
}

/// Updates a block and names the entity responsible
///
/// The entity identifier is stored unsigned on the wire but numbered like the
/// signed unique IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateBlockSynced {
    /// Position of the updated block
    pub position: BlockPos,
    /// Runtime ID of the new block state
    pub new_block_runtime_id: u32,
    /// Update flags
    pub flags: u32,
    /// Storage layer updated
    pub layer: u32,
    /// Identifier of the entity that caused the update
    pub entity_unique_id: u64,
    /// Type of the synced movement
    pub transition_type: u64,
}

impl PacketType for UpdateBlockSynced {
    const ID: u32 = id::UPDATE_BLOCK_SYNCED;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(UpdateBlockSynced {
            position: BlockPos::read(reader)?,
            new_block_runtime_id: VarU32::read(reader)?.0,
            flags: VarU32::read(reader)?.0,
            layer: VarU32::read(reader)?.0,
            entity_unique_id: VarU64::read(reader)?.0,
            transition_type: VarU64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.position.write(writer)?;
        VarU32(self.new_block_runtime_id).write(writer)?;
        VarU32(self.flags).write(writer)?;
        VarU32(self.layer).write(writer)?;
        VarU64(self.entity_unique_id).write(writer)?;
        VarU64(self.transition_type).write(writer)?;
        Ok(())
    }
}

/// A single synced block change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockChangeEntry {
    /// Position of the changed block
    pub position: BlockPos,
    /// Runtime ID of the new block state
    pub block_runtime_id: u32,
    /// Update flags
    pub flags: u32,
    /// Identifier of the entity that caused the change; unsigned on the wire
    /// but numbered like the signed unique IDs
    pub synced_update_entity_unique_id: u64,
    /// Type of the synced update
    pub synced_update_type: u32,
}

impl BlockChangeEntry {
    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(BlockChangeEntry {
            position: BlockPos::read(reader)?,
            block_runtime_id: VarU32::read(reader)?.0,
            flags: VarU32::read(reader)?.0,
            synced_update_entity_unique_id: VarU64::read(reader)?.0,
            synced_update_type: VarU32::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.position.write(writer)?;
        VarU32(self.block_runtime_id).write(writer)?;
        VarU32(self.flags).write(writer)?;
        VarU64(self.synced_update_entity_unique_id).write(writer)?;
        VarU32(self.synced_update_type).write(writer)?;
        Ok(())
    }

    fn read_list<R: Read>(reader: &mut R) -> Result<Vec<Self>> {
        let count = VarU32::read(reader)?.0;
        let mut entries = Vec::new();
        for _ in 0..count {
            entries.push(BlockChangeEntry::read(reader)?);
        }
        Ok(entries)
    }

    fn write_list<W: Write>(entries: &[Self], writer: &mut W) -> Result<()> {
        VarU32(entries.len() as u32).write(writer)?;
        for entry in entries {
            entry.write(writer)?;
        }
        Ok(())
    }
}

/// Updates blocks across a sub chunk
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateSubChunkBlocks {
    /// Position of the sub chunk
    pub position: BlockPos,
    /// Standard layer changes
    pub blocks: Vec<BlockChangeEntry>,
    /// Extra layer changes
    pub extra: Vec<BlockChangeEntry>,
}

impl PacketType for UpdateSubChunkBlocks {
    const ID: u32 = id::UPDATE_SUB_CHUNK_BLOCKS;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(UpdateSubChunkBlocks {
            position: BlockPos::read(reader)?,
            blocks: BlockChangeEntry::read_list(reader)?,
            extra: BlockChangeEntry::read_list(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.position.write(writer)?;
        BlockChangeEntry::write_list(&self.blocks, writer)?;
        BlockChangeEntry::write_list(&self.extra, writer)?;
        Ok(())
    }
}

/// Settings of a structure block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructureSettings {
    /// Name of the block palette used
    pub palette_name: String,
    /// Whether entities are ignored
    pub ignore_entities: bool,
    /// Whether blocks are ignored
    pub ignore_blocks: bool,
    /// Size of the structure area
    pub size: BlockPos,
    /// Offset of the structure area
    pub offset: BlockPos,
    /// Unique ID of the player that last edited the block
    pub last_editing_player_unique_id: i64,
    /// Rotation of the structure
    pub rotation: u8,
    /// Mirror mode of the structure
    pub mirror: u8,
    /// Integrity of the structure placement
    pub integrity: f32,
    /// Seed used for integrity placement
    pub seed: u32,
    /// Pivot point of the rotation
    pub pivot: Vec3,
}

impl StructureSettings {
    /// Read structure settings from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(StructureSettings {
            palette_name: read_string(reader)?,
            ignore_entities: read_bool(reader)?,
            ignore_blocks: read_bool(reader)?,
            size: BlockPos::read(reader)?,
            offset: BlockPos::read(reader)?,
            last_editing_player_unique_id: VarI64::read(reader)?.0,
            rotation: read_u8(reader)?,
            mirror: read_u8(reader)?,
            integrity: read_f32(reader)?,
            seed: read_u32(reader)?,
            pivot: Vec3::read(reader)?,
        })
    }

    /// Write structure settings to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.palette_name, writer)?;
        write_bool(self.ignore_entities, writer)?;
        write_bool(self.ignore_blocks, writer)?;
        self.size.write(writer)?;
        self.offset.write(writer)?;
        VarI64(self.last_editing_player_unique_id).write(writer)?;
        write_u8(self.rotation, writer)?;
        write_u8(self.mirror, writer)?;
        write_f32(self.integrity, writer)?;
        write_u32(self.seed, writer)?;
        self.pivot.write(writer)?;
        Ok(())
    }
}

/// Updates a structure block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructureBlockUpdate {
    /// Position of the structure block
    pub position: BlockPos,
    /// Name of the structure
    pub structure_name: String,
    /// Data field of the block
    pub data_field: String,
    /// Whether players are included
    pub include_players: bool,
    /// Whether the bounding box is shown
    pub show_bounding_box: bool,
    /// Structure block type
    pub structure_block_type: i32,
    /// Structure settings
    pub settings: StructureSettings,
    /// Redstone save mode
    pub redstone_save_mode: i32,
    /// Whether the block should trigger immediately
    pub should_trigger: bool,
    /// Whether the structure is waterlogged
    pub water_logged: bool,
}

impl PacketType for StructureBlockUpdate {
    const ID: u32 = id::STRUCTURE_BLOCK_UPDATE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(StructureBlockUpdate {
            position: BlockPos::read(reader)?,
            structure_name: read_string(reader)?,
            data_field: read_string(reader)?,
            include_players: read_bool(reader)?,
            show_bounding_box: read_bool(reader)?,
            structure_block_type: VarI32::read(reader)?.0,
            settings: StructureSettings::read(reader)?,
            redstone_save_mode: VarI32::read(reader)?.0,
            should_trigger: read_bool(reader)?,
            water_logged: read_bool(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.position.write(writer)?;
        write_string(&self.structure_name, writer)?;
        write_string(&self.data_field, writer)?;
        write_bool(self.include_players, writer)?;
        write_bool(self.show_bounding_box, writer)?;
        VarI32(self.structure_block_type).write(writer)?;
        self.settings.write(writer)?;
        VarI32(self.redstone_save_mode).write(writer)?;
        write_bool(self.should_trigger, writer)?;
        write_bool(self.water_logged, writer)?;
        Ok(())
    }
}

/// Requests structure template data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructureTemplateDataRequest {
    /// Name of the structure
    pub structure_name: String,
    /// Position of the structure block
    pub position: BlockPos,
    /// Structure settings
    pub settings: StructureSettings,
    /// Request type
    pub request_type: u8,
}

impl PacketType for StructureTemplateDataRequest {
    const ID: u32 = id::STRUCTURE_TEMPLATE_DATA_REQUEST;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(StructureTemplateDataRequest {
            structure_name: read_string(reader)?,
            position: BlockPos::read(reader)?,
            settings: StructureSettings::read(reader)?,
            request_type: read_u8(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.structure_name, writer)?;
        self.position.write(writer)?;
        self.settings.write(writer)?;
        write_u8(self.request_type, writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_start_game_roundtrip() {
        let packet = StartGame {
            entity_unique_id: 42,
            entity_runtime_id: 42,
            player_game_mode: 1,
            player_position: Vec3::new(0.5, 64.0, 0.5),
            world_seed: -123,
            dimension: 0,
            world_spawn: BlockPos::new(0, 64, 0),
            difficulty: 2,
            game_rules: vec![GameRule {
                name: "doDaylightCycle".to_string(),
                editable: true,
                value: crate::protocol::game_data::GameRuleValue::Bool(true),
            }],
            time: 6000,
            achievements_disabled: true,
            generator: 1,
            education_features_enabled: true,
            multiplayer_game: true,
            multiplayer_correlation_id: "e4cfcd91-1f38-4f2c-b2ec-b9b5e0f0a9f1".to_string(),
            commands_enabled: true,
            world_name: "world".to_string(),
            lan_broadcast_enabled: true,
            world_game_mode: 0,
            server_authoritative_inventory: true,
            player_permissions: 1,
            base_game_version: "*".to_string(),
            game_version: crate::protocol::CURRENT_VERSION.to_string(),
            items: vec![ItemEntry {
                name: "minecraft:shield".to_string(),
                runtime_id: 355,
                component_based: false,
            }],
            ..Default::default()
        };

        let mut buffer = Vec::new();
        packet.write(&mut buffer).unwrap();

        let decoded = StartGame::read(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(packet, decoded);
    }

    #[test]
    fn test_command_block_update_variants() {
        let block = CommandBlockUpdate {
            block: true,
            position: BlockPos::new(1, 70, -4),
            mode: 1,
            needs_redstone: true,
            command: "/say hi".to_string(),
            ..Default::default()
        };
        let minecart = CommandBlockUpdate {
            block: false,
            minecart_entity_runtime_id: 42,
            command: "/say hi".to_string(),
            ..Default::default()
        };

        for packet in [block, minecart] {
            let mut buffer = Vec::new();
            packet.write(&mut buffer).unwrap();
            let decoded = CommandBlockUpdate::read(&mut Cursor::new(buffer)).unwrap();
            assert_eq!(packet, decoded);
        }
    }

    #[test]
    fn test_event_payload_variants() {
        let packets = [
            Event {
                entity_runtime_id: 1,
                use_player_id: 1,
                data: EventData::MobKilled {
                    killer_entity_unique_id: 1,
                    victim_entity_unique_id: -3,
                    damage_cause: 2,
                },
            },
            Event {
                entity_runtime_id: 1,
                use_player_id: 0,
                data: EventData::BossKilled {
                    boss_entity_unique_id: 9,
                },
            },
            Event {
                entity_runtime_id: 5,
                use_player_id: 0,
                data: EventData::Generic {
                    event_type: 12,
                    value: 4,
                },
            },
        ];

        for packet in packets {
            let mut buffer = Vec::new();
            packet.write(&mut buffer).unwrap();
            let decoded = Event::read(&mut Cursor::new(buffer)).unwrap();
            assert_eq!(packet, decoded);
        }
    }

    #[test]
    fn test_disconnect_message_is_conditional() {
        let hidden = Disconnect {
            hide_disconnection_screen: true,
            message: String::new(),
        };
        let shown = Disconnect {
            hide_disconnection_screen: false,
            message: "server closed".to_string(),
        };

        for packet in [hidden, shown] {
            let mut buffer = Vec::new();
            packet.write(&mut buffer).unwrap();
            let decoded = Disconnect::read(&mut Cursor::new(buffer)).unwrap();
            assert_eq!(packet, decoded);
        }
    }
}
