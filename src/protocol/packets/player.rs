//! Player-scoped game packets
//!
//! Packets tied to the bound player: spawning other players, movement,
//! actions, abilities and the player list.

use crate::error::Result;
use crate::protocol::packets::{PacketType, id};
use crate::protocol::types::{
    EntityLink, ItemStack, Metadata, VarI32, VarI64, VarU32, VarU64, Vec2, Vec3, read_bool,
    read_f32, read_i32, read_i64, read_string, read_u8, read_u16, read_u32, read_uuid, write_bool,
    write_f32, write_i32, write_i64, write_string, write_u8, write_u16, write_u32, write_uuid,
};
use std::io::{Read, Write};
use uuid::Uuid;

/// Movement mode: the player was teleported
pub const MOVE_MODE_TELEPORT: u8 = 2;

/// Input flag: the client predicts the vehicle it rides
pub const INPUT_FLAG_CLIENT_PREDICTED_VEHICLE: u64 = 1 << 60;

/// Player-list action: add entries
pub const PLAYER_LIST_ADD: u8 = 0;
/// Player-list action: remove entries
pub const PLAYER_LIST_REMOVE: u8 = 1;

/// A single layer of the ability stack
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AbilityLayer {
    /// Layer type
    pub layer_type: u16,
    /// Abilities the layer sets
    pub abilities: u32,
    /// Values of the set abilities
    pub values: u32,
    /// Fly speed granted by the layer
    pub fly_speed: f32,
    /// Walk speed granted by the layer
    pub walk_speed: f32,
}

impl AbilityLayer {
    /// Read an ability layer from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(AbilityLayer {
            layer_type: read_u16(reader)?,
            abilities: read_u32(reader)?,
            values: read_u32(reader)?,
            fly_speed: read_f32(reader)?,
            walk_speed: read_f32(reader)?,
        })
    }

    /// Write an ability layer to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_u16(self.layer_type, writer)?;
        write_u32(self.abilities, writer)?;
        write_u32(self.values, writer)?;
        write_f32(self.fly_speed, writer)?;
        write_f32(self.walk_speed, writer)?;
        Ok(())
    }
}

/// The full ability state of a player
///
/// The unique ID is a fixed-width little-endian integer here, unlike the
/// varints used elsewhere.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AbilityData {
    /// Unique ID of the player the abilities belong to
    pub entity_unique_id: i64,
    /// Player permission level
    pub player_permissions: u8,
    /// Command permission level
    pub command_permissions: u8,
    /// Ability layers, top of the stack last
    pub layers: Vec<AbilityLayer>,
}

impl AbilityData {
    /// Read ability data from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let entity_unique_id = read_i64(reader)?;
        let player_permissions = read_u8(reader)?;
        let command_permissions = read_u8(reader)?;

        let count = VarU32::read(reader)?.0;
        let mut layers = Vec::new();
        for _ in 0..count {
            layers.push(AbilityLayer::read(reader)?);
        }

        Ok(AbilityData {
            entity_unique_id,
            player_permissions,
            command_permissions,
            layers,
        })
    }

    /// Write ability data to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_i64(self.entity_unique_id, writer)?;
        write_u8(self.player_permissions, writer)?;
        write_u8(self.command_permissions, writer)?;
        VarU32(self.layers.len() as u32).write(writer)?;
        for layer in &self.layers {
            layer.write(writer)?;
        }
        Ok(())
    }
}

/// Spawns another player for the client
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddPlayer {
    /// UUID of the player
    pub uuid: Uuid,
    /// Username of the player
    pub username: String,
    /// Runtime ID of the player entity
    pub entity_runtime_id: u64,
    /// Platform chat identifier
    pub platform_chat_id: String,
    /// Spawn position
    pub position: Vec3,
    /// Initial velocity
    pub velocity: Vec3,
    /// Spawn pitch
    pub pitch: f32,
    /// Spawn yaw
    pub yaw: f32,
    /// Spawn head yaw
    pub head_yaw: f32,
    /// Item held by the player
    pub held_item: ItemStack,
    /// Game type of the player
    pub game_type: i32,
    /// Initial metadata
    pub metadata: Metadata,
    /// Ability state; carries the player's unique ID
    pub ability_data: AbilityData,
    /// Links to ridden or riding entities
    pub entity_links: Vec<EntityLink>,
    /// Device identifier of the player
    pub device_id: String,
    /// Platform the player plays on
    pub build_platform: i32,
}

impl PacketType for AddPlayer {
    const ID: u32 = id::ADD_PLAYER;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(AddPlayer {
            uuid: read_uuid(reader)?,
            username: read_string(reader)?,
            entity_runtime_id: VarU64::read(reader)?.0,
            platform_chat_id: read_string(reader)?,
            position: Vec3::read(reader)?,
            velocity: Vec3::read(reader)?,
            pitch: read_f32(reader)?,
            yaw: read_f32(reader)?,
            head_yaw: read_f32(reader)?,
            held_item: ItemStack::read(reader)?,
            game_type: VarI32::read(reader)?.0,
            metadata: Metadata::read(reader)?,
            ability_data: AbilityData::read(reader)?,
            entity_links: EntityLink::read_list(reader)?,
            device_id: read_string(reader)?,
            build_platform: read_i32(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_uuid(&self.uuid, writer)?;
        write_string(&self.username, writer)?;
        VarU64(self.entity_runtime_id).write(writer)?;
        write_string(&self.platform_chat_id, writer)?;
        self.position.write(writer)?;
        self.velocity.write(writer)?;
        write_f32(self.pitch, writer)?;
        write_f32(self.yaw, writer)?;
        write_f32(self.head_yaw, writer)?;
        self.held_item.write(writer)?;
        VarI32(self.game_type).write(writer)?;
        self.metadata.write(writer)?;
        self.ability_data.write(writer)?;
        EntityLink::write_list(&self.entity_links, writer)?;
        write_string(&self.device_id, writer)?;
        write_i32(self.build_platform, writer)?;
        Ok(())
    }
}

/// Moves the player, or corrects its position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovePlayer {
    /// Runtime ID of the player entity
    pub entity_runtime_id: u64,
    /// New position
    pub position: Vec3,
    /// New pitch
    pub pitch: f32,
    /// New yaw
    pub yaw: f32,
    /// New head yaw
    pub head_yaw: f32,
    /// Movement mode (normal, reset, teleport)
    pub mode: u8,
    /// Whether the player is on the ground
    pub on_ground: bool,
    /// Runtime ID of the entity ridden, or zero
    pub ridden_entity_runtime_id: u64,
    /// Teleport cause; only on the wire when the mode is teleport
    pub teleport_cause: i32,
    /// Actor type that caused the teleport; only on the wire when the mode is
    /// teleport
    pub teleport_source_actor_type: i32,
    /// Server tick the movement applies at
    pub tick: u64,
}

impl PacketType for MovePlayer {
    const ID: u32 = id::MOVE_PLAYER;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let entity_runtime_id = VarU64::read(reader)?.0;
        let position = Vec3::read(reader)?;
        let pitch = read_f32(reader)?;
        let yaw = read_f32(reader)?;
        let head_yaw = read_f32(reader)?;
        let mode = read_u8(reader)?;
        let on_ground = read_bool(reader)?;
        let ridden_entity_runtime_id = VarU64::read(reader)?.0;

        let (teleport_cause, teleport_source_actor_type) = if mode == MOVE_MODE_TELEPORT {
            (read_i32(reader)?, read_i32(reader)?)
        } else {
            (0, 0)
        };

        Ok(MovePlayer {
            entity_runtime_id,
            position,
            pitch,
            yaw,
            head_yaw,
            mode,
            on_ground,
            ridden_entity_runtime_id,
            teleport_cause,
            teleport_source_actor_type,
            tick: VarU64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        self.position.write(writer)?;
        write_f32(self.pitch, writer)?;
        write_f32(self.yaw, writer)?;
        write_f32(self.head_yaw, writer)?;
        write_u8(self.mode, writer)?;
        write_bool(self.on_ground, writer)?;
        VarU64(self.ridden_entity_runtime_id).write(writer)?;
        if self.mode == MOVE_MODE_TELEPORT {
            write_i32(self.teleport_cause, writer)?;
            write_i32(self.teleport_source_actor_type, writer)?;
        }
        VarU64(self.tick).write(writer)?;
        Ok(())
    }
}

/// Reports a player action such as starting to break a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerAction {
    /// Runtime ID of the player entity
    pub entity_runtime_id: u64,
    /// Action type
    pub action_type: i32,
    /// Block position the action targets
    pub block_position: crate::protocol::types::BlockPos,
    /// Result position of the action
    pub result_position: crate::protocol::types::BlockPos,
    /// Face of the block the action targets
    pub block_face: i32,
}

impl PacketType for PlayerAction {
    const ID: u32 = id::PLAYER_ACTION;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(PlayerAction {
            entity_runtime_id: VarU64::read(reader)?.0,
            action_type: VarI32::read(reader)?.0,
            block_position: crate::protocol::types::BlockPos::read(reader)?,
            result_position: crate::protocol::types::BlockPos::read(reader)?,
            block_face: VarI32::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        VarI32(self.action_type).write(writer)?;
        self.block_position.write(writer)?;
        self.result_position.write(writer)?;
        VarI32(self.block_face).write(writer)?;
        Ok(())
    }
}

/// The combined client input of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerAuthInput {
    /// Pitch of the player
    pub pitch: f32,
    /// Yaw of the player
    pub yaw: f32,
    /// Position of the player
    pub position: Vec3,
    /// Raw movement vector
    pub move_vector: Vec2,
    /// Head yaw of the player
    pub head_yaw: f32,
    /// Bitset of pressed inputs
    pub input_data: u64,
    /// Input mode (mouse, touch, controller)
    pub input_mode: u32,
    /// Play mode (normal, VR)
    pub play_mode: u32,
    /// Client tick of the input
    pub tick: u64,
    /// Position delta since the last tick
    pub delta: Vec3,
    /// Unique ID of the client-predicted vehicle; only on the wire when the
    /// matching input flag is set
    pub client_predicted_vehicle: i64,
}

impl PacketType for PlayerAuthInput {
    const ID: u32 = id::PLAYER_AUTH_INPUT;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let pitch = read_f32(reader)?;
        let yaw = read_f32(reader)?;
        let position = Vec3::read(reader)?;
        let move_vector = Vec2::read(reader)?;
        let head_yaw = read_f32(reader)?;
        let input_data = VarU64::read(reader)?.0;
        let input_mode = VarU32::read(reader)?.0;
        let play_mode = VarU32::read(reader)?.0;
        let tick = VarU64::read(reader)?.0;
        let delta = Vec3::read(reader)?;

        let client_predicted_vehicle = if input_data & INPUT_FLAG_CLIENT_PREDICTED_VEHICLE != 0 {
            VarI64::read(reader)?.0
        } else {
            0
        };

        Ok(PlayerAuthInput {
            pitch,
            yaw,
            position,
            move_vector,
            head_yaw,
            input_data,
            input_mode,
            play_mode,
            tick,
            delta,
            client_predicted_vehicle,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_f32(self.pitch, writer)?;
        write_f32(self.yaw, writer)?;
        self.position.write(writer)?;
        self.move_vector.write(writer)?;
        write_f32(self.head_yaw, writer)?;
        VarU64(self.input_data).write(writer)?;
        VarU32(self.input_mode).write(writer)?;
        VarU32(self.play_mode).write(writer)?;
        VarU64(self.tick).write(writer)?;
        self.delta.write(writer)?;
        if self.input_data & INPUT_FLAG_CLIENT_PREDICTED_VEHICLE != 0 {
            VarI64(self.client_predicted_vehicle).write(writer)?;
        }
        Ok(())
    }
}

/// A row of the player list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerListEntry {
    /// UUID of the player
    pub uuid: Uuid,
    /// Unique ID of the player entity
    pub entity_unique_id: i64,
    /// Username of the player
    pub username: String,
    /// XUID of the player
    pub xuid: String,
    /// Platform chat identifier
    pub platform_chat_id: String,
    /// Platform the player plays on
    pub build_platform: i32,
    /// Whether the player hosts the world
    pub host: bool,
}

/// Adds or removes player-list rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerList {
    /// Whether rows are added or removed
    pub action: u8,
    /// The rows changed; removals carry only the UUID
    pub entries: Vec<PlayerListEntry>,
}

impl PacketType for PlayerList {
    const ID: u32 = id::PLAYER_LIST;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let action = read_u8(reader)?;
        let count = VarU32::read(reader)?.0;
        let mut entries = Vec::new();

        for _ in 0..count {
            if action == PLAYER_LIST_REMOVE {
                entries.push(PlayerListEntry {
                    uuid: read_uuid(reader)?,
                    ..Default::default()
                });
                continue;
            }
            entries.push(PlayerListEntry {
                uuid: read_uuid(reader)?,
                entity_unique_id: VarI64::read(reader)?.0,
                username: read_string(reader)?,
                xuid: read_string(reader)?,
                platform_chat_id: read_string(reader)?,
                build_platform: read_i32(reader)?,
                host: read_bool(reader)?,
            });
        }

        Ok(PlayerList { action, entries })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_u8(self.action, writer)?;
        VarU32(self.entries.len() as u32).write(writer)?;
        for entry in &self.entries {
            write_uuid(&entry.uuid, writer)?;
            if self.action == PLAYER_LIST_REMOVE {
                continue;
            }
            VarI64(entry.entity_unique_id).write(writer)?;
            write_string(&entry.username, writer)?;
            write_string(&entry.xuid, writer)?;
            write_string(&entry.platform_chat_id, writer)?;
            write_i32(entry.build_platform, writer)?;
            write_bool(entry.host, writer)?;
        }
        Ok(())
    }
}

/// Respawns the player after death
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Respawn {
    /// Respawn position
    pub position: Vec3,
    /// Respawn state
    pub state: u8,
    /// Runtime ID of the player entity
    pub entity_runtime_id: u64,
}

impl PacketType for Respawn {
    const ID: u32 = id::RESPAWN;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Respawn {
            position: Vec3::read(reader)?,
            state: read_u8(reader)?,
            entity_runtime_id: VarU64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.position.write(writer)?;
        write_u8(self.state, writer)?;
        VarU64(self.entity_runtime_id).write(writer)?;
        Ok(())
    }
}

/// Plays a built-in animation on an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Animate {
    /// Animation action type
    pub action_type: i32,
    /// Runtime ID of the animated entity
    pub entity_runtime_id: u64,
}

impl PacketType for Animate {
    const ID: u32 = id::ANIMATE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Animate {
            action_type: VarI32::read(reader)?.0,
            entity_runtime_id: VarU64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI32(self.action_type).write(writer)?;
        VarU64(self.entity_runtime_id).write(writer)?;
        Ok(())
    }
}

/// Plays an emote on an entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Emote {
    /// Runtime ID of the emoting entity
    pub entity_runtime_id: u64,
    /// Identifier of the emote played
    pub emote_id: String,
    /// XUID of the emoting player
    pub xuid: String,
    /// Platform identifier of the emoting player
    pub platform_id: String,
    /// Emote flags
    pub flags: u8,
}

impl PacketType for Emote {
    const ID: u32 = id::EMOTE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Emote {
            entity_runtime_id: VarU64::read(reader)?.0,
            emote_id: read_string(reader)?,
            xuid: read_string(reader)?,
            platform_id: read_string(reader)?,
            flags: read_u8(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        write_string(&self.emote_id, writer)?;
        write_string(&self.xuid, writer)?;
        write_string(&self.platform_id, writer)?;
        write_u8(self.flags, writer)?;
        Ok(())
    }
}

/// Announces the emotes a player owns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmoteList {
    /// Runtime ID of the owning player
    pub player_runtime_id: u64,
    /// Emote piece IDs
    pub emote_pieces: Vec<Uuid>,
}

impl PacketType for EmoteList {
    const ID: u32 = id::EMOTE_LIST;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let player_runtime_id = VarU64::read(reader)?.0;
        let count = VarU32::read(reader)?.0;
        let mut emote_pieces = Vec::new();
        for _ in 0..count {
            emote_pieces.push(read_uuid(reader)?);
        }
        Ok(EmoteList {
            player_runtime_id,
            emote_pieces,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.player_runtime_id).write(writer)?;
        VarU32(self.emote_pieces.len() as u32).write(writer)?;
        for piece in &self.emote_pieces {
            write_uuid(piece, writer)?;
        }
        Ok(())
    }
}

/// Reports an interaction with an entity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Interact {
    /// Interaction type
    pub action_type: u8,
    /// Runtime ID of the interacted entity
    pub target_entity_runtime_id: u64,
    /// Position of the interaction
    pub position: Vec3,
}

impl PacketType for Interact {
    const ID: u32 = id::INTERACT;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Interact {
            action_type: read_u8(reader)?,
            target_entity_runtime_id: VarU64::read(reader)?.0,
            position: Vec3::read(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_u8(self.action_type, writer)?;
        VarU64(self.target_entity_runtime_id).write(writer)?;
        self.position.write(writer)?;
        Ok(())
    }
}

/// Marks the local player as fully initialised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetLocalPlayerAsInitialised {
    /// Runtime ID of the player entity
    pub entity_runtime_id: u64,
}

impl PacketType for SetLocalPlayerAsInitialised {
    const ID: u32 = id::SET_LOCAL_PLAYER_AS_INITIALISED;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(SetLocalPlayerAsInitialised {
            entity_runtime_id: VarU64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)
    }
}

/// Replaces the ability state of a player
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateAbilities {
    /// The new ability state
    pub ability_data: AbilityData,
}

impl PacketType for UpdateAbilities {
    const ID: u32 = id::UPDATE_ABILITIES;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(UpdateAbilities {
            ability_data: AbilityData::read(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.ability_data.write(writer)
    }
}

/// Legacy ability packet retained for older clients
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientCheatAbility {
    /// The ability state
    pub ability_data: AbilityData,
}

impl PacketType for ClientCheatAbility {
    const ID: u32 = id::CLIENT_CHEAT_ABILITY;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(ClientCheatAbility {
            ability_data: AbilityData::read(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.ability_data.write(writer)
    }
}

/// Changes the game type of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdatePlayerGameType {
    /// New game type
    pub game_type: i32,
    /// Unique ID of the player changed
    pub player_unique_id: i64,
    /// Server tick the change applies at
    pub tick: u64,
}

impl PacketType for UpdatePlayerGameType {
    const ID: u32 = id::UPDATE_PLAYER_GAME_TYPE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(UpdatePlayerGameType {
            game_type: VarI32::read(reader)?.0,
            player_unique_id: VarI64::read(reader)?.0,
            tick: VarU64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI32(self.game_type).write(writer)?;
        VarI64(self.player_unique_id).write(writer)?;
        VarU64(self.tick).write(writer)?;
        Ok(())
    }
}

/// Legacy adventure settings packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdventureSettings {
    /// World flags
    pub flags: u32,
    /// Command permission level
    pub command_permission_level: u32,
    /// Action permissions
    pub action_permissions: u32,
    /// Permission level
    pub permission_level: u32,
    /// Custom stored permissions
    pub custom_stored_permissions: u32,
    /// Unique ID of the player the settings apply to
    pub player_unique_id: i64,
}

impl PacketType for AdventureSettings {
    const ID: u32 = id::ADVENTURE_SETTINGS;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(AdventureSettings {
            flags: VarU32::read(reader)?.0,
            command_permission_level: VarU32::read(reader)?.0,
            action_permissions: VarU32::read(reader)?.0,
            permission_level: VarU32::read(reader)?.0,
            custom_stored_permissions: VarU32::read(reader)?.0,
            player_unique_id: read_i64(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU32(self.flags).write(writer)?;
        VarU32(self.command_permission_level).write(writer)?;
        VarU32(self.action_permissions).write(writer)?;
        VarU32(self.permission_level).write(writer)?;
        VarU32(self.custom_stored_permissions).write(writer)?;
        write_i64(self.player_unique_id, writer)?;
        Ok(())
    }
}

/// Rolls the credits, or reports them finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShowCredits {
    /// Runtime ID of the player entity
    pub player_runtime_id: u64,
    /// Credits status (start, end)
    pub status_type: i32,
}

impl PacketType for ShowCredits {
    const ID: u32 = id::SHOW_CREDITS;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(ShowCredits {
            player_runtime_id: VarU64::read(reader)?.0,
            status_type: VarI32::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.player_runtime_id).write(writer)?;
        VarI32(self.status_type).write(writer)?;
        Ok(())
    }
}

/// Forwards an interaction with an NPC dialogue
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NPCRequest {
    /// Runtime ID of the NPC
    pub entity_runtime_id: u64,
    /// Request type
    pub request_type: u8,
    /// Command string attached to the request
    pub command_string: String,
    /// Action type of the request
    pub action_type: u8,
    /// Scene name of the dialogue
    pub scene_name: String,
}

impl PacketType for NPCRequest {
    const ID: u32 = id::NPC_REQUEST;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(NPCRequest {
            entity_runtime_id: VarU64::read(reader)?.0,
            request_type: read_u8(reader)?,
            command_string: read_string(reader)?,
            action_type: read_u8(reader)?,
            scene_name: read_string(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        write_u8(self.request_type, writer)?;
        write_string(&self.command_string, writer)?;
        write_u8(self.action_type, writer)?;
        write_string(&self.scene_name, writer)?;
        Ok(())
    }
}

/// Opens or updates an NPC dialogue window
///
/// The entity identifier is stored unsigned on the wire but numbered like the
/// signed unique IDs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NPCDialogue {
    /// Identifier of the NPC
    pub entity_unique_id: u64,
    /// Action type of the dialogue
    pub action_type: i32,
    /// Dialogue text shown
    pub dialogue: String,
    /// Scene name of the dialogue
    pub scene_name: String,
    /// Name of the NPC
    pub npc_name: String,
    /// JSON action payload
    pub action_json: String,
}

impl PacketType for NPCDialogue {
    const ID: u32 = id::NPC_DIALOGUE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(NPCDialogue {
            entity_unique_id: u64::from_le_bytes({
                let mut bytes = [0u8; 8];
                reader.read_exact(&mut bytes)?;
                bytes
            }),
            action_type: VarI32::read(reader)?.0,
            dialogue: read_string(reader)?,
            scene_name: read_string(reader)?,
            npc_name: read_string(reader)?,
            action_json: read_string(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.entity_unique_id.to_le_bytes())?;
        VarI32(self.action_type).write(writer)?;
        write_string(&self.dialogue, writer)?;
        write_string(&self.scene_name, writer)?;
        write_string(&self.npc_name, writer)?;
        write_string(&self.action_json, writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_add_player_roundtrip() {
        let packet = AddPlayer {
            uuid: Uuid::from_bytes([7; 16]),
            username: "Steve".to_string(),
            entity_runtime_id: 1,
            platform_chat_id: String::new(),
            position: Vec3::new(0.5, 64.0, 0.5),
            velocity: Vec3::default(),
            pitch: 0.0,
            yaw: 0.0,
            head_yaw: 0.0,
            held_item: ItemStack {
                network_id: 355,
                count: 1,
                metadata: 0,
            },
            game_type: 1,
            metadata: Metadata::new(),
            ability_data: AbilityData {
                entity_unique_id: 1,
                player_permissions: 1,
                command_permissions: 0,
                layers: vec![AbilityLayer {
                    layer_type: 1,
                    abilities: 0x3FF,
                    values: 0x1FF,
                    fly_speed: 0.05,
                    walk_speed: 0.1,
                }],
            },
            entity_links: Vec::new(),
            device_id: "a-device".to_string(),
            build_platform: 7,
        };

        let mut buffer = Vec::new();
        packet.write(&mut buffer).unwrap();

        let decoded = AddPlayer::read(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(packet, decoded);
    }

    #[test]
    fn test_move_player_teleport_fields_are_conditional() {
        let normal = MovePlayer {
            entity_runtime_id: 1,
            mode: 0,
            ..Default::default()
        };
        let teleport = MovePlayer {
            entity_runtime_id: 1,
            mode: MOVE_MODE_TELEPORT,
            teleport_cause: 3,
            teleport_source_actor_type: 2,
            ..Default::default()
        };

        for packet in [normal, teleport] {
            let mut buffer = Vec::new();
            packet.write(&mut buffer).unwrap();
            let decoded = MovePlayer::read(&mut Cursor::new(buffer)).unwrap();
            assert_eq!(packet, decoded);
        }
    }

    #[test]
    fn test_player_list_remove_carries_only_uuids() {
        let packet = PlayerList {
            action: PLAYER_LIST_REMOVE,
            entries: vec![PlayerListEntry {
                uuid: Uuid::from_bytes([9; 16]),
                ..Default::default()
            }],
        };

        let mut buffer = Vec::new();
        packet.write(&mut buffer).unwrap();
        // Action byte, one-entry count, sixteen UUID bytes.
        assert_eq!(buffer.len(), 1 + 1 + 16);

        let decoded = PlayerList::read(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(packet, decoded);
    }

    #[test]
    fn test_player_auth_input_vehicle_flag() {
        let packet = PlayerAuthInput {
            input_data: INPUT_FLAG_CLIENT_PREDICTED_VEHICLE,
            client_predicted_vehicle: 42,
            ..Default::default()
        };

        let mut buffer = Vec::new();
        packet.write(&mut buffer).unwrap();

        let decoded = PlayerAuthInput::read(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(packet, decoded);
    }
}
