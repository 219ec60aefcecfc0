//! Typed packets
//!
//! This module contains the packet set the listener decodes: the proxy
//! control plane and the game packets the bridge must inspect, organized by
//! scope. Each packet implements [`PacketType`]; the [`Packet`] enum is the
//! tagged-variant form the session connection reads and writes.
//!
//! Packets not in this set never need a typed form on the backend; they are
//! forwarded opaquely by the proxy and do not reach this process.

pub mod actor;
pub mod bridge;
pub mod player;
pub mod scoreboard;
pub mod world;

use crate::error::Result;
use std::io::{Read, Write};

/// Trait for all typed packets
pub trait PacketType: Sized {
    /// The packet ID
    const ID: u32;

    /// Read the packet body from a reader
    fn read<R: Read>(reader: &mut R) -> Result<Self>;

    /// Write the packet body to a writer
    fn write<W: Write>(&self, writer: &mut W) -> Result<()>;
}

/// Packet IDs
///
/// The game IDs follow the Bedrock protocol numbering; the bridge control
/// plane occupies a reserved range above it. The header packs IDs into ten
/// bits, so everything stays below 1024.
pub mod id {
    /// PlayStatus
    pub const PLAY_STATUS: u32 = 2;
    /// Disconnect
    pub const DISCONNECT: u32 = 5;
    /// StartGame
    pub const START_GAME: u32 = 11;
    /// AddPlayer
    pub const ADD_PLAYER: u32 = 12;
    /// AddActor
    pub const ADD_ACTOR: u32 = 13;
    /// RemoveActor
    pub const REMOVE_ACTOR: u32 = 14;
    /// AddItemActor
    pub const ADD_ITEM_ACTOR: u32 = 15;
    /// TakeItemActor
    pub const TAKE_ITEM_ACTOR: u32 = 17;
    /// MoveActorAbsolute
    pub const MOVE_ACTOR_ABSOLUTE: u32 = 18;
    /// MovePlayer
    pub const MOVE_PLAYER: u32 = 19;
    /// AddPainting
    pub const ADD_PAINTING: u32 = 22;
    /// ActorEvent
    pub const ACTOR_EVENT: u32 = 27;
    /// MobEffect
    pub const MOB_EFFECT: u32 = 28;
    /// UpdateAttributes
    pub const UPDATE_ATTRIBUTES: u32 = 29;
    /// InventoryTransaction
    pub const INVENTORY_TRANSACTION: u32 = 30;
    /// MobEquipment
    pub const MOB_EQUIPMENT: u32 = 31;
    /// MobArmourEquipment
    pub const MOB_ARMOUR_EQUIPMENT: u32 = 32;
    /// Interact
    pub const INTERACT: u32 = 33;
    /// ActorPickRequest
    pub const ACTOR_PICK_REQUEST: u32 = 35;
    /// PlayerAction
    pub const PLAYER_ACTION: u32 = 36;
    /// SetActorData
    pub const SET_ACTOR_DATA: u32 = 39;
    /// SetActorMotion
    pub const SET_ACTOR_MOTION: u32 = 40;
    /// SetActorLink
    pub const SET_ACTOR_LINK: u32 = 41;
    /// Animate
    pub const ANIMATE: u32 = 44;
    /// Respawn
    pub const RESPAWN: u32 = 45;
    /// ContainerOpen
    pub const CONTAINER_OPEN: u32 = 46;
    /// AdventureSettings
    pub const ADVENTURE_SETTINGS: u32 = 55;
    /// PlayerList
    pub const PLAYER_LIST: u32 = 63;
    /// Event
    pub const EVENT: u32 = 65;
    /// ClientBoundMapItemData
    pub const CLIENT_BOUND_MAP_ITEM_DATA: u32 = 67;
    /// RequestChunkRadius
    pub const REQUEST_CHUNK_RADIUS: u32 = 69;
    /// ChunkRadiusUpdated
    pub const CHUNK_RADIUS_UPDATED: u32 = 70;
    /// Camera
    pub const CAMERA: u32 = 73;
    /// BossEvent
    pub const BOSS_EVENT: u32 = 74;
    /// ShowCredits
    pub const SHOW_CREDITS: u32 = 75;
    /// CommandRequest
    pub const COMMAND_REQUEST: u32 = 77;
    /// CommandBlockUpdate
    pub const COMMAND_BLOCK_UPDATE: u32 = 78;
    /// CommandOutput
    pub const COMMAND_OUTPUT: u32 = 79;
    /// UpdateTrade
    pub const UPDATE_TRADE: u32 = 80;
    /// UpdateEquip
    pub const UPDATE_EQUIP: u32 = 81;
    /// StructureBlockUpdate
    pub const STRUCTURE_BLOCK_UPDATE: u32 = 90;
    /// NPCRequest
    pub const NPC_REQUEST: u32 = 98;
    /// PhotoTransfer
    pub const PHOTO_TRANSFER: u32 = 99;
    /// RemoveObjective
    pub const REMOVE_OBJECTIVE: u32 = 106;
    /// SetDisplayObjective
    pub const SET_DISPLAY_OBJECTIVE: u32 = 107;
    /// SetScore
    pub const SET_SCORE: u32 = 108;
    /// UpdateBlockSynced
    pub const UPDATE_BLOCK_SYNCED: u32 = 110;
    /// MoveActorDelta
    pub const MOVE_ACTOR_DELTA: u32 = 111;
    /// SetScoreboardIdentity
    pub const SET_SCOREBOARD_IDENTITY: u32 = 112;
    /// SetLocalPlayerAsInitialised
    pub const SET_LOCAL_PLAYER_AS_INITIALISED: u32 = 113;
    /// SpawnParticleEffect
    pub const SPAWN_PARTICLE_EFFECT: u32 = 118;
    /// StructureTemplateDataRequest
    pub const STRUCTURE_TEMPLATE_DATA_REQUEST: u32 = 132;
    /// Emote
    pub const EMOTE: u32 = 138;
    /// PlayerAuthInput
    pub const PLAYER_AUTH_INPUT: u32 = 144;
    /// UpdatePlayerGameType
    pub const UPDATE_PLAYER_GAME_TYPE: u32 = 151;
    /// EmoteList
    pub const EMOTE_LIST: u32 = 152;
    /// DebugInfo
    pub const DEBUG_INFO: u32 = 155;
    /// MotionPredictionHints
    pub const MOTION_PREDICTION_HINTS: u32 = 157;
    /// AnimateEntity
    pub const ANIMATE_ENTITY: u32 = 158;
    /// ItemRegistry
    pub const ITEM_REGISTRY: u32 = 162;
    /// AddVolumeEntity
    pub const ADD_VOLUME_ENTITY: u32 = 166;
    /// RemoveVolumeEntity
    pub const REMOVE_VOLUME_ENTITY: u32 = 167;
    /// NPCDialogue
    pub const NPC_DIALOGUE: u32 = 169;
    /// CreatePhoto
    pub const CREATE_PHOTO: u32 = 171;
    /// UpdateSubChunkBlocks
    pub const UPDATE_SUB_CHUNK_BLOCKS: u32 = 172;
    /// ChangeMobProperty
    pub const CHANGE_MOB_PROPERTY: u32 = 182;
    /// UpdateAbilities
    pub const UPDATE_ABILITIES: u32 = 187;
    /// ClientCheatAbility
    pub const CLIENT_CHEAT_ABILITY: u32 = 197;
    /// AgentAnimation
    pub const AGENT_ANIMATION: u32 = 304;

    /// ConnectionRequest (bridge control plane)
    pub const CONNECTION_REQUEST: u32 = 900;
    /// ConnectionResponse (bridge control plane)
    pub const CONNECTION_RESPONSE: u32 = 901;
    /// Flush (bridge control plane)
    pub const FLUSH: u32 = 902;
    /// Latency (bridge control plane)
    pub const LATENCY: u32 = 903;
    /// Transfer (bridge control plane)
    pub const TRANSFER: u32 = 904;
    /// UpdateCache (bridge control plane)
    pub const UPDATE_CACHE: u32 = 905;
}

/// A factory decoding one packet body
pub type Factory = fn(&mut dyn Read) -> Result<Packet>;

macro_rules! packet_set {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// A decoded packet of any known type
        #[derive(Debug, Clone, PartialEq)]
        pub enum Packet {
            $(
                #[doc = concat!("The ", stringify!($variant), " packet")]
                $variant($ty),
            )+
        }

        impl Packet {
            /// The packet ID of this packet
            pub fn id(&self) -> u32 {
                match self {
                    $(Packet::$variant(_) => <$ty as PacketType>::ID,)+
                }
            }

            /// Write the packet body (without header) to a writer
            pub fn write_body<W: Write>(&self, writer: &mut W) -> Result<()> {
                match self {
                    $(Packet::$variant(pk) => pk.write(writer),)+
                }
            }
        }

        $(
            impl From<$ty> for Packet {
                fn from(pk: $ty) -> Self {
                    Packet::$variant(pk)
                }
            }
        )+

        pub(crate) fn default_factories() -> Vec<(u32, Factory)> {
            vec![
                $((<$ty as PacketType>::ID, (|mut reader: &mut dyn Read| {
                    Ok(Packet::$variant(<$ty as PacketType>::read(&mut reader)?))
                }) as Factory),)+
            ]
        }
    };
}

packet_set! {
    // Bridge control plane.
    ConnectionRequest(bridge::ConnectionRequest),
    ConnectionResponse(bridge::ConnectionResponse),
    Flush(bridge::Flush),
    Latency(bridge::Latency),
    Transfer(bridge::Transfer),
    UpdateCache(bridge::UpdateCache),

    // Actor scope.
    ActorEvent(actor::ActorEvent),
    ActorPickRequest(actor::ActorPickRequest),
    AddActor(actor::AddActor),
    AddItemActor(actor::AddItemActor),
    AddPainting(actor::AddPainting),
    AddVolumeEntity(actor::AddVolumeEntity),
    AgentAnimation(actor::AgentAnimation),
    AnimateEntity(actor::AnimateEntity),
    ChangeMobProperty(actor::ChangeMobProperty),
    MobArmourEquipment(actor::MobArmourEquipment),
    MobEffect(actor::MobEffect),
    MobEquipment(actor::MobEquipment),
    MotionPredictionHints(actor::MotionPredictionHints),
    MoveActorAbsolute(actor::MoveActorAbsolute),
    MoveActorDelta(actor::MoveActorDelta),
    RemoveActor(actor::RemoveActor),
    RemoveVolumeEntity(actor::RemoveVolumeEntity),
    SetActorData(actor::SetActorData),
    SetActorLink(actor::SetActorLink),
    SetActorMotion(actor::SetActorMotion),
    SpawnParticleEffect(actor::SpawnParticleEffect),
    TakeItemActor(actor::TakeItemActor),
    UpdateAttributes(actor::UpdateAttributes),
    UpdateEquip(actor::UpdateEquip),
    UpdateTrade(actor::UpdateTrade),

    // Player scope.
    AddPlayer(player::AddPlayer),
    AdventureSettings(player::AdventureSettings),
    Animate(player::Animate),
    ClientCheatAbility(player::ClientCheatAbility),
    Emote(player::Emote),
    EmoteList(player::EmoteList),
    Interact(player::Interact),
    MovePlayer(player::MovePlayer),
    NPCDialogue(player::NPCDialogue),
    NPCRequest(player::NPCRequest),
    PlayerAction(player::PlayerAction),
    PlayerAuthInput(player::PlayerAuthInput),
    PlayerList(player::PlayerList),
    Respawn(player::Respawn),
    SetLocalPlayerAsInitialised(player::SetLocalPlayerAsInitialised),
    ShowCredits(player::ShowCredits),
    UpdateAbilities(player::UpdateAbilities),
    UpdatePlayerGameType(player::UpdatePlayerGameType),

    // World, command and event scope.
    BossEvent(world::BossEvent),
    Camera(world::Camera),
    ChunkRadiusUpdated(world::ChunkRadiusUpdated),
    ClientBoundMapItemData(world::ClientBoundMapItemData),
    CommandBlockUpdate(world::CommandBlockUpdate),
    CommandOutput(world::CommandOutput),
    CommandRequest(world::CommandRequest),
    ContainerOpen(world::ContainerOpen),
    CreatePhoto(world::CreatePhoto),
    DebugInfo(world::DebugInfo),
    Disconnect(world::Disconnect),
    Event(world::Event),
    InventoryTransaction(world::InventoryTransaction),
    ItemRegistry(world::ItemRegistry),
    PhotoTransfer(world::PhotoTransfer),
    PlayStatus(world::PlayStatus),
    RequestChunkRadius(world::RequestChunkRadius),
    StartGame(world::StartGame),
    StructureBlockUpdate(world::StructureBlockUpdate),
    StructureTemplateDataRequest(world::StructureTemplateDataRequest),
    UpdateBlockSynced(world::UpdateBlockSynced),
    UpdateSubChunkBlocks(world::UpdateSubChunkBlocks),

    // Scoreboard scope.
    RemoveObjective(scoreboard::RemoveObjective),
    SetDisplayObjective(scoreboard::SetDisplayObjective),
    SetScore(scoreboard::SetScore),
    SetScoreboardIdentity(scoreboard::SetScoreboardIdentity),
}

impl Packet {
    /// Decode a packet body by ID
    ///
    /// Fails with [`ListenerError::UnknownPacket`] when the ID has no
    /// registered type.
    pub fn decode<R: Read>(packet_id: u32, reader: &mut R) -> Result<Packet> {
        crate::protocol::registry::global_pool().decode(packet_id, reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ids_are_unique_and_fit_the_header() {
        let factories = default_factories();
        let mut seen = std::collections::HashSet::new();
        for (packet_id, _) in &factories {
            assert!(*packet_id < 1024, "packet ID {} overflows the header", packet_id);
            assert!(seen.insert(*packet_id), "duplicate packet ID {}", packet_id);
        }
    }

    #[test]
    fn test_decode_roundtrip_via_enum() {
        let pk = Packet::from(bridge::Latency {
            timestamp: 1000,
            latency: 5,
        });

        let mut body = Vec::new();
        pk.write_body(&mut body).unwrap();

        let decoded = Packet::decode(pk.id(), &mut Cursor::new(body)).unwrap();
        assert_eq!(pk, decoded);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let err = Packet::decode(0x2AD, &mut Cursor::new(Vec::new())).unwrap_err();
        assert_eq!(err.to_string(), "unknown packet ID 685");
    }
}
