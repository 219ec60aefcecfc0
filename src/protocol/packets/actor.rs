//! Actor-scoped game packets
//!
//! Packets spawning, moving and mutating non-player entities. Everything in
//! here carries at least one entity identifier, which is why the bridge needs
//! typed forms of them.

use crate::error::Result;
use crate::protocol::packets::{PacketType, id};
use crate::protocol::types::{
    EntityLink, ItemStack, Metadata, VarI32, VarI64, VarU32, VarU64, Vec3, read_bool,
    read_byte_slice, read_f32, read_i64, read_string, read_u8, read_u16, write_bool,
    write_byte_slice, write_f32, write_i64, write_string, write_u8, write_u16,
};
use std::io::{Read, Write};

/// An entity attribute row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attribute {
    /// Attribute name, such as `minecraft:health`
    pub name: String,
    /// Minimum value
    pub min: f32,
    /// Current value
    pub value: f32,
    /// Maximum value
    pub max: f32,
}

impl Attribute {
    /// Read an attribute from a reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Attribute {
            name: read_string(reader)?,
            min: read_f32(reader)?,
            value: read_f32(reader)?,
            max: read_f32(reader)?,
        })
    }

    /// Write an attribute to a writer
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.name, writer)?;
        write_f32(self.min, writer)?;
        write_f32(self.value, writer)?;
        write_f32(self.max, writer)?;
        Ok(())
    }

    /// Read a VarU32-prefixed attribute list
    pub fn read_list<R: Read>(reader: &mut R) -> Result<Vec<Self>> {
        let count = VarU32::read(reader)?.0;
        let mut attributes = Vec::new();
        for _ in 0..count {
            attributes.push(Attribute::read(reader)?);
        }
        Ok(attributes)
    }

    /// Write a VarU32-prefixed attribute list
    pub fn write_list<W: Write>(attributes: &[Self], writer: &mut W) -> Result<()> {
        VarU32(attributes.len() as u32).write(writer)?;
        for attribute in attributes {
            attribute.write(writer)?;
        }
        Ok(())
    }
}

/// Spawns an entity for the client
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddActor {
    /// Unique ID of the entity
    pub entity_unique_id: i64,
    /// Runtime ID of the entity
    pub entity_runtime_id: u64,
    /// Namespaced entity type, such as `minecraft:creeper`
    pub actor_type: String,
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
    /// Spawn body yaw
    pub body_yaw: f32,
    /// Initial attributes
    pub attributes: Vec<Attribute>,
    /// Initial metadata
    pub metadata: Metadata,
    /// Links to ridden or riding entities
    pub entity_links: Vec<EntityLink>,
}

impl PacketType for AddActor {
    const ID: u32 = id::ADD_ACTOR;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(AddActor {
            entity_unique_id: VarI64::read(reader)?.0,
            entity_runtime_id: VarU64::read(reader)?.0,
            actor_type: read_string(reader)?,
            position: Vec3::read(reader)?,
            velocity: Vec3::read(reader)?,
            pitch: read_f32(reader)?,
            yaw: read_f32(reader)?,
            head_yaw: read_f32(reader)?,
            body_yaw: read_f32(reader)?,
            attributes: Attribute::read_list(reader)?,
            metadata: Metadata::read(reader)?,
            entity_links: EntityLink::read_list(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.entity_unique_id).write(writer)?;
        VarU64(self.entity_runtime_id).write(writer)?;
        write_string(&self.actor_type, writer)?;
        self.position.write(writer)?;
        self.velocity.write(writer)?;
        write_f32(self.pitch, writer)?;
        write_f32(self.yaw, writer)?;
        write_f32(self.head_yaw, writer)?;
        write_f32(self.body_yaw, writer)?;
        Attribute::write_list(&self.attributes, writer)?;
        self.metadata.write(writer)?;
        EntityLink::write_list(&self.entity_links, writer)?;
        Ok(())
    }
}

/// Spawns a dropped item entity for the client
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddItemActor {
    /// Unique ID of the item entity
    pub entity_unique_id: i64,
    /// Runtime ID of the item entity
    pub entity_runtime_id: u64,
    /// The dropped item
    pub item: ItemStack,
    /// Spawn position
    pub position: Vec3,
    /// Initial velocity
    pub velocity: Vec3,
    /// Initial metadata
    pub metadata: Metadata,
    /// Whether the item came from a fishing rod
    pub from_fishing: bool,
}

impl PacketType for AddItemActor {
    const ID: u32 = id::ADD_ITEM_ACTOR;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(AddItemActor {
            entity_unique_id: VarI64::read(reader)?.0,
            entity_runtime_id: VarU64::read(reader)?.0,
            item: ItemStack::read(reader)?,
            position: Vec3::read(reader)?,
            velocity: Vec3::read(reader)?,
            metadata: Metadata::read(reader)?,
            from_fishing: read_bool(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.entity_unique_id).write(writer)?;
        VarU64(self.entity_runtime_id).write(writer)?;
        self.item.write(writer)?;
        self.position.write(writer)?;
        self.velocity.write(writer)?;
        self.metadata.write(writer)?;
        write_bool(self.from_fishing, writer)?;
        Ok(())
    }
}

/// Spawns a painting entity for the client
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddPainting {
    /// Unique ID of the painting
    pub entity_unique_id: i64,
    /// Runtime ID of the painting
    pub entity_runtime_id: u64,
    /// Position of the painting
    pub position: Vec3,
    /// Facing direction
    pub direction: i32,
    /// Painting motive title
    pub title: String,
}

impl PacketType for AddPainting {
    const ID: u32 = id::ADD_PAINTING;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(AddPainting {
            entity_unique_id: VarI64::read(reader)?.0,
            entity_runtime_id: VarU64::read(reader)?.0,
            position: Vec3::read(reader)?,
            direction: VarI32::read(reader)?.0,
            title: read_string(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.entity_unique_id).write(writer)?;
        VarU64(self.entity_runtime_id).write(writer)?;
        self.position.write(writer)?;
        VarI32(self.direction).write(writer)?;
        write_string(&self.title, writer)?;
        Ok(())
    }
}

/// Despawns an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemoveActor {
    /// Unique ID of the entity to remove
    pub entity_unique_id: i64,
}

impl PacketType for RemoveActor {
    const ID: u32 = id::REMOVE_ACTOR;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(RemoveActor {
            entity_unique_id: VarI64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.entity_unique_id).write(writer)
    }
}

/// Triggers a one-shot entity event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActorEvent {
    /// Runtime ID of the entity
    pub entity_runtime_id: u64,
    /// Event type
    pub event_type: u8,
    /// Event payload
    pub event_data: i32,
}

impl PacketType for ActorEvent {
    const ID: u32 = id::ACTOR_EVENT;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(ActorEvent {
            entity_runtime_id: VarU64::read(reader)?.0,
            event_type: read_u8(reader)?,
            event_data: VarI32::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        write_u8(self.event_type, writer)?;
        VarI32(self.event_data).write(writer)?;
        Ok(())
    }
}

/// Requests the spawn egg of a picked entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActorPickRequest {
    /// Unique ID of the picked entity
    pub entity_unique_id: i64,
    /// Hotbar slot to place the result in
    pub hotbar_slot: u8,
    /// Whether block data is included
    pub with_data: bool,
}

impl PacketType for ActorPickRequest {
    const ID: u32 = id::ACTOR_PICK_REQUEST;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(ActorPickRequest {
            entity_unique_id: read_i64(reader)?,
            hotbar_slot: read_u8(reader)?,
            with_data: read_bool(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_i64(self.entity_unique_id, writer)?;
        write_u8(self.hotbar_slot, writer)?;
        write_bool(self.with_data, writer)?;
        Ok(())
    }
}

/// Animates an item entity flying towards its taker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TakeItemActor {
    /// Runtime ID of the taken item entity
    pub item_entity_runtime_id: u64,
    /// Runtime ID of the entity taking it
    pub taker_entity_runtime_id: u64,
}

impl PacketType for TakeItemActor {
    const ID: u32 = id::TAKE_ITEM_ACTOR;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(TakeItemActor {
            item_entity_runtime_id: VarU64::read(reader)?.0,
            taker_entity_runtime_id: VarU64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.item_entity_runtime_id).write(writer)?;
        VarU64(self.taker_entity_runtime_id).write(writer)?;
        Ok(())
    }
}

/// Teleports an entity to an absolute position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveActorAbsolute {
    /// Runtime ID of the entity
    pub entity_runtime_id: u64,
    /// Movement flags (on ground, teleport)
    pub flags: u8,
    /// New position
    pub position: Vec3,
    /// New rotation
    pub rotation: Vec3,
}

impl PacketType for MoveActorAbsolute {
    const ID: u32 = id::MOVE_ACTOR_ABSOLUTE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(MoveActorAbsolute {
            entity_runtime_id: VarU64::read(reader)?.0,
            flags: read_u8(reader)?,
            position: Vec3::read(reader)?,
            rotation: Vec3::read(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        write_u8(self.flags, writer)?;
        self.position.write(writer)?;
        self.rotation.write(writer)?;
        Ok(())
    }
}

/// Moves an entity by a delta
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveActorDelta {
    /// Runtime ID of the entity
    pub entity_runtime_id: u64,
    /// Flags indicating which components changed
    pub flags: u16,
    /// New position
    pub position: Vec3,
    /// New rotation
    pub rotation: Vec3,
}

impl PacketType for MoveActorDelta {
    const ID: u32 = id::MOVE_ACTOR_DELTA;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(MoveActorDelta {
            entity_runtime_id: VarU64::read(reader)?.0,
            flags: read_u16(reader)?,
            position: Vec3::read(reader)?,
            rotation: Vec3::read(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        write_u16(self.flags, writer)?;
        self.position.write(writer)?;
        self.rotation.write(writer)?;
        Ok(())
    }
}

/// Replaces the metadata of an entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetActorData {
    /// Runtime ID of the entity
    pub entity_runtime_id: u64,
    /// New metadata map
    pub metadata: Metadata,
    /// Server tick the change applies at
    pub tick: u64,
}

impl PacketType for SetActorData {
    const ID: u32 = id::SET_ACTOR_DATA;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(SetActorData {
            entity_runtime_id: VarU64::read(reader)?.0,
            metadata: Metadata::read(reader)?,
            tick: VarU64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        self.metadata.write(writer)?;
        VarU64(self.tick).write(writer)?;
        Ok(())
    }
}

/// Links or unlinks a rider and a ridden entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetActorLink {
    /// The link being changed
    pub link: EntityLink,
}

impl PacketType for SetActorLink {
    const ID: u32 = id::SET_ACTOR_LINK;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(SetActorLink {
            link: EntityLink::read(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.link.write(writer)
    }
}

/// Sets the velocity of an entity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SetActorMotion {
    /// Runtime ID of the entity
    pub entity_runtime_id: u64,
    /// New velocity
    pub velocity: Vec3,
    /// Server tick the change applies at
    pub tick: u64,
}

impl PacketType for SetActorMotion {
    const ID: u32 = id::SET_ACTOR_MOTION;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(SetActorMotion {
            entity_runtime_id: VarU64::read(reader)?.0,
            velocity: Vec3::read(reader)?,
            tick: VarU64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        self.velocity.write(writer)?;
        VarU64(self.tick).write(writer)?;
        Ok(())
    }
}

/// Applies, modifies or removes a mob effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobEffect {
    /// Runtime ID of the entity
    pub entity_runtime_id: u64,
    /// Operation (add, modify, remove)
    pub operation: u8,
    /// Effect type
    pub effect_type: i32,
    /// Effect amplifier
    pub amplifier: i32,
    /// Whether particles are shown
    pub particles: bool,
    /// Effect duration in ticks
    pub duration: i32,
    /// Server tick the change applies at
    pub tick: u64,
}

impl PacketType for MobEffect {
    const ID: u32 = id::MOB_EFFECT;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(MobEffect {
            entity_runtime_id: VarU64::read(reader)?.0,
            operation: read_u8(reader)?,
            effect_type: VarI32::read(reader)?.0,
            amplifier: VarI32::read(reader)?.0,
            particles: read_bool(reader)?,
            duration: VarI32::read(reader)?.0,
            tick: VarU64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        write_u8(self.operation, writer)?;
        VarI32(self.effect_type).write(writer)?;
        VarI32(self.amplifier).write(writer)?;
        write_bool(self.particles, writer)?;
        VarI32(self.duration).write(writer)?;
        VarU64(self.tick).write(writer)?;
        Ok(())
    }
}

/// Changes the held item of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobEquipment {
    /// Runtime ID of the entity
    pub entity_runtime_id: u64,
    /// The newly held item
    pub new_item: ItemStack,
    /// Inventory slot the item sits in
    pub inventory_slot: u8,
    /// Hotbar slot the item sits in
    pub hotbar_slot: u8,
    /// Window the slot belongs to
    pub window_id: u8,
}

impl PacketType for MobEquipment {
    const ID: u32 = id::MOB_EQUIPMENT;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(MobEquipment {
            entity_runtime_id: VarU64::read(reader)?.0,
            new_item: ItemStack::read(reader)?,
            inventory_slot: read_u8(reader)?,
            hotbar_slot: read_u8(reader)?,
            window_id: read_u8(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        self.new_item.write(writer)?;
        write_u8(self.inventory_slot, writer)?;
        write_u8(self.hotbar_slot, writer)?;
        write_u8(self.window_id, writer)?;
        Ok(())
    }
}

/// Changes the armour of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobArmourEquipment {
    /// Runtime ID of the entity
    pub entity_runtime_id: u64,
    /// Helmet slot
    pub helmet: ItemStack,
    /// Chestplate slot
    pub chestplate: ItemStack,
    /// Leggings slot
    pub leggings: ItemStack,
    /// Boots slot
    pub boots: ItemStack,
}

impl PacketType for MobArmourEquipment {
    const ID: u32 = id::MOB_ARMOUR_EQUIPMENT;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(MobArmourEquipment {
            entity_runtime_id: VarU64::read(reader)?.0,
            helmet: ItemStack::read(reader)?,
            chestplate: ItemStack::read(reader)?,
            leggings: ItemStack::read(reader)?,
            boots: ItemStack::read(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        self.helmet.write(writer)?;
        self.chestplate.write(writer)?;
        self.leggings.write(writer)?;
        self.boots.write(writer)?;
        Ok(())
    }
}

/// Replaces the attributes of an entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateAttributes {
    /// Runtime ID of the entity
    pub entity_runtime_id: u64,
    /// New attribute rows
    pub attributes: Vec<Attribute>,
    /// Server tick the change applies at
    pub tick: u64,
}

impl PacketType for UpdateAttributes {
    const ID: u32 = id::UPDATE_ATTRIBUTES;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(UpdateAttributes {
            entity_runtime_id: VarU64::read(reader)?.0,
            attributes: Attribute::read_list(reader)?,
            tick: VarU64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        Attribute::write_list(&self.attributes, writer)?;
        VarU64(self.tick).write(writer)?;
        Ok(())
    }
}

/// Plays a behaviour-pack animation on a set of entities
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimateEntity {
    /// Animation name
    pub animation: String,
    /// State to transition to afterwards
    pub next_state: String,
    /// Molang stop condition
    pub stop_condition: String,
    /// Version of the stop condition syntax
    pub stop_condition_version: i32,
    /// Animation controller name
    pub controller: String,
    /// Blend-out time in seconds
    pub blend_out_time: f32,
    /// Runtime IDs of the entities animated
    pub entity_runtime_ids: Vec<u64>,
}

impl PacketType for AnimateEntity {
    const ID: u32 = id::ANIMATE_ENTITY;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let animation = read_string(reader)?;
        let next_state = read_string(reader)?;
        let stop_condition = read_string(reader)?;
        let stop_condition_version = VarI32::read(reader)?.0;
        let controller = read_string(reader)?;
        let blend_out_time = read_f32(reader)?;

        let count = VarU32::read(reader)?.0;
        let mut entity_runtime_ids = Vec::new();
        for _ in 0..count {
            entity_runtime_ids.push(VarU64::read(reader)?.0);
        }

        Ok(AnimateEntity {
            animation,
            next_state,
            stop_condition,
            stop_condition_version,
            controller,
            blend_out_time,
            entity_runtime_ids,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.animation, writer)?;
        write_string(&self.next_state, writer)?;
        write_string(&self.stop_condition, writer)?;
        VarI32(self.stop_condition_version).write(writer)?;
        write_string(&self.controller, writer)?;
        write_f32(self.blend_out_time, writer)?;
        VarU32(self.entity_runtime_ids.len() as u32).write(writer)?;
        for runtime_id in &self.entity_runtime_ids {
            VarU64(*runtime_id).write(writer)?;
        }
        Ok(())
    }
}

/// Changes a single mob property
///
/// The identifier field is signed on the wire but follows the runtime-ID
/// numbering, a quirk inherited from the upstream protocol.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangeMobProperty {
    /// Identifier of the entity
    pub entity_unique_id: i64,
    /// Property name
    pub property: String,
    /// Boolean value, when the property is boolean
    pub bool_value: bool,
    /// String value, when the property is an enum
    pub string_value: String,
    /// Integer value, when the property is an integer
    pub int_value: i32,
    /// Float value, when the property is a float
    pub float_value: f32,
}

impl PacketType for ChangeMobProperty {
    const ID: u32 = id::CHANGE_MOB_PROPERTY;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(ChangeMobProperty {
            entity_unique_id: VarI64::read(reader)?.0,
            property: read_string(reader)?,
            bool_value: read_bool(reader)?,
            string_value: read_string(reader)?,
            int_value: VarI32::read(reader)?.0,
            float_value: read_f32(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarI64(self.entity_unique_id).write(writer)?;
        write_string(&self.property, writer)?;
        write_bool(self.bool_value, writer)?;
        write_string(&self.string_value, writer)?;
        VarI32(self.int_value).write(writer)?;
        write_f32(self.float_value, writer)?;
        Ok(())
    }
}

/// Plays an agent animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AgentAnimation {
    /// Animation to play
    pub animation: u8,
    /// Runtime ID of the agent
    pub entity_runtime_id: u64,
}

impl PacketType for AgentAnimation {
    const ID: u32 = id::AGENT_ANIMATION;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(AgentAnimation {
            animation: read_u8(reader)?,
            entity_runtime_id: VarU64::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_u8(self.animation, writer)?;
        VarU64(self.entity_runtime_id).write(writer)?;
        Ok(())
    }
}

/// Hints the client about server-predicted motion
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionPredictionHints {
    /// Runtime ID of the entity
    pub entity_runtime_id: u64,
    /// Predicted velocity
    pub velocity: Vec3,
    /// Whether the entity is on the ground
    pub on_ground: bool,
}

impl PacketType for MotionPredictionHints {
    const ID: u32 = id::MOTION_PREDICTION_HINTS;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(MotionPredictionHints {
            entity_runtime_id: VarU64::read(reader)?.0,
            velocity: Vec3::read(reader)?,
            on_ground: read_bool(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU64(self.entity_runtime_id).write(writer)?;
        self.velocity.write(writer)?;
        write_bool(self.on_ground, writer)?;
        Ok(())
    }
}

/// Spawns a custom particle effect
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpawnParticleEffect {
    /// Dimension the particle spawns in
    pub dimension: u8,
    /// Unique ID of the entity the particle attaches to, or -1
    pub entity_unique_id: i64,
    /// Spawn position
    pub position: Vec3,
    /// Namespaced particle name
    pub particle_name: String,
}

impl PacketType for SpawnParticleEffect {
    const ID: u32 = id::SPAWN_PARTICLE_EFFECT;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(SpawnParticleEffect {
            dimension: read_u8(reader)?,
            entity_unique_id: VarI64::read(reader)?.0,
            position: Vec3::read(reader)?,
            particle_name: read_string(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_u8(self.dimension, writer)?;
        VarI64(self.entity_unique_id).write(writer)?;
        self.position.write(writer)?;
        write_string(&self.particle_name, writer)?;
        Ok(())
    }
}

/// Spawns a volume entity
///
/// Volume entities use a 32-bit runtime ID on the wire.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddVolumeEntity {
    /// Runtime ID of the volume entity
    pub entity_runtime_id: u32,
    /// Encoding identifier of the volume
    pub encoding_identifier: String,
    /// Instance name of the volume
    pub instance_name: String,
}

impl PacketType for AddVolumeEntity {
    const ID: u32 = id::ADD_VOLUME_ENTITY;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(AddVolumeEntity {
            entity_runtime_id: VarU32::read(reader)?.0,
            encoding_identifier: read_string(reader)?,
            instance_name: read_string(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU32(self.entity_runtime_id).write(writer)?;
        write_string(&self.encoding_identifier, writer)?;
        write_string(&self.instance_name, writer)?;
        Ok(())
    }
}

/// Despawns a volume entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemoveVolumeEntity {
    /// Runtime ID of the volume entity
    pub entity_runtime_id: u32,
}

impl PacketType for RemoveVolumeEntity {
    const ID: u32 = id::REMOVE_VOLUME_ENTITY;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(RemoveVolumeEntity {
            entity_runtime_id: VarU32::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        VarU32(self.entity_runtime_id).write(writer)
    }
}

/// Opens or updates a villager trade window
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateTrade {
    /// Window ID of the trade window
    pub window_id: u8,
    /// Window type
    pub window_type: u8,
    /// Amount of trade slots
    pub size: i32,
    /// Tier of the villager
    pub trade_tier: i32,
    /// Unique ID of the villager
    pub villager_unique_id: i64,
    /// Unique ID of the trading player
    pub entity_unique_id: i64,
    /// Display name of the villager
    pub display_name: String,
    /// Whether the new trade UI is used
    pub new_trade_ui: bool,
    /// Whether prices are demand based
    pub demand_based_prices: bool,
    /// Serialized trade offers
    pub serialized_offers: Vec<u8>,
}

impl PacketType for UpdateTrade {
    const ID: u32 = id::UPDATE_TRADE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(UpdateTrade {
            window_id: read_u8(reader)?,
            window_type: read_u8(reader)?,
            size: VarI32::read(reader)?.0,
            trade_tier: VarI32::read(reader)?.0,
            villager_unique_id: VarI64::read(reader)?.0,
            entity_unique_id: VarI64::read(reader)?.0,
            display_name: read_string(reader)?,
            new_trade_ui: read_bool(reader)?,
            demand_based_prices: read_bool(reader)?,
            serialized_offers: read_byte_slice(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_u8(self.window_id, writer)?;
        write_u8(self.window_type, writer)?;
        VarI32(self.size).write(writer)?;
        VarI32(self.trade_tier).write(writer)?;
        VarI64(self.villager_unique_id).write(writer)?;
        VarI64(self.entity_unique_id).write(writer)?;
        write_string(&self.display_name, writer)?;
        write_bool(self.new_trade_ui, writer)?;
        write_bool(self.demand_based_prices, writer)?;
        write_byte_slice(&self.serialized_offers, writer)?;
        Ok(())
    }
}

/// Updates the content of an equipment window
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateEquip {
    /// Window ID of the equipment window
    pub window_id: u8,
    /// Window type
    pub window_type: u8,
    /// Amount of slots
    pub size: i32,
    /// Unique ID of the entity owning the window
    pub entity_unique_id: i64,
    /// Serialized inventory data
    pub serialized_inventory_data: Vec<u8>,
}

impl PacketType for UpdateEquip {
    const ID: u32 = id::UPDATE_EQUIP;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(UpdateEquip {
            window_id: read_u8(reader)?,
            window_type: read_u8(reader)?,
            size: VarI32::read(reader)?.0,
            entity_unique_id: VarI64::read(reader)?.0,
            serialized_inventory_data: read_byte_slice(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_u8(self.window_id, writer)?;
        write_u8(self.window_type, writer)?;
        VarI32(self.size).write(writer)?;
        VarI64(self.entity_unique_id).write(writer)?;
        write_byte_slice(&self.serialized_inventory_data, writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::types::{MetadataValue, metadata_key};
    use std::io::Cursor;

    #[test]
    fn test_add_actor_roundtrip() {
        let mut metadata = Metadata::new();
        metadata.0.insert(metadata_key::OWNER, MetadataValue::I64(1));

        let packet = AddActor {
            entity_unique_id: -2,
            entity_runtime_id: 57,
            actor_type: "minecraft:creeper".to_string(),
            position: Vec3::new(1.0, 64.0, -3.5),
            velocity: Vec3::default(),
            pitch: 0.0,
            yaw: 90.0,
            head_yaw: 90.0,
            body_yaw: 90.0,
            attributes: vec![Attribute {
                name: "minecraft:health".to_string(),
                min: 0.0,
                value: 20.0,
                max: 20.0,
            }],
            metadata,
            entity_links: vec![EntityLink {
                ridden_entity_unique_id: 1,
                rider_entity_unique_id: -2,
                link_type: 1,
                immediate: false,
                rider_initiated: false,
            }],
        };

        let mut buffer = Vec::new();
        packet.write(&mut buffer).unwrap();

        let decoded = AddActor::read(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(packet, decoded);
    }

    #[test]
    fn test_animate_entity_roundtrip() {
        let packet = AnimateEntity {
            animation: "animation.agent.swing".to_string(),
            next_state: "default".to_string(),
            stop_condition: String::new(),
            stop_condition_version: 0,
            controller: String::new(),
            blend_out_time: 0.25,
            entity_runtime_ids: vec![1, 42, 9000],
        };

        let mut buffer = Vec::new();
        packet.write(&mut buffer).unwrap();

        let decoded = AnimateEntity::read(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(packet, decoded);
    }
}
