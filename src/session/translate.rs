//! Identity translation layer
//!
//! The host session layer refers to the bound player by the stable pair
//! `(runtime-id=1, unique-id=1)`; the proxy tracks the session's real derived
//! pair. This module rewrites every entity identifier embedded in a packet
//! between the two numberings, in place, in both directions.
//!
//! The per-packet rewrite table below is authoritative: adding a packet type
//! to the bridge means adding one arm here and nothing else.

use crate::protocol::packets::Packet;
use crate::protocol::packets::scoreboard::{IDENTITY_ACTION_CLEAR, IDENTITY_FAKE_PLAYER};
use crate::protocol::packets::world::{EventData, TrackedMapObject, TransactionData};
use crate::protocol::types::{EntityLink, Metadata, MetadataValue, metadata_key};

/// The entity identifier pair assigned to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityIdentity {
    /// Runtime ID derived from the XUID
    pub runtime_id: u64,
    /// Unique ID; the same numeric value reinterpreted signed
    pub unique_id: i64,
}

impl EntityIdentity {
    /// Apply the runtime-ID rule to a value
    ///
    /// Server-sent packets map `1` to the session's runtime ID; client-sent
    /// packets map the runtime ID back to `1`. Every other value is left
    /// untouched.
    pub fn runtime(&self, value: u64, server_sent: bool) -> u64 {
        if server_sent {
            if value == 1 { self.runtime_id } else { value }
        } else if value == self.runtime_id {
            1
        } else {
            value
        }
    }

    /// Apply the unique-ID rule to a value
    pub fn unique(&self, value: i64, server_sent: bool) -> i64 {
        if server_sent {
            if value == 1 { self.unique_id } else { value }
        } else if value == self.unique_id {
            1
        } else {
            value
        }
    }

    /// Runtime rule for identifiers stored signed on the wire
    fn runtime_signed(&self, value: i64, server_sent: bool) -> i64 {
        self.runtime(value as u64, server_sent) as i64
    }

    /// Unique rule for identifiers stored unsigned on the wire
    fn unique_unsigned(&self, value: u64, server_sent: bool) -> u64 {
        self.unique(value as i64, server_sent) as u64
    }

    fn metadata(&self, metadata: &mut Metadata, server_sent: bool) {
        const UNIQUE_KEYS: [u32; 5] = [
            metadata_key::OWNER,
            metadata_key::TARGET,
            metadata_key::DISPLAY_OFFSET,
            metadata_key::LEASH_HOLDER,
            metadata_key::AGENT,
        ];

        for key in UNIQUE_KEYS {
            if let Some(MetadataValue::I64(value)) = metadata.0.get_mut(&key) {
                *value = self.unique(*value, server_sent);
            }
        }
        if let Some(MetadataValue::I64(value)) = metadata.0.get_mut(&metadata_key::BASE_RUNTIME_ID)
        {
            *value = self.runtime_signed(*value, server_sent);
        }
    }

    fn links(&self, links: &mut [EntityLink], server_sent: bool) {
        for link in links {
            link.ridden_entity_unique_id = self.unique(link.ridden_entity_unique_id, server_sent);
            link.rider_entity_unique_id = self.unique(link.rider_entity_unique_id, server_sent);
        }
    }
}

/// Rewrite every entity identifier inside a packet
///
/// `server_sent` is true for host-to-proxy packets. Packet types without
/// embedded identifiers pass through untouched.
pub fn translate_packet(packet: &mut Packet, identity: &EntityIdentity, server_sent: bool) {
    let ids = identity;
    match packet {
        // One runtime ID.
        Packet::ActorEvent(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::AgentAnimation(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::Animate(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::Emote(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::Interact(pk) => {
            pk.target_entity_runtime_id = ids.runtime(pk.target_entity_runtime_id, server_sent);
        }
        Packet::MobArmourEquipment(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::MobEffect(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::MobEquipment(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::MotionPredictionHints(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::MoveActorAbsolute(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::MoveActorDelta(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::NPCRequest(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::PlayerAction(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::Respawn(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::SetActorData(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::SetActorMotion(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::SetLocalPlayerAsInitialised(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::UpdateAttributes(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }

        // Movement with a ridden entity.
        Packet::MovePlayer(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
            pk.ridden_entity_runtime_id = ids.runtime(pk.ridden_entity_runtime_id, server_sent);
        }

        // Runtime-ID lists.
        Packet::AnimateEntity(pk) => {
            for runtime_id in &mut pk.entity_runtime_ids {
                *runtime_id = ids.runtime(*runtime_id, server_sent);
            }
        }

        // Player runtime IDs.
        Packet::EmoteList(pk) => {
            pk.player_runtime_id = ids.runtime(pk.player_runtime_id, server_sent);
        }
        Packet::ShowCredits(pk) => {
            pk.player_runtime_id = ids.runtime(pk.player_runtime_id, server_sent);
        }

        // Spawn packets carrying both IDs.
        Packet::AddActor(pk) => {
            pk.entity_unique_id = ids.unique(pk.entity_unique_id, server_sent);
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
            ids.metadata(&mut pk.metadata, server_sent);
            ids.links(&mut pk.entity_links, server_sent);
        }
        Packet::AddItemActor(pk) => {
            pk.entity_unique_id = ids.unique(pk.entity_unique_id, server_sent);
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
            ids.metadata(&mut pk.metadata, server_sent);
        }
        Packet::AddPainting(pk) => {
            pk.entity_unique_id = ids.unique(pk.entity_unique_id, server_sent);
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }
        Packet::AddPlayer(pk) => {
            pk.ability_data.entity_unique_id =
                ids.unique(pk.ability_data.entity_unique_id, server_sent);
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
            ids.metadata(&mut pk.metadata, server_sent);
            ids.links(&mut pk.entity_links, server_sent);
        }

        // 32-bit volume-entity runtime IDs, widened through the rule.
        Packet::AddVolumeEntity(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id as u64, server_sent) as u32;
        }
        Packet::RemoveVolumeEntity(pk) => {
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id as u64, server_sent) as u32;
        }

        // Signed field that follows the runtime numbering.
        Packet::ChangeMobProperty(pk) => {
            pk.entity_unique_id = ids.runtime_signed(pk.entity_unique_id, server_sent);
        }

        // Two unique IDs.
        Packet::BossEvent(pk) => {
            pk.boss_entity_unique_id = ids.unique(pk.boss_entity_unique_id, server_sent);
            pk.player_unique_id = ids.unique(pk.player_unique_id, server_sent);
        }
        Packet::Camera(pk) => {
            pk.camera_entity_unique_id = ids.unique(pk.camera_entity_unique_id, server_sent);
            pk.target_player_unique_id = ids.unique(pk.target_player_unique_id, server_sent);
        }
        Packet::UpdateTrade(pk) => {
            pk.villager_unique_id = ids.unique(pk.villager_unique_id, server_sent);
            pk.entity_unique_id = ids.unique(pk.entity_unique_id, server_sent);
        }

        // One unique ID.
        Packet::ActorPickRequest(pk) => {
            pk.entity_unique_id = ids.unique(pk.entity_unique_id, server_sent);
        }
        Packet::RemoveActor(pk) => {
            pk.entity_unique_id = ids.unique(pk.entity_unique_id, server_sent);
        }
        Packet::SpawnParticleEffect(pk) => {
            pk.entity_unique_id = ids.unique(pk.entity_unique_id, server_sent);
        }
        Packet::UpdateEquip(pk) => {
            pk.entity_unique_id = ids.unique(pk.entity_unique_id, server_sent);
        }
        Packet::UpdatePlayerGameType(pk) => {
            pk.player_unique_id = ids.unique(pk.player_unique_id, server_sent);
        }
        Packet::CreatePhoto(pk) => {
            pk.entity_unique_id = ids.unique(pk.entity_unique_id, server_sent);
        }
        Packet::DebugInfo(pk) => {
            pk.player_unique_id = ids.unique(pk.player_unique_id, server_sent);
        }
        Packet::ContainerOpen(pk) => {
            pk.container_entity_unique_id =
                ids.unique(pk.container_entity_unique_id, server_sent);
        }
        Packet::AdventureSettings(pk) => {
            pk.player_unique_id = ids.unique(pk.player_unique_id, server_sent);
        }
        Packet::PhotoTransfer(pk) => {
            pk.owner_entity_unique_id = ids.unique(pk.owner_entity_unique_id, server_sent);
        }

        // Tracked map entities.
        Packet::ClientBoundMapItemData(pk) => {
            for object in &mut pk.tracked_objects {
                if let TrackedMapObject::Entity(unique_id) = object {
                    *unique_id = ids.unique(*unique_id, server_sent);
                }
            }
        }

        // Command-block minecarts.
        Packet::CommandBlockUpdate(pk) => {
            if !pk.block {
                pk.minecart_entity_runtime_id =
                    ids.runtime(pk.minecart_entity_runtime_id, server_sent);
            }
        }

        // Command origins.
        Packet::CommandOutput(pk) => {
            pk.origin.player_unique_id = ids.unique(pk.origin.player_unique_id, server_sent);
        }
        Packet::CommandRequest(pk) => {
            pk.origin.player_unique_id = ids.unique(pk.origin.player_unique_id, server_sent);
        }

        // Telemetry events.
        Packet::Event(pk) => {
            pk.entity_runtime_id = ids.runtime_signed(pk.entity_runtime_id, server_sent);
            match &mut pk.data {
                EventData::MobKilled {
                    killer_entity_unique_id,
                    victim_entity_unique_id,
                    ..
                } => {
                    *killer_entity_unique_id = ids.unique(*killer_entity_unique_id, server_sent);
                    *victim_entity_unique_id = ids.unique(*victim_entity_unique_id, server_sent);
                }
                EventData::BossKilled {
                    boss_entity_unique_id,
                } => {
                    *boss_entity_unique_id = ids.unique(*boss_entity_unique_id, server_sent);
                }
                EventData::Generic { .. } => {}
            }
        }

        // Item use on entities.
        Packet::InventoryTransaction(pk) => {
            if let TransactionData::UseItemOnEntity {
                target_entity_runtime_id,
                ..
            } = &mut pk.data
            {
                *target_entity_runtime_id = ids.runtime(*target_entity_runtime_id, server_sent);
            }
        }

        // Unsigned fields that follow the unique numbering.
        Packet::NPCDialogue(pk) => {
            pk.entity_unique_id = ids.unique_unsigned(pk.entity_unique_id, server_sent);
        }
        Packet::UpdateBlockSynced(pk) => {
            pk.entity_unique_id = ids.unique_unsigned(pk.entity_unique_id, server_sent);
        }
        Packet::UpdateSubChunkBlocks(pk) => {
            for entry in pk.blocks.iter_mut().chain(pk.extra.iter_mut()) {
                entry.synced_update_entity_unique_id =
                    ids.unique_unsigned(entry.synced_update_entity_unique_id, server_sent);
            }
        }

        // Predicted vehicles.
        Packet::PlayerAuthInput(pk) => {
            if pk.input_data & crate::protocol::packets::player::INPUT_FLAG_CLIENT_PREDICTED_VEHICLE
                != 0
            {
                pk.client_predicted_vehicle =
                    ids.unique(pk.client_predicted_vehicle, server_sent);
            }
        }

        // Player-list rows.
        Packet::PlayerList(pk) => {
            for entry in &mut pk.entries {
                entry.entity_unique_id = ids.unique(entry.entity_unique_id, server_sent);
            }
        }

        // Rider links.
        Packet::SetActorLink(pk) => {
            pk.link.ridden_entity_unique_id =
                ids.unique(pk.link.ridden_entity_unique_id, server_sent);
            pk.link.rider_entity_unique_id =
                ids.unique(pk.link.rider_entity_unique_id, server_sent);
        }

        // Scoreboards.
        Packet::SetScore(pk) => {
            for entry in &mut pk.entries {
                if entry.identity_type != IDENTITY_FAKE_PLAYER {
                    entry.entity_unique_id = ids.unique(entry.entity_unique_id, server_sent);
                }
            }
        }
        Packet::SetScoreboardIdentity(pk) => {
            if pk.action != IDENTITY_ACTION_CLEAR {
                for entry in &mut pk.entries {
                    entry.entity_unique_id = ids.unique(entry.entity_unique_id, server_sent);
                }
            }
        }

        // Start of game.
        Packet::StartGame(pk) => {
            pk.entity_unique_id = ids.unique(pk.entity_unique_id, server_sent);
            pk.entity_runtime_id = ids.runtime(pk.entity_runtime_id, server_sent);
        }

        // Structure editing.
        Packet::StructureBlockUpdate(pk) => {
            pk.settings.last_editing_player_unique_id =
                ids.unique(pk.settings.last_editing_player_unique_id, server_sent);
        }
        Packet::StructureTemplateDataRequest(pk) => {
            pk.settings.last_editing_player_unique_id =
                ids.unique(pk.settings.last_editing_player_unique_id, server_sent);
        }

        // Item pickup animations.
        Packet::TakeItemActor(pk) => {
            pk.item_entity_runtime_id = ids.runtime(pk.item_entity_runtime_id, server_sent);
            pk.taker_entity_runtime_id = ids.runtime(pk.taker_entity_runtime_id, server_sent);
        }

        // Ability state.
        Packet::UpdateAbilities(pk) => {
            pk.ability_data.entity_unique_id =
                ids.unique(pk.ability_data.entity_unique_id, server_sent);
        }
        Packet::ClientCheatAbility(pk) => {
            pk.ability_data.entity_unique_id =
                ids.unique(pk.ability_data.entity_unique_id, server_sent);
        }

        // Everything else carries no entity identifiers.
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::packets::{actor, player, scoreboard, world};

    const IDS: EntityIdentity = EntityIdentity {
        runtime_id: 3_094_842_910,
        unique_id: 3_094_842_910,
    };

    fn assert_involution(packet: &Packet) {
        let mut forward = packet.clone();
        translate_packet(&mut forward, &IDS, true);
        translate_packet(&mut forward, &IDS, false);
        assert_eq!(*packet, forward);

        let mut backward = packet.clone();
        translate_packet(&mut backward, &IDS, false);
        translate_packet(&mut backward, &IDS, true);
        assert_eq!(*packet, backward);
    }

    #[test]
    fn test_start_game_swaps_both_directions() {
        let mut packet = Packet::from(world::StartGame {
            entity_unique_id: 1,
            entity_runtime_id: 1,
            ..Default::default()
        });

        translate_packet(&mut packet, &IDS, true);
        let Packet::StartGame(ref start_game) = packet else {
            unreachable!();
        };
        assert_eq!(start_game.entity_unique_id, IDS.unique_id);
        assert_eq!(start_game.entity_runtime_id, IDS.runtime_id);

        translate_packet(&mut packet, &IDS, false);
        let Packet::StartGame(ref start_game) = packet else {
            unreachable!();
        };
        assert_eq!(start_game.entity_unique_id, 1);
        assert_eq!(start_game.entity_runtime_id, 1);
    }

    #[test]
    fn test_client_sent_animate_maps_to_one() {
        let mut packet = Packet::from(player::Animate {
            action_type: 1,
            entity_runtime_id: IDS.runtime_id,
        });

        translate_packet(&mut packet, &IDS, false);
        let Packet::Animate(ref animate) = packet else {
            unreachable!();
        };
        assert_eq!(animate.entity_runtime_id, 1);
    }

    #[test]
    fn test_foreign_ids_are_fixed_points() {
        let foreign = [0u64, 2, 57, 12_345_678];
        for value in foreign {
            let mut packet = Packet::from(player::Animate {
                action_type: 0,
                entity_runtime_id: value,
            });
            translate_packet(&mut packet, &IDS, true);
            let Packet::Animate(ref animate) = packet else {
                unreachable!();
            };
            assert_eq!(animate.entity_runtime_id, value);
        }
    }

    #[test]
    fn test_metadata_keys_are_selective() {
        let mut metadata = Metadata::new();
        metadata.0.insert(metadata_key::OWNER, MetadataValue::I64(1));
        metadata
            .0
            .insert(metadata_key::BASE_RUNTIME_ID, MetadataValue::I64(1));
        // Key 4 is a display name, not an identifier; it must not move.
        metadata.0.insert(4, MetadataValue::I64(1));

        let mut packet = Packet::from(actor::AddActor {
            entity_unique_id: 1,
            entity_runtime_id: 1,
            metadata,
            ..Default::default()
        });
        translate_packet(&mut packet, &IDS, true);

        let Packet::AddActor(ref add_actor) = packet else {
            unreachable!();
        };
        assert_eq!(
            add_actor.metadata.0.get(&metadata_key::OWNER),
            Some(&MetadataValue::I64(IDS.unique_id))
        );
        assert_eq!(
            add_actor.metadata.0.get(&metadata_key::BASE_RUNTIME_ID),
            Some(&MetadataValue::I64(IDS.runtime_id as i64))
        );
        assert_eq!(add_actor.metadata.0.get(&4), Some(&MetadataValue::I64(1)));
    }

    #[test]
    fn test_involution_across_the_table() {
        let mut metadata = Metadata::new();
        metadata.0.insert(metadata_key::TARGET, MetadataValue::I64(1));

        let packets: Vec<Packet> = vec![
            Packet::from(world::StartGame {
                entity_unique_id: 1,
                entity_runtime_id: 1,
                ..Default::default()
            }),
            Packet::from(player::AddPlayer {
                entity_runtime_id: 1,
                metadata,
                ability_data: player::AbilityData {
                    entity_unique_id: 1,
                    ..Default::default()
                },
                entity_links: vec![EntityLink {
                    ridden_entity_unique_id: 57,
                    rider_entity_unique_id: 1,
                    link_type: 1,
                    immediate: false,
                    rider_initiated: true,
                }],
                ..Default::default()
            }),
            Packet::from(player::MovePlayer {
                entity_runtime_id: 1,
                ridden_entity_runtime_id: 57,
                ..Default::default()
            }),
            Packet::from(actor::AnimateEntity {
                entity_runtime_ids: vec![1, 57, 0],
                ..Default::default()
            }),
            Packet::from(actor::AddVolumeEntity {
                entity_runtime_id: 1,
                ..Default::default()
            }),
            Packet::from(actor::ChangeMobProperty {
                entity_unique_id: 1,
                ..Default::default()
            }),
            Packet::from(world::Event {
                entity_runtime_id: 1,
                use_player_id: 1,
                data: EventData::MobKilled {
                    killer_entity_unique_id: 1,
                    victim_entity_unique_id: 57,
                    damage_cause: 2,
                },
            }),
            Packet::from(world::CommandBlockUpdate {
                block: false,
                minecart_entity_runtime_id: 1,
                ..Default::default()
            }),
            Packet::from(world::InventoryTransaction {
                legacy_request_id: 0,
                data: TransactionData::UseItemOnEntity {
                    target_entity_runtime_id: 1,
                    action_type: 0,
                    hotbar_slot: 0,
                    held_item: Default::default(),
                    player_position: Default::default(),
                    clicked_position: Default::default(),
                },
            }),
            Packet::from(player::NPCDialogue {
                entity_unique_id: 1,
                ..Default::default()
            }),
            Packet::from(world::UpdateSubChunkBlocks {
                blocks: vec![world::BlockChangeEntry {
                    synced_update_entity_unique_id: 1,
                    ..Default::default()
                }],
                extra: vec![world::BlockChangeEntry {
                    synced_update_entity_unique_id: 57,
                    ..Default::default()
                }],
                ..Default::default()
            }),
            Packet::from(player::PlayerAuthInput {
                input_data: player::INPUT_FLAG_CLIENT_PREDICTED_VEHICLE,
                client_predicted_vehicle: 1,
                ..Default::default()
            }),
            Packet::from(scoreboard::SetScore {
                action: scoreboard::SCORE_ACTION_MODIFY,
                entries: vec![
                    scoreboard::ScoreboardEntry {
                        entry_id: 1,
                        identity_type: scoreboard::IDENTITY_PLAYER,
                        entity_unique_id: 1,
                        ..Default::default()
                    },
                    scoreboard::ScoreboardEntry {
                        entry_id: 2,
                        identity_type: scoreboard::IDENTITY_FAKE_PLAYER,
                        entity_unique_id: 1,
                        ..Default::default()
                    },
                ],
            }),
            Packet::from(world::BossEvent {
                boss_entity_unique_id: 57,
                player_unique_id: 1,
                ..Default::default()
            }),
        ];

        for packet in &packets {
            assert_involution(packet);
        }
    }

    #[test]
    fn test_fake_player_rows_are_untouched() {
        let mut packet = Packet::from(scoreboard::SetScore {
            action: scoreboard::SCORE_ACTION_MODIFY,
            entries: vec![scoreboard::ScoreboardEntry {
                entry_id: 1,
                identity_type: scoreboard::IDENTITY_FAKE_PLAYER,
                entity_unique_id: 1,
                ..Default::default()
            }],
        });

        translate_packet(&mut packet, &IDS, true);
        let Packet::SetScore(ref set_score) = packet else {
            unreachable!();
        };
        assert_eq!(set_score.entries[0].entity_unique_id, 1);
    }

    #[test]
    fn test_identity_clear_is_untouched() {
        let mut packet = Packet::from(scoreboard::SetScoreboardIdentity {
            action: scoreboard::IDENTITY_ACTION_CLEAR,
            entries: vec![scoreboard::ScoreboardIdentityEntry {
                scoreboard_id: 3,
                entity_unique_id: 1,
            }],
        });

        translate_packet(&mut packet, &IDS, true);
        let Packet::SetScoreboardIdentity(ref identity) = packet else {
            unreachable!();
        };
        assert_eq!(identity.entries[0].entity_unique_id, 1);
    }

    #[test]
    fn test_untabled_packets_pass_through() {
        let original = Packet::from(world::ItemRegistry { items: Vec::new() });
        let mut packet = original.clone();
        translate_packet(&mut packet, &IDS, true);
        assert_eq!(original, packet);
    }
}
