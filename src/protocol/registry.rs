//! Packet registry
//!
//! Two registries live here: the decode pool mapping packet IDs to body
//! factories, and the process-wide decode-set controlling the decode-hint
//! byte written in front of every outbound frame.

use crate::error::{ListenerError, Result};
use crate::protocol::packets::{Factory, Packet, default_factories, id};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::sync::LazyLock;

/// A pool of packet factories keyed by packet ID
pub struct Pool {
    factories: HashMap<u32, Factory>,
}

impl Pool {
    /// Create a pool containing every packet type the listener knows
    pub fn new() -> Self {
        Self {
            factories: default_factories().into_iter().collect(),
        }
    }

    /// Decode a packet body by ID
    pub fn decode<R: Read>(&self, packet_id: u32, reader: &mut R) -> Result<Packet> {
        let factory = self
            .factories
            .get(&packet_id)
            .ok_or(ListenerError::UnknownPacket(packet_id))?;
        factory(reader)
    }

    /// Whether a packet ID has a registered factory
    pub fn contains(&self, packet_id: u32) -> bool {
        self.factories.contains_key(&packet_id)
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_POOL: LazyLock<Pool> = LazyLock::new(Pool::new);

/// The process-wide packet pool
pub fn global_pool() -> &'static Pool {
    &GLOBAL_POOL
}

/// IDs the proxy must decode to do its own bookkeeping: identity rewriting,
/// session transfers and the handshake itself.
const DECODED_BY_PROXY: &[u32] = &[
    id::LATENCY,
    id::TRANSFER,
    id::CONNECTION_RESPONSE,
    id::FLUSH,
    id::UPDATE_CACHE,
    id::ADD_ACTOR,
    id::ADD_ITEM_ACTOR,
    id::ADD_PAINTING,
    id::ADD_PLAYER,
    id::BOSS_EVENT,
    id::CHUNK_RADIUS_UPDATED,
    id::ITEM_REGISTRY,
    id::MOB_EFFECT,
    id::PLAYER_LIST,
    id::PLAY_STATUS,
    id::REMOVE_ACTOR,
    id::REMOVE_OBJECTIVE,
    id::SET_DISPLAY_OBJECTIVE,
    id::START_GAME,
];

static DECODE_SET: LazyLock<RwLock<HashSet<u32>>> =
    LazyLock::new(|| RwLock::new(DECODED_BY_PROXY.iter().copied().collect()));

/// Mark a packet ID as decode-needed (or not) for outbound frames
///
/// Intended for process start-up, before sessions exist; it is safe at any
/// time, writers simply contend on the set's lock.
pub fn register_packet_decode(packet_id: u32, decode: bool) {
    let mut set = DECODE_SET.write();
    if decode {
        set.insert(packet_id);
    } else {
        set.remove(&packet_id);
    }
}

/// Whether outbound frames of this packet ID carry the decode-needed hint
pub fn should_decode(packet_id: u32) -> bool {
    DECODE_SET.read().contains(&packet_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_knows_the_handshake_packets() {
        let pool = Pool::new();
        for packet_id in [
            id::CONNECTION_REQUEST,
            id::CONNECTION_RESPONSE,
            id::START_GAME,
            id::REQUEST_CHUNK_RADIUS,
            id::CHUNK_RADIUS_UPDATED,
            id::PLAY_STATUS,
            id::SET_LOCAL_PLAYER_AS_INITIALISED,
            id::LATENCY,
        ] {
            assert!(pool.contains(packet_id), "missing factory for {}", packet_id);
        }
        assert!(!pool.contains(0x3FF));
    }

    #[test]
    fn test_default_decode_set_membership() {
        assert!(should_decode(id::LATENCY));
        assert!(should_decode(id::START_GAME));
        assert!(should_decode(id::PLAYER_LIST));
        assert!(!should_decode(id::MOVE_PLAYER));
        assert!(!should_decode(id::DISCONNECT));
    }

    #[test]
    fn test_register_packet_decode_toggles() {
        register_packet_decode(id::EMOTE, true);
        assert!(should_decode(id::EMOTE));
        register_packet_decode(id::EMOTE, false);
        assert!(!should_decode(id::EMOTE));
    }
}
