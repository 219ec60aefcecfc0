//! Session connection
//!
//! A [`Connection`] owns one accepted stream. Creation runs the backend
//! handshake synchronously: the connection request is parsed, the session's
//! identity pair is derived from the XUID and acknowledged, and the cache
//! entry is stored. The host then drives the start-game sequence and
//! exchanges typed packets; latency pings are answered internally and never
//! surface.

use crate::auth::Authentication;
use crate::cache;
use crate::error::{ListenerError, Result};
use crate::internal::pool;
use crate::network::SessionStream;
use crate::protocol::game_data::GameData;
use crate::protocol::login::{ClientData, IdentityData};
use crate::protocol::packets::world::{
    ChunkRadiusUpdated, ItemRegistry, PLAY_STATUS_LOGIN_SUCCESS, PlayStatus, StartGame,
};
use crate::protocol::packets::{Packet, bridge, id};
use crate::protocol::registry::{Pool, should_decode};
use crate::protocol::{
    Compression, DECODE_NEEDED, DECODE_NOT_NEEDED, DEFAULT_CHUNK_RADIUS, FrameReader, FrameWriter,
    Header,
};
use crate::session::translate::{EntityIdentity, translate_packet};
use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicI64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::io::{ReadHalf, WriteHalf};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Item name whose runtime ID is remembered for shield marshalling
const SHIELD_ITEM_NAME: &str = "minecraft:shield";

fn unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}

/// A bridged session connection
///
/// The handle the host session layer reads and writes packets against, as if
/// it were a directly connected game client. Reads are single-consumer;
/// writes may come from any number of tasks and are serialised internally.
pub struct Connection {
    reader: Mutex<FrameReader<ReadHalf<Box<dyn SessionStream>>>>,
    writer: Mutex<FrameWriter<WriteHalf<Box<dyn SessionStream>>>>,
    compression: Compression,
    pool: &'static Pool,

    identity: EntityIdentity,
    client_data: ClientData,
    identity_data: IdentityData,
    addr: SocketAddr,

    shield_id: AtomicI32,
    latency_ms: AtomicI64,
    client_cache_enabled: bool,

    closed: CancellationToken,
    close_done: AtomicBool,
}

impl Connection {
    /// Accept a session on a freshly accepted stream
    ///
    /// Runs the first handshake stage: waits for the connection request,
    /// derives and acknowledges the identity pair and stores the cache
    /// entry. Any failure closes the stream and leaves the cache untouched.
    pub(crate) async fn accept(
        stream: Box<dyn SessionStream>,
        auth: Option<Arc<dyn Authentication>>,
        compression: Compression,
        pool: &'static Pool,
        client_cache_enabled: bool,
    ) -> Result<Connection> {
        let (read_half, write_half) = tokio::io::split(stream);
        let mut connection = Connection {
            reader: Mutex::new(FrameReader::new(read_half)),
            writer: Mutex::new(FrameWriter::new(write_half)),
            compression,
            pool,
            identity: EntityIdentity {
                runtime_id: 1,
                unique_id: 1,
            },
            client_data: ClientData::default(),
            identity_data: IdentityData::default(),
            addr: SocketAddr::from(([0, 0, 0, 0], 0)),
            shield_id: AtomicI32::new(0),
            latency_ms: AtomicI64::new(0),
            client_cache_enabled,
            closed: CancellationToken::new(),
            close_done: AtomicBool::new(false),
        };

        if let Err(err) = connection.handshake(auth).await {
            let _ = connection.close().await;
            return Err(err);
        }
        Ok(connection)
    }

    async fn handshake(&mut self, auth: Option<Arc<dyn Authentication>>) -> Result<()> {
        let request = match self.expect(id::CONNECTION_REQUEST).await? {
            Packet::ConnectionRequest(request) => request,
            _ => return Err(ListenerError::Protocol("expect loop broke".to_string())),
        };

        let addr: SocketAddr = request.addr.parse()?;
        let client_data: ClientData = serde_json::from_slice(&request.client_data)?;
        let identity_data: IdentityData = serde_json::from_slice(&request.identity_data)?;

        if let Some(auth) = auth {
            if !auth.authenticate(&identity_data, &request.token) {
                return Err(ListenerError::AuthenticationFailed);
            }
        }

        let runtime_id = u64::from(crc32fast::hash(identity_data.xuid.as_bytes()));
        self.identity = EntityIdentity {
            runtime_id,
            unique_id: runtime_id as i64,
        };
        self.addr = addr;
        self.client_data = client_data;
        self.identity_data = identity_data;

        self.write_packet(Packet::from(bridge::ConnectionResponse {
            runtime_id: self.identity.runtime_id,
            unique_id: self.identity.unique_id,
        }))
        .await?;

        cache::set_cache(&self.identity_data.xuid, request.cache, request.protocol_id);
        tracing::debug!(
            "Session for {} opened with runtime ID {}",
            self.identity_data.xuid,
            self.identity.runtime_id
        );
        Ok(())
    }

    /// Read the next packet from the session
    ///
    /// Latency pings are answered and swallowed here; the call returns the
    /// next non-latency packet. An unknown packet ID or a body decode
    /// failure is returned as an error without closing the connection.
    pub async fn read_packet(&self) -> Result<Packet> {
        loop {
            let packet = self.read().await?;
            if let Packet::Latency(ping) = packet {
                let updated = (unix_millis() - ping.timestamp) + ping.latency;
                self.latency_ms.store(updated, Ordering::Relaxed);
                let _ = self
                    .write_packet(Packet::from(bridge::Latency {
                        timestamp: 0,
                        latency: updated,
                    }))
                    .await;
                continue;
            }
            return Ok(packet);
        }
    }

    /// Write a packet to the session
    ///
    /// The packet is identity-translated, framed and compressed; the whole
    /// pipeline runs under the connection's write lock, so concurrent
    /// callers never interleave frames.
    pub async fn write_packet(&self, mut packet: Packet) -> Result<()> {
        if self.closed.is_cancelled() {
            return Err(ListenerError::Closed);
        }

        let mut writer = self.writer.lock().await;
        translate_packet(&mut packet, &self.identity, true);

        let mut scratch = pool::get();
        Header::new(packet.id()).write(&mut *scratch)?;
        packet.write_body(&mut *scratch)?;
        let compressed = self.compression.compress(&scratch)?;

        let mut frame = pool::get();
        frame.push(if should_decode(packet.id()) {
            DECODE_NEEDED
        } else {
            DECODE_NOT_NEEDED
        });
        frame.extend_from_slice(&compressed);

        tokio::select! {
            _ = self.closed.cancelled() => Err(ListenerError::Closed),
            result = writer.write_frame(&frame) => result,
        }
    }

    /// Run the start-game stage of the handshake
    ///
    /// Emits the start-game and item-registry packets, grants the chunk
    /// radius and waits for the client to report itself initialised. The
    /// start-game packet carries the session's real identity pair and the
    /// fixed flag set the proxy relies on; everything else passes through
    /// from `data`.
    pub async fn start_game(&self, data: &GameData) -> Result<()> {
        for item in &data.items {
            if item.name == SHIELD_ITEM_NAME {
                self.shield_id.store(i32::from(item.runtime_id), Ordering::Relaxed);
                break;
            }
        }

        self.write_packet(Packet::from(StartGame {
            entity_unique_id: self.identity.unique_id,
            entity_runtime_id: self.identity.runtime_id,
            player_game_mode: data.player_game_mode,
            player_position: data.player_position,
            pitch: data.pitch,
            yaw: data.yaw,
            world_seed: data.world_seed,
            dimension: data.dimension,
            world_spawn: data.world_spawn,
            editor_world_type: data.editor_world_type,
            created_in_editor: data.created_in_editor,
            exported_from_editor: data.exported_from_editor,
            persona_disabled: data.persona_disabled,
            custom_skins_disabled: data.custom_skins_disabled,
            difficulty: data.difficulty,
            game_rules: data.game_rules.clone(),
            time: data.time,
            achievements_disabled: true,
            generator: 1,
            education_features_enabled: true,
            multiplayer_game: true,
            multiplayer_correlation_id: Uuid::new_v4().to_string(),
            commands_enabled: true,
            world_name: data.world_name.clone(),
            lan_broadcast_enabled: true,
            player_movement_settings: data.player_movement_settings,
            world_game_mode: data.world_game_mode,
            server_authoritative_inventory: data.server_authoritative_inventory,
            player_permissions: data.player_permissions,
            experiments: data.experiments.clone(),
            client_side_generation: data.client_side_generation,
            chat_restriction_level: data.chat_restriction_level,
            disable_player_interactions: data.disable_player_interactions,
            base_game_version: data.base_game_version.clone(),
            game_version: crate::protocol::CURRENT_VERSION.to_string(),
            use_block_network_id_hashes: data.use_block_network_id_hashes,
            blocks: data.custom_blocks.clone(),
            items: data.items.clone(),
        }))
        .await?;

        self.write_packet(Packet::from(ItemRegistry {
            items: data.items.clone(),
        }))
        .await?;

        self.expect(id::REQUEST_CHUNK_RADIUS).await?;
        self.write_packet(Packet::from(ChunkRadiusUpdated {
            chunk_radius: DEFAULT_CHUNK_RADIUS,
        }))
        .await?;
        self.write_packet(Packet::from(PlayStatus {
            status: PLAY_STATUS_LOGIN_SUCCESS,
        }))
        .await?;
        self.expect(id::SET_LOCAL_PLAYER_AS_INITIALISED).await?;
        Ok(())
    }

    /// Close the connection
    ///
    /// The first call cancels in-flight reads and writes, shuts the stream
    /// down and removes the session's cache entry; later calls report the
    /// connection already closed.
    pub async fn close(&self) -> Result<()> {
        if self.close_done.swap(true, Ordering::SeqCst) {
            return Err(ListenerError::AlreadyClosed);
        }

        self.closed.cancel();
        let mut writer = self.writer.lock().await;
        let _ = writer.shutdown().await;
        cache::delete_cache(&self.identity_data.xuid);
        tracing::debug!("Session for {} closed", self.identity_data.xuid);
        Ok(())
    }

    /// Client data supplied by the proxy
    pub fn client_data(&self) -> &ClientData {
        &self.client_data
    }

    /// Identity data supplied by the proxy
    pub fn identity_data(&self) -> &IdentityData {
        &self.identity_data
    }

    /// The identity pair assigned to this session
    pub fn entity_identity(&self) -> EntityIdentity {
        self.identity
    }

    /// Chunk radius granted to the session
    pub fn chunk_radius(&self) -> i32 {
        DEFAULT_CHUNK_RADIUS
    }

    /// Whether the client-cache blob semantics are enabled
    pub fn client_cache_enabled(&self) -> bool {
        self.client_cache_enabled
    }

    /// Runtime ID of the shield item, or zero before the game started
    pub fn shield_id(&self) -> i32 {
        self.shield_id.load(Ordering::Relaxed)
    }

    /// UDP address of the game client behind the proxy
    pub fn remote_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Most recently measured session latency
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms.load(Ordering::Relaxed).max(0) as u64)
    }

    async fn read(&self) -> Result<Packet> {
        if self.closed.is_cancelled() {
            return Err(ListenerError::Closed);
        }

        let mut payload = pool::get();
        {
            let mut reader = self.reader.lock().await;
            tokio::select! {
                _ = self.closed.cancelled() => return Err(ListenerError::Closed),
                result = reader.read_frame_into(&mut payload) => result?,
            }
        }

        let decompressed = self.compression.decompress(&payload)?;
        let mut cursor = Cursor::new(decompressed.as_slice());
        let header = Header::read(&mut cursor)?;

        let mut packet = self
            .pool
            .decode(header.packet_id, &mut cursor)
            .map_err(|err| match err {
                ListenerError::UnknownPacket(packet_id) => ListenerError::UnknownPacket(packet_id),
                other => ListenerError::PacketDecode(header.packet_id, other.to_string()),
            })?;
        translate_packet(&mut packet, &self.identity, false);
        Ok(packet)
    }

    /// Read packets until one with the given ID arrives
    ///
    /// Anything else is silently discarded; the handshake deliberately
    /// tolerates out-of-order and spurious packets.
    async fn expect(&self, packet_id: u32) -> Result<Packet> {
        loop {
            let packet = self.read_packet().await?;
            if packet.id() == packet_id {
                return Ok(packet);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::game_data::ItemEntry;
    use crate::protocol::packets::player;
    use crate::protocol::registry::global_pool;
    use tokio::io::DuplexStream;

    /// The proxy end of an in-memory session stream.
    struct TestProxy {
        reader: FrameReader<ReadHalf<DuplexStream>>,
        writer: FrameWriter<WriteHalf<DuplexStream>>,
        compression: Compression,
    }

    impl TestProxy {
        fn new(stream: DuplexStream) -> Self {
            let (read_half, write_half) = tokio::io::split(stream);
            Self {
                reader: FrameReader::new(read_half),
                writer: FrameWriter::new(write_half),
                compression: Compression::default(),
            }
        }

        async fn write_packet(&mut self, packet: &Packet) {
            let mut body = Vec::new();
            Header::new(packet.id()).write(&mut body).unwrap();
            packet.write_body(&mut body).unwrap();
            let compressed = self.compression.compress(&body).unwrap();
            self.writer.write_frame(&compressed).await.unwrap();
        }

        async fn write_raw_body(&mut self, packet_id: u32, body: &[u8]) {
            let mut blob = Vec::new();
            Header::new(packet_id).write(&mut blob).unwrap();
            blob.extend_from_slice(body);
            let compressed = self.compression.compress(&blob).unwrap();
            self.writer.write_frame(&compressed).await.unwrap();
        }

        async fn read_packet(&mut self) -> (u8, Packet) {
            let frame = self.reader.read_frame().await.unwrap();
            let hint = frame[0];
            let decompressed = self.compression.decompress(&frame[1..]).unwrap();
            let mut cursor = Cursor::new(decompressed.as_slice());
            let header = Header::read(&mut cursor).unwrap();
            let packet = global_pool().decode(header.packet_id, &mut cursor).unwrap();
            (hint, packet)
        }

        fn connection_request(xuid: &str) -> Packet {
            Packet::from(bridge::ConnectionRequest {
                addr: "1.2.3.4:5".to_string(),
                token: String::new(),
                client_data: b"{}".to_vec(),
                identity_data: format!(r#"{{"XUID":"{}"}}"#, xuid).into_bytes(),
                cache: vec![0x00, 0x01],
                protocol_id: 712,
            })
        }
    }

    async fn connect(xuid: &str) -> (Connection, TestProxy) {
        let (client, server) = tokio::io::duplex(1 << 16);
        let mut proxy = TestProxy::new(client);

        let accept = Connection::accept(
            Box::new(server),
            None,
            Compression::default(),
            global_pool(),
            true,
        );
        let proxy_side = async {
            proxy
                .write_packet(&TestProxy::connection_request(xuid))
                .await;
            let (hint, response) = proxy.read_packet().await;
            (hint, response)
        };

        let (connection, (hint, response)) = tokio::join!(accept, proxy_side);
        let connection = connection.unwrap();

        let expected = u64::from(crc32fast::hash(xuid.as_bytes()));
        assert_eq!(hint, DECODE_NEEDED);
        assert_eq!(
            response,
            Packet::from(bridge::ConnectionResponse {
                runtime_id: expected,
                unique_id: expected as i64,
            })
        );
        (connection, proxy)
    }

    #[tokio::test]
    async fn test_happy_path_handshake() {
        let (connection, _proxy) = connect("ABC").await;

        let expected = u64::from(crc32fast::hash(b"ABC"));
        assert_eq!(connection.entity_identity().runtime_id, expected);
        assert_eq!(connection.entity_identity().unique_id, expected as i64);
        assert_eq!(connection.remote_addr().to_string(), "1.2.3.4:5");
        assert_eq!(connection.chunk_radius(), 16);
        assert!(connection.client_cache_enabled());
        assert_eq!(cache::get_cache("ABC"), (vec![0x00, 0x01], 712));

        connection.close().await.unwrap();
        assert_eq!(cache::get_cache("ABC"), (Vec::new(), 0));
    }

    #[tokio::test]
    async fn test_handshake_tolerates_spurious_packets() {
        let (client, server) = tokio::io::duplex(1 << 16);
        let mut proxy = TestProxy::new(client);

        let accept = Connection::accept(
            Box::new(server),
            None,
            Compression::default(),
            global_pool(),
            true,
        );
        let proxy_side = async {
            proxy
                .write_packet(&Packet::from(player::Animate {
                    action_type: 1,
                    entity_runtime_id: 9,
                }))
                .await;
            proxy.write_packet(&Packet::from(bridge::Flush)).await;
            proxy
                .write_packet(&TestProxy::connection_request("TOLERANT"))
                .await;
            proxy.read_packet().await
        };

        let (connection, _) = tokio::join!(accept, proxy_side);
        let connection = connection.unwrap();
        connection.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_authentication_failure_leaves_cache_untouched() {
        struct Deny;
        impl Authentication for Deny {
            fn authenticate(&self, _identity_data: &IdentityData, _token: &str) -> bool {
                false
            }
        }

        let (client, server) = tokio::io::duplex(1 << 16);
        let mut proxy = TestProxy::new(client);

        let accept = Connection::accept(
            Box::new(server),
            Some(Arc::new(Deny)),
            Compression::default(),
            global_pool(),
            true,
        );
        let proxy_side = async {
            proxy
                .write_packet(&TestProxy::connection_request("DENIED"))
                .await;
        };

        let (result, ()) = tokio::join!(accept, proxy_side);
        let err = result.err().expect("handshake must fail");
        assert_eq!(err.to_string(), "authentication failed");
        assert_eq!(cache::get_cache("DENIED"), (Vec::new(), 0));
    }

    #[tokio::test]
    async fn test_start_game_sequence() {
        let (connection, mut proxy) = connect("STARTER").await;
        let identity = connection.entity_identity();

        let data = GameData {
            entity_unique_id: 1,
            entity_runtime_id: 1,
            world_name: "world".to_string(),
            items: vec![
                ItemEntry {
                    name: "minecraft:stick".to_string(),
                    runtime_id: 280,
                    component_based: false,
                },
                ItemEntry {
                    name: "minecraft:shield".to_string(),
                    runtime_id: 355,
                    component_based: false,
                },
            ],
            ..Default::default()
        };

        let proxy_side = async {
            let (hint, start_game) = proxy.read_packet().await;
            assert_eq!(hint, DECODE_NEEDED);
            let Packet::StartGame(start_game) = start_game else {
                unreachable!("expected a start-game packet");
            };
            assert_eq!(start_game.entity_unique_id, identity.unique_id);
            assert_eq!(start_game.entity_runtime_id, identity.runtime_id);
            assert!(start_game.achievements_disabled);
            assert_eq!(start_game.generator, 1);
            assert!(start_game.education_features_enabled);
            assert!(start_game.multiplayer_game);
            assert!(start_game.commands_enabled);
            assert!(start_game.lan_broadcast_enabled);
            assert_eq!(start_game.game_version, crate::protocol::CURRENT_VERSION);
            assert!(!start_game.multiplayer_correlation_id.is_empty());

            let (_, item_registry) = proxy.read_packet().await;
            let Packet::ItemRegistry(item_registry) = item_registry else {
                unreachable!("expected an item-registry packet");
            };
            assert_eq!(item_registry.items.len(), 2);

            // A stray packet before the chunk-radius request must be skipped.
            proxy
                .write_packet(&Packet::from(player::PlayerAuthInput::default()))
                .await;
            proxy
                .write_packet(&Packet::from(crate::protocol::packets::world::RequestChunkRadius {
                    chunk_radius: 8,
                    max_chunk_radius: 32,
                }))
                .await;

            let (_, radius) = proxy.read_packet().await;
            assert_eq!(
                radius,
                Packet::from(ChunkRadiusUpdated { chunk_radius: 16 })
            );
            let (_, status) = proxy.read_packet().await;
            assert_eq!(
                status,
                Packet::from(PlayStatus {
                    status: PLAY_STATUS_LOGIN_SUCCESS
                })
            );

            proxy
                .write_packet(&Packet::from(player::SetLocalPlayerAsInitialised {
                    entity_runtime_id: identity.runtime_id,
                }))
                .await;
        };

        let (result, ()) = tokio::join!(connection.start_game(&data), proxy_side);
        result.unwrap();
        assert_eq!(connection.shield_id(), 355);
        connection.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_latency_is_transparent() {
        let (connection, mut proxy) = connect("LATENT").await;

        proxy
            .write_packet(&Packet::from(bridge::Latency {
                timestamp: unix_millis() - 20,
                latency: 5,
            }))
            .await;
        proxy.write_packet(&Packet::from(bridge::Flush)).await;

        let packet = connection.read_packet().await.unwrap();
        assert_eq!(packet, Packet::from(bridge::Flush));

        let (hint, reply) = proxy.read_packet().await;
        assert_eq!(hint, DECODE_NEEDED);
        let Packet::Latency(reply) = reply else {
            unreachable!("expected a latency reply");
        };
        assert_eq!(reply.timestamp, 0);
        assert!(reply.latency >= 25, "latency was {}", reply.latency);
        assert_eq!(
            connection.latency(),
            Duration::from_millis(reply.latency as u64)
        );

        connection.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_packet_id_keeps_connection_usable() {
        let (connection, mut proxy) = connect("UNKNOWN").await;

        proxy.write_raw_body(0x2AD, &[]).await;
        let err = connection.read_packet().await.unwrap_err();
        assert_eq!(err.to_string(), "unknown packet ID 685");

        proxy.write_packet(&Packet::from(bridge::Flush)).await;
        let packet = connection.read_packet().await.unwrap();
        assert_eq!(packet, Packet::from(bridge::Flush));

        connection.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_translation_swap_on_the_wire() {
        let (connection, mut proxy) = connect("SWAPPED").await;
        let identity = connection.entity_identity();

        connection
            .write_packet(Packet::from(player::Animate {
                action_type: 1,
                entity_runtime_id: 1,
            }))
            .await
            .unwrap();

        let (_, on_wire) = proxy.read_packet().await;
        let Packet::Animate(on_wire) = on_wire else {
            unreachable!("expected an animate packet");
        };
        assert_eq!(on_wire.entity_runtime_id, identity.runtime_id);

        proxy
            .write_packet(&Packet::from(player::Animate {
                action_type: 1,
                entity_runtime_id: identity.runtime_id,
            }))
            .await;
        let Packet::Animate(inbound) = connection.read_packet().await.unwrap() else {
            unreachable!("expected an animate packet");
        };
        assert_eq!(inbound.entity_runtime_id, 1);

        connection.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_double_close() {
        let (connection, _proxy) = connect("CLOSER").await;

        connection.close().await.unwrap();
        let err = connection.close().await.unwrap_err();
        assert_eq!(err.to_string(), "connection already closed");

        let err = connection.read_packet().await.unwrap_err();
        assert_eq!(err.to_string(), "connection closed");
        let err = connection
            .write_packet(Packet::from(bridge::Flush))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "connection closed");
    }

    #[tokio::test]
    async fn test_concurrent_writes_do_not_interleave() {
        let (connection, mut proxy) = connect("WRITERS").await;
        let connection = Arc::new(connection);

        let mut handles = Vec::new();
        for index in 0..8u64 {
            let connection = Arc::clone(&connection);
            handles.push(tokio::spawn(async move {
                connection
                    .write_packet(Packet::from(player::Emote {
                        entity_runtime_id: index,
                        emote_id: format!("emote-{}", index),
                        xuid: String::new(),
                        platform_id: String::new(),
                        flags: 0,
                    }))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let mut seen = std::collections::HashSet::new();
        for _ in 0..8 {
            let (_, packet) = proxy.read_packet().await;
            let Packet::Emote(emote) = packet else {
                unreachable!("expected an emote packet");
            };
            seen.insert(emote.emote_id);
        }
        assert_eq!(seen.len(), 8);

        connection.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_cache_cleanup_is_per_connection() {
        let (connection_a, _proxy_a) = connect("PLAYER-A").await;
        let (connection_b, _proxy_b) = connect("PLAYER-B").await;

        // Distinct XUIDs derive distinct identity pairs.
        assert_ne!(
            connection_a.entity_identity(),
            connection_b.entity_identity()
        );

        assert_eq!(cache::get_cache("PLAYER-A"), (vec![0x00, 0x01], 712));
        assert_eq!(cache::get_cache("PLAYER-B"), (vec![0x00, 0x01], 712));

        connection_a.close().await.unwrap();
        assert_eq!(cache::get_cache("PLAYER-A"), (Vec::new(), 0));
        assert_eq!(cache::get_cache("PLAYER-B"), (vec![0x00, 0x01], 712));

        connection_b.close().await.unwrap();
    }
}
