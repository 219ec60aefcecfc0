//! Prism session listener
//!
//! A small host: accepts bridged sessions, starts the game with placeholder
//! start data and logs the packets each session produces.

#![deny(
    missing_docs,
    clippy::panic,
)]

use prism::Result;
use prism::config::ListenerConfig;
use prism::logger;
use prism::network::Listener;
use prism::protocol::game_data::{GameData, ItemEntry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();

    let config = ListenerConfig::from_properties_file_or_default("listener.properties")?;
    let listener = Arc::new(Listener::from_config(&config).await?);

    loop {
        let connection = match listener.accept().await {
            Ok(connection) => Arc::new(connection),
            Err(err) => {
                tracing::error!("Failed to accept session: {}", err);
                continue;
            }
        };

        let listener = Arc::clone(&listener);
        tokio::spawn(async move {
            let identity = connection.identity_data().display_name.clone();
            tracing::info!("Session opened for {}", identity);

            let data = GameData {
                world_name: "world".to_string(),
                items: vec![ItemEntry {
                    name: "minecraft:shield".to_string(),
                    runtime_id: 355,
                    component_based: false,
                }],
                ..Default::default()
            };
            if let Err(err) = connection.start_game(&data).await {
                tracing::error!("Failed to start game for {}: {}", identity, err);
                let _ = connection.close().await;
                return;
            }

            loop {
                match connection.read_packet().await {
                    Ok(packet) => tracing::debug!(
                        "Session {} sent packet 0x{:02X}",
                        identity,
                        packet.id()
                    ),
                    Err(err) => {
                        tracing::info!("Session for {} ended: {}", identity, err);
                        let _ = listener.disconnect(&connection, "").await;
                        break;
                    }
                }
            }
        });
    }
}
