//! Proxy-supplied login data
//!
//! The proxy has already authenticated the game client; it forwards the
//! client's identity and device blobs as JSON inside the connection request.
//! Both structs tolerate unknown fields, since the upstream schema grows with
//! every game release.

use serde::{Deserialize, Serialize};

/// Identity data of the player behind a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityData {
    /// External user identifier; the key for the client cache and the seed
    /// for the session's entity identifiers
    #[serde(rename = "XUID")]
    pub xuid: String,
    /// UUID of the player identity
    #[serde(rename = "identity")]
    pub identity: String,
    /// Name shown to other players
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Title ID of the client edition
    #[serde(rename = "titleId")]
    pub title_id: String,
}

/// Device and client settings of the player behind a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientData {
    /// Operating system of the device
    #[serde(rename = "DeviceOS")]
    pub device_os: i32,
    /// Model name of the device
    #[serde(rename = "DeviceModel")]
    pub device_model: String,
    /// Unique device identifier
    #[serde(rename = "DeviceId")]
    pub device_id: String,
    /// Game version string of the client
    #[serde(rename = "GameVersion")]
    pub game_version: String,
    /// Language code such as `en_US`
    #[serde(rename = "LanguageCode")]
    pub language_code: String,
    /// Platform-level chat identifier
    #[serde(rename = "PlatformOnlineId")]
    pub platform_online_id: String,
    /// Self-signed identifier the client generated
    #[serde(rename = "SelfSignedId")]
    pub self_signed_id: String,
    /// Third-party name chosen by the player
    #[serde(rename = "ThirdPartyName")]
    pub third_party_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_data_tolerates_unknown_fields() {
        let identity: IdentityData = serde_json::from_str(
            r#"{"XUID":"2535416197","displayName":"Steve","sandboxId":"RETAIL"}"#,
        )
        .unwrap();

        assert_eq!(identity.xuid, "2535416197");
        assert_eq!(identity.display_name, "Steve");
        assert!(identity.identity.is_empty());
    }
}
