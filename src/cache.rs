//! Client-cache registry
//!
//! A process-wide map from XUID to the opaque cache blob the proxy supplied
//! with the connection request. The host may query it before it ever holds a
//! session handle, which is why this is global state rather than
//! per-connection. An entry lives exactly as long as its connection.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone)]
struct CacheEntry {
    blob: Vec<u8>,
    protocol_id: i32,
}

static CACHE: LazyLock<RwLock<HashMap<String, CacheEntry>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Look up the cache blob and protocol revision stored for a XUID
///
/// Returns the zero pair `(vec![], 0)` when no entry exists.
pub fn get_cache(xuid: &str) -> (Vec<u8>, i32) {
    let cache = CACHE.read();
    match cache.get(xuid) {
        Some(entry) => (entry.blob.clone(), entry.protocol_id),
        None => (Vec::new(), 0),
    }
}

pub(crate) fn set_cache(xuid: &str, blob: Vec<u8>, protocol_id: i32) {
    let mut cache = CACHE.write();
    cache.insert(xuid.to_string(), CacheEntry { blob, protocol_id });
}

pub(crate) fn delete_cache(xuid: &str) {
    let mut cache = CACHE.write();
    cache.remove(xuid);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_lifecycle() {
        assert_eq!(get_cache("cache-test-absent"), (Vec::new(), 0));

        set_cache("cache-test-a", vec![0x00, 0x01], 712);
        set_cache("cache-test-b", vec![0x02], 712);
        assert_eq!(get_cache("cache-test-a"), (vec![0x00, 0x01], 712));

        delete_cache("cache-test-a");
        assert_eq!(get_cache("cache-test-a"), (Vec::new(), 0));
        assert_eq!(get_cache("cache-test-b"), (vec![0x02], 712));

        delete_cache("cache-test-b");
    }
}
