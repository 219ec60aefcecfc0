//! Session authentication
//!
//! The proxy has already authenticated the game client; this predicate only
//! verifies that the proxy itself is allowed to open sessions on this
//! backend.

use crate::protocol::login::IdentityData;

/// Decides whether a connection request may open a session
pub trait Authentication: Send + Sync {
    /// Authenticate a session by its identity data and handshake token
    fn authenticate(&self, identity_data: &IdentityData, token: &str) -> bool;
}

/// Authentication comparing the token against a shared secret
#[derive(Debug, Clone)]
pub struct SecretAuthentication {
    secret: String,
}

impl SecretAuthentication {
    /// Create an authenticator with the given shared secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Authentication for SecretAuthentication {
    fn authenticate(&self, _identity_data: &IdentityData, token: &str) -> bool {
        self.secret == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_authentication() {
        let auth = SecretAuthentication::new("hunter2");
        let identity = IdentityData::default();

        assert!(auth.authenticate(&identity, "hunter2"));
        assert!(!auth.authenticate(&identity, "hunter3"));
        assert!(!auth.authenticate(&identity, ""));
    }
}
