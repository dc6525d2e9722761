//! Signing key record entity

use serde::{Deserialize, Serialize};

/// A persisted signing key with its expiry metadata
///
/// The store assigns `kid` on insertion (auto-increment, never reused) and
/// records are immutable afterwards. A record is *valid* while
/// `expires_at > now` and *expired* from the moment `expires_at <= now`;
/// a record expiring exactly "now" already counts as expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    /// Store-assigned identifier; doubles as the JWK / JWT header `kid`
    pub kid: i64,

    /// PEM-encoded RSA private key
    pub private_key_pem: String,

    /// Expiry as a Unix timestamp in seconds
    pub expires_at: i64,
}

impl KeyRecord {
    /// Whether this record counts as expired at `now`
    ///
    /// The boundary is exclusive on the valid side: `expires_at == now`
    /// is expired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at <= now
    }

    /// The string form of the identifier used in JWT headers and JWKS
    /// documents
    pub fn kid_string(&self) -> String {
        self.kid.to_string()
    }
}
