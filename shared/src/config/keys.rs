//! Key lifecycle policy configuration

use serde::{Deserialize, Serialize};

/// Policy for generated signing keys and their expiry metadata
///
/// The lifecycle service keeps the store stocked with at least one valid and
/// one expired key; this config controls the RSA modulus size and how far in
/// the future (or past) the generated records expire.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyPolicyConfig {
    /// RSA modulus size in bits for generated keys
    pub key_bits: usize,

    /// Seconds a freshly generated valid key stays valid
    pub valid_ttl_secs: i64,

    /// Seconds in the past a generated expired key is backdated by
    pub expired_backdate_secs: i64,
}

impl Default for KeyPolicyConfig {
    fn default() -> Self {
        Self {
            key_bits: 2048,
            valid_ttl_secs: 3600,
            expired_backdate_secs: 10,
        }
    }
}

impl KeyPolicyConfig {
    /// Set the RSA modulus size
    pub fn with_key_bits(mut self, bits: usize) -> Self {
        self.key_bits = bits;
        self
    }

    /// Set how long generated valid keys live
    pub fn with_valid_ttl(mut self, secs: i64) -> Self {
        self.valid_ttl_secs = secs;
        self
    }
}
