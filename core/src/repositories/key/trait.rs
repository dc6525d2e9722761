//! Key repository trait defining the interface for signing key persistence.

use async_trait::async_trait;

use crate::domain::entities::KeyRecord;
use crate::errors::DomainResult;

/// Repository trait for KeyRecord persistence operations
///
/// The store assigns identifiers on insertion (monotonically increasing,
/// never reused) and classifies records by expiry against the clock at call
/// time. Every query reflects the current persisted state; implementations
/// must not cache.
#[async_trait]
pub trait KeyRepository: Send + Sync {
    /// Persist a new key record and return its assigned identifier
    ///
    /// # Arguments
    /// * `private_key_pem` - PEM-encoded RSA private key
    /// * `expires_at` - Expiry as a Unix timestamp in seconds
    ///
    /// # Returns
    /// * `Ok(kid)` - Identifier assigned by the store
    /// * `Err(DomainError::Storage)` - Persistence layer failure
    async fn insert(&self, private_key_pem: &str, expires_at: i64) -> DomainResult<i64>;

    /// Find all records of one expiry class, ordered by ascending `kid`
    ///
    /// `expired = true` returns records with `expires_at <= now`,
    /// `expired = false` those with `expires_at > now`. An empty vec is a
    /// valid, non-error result.
    async fn find_by_expiry(&self, expired: bool) -> DomainResult<Vec<KeyRecord>>;

    /// Find the earliest-inserted record (lowest `kid`) of one expiry class
    ///
    /// # Returns
    /// * `Ok(Some(record))` - A record of the requested class exists
    /// * `Ok(None)` - The class is empty (not an error)
    /// * `Err(DomainError::Storage)` - Persistence layer failure
    async fn find_one_by_expiry(&self, expired: bool) -> DomainResult<Option<KeyRecord>>;

    /// Count the records of one expiry class
    ///
    /// Implementations backed by SQL should override this with a `COUNT(*)`
    /// query instead of materializing the rows.
    async fn count_by_expiry(&self, expired: bool) -> DomainResult<u64> {
        Ok(self.find_by_expiry(expired).await?.len() as u64)
    }
}
