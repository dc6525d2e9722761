//! Key selection for signing and publishing

use std::sync::Arc;

use crate::domain::entities::KeyRecord;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::KeyRepository;

/// Queries the key store for signing and publishing candidates
pub struct KeySelector<R: KeyRepository> {
    repository: Arc<R>,
}

impl<R: KeyRepository> KeySelector<R> {
    /// Create a new selector over the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Select one key of the requested expiry class for signing
    ///
    /// Returns the earliest-inserted key of the class. Never substitutes the
    /// other class: an empty class is a reportable server-side failure, not
    /// a fallback.
    ///
    /// # Returns
    /// * `Ok(KeyRecord)` - A key of the requested class
    /// * `Err(DomainError::NoKeyAvailable)` - The class has zero records
    pub async fn select_for_signing(&self, want_expired: bool) -> DomainResult<KeyRecord> {
        self.repository
            .find_one_by_expiry(want_expired)
            .await?
            .ok_or(DomainError::NoKeyAvailable {
                expired: want_expired,
            })
    }

    /// Select every key eligible for the public JWKS document
    ///
    /// Only non-expired keys are ever published. Expired keys could still
    /// verify historical tokens, but excluding them from the discovery
    /// document is deliberate: a compliant verifier must treat tokens signed
    /// by them as unverifiable going forward.
    pub async fn select_all_for_publishing(&self) -> DomainResult<Vec<KeyRecord>> {
        self.repository.find_by_expiry(false).await
    }
}
