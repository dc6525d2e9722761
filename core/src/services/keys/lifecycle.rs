//! Key store invariant enforcement

use std::sync::Arc;

use jwks_shared::KeyPolicyConfig;

use crate::errors::DomainResult;
use crate::repositories::KeyRepository;
use crate::services::now_epoch_seconds;

use super::generator::generate_signing_key;

/// What `ensure_invariants` inserted, if anything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnsureOutcome {
    /// Identifier of the valid key inserted during this call
    pub inserted_valid: Option<i64>,
    /// Identifier of the expired key inserted during this call
    pub inserted_expired: Option<i64>,
}

impl EnsureOutcome {
    /// Number of records this call inserted
    pub fn insertions(&self) -> usize {
        self.inserted_valid.iter().count() + self.inserted_expired.iter().count()
    }
}

/// Service guaranteeing the key store invariants
///
/// After a successful `ensure_invariants` call the store holds at least one
/// valid and at least one expired key. Runs once at startup before the
/// service admits requests, and again after destructive test operations.
pub struct KeyLifecycleService<R: KeyRepository> {
    repository: Arc<R>,
    policy: KeyPolicyConfig,
}

impl<R: KeyRepository> KeyLifecycleService<R> {
    /// Create a new lifecycle service
    pub fn new(repository: Arc<R>, policy: KeyPolicyConfig) -> Self {
        Self { repository, policy }
    }

    /// Ensure the store holds at least one valid and one expired key
    ///
    /// Counts both expiry classes as of the current time and generates a
    /// fresh RSA key for each class that is empty. The two checks are
    /// independent; zero, one or two insertions may happen in one call.
    ///
    /// Idempotent in effect: repeated calls when the invariants already hold
    /// perform no writes. Not synchronized against concurrent invocation;
    /// two racing calls can each insert a key of the same class, which only
    /// over-provisions the store and is harmless.
    ///
    /// # Returns
    /// * `Ok(EnsureOutcome)` - Which records were inserted
    /// * `Err(DomainError)` - Storage or key generation failure
    pub async fn ensure_invariants(&self) -> DomainResult<EnsureOutcome> {
        let now = now_epoch_seconds();
        let mut outcome = EnsureOutcome::default();

        let valid_count = self.repository.count_by_expiry(false).await?;
        if valid_count == 0 {
            let pem = generate_signing_key(self.policy.key_bits)?;
            let expires_at = now + self.policy.valid_ttl_secs;
            let kid = self.repository.insert(&pem, expires_at).await?;
            tracing::info!(kid, expires_at, "inserted valid signing key");
            outcome.inserted_valid = Some(kid);
        }

        let expired_count = self.repository.count_by_expiry(true).await?;
        if expired_count == 0 {
            let pem = generate_signing_key(self.policy.key_bits)?;
            let expires_at = now - self.policy.expired_backdate_secs;
            let kid = self.repository.insert(&pem, expires_at).await?;
            tracing::info!(kid, expires_at, "inserted expired signing key");
            outcome.inserted_expired = Some(kid);
        }

        Ok(outcome)
    }
}
