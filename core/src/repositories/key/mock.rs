//! Mock implementation of KeyRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::KeyRecord;
use crate::errors::{DomainError, DomainResult};
use crate::services::now_epoch_seconds;

use super::r#trait::KeyRepository;

/// In-memory key repository for testing
///
/// Assigns identifiers the way the real store does: monotonically
/// increasing, never reused even after records are removed.
pub struct MockKeyRepository {
    records: Arc<RwLock<Vec<KeyRecord>>>,
    next_kid: Arc<RwLock<i64>>,
    /// When set, every operation fails with a storage error
    fail_storage: bool,
}

impl MockKeyRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_kid: Arc::new(RwLock::new(1)),
            fail_storage: false,
        }
    }

    /// Create a mock whose every operation reports a storage failure
    pub fn failing() -> Self {
        Self {
            fail_storage: true,
            ..Self::new()
        }
    }

    /// Number of records currently held, regardless of expiry class
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    fn check_storage(&self) -> DomainResult<()> {
        if self.fail_storage {
            return Err(DomainError::Storage {
                message: "mock storage failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockKeyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyRepository for MockKeyRepository {
    async fn insert(&self, private_key_pem: &str, expires_at: i64) -> DomainResult<i64> {
        self.check_storage()?;

        let mut next_kid = self.next_kid.write().await;
        let kid = *next_kid;
        *next_kid += 1;

        self.records.write().await.push(KeyRecord {
            kid,
            private_key_pem: private_key_pem.to_string(),
            expires_at,
        });

        Ok(kid)
    }

    async fn find_by_expiry(&self, expired: bool) -> DomainResult<Vec<KeyRecord>> {
        self.check_storage()?;

        let now = now_epoch_seconds();
        let records = self.records.read().await;

        // Records are appended in kid order, so no extra sort is needed
        Ok(records
            .iter()
            .filter(|r| r.is_expired_at(now) == expired)
            .cloned()
            .collect())
    }

    async fn find_one_by_expiry(&self, expired: bool) -> DomainResult<Option<KeyRecord>> {
        Ok(self.find_by_expiry(expired).await?.into_iter().next())
    }
}
