//! Unit tests for key store invariant enforcement

use std::sync::Arc;

use jwks_shared::KeyPolicyConfig;

use crate::repositories::{KeyRepository, MockKeyRepository};
use crate::services::keys::KeyLifecycleService;
use crate::services::now_epoch_seconds;

fn service(repo: Arc<MockKeyRepository>) -> KeyLifecycleService<MockKeyRepository> {
    KeyLifecycleService::new(repo, KeyPolicyConfig::default())
}

#[tokio::test]
async fn test_empty_store_gets_one_key_of_each_class() {
    let repo = Arc::new(MockKeyRepository::new());
    let lifecycle = service(repo.clone());

    let outcome = lifecycle.ensure_invariants().await.unwrap();

    assert_eq!(outcome.insertions(), 2);
    assert!(repo.count_by_expiry(false).await.unwrap() >= 1);
    assert!(repo.count_by_expiry(true).await.unwrap() >= 1);
}

#[tokio::test]
async fn test_second_run_performs_zero_insertions() {
    let repo = Arc::new(MockKeyRepository::new());
    let lifecycle = service(repo.clone());

    lifecycle.ensure_invariants().await.unwrap();
    let before = repo.len().await;

    let outcome = lifecycle.ensure_invariants().await.unwrap();

    assert_eq!(outcome.insertions(), 0);
    assert_eq!(repo.len().await, before);
}

#[tokio::test]
async fn test_only_the_missing_class_is_filled() {
    let repo = Arc::new(MockKeyRepository::new());
    let now = now_epoch_seconds();
    repo.insert("unused-pem", now + 600).await.unwrap();

    let outcome = service(repo.clone()).ensure_invariants().await.unwrap();

    assert!(outcome.inserted_valid.is_none());
    assert!(outcome.inserted_expired.is_some());
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_generated_expiries_land_in_the_right_class() {
    let repo = Arc::new(MockKeyRepository::new());
    service(repo.clone()).ensure_invariants().await.unwrap();

    let now = now_epoch_seconds();
    let valid = repo.find_by_expiry(false).await.unwrap();
    let expired = repo.find_by_expiry(true).await.unwrap();

    assert!(valid.iter().all(|r| r.expires_at > now));
    assert!(expired.iter().all(|r| r.expires_at <= now));
}

#[tokio::test]
async fn test_storage_failure_propagates() {
    let repo = Arc::new(MockKeyRepository::failing());
    let result = service(repo).ensure_invariants().await;

    assert!(result.is_err());
}
