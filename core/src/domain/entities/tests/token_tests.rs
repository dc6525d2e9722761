//! Unit tests for the Claims entity

use crate::domain::entities::token::{
    Claims, EXPIRED_TOKEN_BACKDATE_SECS, TOKEN_SUBJECT, TOKEN_TTL_SECS,
};

#[test]
fn test_fresh_claims_are_valid_for_the_full_ttl() {
    let now = 1_700_000_000;
    let claims = Claims::fresh(now);

    assert_eq!(claims.sub, TOKEN_SUBJECT);
    assert_eq!(claims.iat, now);
    assert_eq!(claims.exp, now + TOKEN_TTL_SECS);
}

#[test]
fn test_backdated_claims_are_expired_by_construction() {
    let now = 1_700_000_000;
    let claims = Claims::backdated(now);

    assert_eq!(claims.sub, TOKEN_SUBJECT);
    assert_eq!(claims.iat, now - TOKEN_TTL_SECS);
    assert_eq!(claims.exp, now - EXPIRED_TOKEN_BACKDATE_SECS);
    assert!(claims.exp < now);
    assert!(claims.iat < claims.exp);
}

#[test]
fn test_claims_serialize_with_standard_names() {
    let claims = Claims::fresh(1_700_000_000);
    let json = serde_json::to_value(&claims).unwrap();

    assert_eq!(json["sub"], TOKEN_SUBJECT);
    assert!(json["iat"].is_i64());
    assert!(json["exp"].is_i64());
}
