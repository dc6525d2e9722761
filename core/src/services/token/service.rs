//! JWT issuance from stored key records

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::{Claims, KeyRecord};
use crate::errors::{DomainError, DomainResult};
use crate::services::now_epoch_seconds;

/// Service issuing RS256-signed JWTs
///
/// The token header `kid` is always the stringified store identifier of the
/// signing record, matching the `kid` published in the JWKS document. That
/// join is what lets a verifier look up the right public key.
#[derive(Debug, Clone, Default)]
pub struct TokenService;

impl TokenService {
    /// Create a new token service
    pub fn new() -> Self {
        Self
    }

    /// Issue a JWT signed with the given key record
    ///
    /// # Arguments
    /// * `record` - The signing key selected by the key selector
    /// * `want_expired` - When true, the claim set is backdated so the token
    ///   is already expired by construction, independent of the key's own
    ///   expiry field
    ///
    /// # Returns
    /// * `Ok(String)` - The compact serialized token
    /// * `Err(DomainError::Signing)` - The key material is malformed or the
    ///   signing primitive rejected it
    pub fn issue(&self, record: &KeyRecord, want_expired: bool) -> DomainResult<String> {
        let now = now_epoch_seconds();
        let claims = if want_expired {
            Claims::backdated(now)
        } else {
            Claims::fresh(now)
        };

        let encoding_key =
            EncodingKey::from_rsa_pem(record.private_key_pem.as_bytes()).map_err(|e| {
                DomainError::Signing {
                    message: format!("invalid private key material for kid {}: {}", record.kid, e),
                }
            })?;

        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(record.kid_string());

        encode(&header, &claims, &encoding_key).map_err(|e| DomainError::Signing {
            message: format!("signing failed for kid {}: {}", record.kid, e),
        })
    }
}
