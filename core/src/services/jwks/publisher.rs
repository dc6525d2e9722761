//! Public JWK derivation and JWKS assembly

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

use serde::{Deserialize, Serialize};

use crate::domain::entities::KeyRecord;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::KeyRepository;
use crate::services::keys::KeySelector;

/// Public JSON Web Key for one published signing key
///
/// Constructed field by field from the derived public key; the store `kid`
/// is a constructor argument rather than a post-hoc overwrite, so it can
/// never be silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    /// Key type, always `RSA`
    pub kty: String,

    /// Store identifier of the backing record, stringified
    pub kid: String,

    /// Intended key use, always `sig`
    #[serde(rename = "use")]
    pub use_: String,

    /// Signing algorithm, always `RS256`
    pub alg: String,

    /// Modulus, base64url without padding
    pub n: String,

    /// Public exponent, base64url without padding
    pub e: String,
}

impl Jwk {
    /// Derive the public JWK for a stored private key record
    ///
    /// # Returns
    /// * `Ok(Jwk)` - Public representation with the record's `kid` attached
    /// * `Err(DomainError::KeyDerivation)` - The PEM could not be parsed
    pub fn from_record(record: &KeyRecord) -> DomainResult<Self> {
        let private_key =
            RsaPrivateKey::from_pkcs1_pem(&record.private_key_pem).map_err(|e| {
                DomainError::KeyDerivation {
                    message: format!("unparsable key material for kid {}: {}", record.kid, e),
                }
            })?;
        let public_key = private_key.to_public_key();

        Ok(Self {
            kty: "RSA".to_string(),
            kid: record.kid_string(),
            use_: "sig".to_string(),
            alg: "RS256".to_string(),
            n: URL_SAFE_NO_PAD.encode(public_key.n().to_bytes_be()),
            e: URL_SAFE_NO_PAD.encode(public_key.e().to_bytes_be()),
        })
    }
}

/// JSON Web Key Set document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

/// Builds the public JWKS document from the key store
pub struct JwksPublisher<R: KeyRepository> {
    selector: KeySelector<R>,
}

impl<R: KeyRepository> JwksPublisher<R> {
    /// Create a new publisher over the given selector
    pub fn new(selector: KeySelector<R>) -> Self {
        Self { selector }
    }

    /// Build the JWKS document for all currently valid keys
    ///
    /// Fail-closed: if any record's key material cannot be parsed the whole
    /// document is aborted. A partially-correct JWKS is worse than an error
    /// response.
    ///
    /// # Returns
    /// * `Ok(Jwks)` - One entry per valid key, in ascending `kid` order
    /// * `Err(DomainError)` - Storage failure or unparsable key material
    pub async fn build_jwks(&self) -> DomainResult<Jwks> {
        let records = self.selector.select_all_for_publishing().await?;

        let mut keys = Vec::with_capacity(records.len());
        for record in &records {
            keys.push(Jwk::from_record(record)?);
        }

        Ok(Jwks { keys })
    }
}
