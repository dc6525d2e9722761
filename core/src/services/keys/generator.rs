//! RSA signing key generation

use rand::rngs::OsRng;
use rsa::pkcs1::{EncodeRsaPrivateKey, LineEnding};
use rsa::RsaPrivateKey;

use crate::errors::{DomainError, DomainResult};

/// Generate a fresh RSA signing key and return it as a PKCS#1 PEM string
///
/// Uses the operating system RNG. Generation is the only CPU-bound step in
/// the whole service and can take a noticeable fraction of a second for
/// 2048-bit keys.
///
/// # Arguments
/// * `bits` - RSA modulus size; 2048 for production use
///
/// # Returns
/// * `Ok(String)` - PEM-encoded private key
/// * `Err(DomainError::KeyGeneration)` - Generation or encoding failed
pub fn generate_signing_key(bits: usize) -> DomainResult<String> {
    let private_key = RsaPrivateKey::new(&mut OsRng, bits).map_err(|e| {
        DomainError::KeyGeneration {
            message: format!("RSA key generation failed: {}", e),
        }
    })?;

    let pem = private_key
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| DomainError::KeyGeneration {
            message: format!("PEM encoding failed: {}", e),
        })?;

    Ok(pem.to_string())
}
