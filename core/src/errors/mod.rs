//! Domain-specific error types and error handling.

use thiserror::Error;

/// Closed set of core failures
///
/// Every failure the key store, lifecycle, selection, signing and publishing
/// paths can produce is one of these kinds. The HTTP boundary maps the whole
/// enumeration to a generic response in one place; nothing here carries key
/// material or raw SQL text.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Persistence layer unavailable or rejected an operation
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// The requested expiry class has zero records in the store
    #[error("No key available in the store (expired = {expired})")]
    NoKeyAvailable { expired: bool },

    /// Stored key material could not be parsed into a public key
    #[error("Key derivation error: {message}")]
    KeyDerivation { message: String },

    /// The signing primitive rejected the key or algorithm
    #[error("Signing error: {message}")]
    Signing { message: String },

    /// RSA key pair generation or PEM encoding failed
    #[error("Key generation error: {message}")]
    KeyGeneration { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
