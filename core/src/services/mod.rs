//! Business services built on top of the repository interfaces.
//!
//! - `keys` - key generation, lifecycle invariants and selection
//! - `token` - RS256 JWT issuance
//! - `jwks` - public JWKS document construction

pub mod jwks;
pub mod keys;
pub mod token;

pub use jwks::{Jwk, Jwks, JwksPublisher};
pub use keys::{EnsureOutcome, KeyLifecycleService, KeySelector};
pub use token::TokenService;

/// Current Unix time in seconds
///
/// All expiry classification in the service layer goes through this single
/// clock read.
pub fn now_epoch_seconds() -> i64 {
    chrono::Utc::now().timestamp()
}
