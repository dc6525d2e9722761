//! JWT claim set for issued tokens

use serde::{Deserialize, Serialize};

/// Placeholder identity embedded in every issued token
pub const TOKEN_SUBJECT: &str = "userABC";

/// Lifetime of a freshly issued token in seconds
pub const TOKEN_TTL_SECS: i64 = 3600;

/// How many seconds in the past a deliberately expired token's `exp` sits
pub const EXPIRED_TOKEN_BACKDATE_SECS: i64 = 10;

/// Claim set carried by issued JWTs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (placeholder identity, no real authentication behind it)
    pub sub: String,

    /// Issued-at as a Unix timestamp in seconds
    pub iat: i64,

    /// Expiry as a Unix timestamp in seconds
    pub exp: i64,
}

impl Claims {
    /// Claims for a token valid from `now` for [`TOKEN_TTL_SECS`]
    pub fn fresh(now: i64) -> Self {
        Self {
            sub: TOKEN_SUBJECT.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        }
    }

    /// Claims for a token that is already expired by construction
    ///
    /// Both `iat` and `exp` are backdated so the token simulates an expired
    /// credential regardless of the signing key's own expiry field.
    pub fn backdated(now: i64) -> Self {
        Self {
            sub: TOKEN_SUBJECT.to_string(),
            iat: now - TOKEN_TTL_SECS,
            exp: now - EXPIRED_TOKEN_BACKDATE_SECS,
        }
    }
}
