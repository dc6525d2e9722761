//! Domain entities representing core business objects.

pub mod key_record;
pub mod token;

// Re-export commonly used types
pub use key_record::KeyRecord;
pub use token::{Claims, TOKEN_SUBJECT, TOKEN_TTL_SECS, EXPIRED_TOKEN_BACKDATE_SECS};

#[cfg(test)]
mod tests;
