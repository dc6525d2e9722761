//! Key service module
//!
//! This module handles signing key material:
//! - RSA key pair generation (`generator`)
//! - Store invariants: at least one valid and one expired key (`lifecycle`)
//! - Key selection for signing and publishing (`selector`)

mod generator;
mod lifecycle;
mod selector;

#[cfg(test)]
mod tests;

pub use generator::generate_signing_key;
pub use lifecycle::{EnsureOutcome, KeyLifecycleService};
pub use selector::KeySelector;
