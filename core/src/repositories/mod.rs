//! Repository interfaces for persistence operations.
//!
//! Concrete implementations live in the infrastructure layer; the core only
//! depends on the traits defined here.

pub mod key;

pub use key::KeyRepository;

#[cfg(test)]
pub use key::MockKeyRepository;
