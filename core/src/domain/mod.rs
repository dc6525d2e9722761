//! Domain layer: entities and value types for the key store.

pub mod entities;

pub use entities::*;
