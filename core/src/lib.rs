//! # JWKS Server Core
//!
//! Core business logic for the JWKS test server. This crate contains the
//! domain entities, key lifecycle and selection services, repository
//! interfaces, and error types that the HTTP boundary is built on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
