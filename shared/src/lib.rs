//! Shared configuration types for the JWKS test server
//!
//! This crate provides the configuration surface used across all server
//! modules:
//! - HTTP server settings
//! - Database (SQLite) settings
//! - Key lifecycle policy (key size, expiry offsets)

pub mod config;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, KeyPolicyConfig, ServerConfig};
