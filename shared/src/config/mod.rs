//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - SQLite database location and pool configuration
//! - `keys` - Key lifecycle policy (RSA size, expiry offsets)
//! - `server` - HTTP server binding configuration

pub mod database;
pub mod keys;
pub mod server;

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use keys::KeyPolicyConfig;
pub use server::ServerConfig;
