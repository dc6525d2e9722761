//! # Infrastructure Layer
//!
//! Concrete persistence for the JWKS test server: a SQLite-backed key store
//! implemented with SQLx. The core crate only sees the `KeyRepository`
//! trait; this crate provides the pool, the schema, and the queries.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::sqlite::SqliteKeyRepository;
