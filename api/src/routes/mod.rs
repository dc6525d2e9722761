//! Route handlers for the two service endpoints

pub mod auth;
pub mod jwks;
