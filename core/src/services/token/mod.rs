//! Token service module for JWT issuance
//!
//! Issues RS256-signed JWTs from stored key records, embedding the record's
//! store identifier as the token header `kid`.

mod service;


pub use service::TokenService;
