//! JWKS document construction
//!
//! Transforms stored private key records into their public JWK
//! representations for the discovery endpoint.

mod publisher;


pub use publisher::{Jwk, Jwks, JwksPublisher};
