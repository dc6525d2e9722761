//! Request handling support: error-to-response mapping

pub mod error;

pub use error::handle_domain_error;
