//! Mapping from domain errors to HTTP responses
//!
//! The whole error enumeration is mapped in one place. Every core failure
//! surfaces externally as a generic internal failure; the detail (which may
//! mention kids or storage internals, never key material) goes to the log
//! only.

use actix_web::HttpResponse;

use jwks_core::errors::DomainError;

/// Convert a domain error into the external failure response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("request failed: {}", error);

    match error {
        DomainError::Storage { .. }
        | DomainError::NoKeyAvailable { .. }
        | DomainError::KeyDerivation { .. }
        | DomainError::Signing { .. }
        | DomainError::KeyGeneration { .. } => {
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_every_error_kind_maps_to_a_generic_500() {
        let errors = vec![
            DomainError::Storage {
                message: "disk full".to_string(),
            },
            DomainError::NoKeyAvailable { expired: true },
            DomainError::KeyDerivation {
                message: "bad pem".to_string(),
            },
            DomainError::Signing {
                message: "bad key".to_string(),
            },
            DomainError::KeyGeneration {
                message: "rng failure".to_string(),
            },
        ];

        for error in errors {
            let response = handle_domain_error(error);
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
