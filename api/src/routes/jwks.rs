//! Handler for GET /.well-known/jwks.json

use actix_web::{web, HttpResponse};

use jwks_core::repositories::KeyRepository;

use crate::handlers::handle_domain_error;
use crate::state::AppState;

/// Handler for GET /.well-known/jwks.json
///
/// Returns the public JWKs of all currently valid signing keys. Expired
/// keys are never published.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "keys": [
///         { "kty": "RSA", "kid": "1", "use": "sig", "alg": "RS256", "n": "...", "e": "AQAB" }
///     ]
/// }
/// ```
///
/// ## Errors
/// - 500 Internal Server Error: storage failure or unparsable key material
pub async fn get_jwks<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: KeyRepository + 'static,
{
    // Hold the request until startup has stocked the key store
    state.readiness.wait().await;

    match state.publisher.build_jwks().await {
        Ok(jwks) => HttpResponse::Ok().json(jwks),
        Err(error) => handle_domain_error(error),
    }
}
