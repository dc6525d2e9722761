//! Handler for POST /auth

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use jwks_core::repositories::KeyRepository;

use crate::handlers::handle_domain_error;
use crate::state::AppState;

/// Query parameters accepted by the issue-token endpoint
#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    /// Only the literal string `"true"` requests an expired token; any
    /// other value (or absence) issues a fresh one
    pub expired: Option<String>,
}

impl AuthQuery {
    fn wants_expired(&self) -> bool {
        self.expired.as_deref() == Some("true")
    }
}

/// Handler for POST /auth
///
/// Issues an RS256-signed JWT. With `?expired=true` the token is signed
/// with an expired key and carries backdated claims, for exercising
/// token-expiry handling in downstream verifiers.
///
/// # Response
///
/// ## Success (200 OK)
/// The compact serialized token (three dot-separated base64url segments)
/// as a plain text body.
///
/// ## Errors
/// - 500 Internal Server Error: no key of the requested class, or signing
///   failure
pub async fn issue_token<R>(
    state: web::Data<AppState<R>>,
    query: web::Query<AuthQuery>,
) -> HttpResponse
where
    R: KeyRepository + 'static,
{
    // Hold the request until startup has stocked the key store
    state.readiness.wait().await;

    let want_expired = query.wants_expired();

    let record = match state.selector.select_for_signing(want_expired).await {
        Ok(record) => record,
        Err(error) => return handle_domain_error(error),
    };

    match state.token_service.issue(&record, want_expired) {
        Ok(token) => HttpResponse::Ok().content_type("text/plain").body(token),
        Err(error) => handle_domain_error(error),
    }
}
