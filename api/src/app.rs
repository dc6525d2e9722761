//! Application factory
//!
//! Builds the Actix-web application around a shared [`AppState`]. Method
//! enforcement happens here: the two service paths answer 405 to anything
//! but their registered verb, before the core is invoked. Every response
//! except the liveness probe waits on the readiness gate, so nothing is
//! answered while startup is still stocking the store.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use jwks_core::repositories::KeyRepository;

use crate::routes::{auth::issue_token, jwks::get_jwks};
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    state: web::Data<AppState<R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: KeyRepository + 'static,
{
    App::new()
        // Add application state
        .app_data(state)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // JWKS discovery: GET only, everything else is 405
        .service(
            web::resource("/.well-known/jwks.json")
                .route(web::get().to(get_jwks::<R>))
                .route(web::route().to(method_not_allowed::<R>)),
        )
        // Token issuance: POST only, everything else is 405
        .service(
            web::resource("/auth")
                .route(web::post().to(issue_token::<R>))
                .route(web::route().to(method_not_allowed::<R>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found::<R>))
}

/// Health check endpoint handler
///
/// Liveness only; answers during startup, before the readiness gate opens.
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "jwks-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// 405 handler for wrong verbs on the service paths
async fn method_not_allowed<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: KeyRepository + 'static,
{
    state.readiness.wait().await;
    HttpResponse::MethodNotAllowed().body("Method Not Allowed")
}

/// Default 404 handler
async fn not_found<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: KeyRepository + 'static,
{
    state.readiness.wait().await;
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
