use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{error, info};

use jwks_api::app::create_app;
use jwks_api::state::{readiness_channel, AppState};
use jwks_core::services::keys::KeyLifecycleService;
use jwks_infra::{DatabasePool, SqliteKeyRepository};
use jwks_shared::{DatabaseConfig, KeyPolicyConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting JWKS server");

    // Load configuration
    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let key_policy = KeyPolicyConfig::default();

    // Open the key store; startup failures here are fatal
    let db = match DatabasePool::new(&database_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open key store: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = db.init_schema().await {
        error!("Failed to initialize schema: {}", e);
        std::process::exit(1);
    }

    let repository = Arc::new(SqliteKeyRepository::new(db.get_pool().clone()));

    // Schema init strictly precedes invariant enforcement, which strictly
    // precedes request admission
    let lifecycle = KeyLifecycleService::new(repository.clone(), key_policy);
    match lifecycle.ensure_invariants().await {
        Ok(outcome) => info!("key store ready ({} keys inserted)", outcome.insertions()),
        Err(e) => {
            error!("Failed to enforce key store invariants: {}", e);
            std::process::exit(1);
        }
    }

    let (readiness, gate) = readiness_channel();
    let state = web::Data::new(AppState::new(repository, gate));
    readiness.mark_ready();

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
