/**
 * Server Initialization
 *
 * Turns an [`AppConfig`] into a ready-to-serve router:
 *
 * 1. Pick the store: PostgreSQL when a database URL is configured (connect,
 *    then run migrations), otherwise the in-memory store
 * 2. Build the password hasher and token service from `[auth]`
 * 3. Assemble `AppState` and the router
 *
 * A configured database that cannot be reached, or whose migrations fail,
 * is an error. Running without persistence is only done when no database
 * was asked for.
 */

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::auth::{PasswordHasher, TokenService};
use crate::backend::routes::create_router;
use crate::backend::server::config::AppConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{BlogStore, MemoryStore, PgStore};

#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Store selected by the database settings
pub async fn build_store(config: &AppConfig) -> Result<Arc<dyn BlogStore>, InitError> {
    let Some(url) = config.database.url.as_deref() else {
        tracing::warn!("No database configured. Using the in-memory store; data will not persist.");
        return Ok(Arc::new(MemoryStore::new()));
    };

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(url)
        .await
        .map_err(InitError::Connect)?;
    tracing::info!("Database connection pool created successfully");

    let store = PgStore::new(pool);
    tracing::info!("Running database migrations...");
    store.migrate().await.map_err(InitError::Migrate)?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(store))
}

pub fn build_state(store: Arc<dyn BlogStore>, config: &AppConfig) -> AppState {
    let passwords = PasswordHasher::new(config.auth.bcrypt_cost);
    let tokens = TokenService::new(
        &config.auth.jwt_secret,
        chrono::Duration::hours(config.auth.token_ttl_hours),
    );
    AppState::new(store, passwords, tokens)
}

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing blog backend");

    let store = build_store(config).await?;
    let app = create_router(build_state(store, config));

    tracing::info!("Router configured");
    Ok(app)
}
