//! # saas-health - Liveness and Database Health Service
//!
//! ## Modules
//!
//! - [`config`] - Environment-based configuration
//! - [`error`] - Startup and lifecycle errors
//! - [`handlers`] - HTTP request handlers for `/hello` and `/health`
//! - [`models`] - Shared state and the health status type
//! - [`services`] - Connection provider seam and the health service
//! - [`utils`] - Constants and telemetry setup

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::handlers::{health_check, hello};
use crate::models::AppState;
use crate::services::connection::ConnectionProvider;

/// Creates an Axum router backed by a PostgreSQL pool.
///
/// This is a convenience function that calls [`app_with_provider`] with the
/// pool as the connection provider.
#[inline]
pub fn app(db_pool: PgPool) -> Router {
    app_with_provider(Arc::new(db_pool))
}

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `provider` - Source of database connections used by `/health`
///
/// # Returns
///
/// A configured Axum router serving `GET /hello` and `GET /health`
pub fn app_with_provider(provider: Arc<dyn ConnectionProvider>) -> Router {
    let state = Arc::new(AppState::new(provider));

    Router::new()
        .route("/hello", get(hello))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the connection pool described by the configuration.
///
/// The pool connects lazily, so the service starts and answers `/hello`
/// even while the database is down. `/health` reports the outage instead.
///
/// # Errors
///
/// Returns [`crate::error::AppError::Db`] if `DATABASE_URL` cannot be parsed.
pub fn db_pool(config: &AppConfig) -> AppResult<PgPool> {
    let connect_options: PgConnectOptions = config.database_url.parse()?;

    info!(
        max_connections = config.db_max_connections,
        acquire_timeout_secs = config.db_acquire_timeout.as_secs(),
        "Creating lazy database pool"
    );

    Ok(PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect_lazy_with(connect_options))
}
