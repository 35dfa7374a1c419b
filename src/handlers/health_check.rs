//! # Health Check Handler
//!
//! Database connectivity check for load balancers, monitoring systems and
//! orchestrators. The endpoint always answers `200 OK`; the body says whether
//! the database was reachable.

use std::sync::Arc;

use axum::extract::State;
use tracing::{info, instrument};

use crate::models::{AppState, HealthStatus};

/// Health check endpoint.
///
/// # Returns
///
/// Always `200 OK` with a `text/plain` body:
///
/// - `OK - App & DB Connected` - a database connection was acquired
/// - `DB Connection Failed` - the connection provider failed for any reason
#[instrument(skip(state), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn health_check(State(state): State<Arc<AppState>>) -> HealthStatus {
    let status = state.health_service.check_health().await;
    info!(connected = status.is_connected(), "Health check completed");
    status
}
