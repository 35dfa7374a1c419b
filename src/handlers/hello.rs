use std::sync::Arc;

use axum::extract::State;
use tracing::{debug, instrument};

use crate::models::AppState;

/// Greeting endpoint. Always `200 OK` with `Hello World`, no database access.
#[instrument(skip(state))]
pub async fn hello(State(state): State<Arc<AppState>>) -> &'static str {
    debug!("Hello endpoint accessed");
    state.health_service.greet()
}
