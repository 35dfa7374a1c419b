use std::sync::Arc;

use tracing::info;

use crate::services::{connection::ConnectionProvider, health::HealthService};

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Liveness and database reachability checks.
    pub health_service: HealthService,
}

impl AppState {
    /// Creates a new application state around the given connection provider.
    ///
    /// # Arguments
    ///
    /// * `provider` - Source of database connections for health checks
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        info!("Initializing application state");

        Self {
            health_service: HealthService::new(provider),
        }
    }
}
