//! # Health Service
//!
//! Answers two questions on demand: is the process alive, and can it reach
//! its database. Every call is independent; nothing is cached or retried.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::models::HealthStatus;
use crate::services::connection::ConnectionProvider;
use crate::utils::constant::GREETING;

/// Liveness and database reachability checks over an injected provider.
#[derive(Clone)]
pub struct HealthService {
    provider: Arc<dyn ConnectionProvider>,
}

impl HealthService {
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    /// Returns the fixed greeting. Never touches the database.
    #[inline]
    pub fn greet(&self) -> &'static str {
        GREETING
    }

    /// Acquires one connection from the provider and releases it right away.
    ///
    /// Any acquisition failure is reported as [`HealthStatus::DbUnavailable`].
    /// The cause is logged but never returned, so callers always see one of
    /// two fixed outcomes.
    #[instrument(skip(self))]
    pub async fn check_health(&self) -> HealthStatus {
        match self.provider.acquire().await {
            Ok(lease) => {
                drop(lease);
                debug!("Database connection acquired and released");
                HealthStatus::Connected
            }
            Err(e) => {
                warn!(error = %e, "Database connection check failed");
                HealthStatus::DbUnavailable
            }
        }
    }
}
