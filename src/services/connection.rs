//! # Connection Provider
//!
//! The health service never talks to the database directly. It asks a
//! [`ConnectionProvider`] for a [`ConnectionLease`], holds it for the duration
//! of one check and drops it. Dropping the lease is what releases it, so the
//! release happens on every exit path without any explicit cleanup code.
//!
//! ## Implementations
//!
//! - [`PgPool`] - Production provider, leases are pooled PostgreSQL connections
//! - Test doubles in `tests/common` that count acquisitions and releases

use async_trait::async_trait;
use sqlx::{PgPool, Pool, Postgres, pool::PoolConnection};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur while acquiring a connection
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("connection provider unavailable: {0}")]
    Unavailable(String),
}

/// A connection borrowed from a provider.
///
/// The lease is opaque to its holder. Its `Drop` implementation hands the
/// underlying connection back to whoever issued it.
pub trait ConnectionLease: Send {}

impl ConnectionLease for PoolConnection<Postgres> {}

/// Trait for anything that can hand out database connections
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Acquires a single connection.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if no connection can be obtained for any
    /// reason, including pool exhaustion.
    async fn acquire(&self) -> Result<Box<dyn ConnectionLease>, ProviderError>;
}

#[async_trait]
impl ConnectionProvider for PgPool {
    #[instrument(skip_all)]
    async fn acquire(&self) -> Result<Box<dyn ConnectionLease>, ProviderError> {
        let conn = Pool::<Postgres>::acquire(self).await?;
        debug!(
            pool_size = self.size(),
            idle = self.num_idle(),
            "Acquired pooled connection"
        );
        Ok(Box::new(conn))
    }
}
