//! # Health Status Types
//!
//! Outcome of a single database connectivity check and its plain-text
//! rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::utils::constant::{HEALTH_DB_FAILED, HEALTH_OK};

/// Result of one health check.
///
/// Both variants are rendered with `200 OK`; monitoring tells them apart by
/// the body text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    /// A connection was acquired and released
    Connected,
    /// The connection provider failed for any reason
    DbUnavailable,
}

impl HealthStatus {
    /// Text sent to clients for this status.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Connected => HEALTH_OK,
            HealthStatus::DbUnavailable => HEALTH_DB_FAILED,
        }
    }

    #[inline]
    pub const fn is_connected(self) -> bool {
        matches!(self, HealthStatus::Connected)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IntoResponse for HealthStatus {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.as_str()).into_response()
    }
}
