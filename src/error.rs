//! # Error Handling
//!
//! Errors that can stop the service from starting or serving. Request-level
//! failures never surface here: the health check turns every database fault
//! into a fixed response text, see [`crate::services::health`].

use thiserror::Error;

/// Problems with the environment-based configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("env variable `{0}` should be set")]
    Missing(&'static str),

    #[error("env variable `{name}` has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Central application error type for startup and server lifecycle.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid database options: {0}")]
    Db(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
