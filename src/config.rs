//! # Configuration
//!
//! Settings are read from environment variables. The binary loads a `.env`
//! file first (via `dotenvy`) so local development needs no exported shell
//! variables.
//!
//! ## Environment Variables
//!
//! - `DATABASE_URL` - PostgreSQL connection string (required)
//! - `BIND_ADDRESS` - Listen address, defaults to [`DEFAULT_BIND_ADDRESS`]
//! - `DB_MAX_CONNECTIONS` - Pool size, defaults to [`DEFAULT_DB_MAX_CONNECTIONS`]
//! - `DB_ACQUIRE_TIMEOUT_SECS` - Acquire timeout, defaults to [`DEFAULT_DB_ACQUIRE_TIMEOUT`]
//! - `APP_ENV` - "production" switches logging to bunyan JSON

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::utils::constant::*;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub production: bool,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Missing optional variables fall back to their defaults. Present but
    /// unparsable values are errors rather than silently ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_address = parse_or(&lookup, "BIND_ADDRESS", || DEFAULT_BIND_ADDRESS)?;

        let db_max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", || DEFAULT_DB_MAX_CONNECTIONS)?;
        if db_max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let db_acquire_timeout = parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", || {
            DEFAULT_DB_ACQUIRE_TIMEOUT.as_secs()
        })
        .map(Duration::from_secs)?;

        let production = lookup("APP_ENV")
            .is_some_and(|app_env| app_env.trim().eq_ignore_ascii_case("production"));

        Ok(Self {
            database_url,
            bind_address,
            db_max_connections,
            db_acquire_timeout,
            production,
        })
    }
}

fn parse_or<F, T>(
    lookup: &F,
    name: &'static str,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default()),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw,
        }),
    }
}
