//! # Application Constants
//!
//! Response texts and configuration defaults used throughout the service.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

/// Body of `GET /hello`
pub const GREETING: &str = "Hello World";

/// Body of `GET /health` when a database connection could be acquired
pub const HEALTH_OK: &str = "OK - App & DB Connected";

/// Body of `GET /health` when the connection provider failed for any reason
pub const HEALTH_DB_FAILED: &str = "DB Connection Failed";

/// Address the HTTP server binds to when `BIND_ADDRESS` is unset
pub const DEFAULT_BIND_ADDRESS: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));

/// Pool size when `DB_MAX_CONNECTIONS` is unset
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// How long a health check may wait for a pooled connection
///
/// Overridden by `DB_ACQUIRE_TIMEOUT_SECS`. Keeps `/health` responsive when
/// the database is unreachable.
pub const DEFAULT_DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "saas_health=info,tower_http=info";
