//! # Telemetry
//!
//! Installs the global tracing subscriber. Filtering follows `RUST_LOG`,
//! falling back to [`DEFAULT_LOG_FILTER`]. Production emits bunyan-style JSON
//! lines, everything else gets the human readable formatter.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::utils::constant::DEFAULT_LOG_FILTER;

/// Initializes the global subscriber. Must be called once, before the
/// server starts.
pub fn init_tracing(production: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if production {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                env!("CARGO_PKG_NAME").to_string(),
                std::io::stdout,
            ))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
