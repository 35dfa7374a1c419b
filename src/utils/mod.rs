//! # Utility Modules
//!
//! - **Constants** (`constant`) - Response texts and configuration defaults
//! - **Telemetry** (`telemetry`) - Tracing subscriber setup

pub mod constant;
pub mod telemetry;
