//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Hello** (`hello`) - Static greeting, proves the process is alive
//! - **Health Check** (`health_check`) - Database reachability for monitoring

mod health_check;
mod hello;

pub use health_check::*;
pub use hello::*;
