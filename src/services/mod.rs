//! # Services
//!
//! ## Available Services
//!
//! - **Connection** (`connection`) - Database connection provider seam and its PostgreSQL implementation
//! - **Health** (`health`) - Greeting and database reachability checks

pub mod connection;
pub mod health;
