//! itemsvc-server: JSON CRUD service for a single `items` table
//!
//! Translates each HTTP request into one parameterized statement against
//! PostgreSQL and returns the affected row(s) as JSON.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
