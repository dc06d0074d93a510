//! Database layer - connection pool, schema bootstrap and repositories
//!
//! - One shared pool, passed to handlers through application state
//! - One statement per operation, no transactions
//! - Missing rows surface as `DbError::NotFound`, not as empty results

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_lazy_pool, create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::ensure_schema;
