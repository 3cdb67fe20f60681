//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared through `PgStore`, no global handle
//! - Paginated listings return the total with `COUNT(*) OVER()` in one query
//! - Rely on DB constraints and map violations, no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;

pub use pool::{create_pool, create_pool_with_options};
