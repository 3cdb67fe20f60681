//! trivia-server: HTTP API for the trivia question bank
//!
//! Serves category listings, paginated question listings, substring search,
//! question creation/deletion and random quiz questions over JSON, backed by
//! PostgreSQL through sqlx.

pub mod db;
pub mod http;
pub mod store;

pub use http::{build_router, run_server, ApiError, ServerConfig};
pub use store::{MemoryStore, PgStore, StoreError, TriviaStore};
