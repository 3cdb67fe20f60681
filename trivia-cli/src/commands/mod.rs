//! Subcommand implementations for the `trivia` binary

pub mod migrate;
pub mod seed;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use sqlx::PgPool;
use trivia_server::db::{create_pool_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};

pub use migrate::run_migrate;
pub use seed::run_seed;
pub use serve::run_serve;

/// Connection options shared by every command that touches PostgreSQL
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Open the pool and bring the schema up to date.
    pub async fn connect(&self) -> Result<PgPool> {
        let url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let pool = create_pool_with_options(url, self.max_connections)
            .await
            .context("Failed to create database pool")?;

        migrations::run(&pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(pool)
    }
}
