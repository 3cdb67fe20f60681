//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::seed;
use trivia_server::{run_server, PgStore, ServerConfig};

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow every method and header from any origin
    #[arg(long)]
    pub cors_permissive: bool,

    /// Insert the sample data before serving
    #[arg(long)]
    pub seed: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool = args.db.connect().await?;

    if args.seed {
        seed::run(&pool).await.context("Failed to seed sample data")?;
    }

    tracing::info!("Starting trivia server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    run_server(Arc::new(PgStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
