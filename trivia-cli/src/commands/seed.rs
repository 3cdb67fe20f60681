//! Sample data command

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::seed;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Insert the six sample categories and nineteen sample questions.
///
/// Rows that already exist are left alone, so running it twice is harmless.
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    let report = seed::run(&pool).await.context("Failed to seed sample data")?;
    pool.close().await;

    println!(
        "Seeded {} categories and {} questions",
        report.categories, report.questions
    );
    Ok(())
}
