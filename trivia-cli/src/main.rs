//! trivia - run and administer the trivia question-bank API
//!
//! - `serve`: HTTP API over PostgreSQL
//! - `migrate`: create the schema
//! - `seed`: load the sample categories and questions

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "Trivia question bank API: categories, paginated questions, search and quizzes"
)]
struct Cli {
    /// Debug-level logging unless RUST_LOG is set
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create tables and indexes if missing
    Migrate(commands::migrate::MigrateArgs),
    /// Insert the sample categories and questions
    Seed(commands::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // a missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
        Commands::Seed(args) => commands::run_seed(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["trivia", "serve", "--database-url", "postgres://x/y"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.bind.port(), 5000);
                assert!(!args.cors_permissive);
                assert!(!args.seed);
                assert_eq!(args.db.max_connections, 5);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
