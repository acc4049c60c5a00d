//! contacts CLI - run and administer the contacts HTTP backend
//!
//! - `serve`: run the HTTP API (CRUD, xlsx import/export, admin login)
//! - `migrate`: create the `contacts` and `admins` tables
//! - `hash-password`: produce an Argon2id hash for an `admins` row

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "contacts",
    author,
    version,
    about = "Contacts list backend with spreadsheet import/export"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables and exit
    Migrate(commands::migrate::MigrateArgs),
    /// Print an Argon2id hash for an admin password
    HashPassword(commands::hash_password::HashPasswordArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_file = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();
    if let Some(path) = env_file {
        debug!("Loaded .env from {}", path.display());
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::HashPassword(args) => commands::run_hash_password(args)?,
    }

    Ok(())
}
