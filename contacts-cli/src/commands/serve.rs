//! HTTP server command
//!
//! Connects to PostgreSQL, bootstraps the schema, then serves until shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use contacts_server::db::{migrations, PgStore};
use contacts_server::http::{run_server, AppState, ServerConfig};

use crate::config::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Skip creating tables at startup
    #[arg(long)]
    pub skip_migrations: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting contacts server on {}", args.bind);

    let pool = args.db.connect().await?;

    if !args.skip_migrations {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(AppState::new(PgStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
