//! Database configuration from flags, environment, and `.env`
//!
//! Priority order (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`DATABASE_URL`, `DB_HOST`, `DB_PORT`, ...)
//! 3. `./.env` (never overwrites variables already set)
//! 4. Built-in defaults

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args;
use contacts_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;

/// Load `./.env` if present. Returns the path that was loaded.
///
/// Must run before argument parsing so clap's `env` fallbacks see the values.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Connection settings shared by every command that talks to PostgreSQL
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Full connection string; takes precedence over the DB_* settings
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "contacts")]
    pub db_name: String,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Resolve connect options, preferring `DATABASE_URL` when given.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        match &self.database_url {
            Some(url) => PgConnectOptions::from_str(url).context("Invalid DATABASE_URL"),
            None => Ok(self.options_from_parts()),
        }
    }

    fn options_from_parts(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name);

        if let Some(user) = &self.db_user {
            options = options.username(user);
        }
        if let Some(password) = &self.db_password {
            options = options.password(password);
        }
        options
    }

    /// Open a connection pool.
    pub async fn connect(&self) -> Result<PgPool> {
        let options = self.connect_options()?;
        tracing::info!(
            host = options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or_default(),
            "Connecting to database"
        );

        create_pool_with_options(options, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        db: DatabaseArgs,
    }

    fn parse(args: &[&str]) -> DatabaseArgs {
        let argv = std::iter::once("test").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().db
    }

    #[test]
    fn options_from_parts() {
        let db = parse(&[
            "--db-host",
            "db.internal",
            "--db-port",
            "6543",
            "--db-name",
            "crm",
            "--db-user",
            "svc",
        ]);
        let options = db.options_from_parts();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("crm"));
        assert_eq!(options.get_username(), "svc");
    }

    #[test]
    fn url_takes_precedence() {
        let db = parse(&[
            "--database-url",
            "postgres://app@urlhost:5433/fromurl",
            "--db-host",
            "ignored",
        ]);
        let options = db.connect_options().unwrap();
        assert_eq!(options.get_host(), "urlhost");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("fromurl"));
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let argv = ["test", "--db-port", "abc"];
        assert!(TestCli::try_parse_from(argv).is_err());
    }

    #[test]
    fn load_dotenv_doesnt_panic() {
        let _ = load_dotenv();
    }
}
