//! Database connection pool management
//!
//! One pool per process, handed to handlers through `AppState`.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool from a connection string.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/contacts").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Create a PostgreSQL connection pool from discrete connect options.
///
/// # Arguments
///
/// * `options` - host, port, database and credentials
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
