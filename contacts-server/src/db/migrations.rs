//! Schema bootstrap for the contacts and admins tables

use sqlx::PgPool;

/// Create tables and indexes if they do not exist yet.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running contacts migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id SERIAL PRIMARY KEY,
            first_name TEXT NOT NULL DEFAULT '',
            last_name TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            company TEXT NOT NULL DEFAULT '',
            notes TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Backs the import-time (email, phone) existence check
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_contacts_email_phone ON contacts (email, phone)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS admins (
            email TEXT PRIMARY KEY,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Contacts migrations complete");
    Ok(())
}
