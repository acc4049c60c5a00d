//! Create the contacts and admins tables

use anyhow::{Context, Result};
use clap::Parser;

use contacts_server::db::migrations;

use crate::config::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;
    pool.close().await;
    Ok(())
}
