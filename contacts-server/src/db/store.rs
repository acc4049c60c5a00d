//! Storage trait shared by the PostgreSQL and in-memory backends

use async_trait::async_trait;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::{Contact, ContactFields};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Admin credential row. `password_hash` is an Argon2id PHC string.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

/// Outcome of a bulk import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub inserted: u64,
    pub skipped: u64,
}

/// Contact and admin persistence.
///
/// Update and delete of an unknown id succeed without effect.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All contacts ordered by id ascending.
    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError>;

    /// A single contact, or `StoreError::NotFound`.
    async fn get_contact(&self, id: i32) -> Result<Contact, StoreError>;

    /// Insert and return the assigned id.
    async fn create_contact(&self, fields: &ContactFields) -> Result<i32, StoreError>;

    /// Overwrite all six fields of `id`.
    async fn update_contact(&self, id: i32, fields: &ContactFields) -> Result<(), StoreError>;

    async fn delete_contact(&self, id: i32) -> Result<(), StoreError>;

    /// Insert rows atomically, skipping any whose (email, phone) pair is
    /// already stored or appeared earlier in `rows`.
    async fn import_contacts(&self, rows: &[ContactFields]) -> Result<ImportSummary, StoreError>;

    /// Admin row with exactly this email.
    async fn find_admin(&self, email: &str) -> Result<Option<Admin>, StoreError>;

    /// Round-trip to the backing store.
    async fn ping(&self) -> Result<(), StoreError>;
}
