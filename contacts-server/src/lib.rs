//! contacts-server: HTTP backend for a contacts list
//!
//! CRUD over a single `contacts` table, bulk import/export through `.xlsx`
//! workbooks, and an admin login check against Argon2id hashes.

pub mod auth;
pub mod db;
pub mod http;
pub mod models;
pub mod sheet;

pub use db::{ContactStore, MemoryStore, PgStore, StoreError};
pub use http::{build_router, run_server, AppState, ServerConfig};
