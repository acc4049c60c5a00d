//! Database layer - connection pool, schema, and contact stores
//!
//! # Design Principles
//!
//! - Connection pool, no process-wide connection singleton
//! - Every operation returns `Result<_, StoreError>`; not-found is a value
//! - Bulk import is one transaction

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgStore;
pub use store::{Admin, ContactStore, ImportSummary, StoreError};
