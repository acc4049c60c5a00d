//! Command implementations for the contacts CLI

pub mod hash_password;
pub mod migrate;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use hash_password::run_hash_password;
pub use migrate::run_migrate;
pub use serve::run_serve;
