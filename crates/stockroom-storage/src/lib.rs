//! Stockroom Storage Layer
//!
//! SQLite-based persistence for items, categories and runtime settings.
//! Every write is a single statement or a single transaction, so a failed
//! call leaves the database exactly as it was.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
