//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Inventory(#[from] stockroom_inventory::InventoryError),

    #[error("Storage error: {0}")]
    Storage(#[from] stockroom_storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Inventory store is closed")]
    Closed,
}

impl CoreError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::Inventory(e) => e.kind(),
            CoreError::Storage(_) | CoreError::Io(_) | CoreError::Closed => "persistence",
            CoreError::Config(_) => "config",
        }
    }

    /// Only persistence failures are worth a second attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            CoreError::Inventory(e) => e.is_transient(),
            CoreError::Storage(e) => e.is_transient(),
            CoreError::Io(_) => true,
            CoreError::Config(_) | CoreError::Closed => false,
        }
    }
}
