//! Inventory error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient stock for {name}: requested {requested}, only {available} left")]
    InsufficientStock {
        name: String,
        requested: i64,
        available: i64,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(#[from] stockroom_storage::StorageError),
}

impl From<rusqlite::Error> for InventoryError {
    fn from(err: rusqlite::Error) -> Self {
        InventoryError::Storage(err.into())
    }
}

impl InventoryError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            InventoryError::Validation(_) => "validation",
            InventoryError::NotFound(_) => "not_found",
            InventoryError::InsufficientStock { .. } => "insufficient_stock",
            InventoryError::Conflict(_) => "conflict",
            InventoryError::Storage(_) => "persistence",
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, InventoryError::Storage(e) if e.is_transient())
    }
}
