//! Stockroom Core
//!
//! The single long-lived inventory handle that the presentation layer is
//! given at startup, plus configuration and the dashboard summary.

mod config;
mod dashboard;
mod error;
mod inventory;

pub use config::Config;
pub use dashboard::{CategoryStock, DashboardSummary, ItemStatus};
pub use error::CoreError;
pub use inventory::Inventory;

pub use stockroom_inventory::{
    is_low_stock, low_stock_items, Category, InventoryError, Item, NewItem, StockDirection,
};
pub use stockroom_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call keeps the subscriber that is already installed.
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
