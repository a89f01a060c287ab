//! Stockroom Inventory
//!
//! Items and categories persisted row by row:
//! - Item and category names are unique and compared case-sensitively
//! - An item is low on stock when its current stock is at or below its safety threshold
//! - Withdrawals never take stock below zero
//! - A category cannot be removed while an item still refers to it

mod category;
mod category_store;
mod direction;
mod error;
mod item;
mod item_store;

pub use category::Category;
pub use category_store::CategoryStore;
pub use direction::StockDirection;
pub use error::InventoryError;
pub use item::{is_low_stock, low_stock_items, Item, NewItem, DEFAULT_SAFE_STOCK, DEFAULT_UNIT};
pub use item_store::ItemStore;

pub type Result<T> = std::result::Result<T, InventoryError>;
