//! Item data structure and the low-stock rule

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::direction::StockDirection;
use crate::error::InventoryError;
use crate::Result;

/// Display unit used when none is given.
pub const DEFAULT_UNIT: &str = "个";

/// Safety threshold used when none is given.
pub const DEFAULT_SAFE_STOCK: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Internal identifier, never part of the public contract
    pub id: String,
    /// Unique, case-sensitive name
    pub name: String,
    /// Name of the category this item is filed under
    pub category: String,
    pub brand: Option<String>,
    /// Manufacturer catalogue number
    pub item_no: Option<String>,
    /// Size, grade or model description
    pub spec: Option<String>,
    /// Storage location, e.g. "A-102"
    pub location: Option<String>,
    pub current_stock: i64,
    /// Safety threshold; the item is low when current stock is at or below it
    pub safe_stock: i64,
    pub unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for registering a new item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub item_no: Option<String>,
    #[serde(default)]
    pub spec: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default = "default_safe_stock")]
    pub safe_stock: i64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_safe_stock() -> i64 {
    DEFAULT_SAFE_STOCK
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

impl NewItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            brand: None,
            item_no: None,
            spec: None,
            location: None,
            current_stock: 0,
            safe_stock: DEFAULT_SAFE_STOCK,
            unit: DEFAULT_UNIT.to_string(),
        }
    }

    pub fn with_stock(mut self, current_stock: i64, safe_stock: i64) -> Self {
        self.current_stock = current_stock;
        self.safe_stock = safe_stock;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl Item {
    pub fn new(new: NewItem) -> Result<Self> {
        if new.name.is_empty() {
            return Err(InventoryError::Validation(
                "Item name cannot be empty".to_string(),
            ));
        }
        if new.current_stock < 0 {
            return Err(InventoryError::Validation(format!(
                "Current stock cannot be negative: {}",
                new.current_stock
            )));
        }
        if new.safe_stock < 0 {
            return Err(InventoryError::Validation(format!(
                "Safety stock cannot be negative: {}",
                new.safe_stock
            )));
        }

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            category: new.category,
            brand: new.brand,
            item_no: new.item_no,
            spec: new.spec,
            location: new.location,
            current_stock: new.current_stock,
            safe_stock: new.safe_stock,
            unit: new.unit,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_low_stock(&self) -> bool {
        is_low_stock(self)
    }

    /// Apply a stock movement in place. On error the item is left untouched.
    pub fn apply_movement(&mut self, direction: StockDirection, quantity: i64) -> Result<()> {
        if quantity <= 0 {
            return Err(InventoryError::Validation(format!(
                "Quantity must be a positive integer, got {}",
                quantity
            )));
        }

        let new_stock = match direction {
            StockDirection::In => self.current_stock.checked_add(quantity).ok_or_else(|| {
                InventoryError::Validation(format!(
                    "Quantity {} would overflow the stock of {}",
                    quantity, self.name
                ))
            })?,
            StockDirection::Out => {
                if quantity > self.current_stock {
                    return Err(InventoryError::InsufficientStock {
                        name: self.name.clone(),
                        requested: quantity,
                        available: self.current_stock,
                    });
                }
                self.current_stock - quantity
            }
        };

        tracing::debug!(
            item = %self.name,
            direction = %direction,
            from = self.current_stock,
            to = new_stock,
            "Stock movement"
        );

        self.current_stock = new_stock;
        self.updated_at = Utc::now();

        Ok(())
    }
}

/// Equality with the threshold counts as low.
pub fn is_low_stock(item: &Item) -> bool {
    item.current_stock <= item.safe_stock
}

/// All low items, in input order.
pub fn low_stock_items(items: &[Item]) -> Vec<Item> {
    items.iter().filter(|i| is_low_stock(i)).cloned().collect()
}
