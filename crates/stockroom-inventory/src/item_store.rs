//! Item Store
//!
//! Row-level persistence of items. Nothing is cached: every read goes to
//! the database, so a successful write is visible to the next read.

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row};

use stockroom_storage::Database;

use crate::category_store::category_exists;
use crate::direction::StockDirection;
use crate::error::InventoryError;
use crate::item::{Item, NewItem};
use crate::Result;

const ITEM_COLUMNS: &str = "id, name, category, brand, item_no, spec, location,
                            current_stock, safe_stock, unit, created_at, updated_at";

pub struct ItemStore {
    /// Database for persistence
    db: Database,
    /// Reject items whose category is not registered
    enforce_known_categories: bool,
}

impl ItemStore {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            enforce_known_categories: true,
        }
    }

    /// Allow free-text categories instead of requiring a registered one.
    pub fn with_category_check(mut self, enforce: bool) -> Self {
        self.enforce_known_categories = enforce;
        self
    }

    /// All items in insertion order
    pub fn list_items(&self) -> Result<Vec<Item>> {
        let items = self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ITEM_COLUMNS} FROM items ORDER BY rowid"
            ))?;

            let items = stmt
                .query_map([], row_to_item)?
                .collect::<rusqlite::Result<Vec<Item>>>()?;

            Ok(items)
        })?;

        tracing::debug!(count = items.len(), "Listed items");

        Ok(items)
    }

    pub fn get_item(&self, name: &str) -> Result<Item> {
        let found = self
            .db
            .with_connection(|conn| Ok(find_by_name(conn, name)?))?;

        found.ok_or_else(|| InventoryError::NotFound(format!("item {}", name)))
    }

    /// Register a new item
    pub fn add_item(&self, new: NewItem) -> Result<Item> {
        let item = Item::new(new)?;
        let enforce = self.enforce_known_categories;

        self.db.transaction(|conn| -> Result<()> {
            if find_by_name(conn, &item.name)?.is_some() {
                return Err(InventoryError::Validation(format!(
                    "Item already exists: {}",
                    item.name
                )));
            }

            if enforce && !category_exists(conn, &item.category)? {
                return Err(InventoryError::Validation(format!(
                    "Unknown category: {}",
                    item.category
                )));
            }

            insert_item(conn, &item)
        })?;

        tracing::info!(
            item = %item.name,
            category = %item.category,
            current_stock = item.current_stock,
            safe_stock = item.safe_stock,
            "Registered new item"
        );

        Ok(item)
    }

    /// Record a stock-in or stock-out movement and return the updated item
    pub fn adjust_stock(
        &self,
        name: &str,
        quantity: i64,
        direction: StockDirection,
    ) -> Result<Item> {
        if quantity <= 0 {
            return Err(InventoryError::Validation(format!(
                "Quantity must be a positive integer, got {}",
                quantity
            )));
        }

        let item = self.db.transaction(|conn| -> Result<Item> {
            let mut item = find_by_name(conn, name)?
                .ok_or_else(|| InventoryError::NotFound(format!("item {}", name)))?;

            item.apply_movement(direction, quantity)?;

            conn.execute(
                "UPDATE items SET current_stock = ?1, updated_at = ?2 WHERE id = ?3",
                rusqlite::params![item.current_stock, item.updated_at.to_rfc3339(), item.id],
            )?;

            Ok(item)
        })?;

        tracing::info!(
            item = %item.name,
            direction = %direction,
            quantity,
            current_stock = item.current_stock,
            "Adjusted stock"
        );

        Ok(item)
    }

    pub fn delete_item(&self, name: &str) -> Result<()> {
        let removed = self.db.with_connection(|conn| {
            Ok(conn.execute("DELETE FROM items WHERE name = ?1", [name])?)
        })?;

        if removed == 0 {
            return Err(InventoryError::NotFound(format!("item {}", name)));
        }

        tracing::info!(item = %name, "Deleted item");

        Ok(())
    }
}

impl Clone for ItemStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            enforce_known_categories: self.enforce_known_categories,
        }
    }
}

fn find_by_name(conn: &Connection, name: &str) -> rusqlite::Result<Option<Item>> {
    conn.query_row(
        &format!("SELECT {ITEM_COLUMNS} FROM items WHERE name = ?1"),
        [name],
        row_to_item,
    )
    .optional()
}

fn insert_item(conn: &Connection, item: &Item) -> Result<()> {
    let result = conn.execute(
        "INSERT INTO items
         (id, name, category, brand, item_no, spec, location,
          current_stock, safe_stock, unit, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        rusqlite::params![
            item.id,
            item.name,
            item.category,
            item.brand,
            item.item_no,
            item.spec,
            item.location,
            item.current_stock,
            item.safe_stock,
            item.unit,
            item.created_at.to_rfc3339(),
            item.updated_at.to_rfc3339(),
        ],
    );

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            let err = stockroom_storage::StorageError::from(e);
            if err.is_unique_violation() {
                Err(InventoryError::Validation(format!(
                    "Item already exists: {}",
                    item.name
                )))
            } else {
                Err(err.into())
            }
        }
    }
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<Item> {
    let created_str: String = row.get(10)?;
    let updated_str: String = row.get(11)?;

    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        brand: row.get(3)?,
        item_no: row.get(4)?,
        spec: row.get(5)?,
        location: row.get(6)?,
        current_stock: row.get(7)?,
        safe_stock: row.get(8)?,
        unit: row.get(9)?,
        created_at: parse_timestamp(&created_str),
        updated_at: parse_timestamp(&updated_str),
    })
}

pub(crate) fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
