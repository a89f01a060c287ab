//! Category Store
//!
//! Row-level persistence of the category taxonomy.

use rusqlite::Connection;

use stockroom_storage::Database;

use crate::category::Category;
use crate::error::InventoryError;
use crate::item_store::parse_timestamp;
use crate::Result;

pub struct CategoryStore {
    /// Database for persistence
    db: Database,
}

impl CategoryStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All categories in insertion order
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = self.db.with_connection(|conn| {
            let mut stmt = conn.prepare("SELECT name, created_at FROM categories ORDER BY rowid")?;

            let categories = stmt
                .query_map([], |row| {
                    let created_str: String = row.get(1)?;
                    Ok(Category {
                        name: row.get(0)?,
                        created_at: parse_timestamp(&created_str),
                    })
                })?
                .collect::<rusqlite::Result<Vec<Category>>>()?;

            Ok(categories)
        })?;

        tracing::debug!(count = categories.len(), "Listed categories");

        Ok(categories)
    }

    #[cfg(test)]
    fn contains(&self, name: &str) -> Result<bool> {
        Ok(self
            .db
            .with_connection(|conn| Ok(category_exists(conn, name)?))?)
    }

    pub fn add_category(&self, name: String) -> Result<Category> {
        let category = Category::new(name)?;

        self.db.transaction(|conn| -> Result<()> {
            if category_exists(conn, &category.name)? {
                return Err(InventoryError::Validation(format!(
                    "Category already exists: {}",
                    category.name
                )));
            }

            insert_category(conn, &category)?;
            Ok(())
        })?;

        tracing::info!(category = %category.name, "Added category");

        Ok(category)
    }

    /// Remove a category that no item refers to.
    pub fn delete_category(&self, name: &str) -> Result<()> {
        self.db.transaction(|conn| -> Result<()> {
            if !category_exists(conn, name)? {
                return Err(InventoryError::NotFound(format!("category {}", name)));
            }

            let in_use: i64 = conn.query_row(
                "SELECT COUNT(*) FROM items WHERE category = ?1",
                [name],
                |row| row.get(0),
            )?;
            if in_use > 0 {
                return Err(InventoryError::Conflict(format!(
                    "category {} is still used by {} item(s)",
                    name, in_use
                )));
            }

            conn.execute("DELETE FROM categories WHERE name = ?1", [name])?;
            Ok(())
        })
        .inspect_err(|e| {
            if let InventoryError::Conflict(reason) = e {
                tracing::warn!(category = %name, %reason, "Refused to delete category");
            }
        })?;

        tracing::info!(category = %name, "Deleted category");

        Ok(())
    }

    /// Insert every name not already present, keeping the given order.
    /// Returns how many were inserted.
    pub fn seed(&self, names: &[String]) -> Result<usize> {
        let inserted = self.db.transaction(|conn| -> Result<usize> {
            let mut inserted = 0;
            for name in names {
                let category = Category::new(name.clone())?;
                if !category_exists(conn, &category.name)? {
                    insert_category(conn, &category)?;
                    inserted += 1;
                }
            }
            Ok(inserted)
        })?;

        if inserted > 0 {
            tracing::info!(count = inserted, "Seeded default categories");
        }

        Ok(inserted)
    }
}

impl Clone for CategoryStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

pub(crate) fn category_exists(conn: &Connection, name: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM categories WHERE name = ?1)",
        [name],
        |row| row.get(0),
    )
}

fn insert_category(conn: &Connection, category: &Category) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO categories (name, created_at) VALUES (?1, ?2)",
        rusqlite::params![category.name, category.created_at.to_rfc3339()],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ItemStore, NewItem};

    fn names(store: &CategoryStore) -> Vec<String> {
        store
            .list_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect()
    }

    #[test]
    fn test_add_and_list_in_order() {
        let store = CategoryStore::new(Database::open_in_memory().unwrap());
        store.add_category("Glassware".to_string()).unwrap();
        store.add_category("Chemicals".to_string()).unwrap();
        store.add_category("Consumables".to_string()).unwrap();

        assert_eq!(names(&store), vec!["Glassware", "Chemicals", "Consumables"]);
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let store = CategoryStore::new(Database::open_in_memory().unwrap());
        store.add_category("Reagents".to_string()).unwrap();

        let err = store.add_category("Reagents".to_string()).unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
        assert_eq!(names(&store), vec!["Reagents"]);
    }

    #[test]
    fn test_category_names_are_case_sensitive() {
        let store = CategoryStore::new(Database::open_in_memory().unwrap());
        store.add_category("Reagents".to_string()).unwrap();
        store.add_category("reagents".to_string()).unwrap();
        assert!(store.contains("reagents").unwrap());
        assert_eq!(names(&store).len(), 2);
    }

    #[test]
    fn test_whitespace_category_stored_verbatim() {
        let store = CategoryStore::new(Database::open_in_memory().unwrap());
        store.add_category(" ".to_string()).unwrap();
        assert!(store.contains(" ").unwrap());
        assert!(!store.contains("").unwrap());
        assert_eq!(names(&store), vec![" "]);
    }

    #[test]
    fn test_empty_category_rejected() {
        let store = CategoryStore::new(Database::open_in_memory().unwrap());
        assert!(matches!(
            store.add_category(String::new()),
            Err(InventoryError::Validation(_))
        ));
        assert!(names(&store).is_empty());
    }

    #[test]
    fn test_delete_category() {
        let store = CategoryStore::new(Database::open_in_memory().unwrap());
        store.add_category("Glassware".to_string()).unwrap();
        store.add_category("Chemicals".to_string()).unwrap();

        store.delete_category("Glassware").unwrap();
        assert_eq!(names(&store), vec!["Chemicals"]);

        assert!(matches!(
            store.delete_category("Glassware"),
            Err(InventoryError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_category_in_use_conflicts() {
        let db = Database::open_in_memory().unwrap();
        let categories = CategoryStore::new(db.clone());
        let items = ItemStore::new(db);

        categories.add_category("Lab".to_string()).unwrap();
        items.add_item(NewItem::new("Gloves", "Lab")).unwrap();

        assert!(matches!(
            categories.delete_category("Lab"),
            Err(InventoryError::Conflict(_))
        ));
        assert_eq!(names(&categories), vec!["Lab"]);

        items.delete_item("Gloves").unwrap();
        categories.delete_category("Lab").unwrap();
        assert!(names(&categories).is_empty());
    }

    #[test]
    fn test_seed_skips_existing() {
        let store = CategoryStore::new(Database::open_in_memory().unwrap());
        store.add_category("Chemicals".to_string()).unwrap();

        let defaults = vec!["Glassware".to_string(), "Chemicals".to_string()];
        assert_eq!(store.seed(&defaults).unwrap(), 1);
        assert_eq!(store.seed(&defaults).unwrap(), 0);
        assert_eq!(names(&store), vec!["Chemicals", "Glassware"]);
    }
}
