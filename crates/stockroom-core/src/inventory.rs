//! Inventory handle
//!
//! One `Inventory` is created at startup and handed to the presentation
//! layer. It owns the only database connection; dropping it closes the store.

use stockroom_inventory::{
    low_stock_items, Category, CategoryStore, Item, ItemStore, NewItem, StockDirection,
};
use stockroom_storage::Database;

use crate::config::Config;
use crate::dashboard::DashboardSummary;
use crate::Result;

/// Settings key recording which default categories were seeded.
const SEEDED_CATEGORIES_KEY: &str = "seeded_categories";

pub struct Inventory {
    /// Configuration
    config: Config,
    /// Database
    db: Database,
    items: ItemStore,
    categories: CategoryStore,
}

impl Inventory {
    /// Open the store at `config.database_path`
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let db = Database::open(&config.database_path)?;

        tracing::info!(path = %config.database_path.display(), "Opened inventory store");

        Ok(Self::with_database(config, db))
    }

    pub fn open_in_memory(config: Config) -> Result<Self> {
        config.validate()?;
        let db = Database::open_in_memory()?;
        Ok(Self::with_database(config, db))
    }

    fn with_database(config: Config, db: Database) -> Self {
        let items =
            ItemStore::new(db.clone()).with_category_check(config.enforce_known_categories);
        let categories = CategoryStore::new(db.clone());

        Self {
            config,
            db,
            items,
            categories,
        }
    }

    /// Seed the default categories the first time a store is opened.
    ///
    /// A store is only ever seeded once, so removing every category does not
    /// bring the defaults back.
    pub fn initialize(&self) -> Result<()> {
        let seeded: Option<Vec<String>> = self.db.get_json_setting(SEEDED_CATEGORIES_KEY)?;

        if seeded.is_none() {
            let inserted = self.categories.seed(&self.config.default_categories)?;
            self.db
                .set_json_setting(SEEDED_CATEGORIES_KEY, &self.config.default_categories)?;

            tracing::info!(count = inserted, "Initialized fresh inventory store");
        }

        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // === Category operations ===

    pub fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.list_categories()?)
    }

    pub fn add_category(&self, name: String) -> Result<Category> {
        Ok(self.categories.add_category(name)?)
    }

    pub fn delete_category(&self, name: &str) -> Result<()> {
        Ok(self.categories.delete_category(name)?)
    }

    // === Item operations ===

    pub fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.list_items()?)
    }

    pub fn get_item(&self, name: &str) -> Result<Item> {
        Ok(self.items.get_item(name)?)
    }

    /// A blank new-item form, prefilled with the configured defaults.
    pub fn new_item(&self, name: impl Into<String>, category: impl Into<String>) -> NewItem {
        NewItem::new(name, category)
            .with_stock(0, self.config.default_safe_stock)
            .with_unit(self.config.default_unit.clone())
    }

    pub fn add_item(&self, new: NewItem) -> Result<Item> {
        Ok(self.items.add_item(new)?)
    }

    pub fn adjust_stock(
        &self,
        name: &str,
        quantity: i64,
        direction: StockDirection,
    ) -> Result<Item> {
        Ok(self.items.adjust_stock(name, quantity, direction)?)
    }

    pub fn stock_in(&self, name: &str, quantity: i64) -> Result<Item> {
        self.adjust_stock(name, quantity, StockDirection::In)
    }

    pub fn stock_out(&self, name: &str, quantity: i64) -> Result<Item> {
        self.adjust_stock(name, quantity, StockDirection::Out)
    }

    pub fn delete_item(&self, name: &str) -> Result<()> {
        Ok(self.items.delete_item(name)?)
    }

    // === Dashboard ===

    pub fn low_stock_items(&self) -> Result<Vec<Item>> {
        Ok(low_stock_items(&self.list_items()?))
    }

    pub fn dashboard(&self) -> Result<DashboardSummary> {
        Ok(DashboardSummary::from_items(self.list_items()?))
    }
}
