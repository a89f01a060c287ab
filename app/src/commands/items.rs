//! Item commands
use serde::{Deserialize, Serialize};

use super::CommandResult;
use crate::state::AppState;
use stockroom_core::{CoreError, InventoryError, Item, NewItem, StockDirection};

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemInfo {
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    pub item_no: Option<String>,
    pub spec: Option<String>,
    pub location: Option<String>,
    pub current_stock: i64,
    pub safe_stock: i64,
    pub unit: String,
    pub is_low_stock: bool,
}

impl From<Item> for ItemInfo {
    fn from(item: Item) -> Self {
        let is_low_stock = item.is_low_stock();
        Self {
            name: item.name,
            category: item.category,
            brand: item.brand,
            item_no: item.item_no,
            spec: item.spec,
            location: item.location,
            current_stock: item.current_stock,
            safe_stock: item.safe_stock,
            unit: item.unit,
            is_low_stock,
        }
    }
}

/// Values the new-item form starts from.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemFormDefaults {
    pub categories: Vec<String>,
    pub unit: String,
    pub safe_stock: i64,
}

pub fn get_items(state: &AppState) -> CommandResult<Vec<ItemInfo>> {
    CommandResult::from_result(state.with_inventory(|inventory| {
        Ok(inventory
            .list_items()?
            .into_iter()
            .map(ItemInfo::from)
            .collect())
    }))
}

pub fn get_item(state: &AppState, name: &str) -> CommandResult<ItemInfo> {
    CommandResult::from_result(
        state.with_inventory(|inventory| Ok(inventory.get_item(name)?.into())),
    )
}

pub fn get_item_form_defaults(state: &AppState) -> CommandResult<ItemFormDefaults> {
    CommandResult::from_result(state.with_inventory(|inventory| {
        let categories = inventory
            .list_categories()?
            .into_iter()
            .map(|c| c.name)
            .collect();
        let config = inventory.config();
        Ok(ItemFormDefaults {
            categories,
            unit: config.default_unit.clone(),
            safe_stock: config.default_safe_stock,
        })
    }))
}

pub fn add_item(state: &AppState, item: NewItem) -> CommandResult<ItemInfo> {
    CommandResult::from_result(
        state.with_inventory(|inventory| Ok(inventory.add_item(item.clone())?.into())),
    )
}

/// `direction` is `"in"` or `"out"`.
pub fn adjust_stock(
    state: &AppState,
    name: &str,
    quantity: i64,
    direction: &str,
) -> CommandResult<ItemInfo> {
    let direction: StockDirection = match direction.parse() {
        Ok(d) => d,
        Err(reason) => {
            return CommandResult::err(&CoreError::from(InventoryError::Validation(reason)))
        }
    };

    CommandResult::from_result(state.with_inventory(|inventory| {
        Ok(inventory.adjust_stock(name, quantity, direction)?.into())
    }))
}

/// The "confirm stock-in" button.
pub fn stock_in(state: &AppState, name: &str, quantity: i64) -> CommandResult<ItemInfo> {
    CommandResult::from_result(
        state.with_inventory(|inventory| Ok(inventory.stock_in(name, quantity)?.into())),
    )
}

/// The "confirm withdrawal" button.
pub fn stock_out(state: &AppState, name: &str, quantity: i64) -> CommandResult<ItemInfo> {
    CommandResult::from_result(
        state.with_inventory(|inventory| Ok(inventory.stock_out(name, quantity)?.into())),
    )
}

pub fn delete_item(state: &AppState, name: &str) -> CommandResult<()> {
    CommandResult::from_result(state.with_inventory(|inventory| inventory.delete_item(name)))
}
