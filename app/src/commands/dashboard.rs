//! Dashboard commands
use serde::Serialize;

use super::items::ItemInfo;
use super::CommandResult;
use crate::state::AppState;
use stockroom_core::DashboardSummary;

#[derive(Debug, Serialize)]
pub struct DashboardInfo {
    #[serde(flatten)]
    pub summary: DashboardSummary,
    /// No items registered yet; the front end shows the "add items first" hint
    pub is_empty: bool,
}

pub fn get_dashboard(state: &AppState) -> CommandResult<DashboardInfo> {
    CommandResult::from_result(state.with_inventory(|inventory| {
        let summary = inventory.dashboard()?;
        Ok(DashboardInfo {
            is_empty: summary.is_empty(),
            summary,
        })
    }))
}

pub fn get_low_stock_items(state: &AppState) -> CommandResult<Vec<ItemInfo>> {
    CommandResult::from_result(state.with_inventory(|inventory| {
        Ok(inventory
            .low_stock_items()?
            .into_iter()
            .map(ItemInfo::from)
            .collect())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::items::{add_item, adjust_stock};
    use std::path::PathBuf;
    use stockroom_core::{Config, Inventory, NewItem};

    fn state() -> AppState {
        let inventory = Inventory::open_in_memory(Config::new(PathBuf::from("unused"))).unwrap();
        let state = AppState::from_inventory(inventory);
        state.initialize().unwrap();
        state
    }

    #[test]
    fn test_empty_dashboard_hint() {
        let state = state();
        let dashboard = get_dashboard(&state).data.unwrap();
        assert!(dashboard.is_empty);
        assert_eq!(dashboard.summary.item_count, 0);

        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["is_empty"], true);
        assert_eq!(json["item_count"], 0);
    }

    #[test]
    fn test_dashboard_after_writes() {
        let state = state();

        add_item(&state, NewItem::new("Gloves", "Consumables").with_stock(10, 5));
        add_item(&state, NewItem::new("Flask", "Glassware").with_stock(9, 2));
        adjust_stock(&state, "Gloves", 6, "out");

        let dashboard = get_dashboard(&state).data.unwrap();
        assert!(!dashboard.is_empty);
        assert_eq!(dashboard.summary.item_count, 2);
        assert_eq!(dashboard.summary.restock_list, vec!["Gloves"]);

        let low = get_low_stock_items(&state).data.unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].current_stock, 4);
    }
}
