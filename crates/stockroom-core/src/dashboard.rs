//! Dashboard summary
//!
//! Everything the overview screen shows, computed from one read of the items.

use serde::{Deserialize, Serialize};

use stockroom_inventory::{is_low_stock, Item};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatus {
    #[serde(flatten)]
    pub item: Item,
    pub is_low_stock: bool,
}

/// Total stock filed under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStock {
    pub category: String,
    pub total_stock: i64,
    pub item_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of distinct items
    pub item_count: usize,
    pub low_stock_count: usize,
    /// Names of items that need restocking, in item order
    pub restock_list: Vec<String>,
    /// Stock per category, in order of first appearance
    pub stock_by_category: Vec<CategoryStock>,
    pub items: Vec<ItemStatus>,
}

impl DashboardSummary {
    pub fn from_items(items: Vec<Item>) -> Self {
        let restock_list: Vec<String> = items
            .iter()
            .filter(|i| is_low_stock(i))
            .map(|i| i.name.clone())
            .collect();

        let mut stock_by_category: Vec<CategoryStock> = Vec::new();
        for item in &items {
            match stock_by_category
                .iter_mut()
                .find(|c| c.category == item.category)
            {
                Some(entry) => {
                    entry.total_stock = entry.total_stock.saturating_add(item.current_stock);
                    entry.item_count += 1;
                }
                None => stock_by_category.push(CategoryStock {
                    category: item.category.clone(),
                    total_stock: item.current_stock,
                    item_count: 1,
                }),
            }
        }

        let items: Vec<ItemStatus> = items
            .into_iter()
            .map(|item| ItemStatus {
                is_low_stock: is_low_stock(&item),
                item,
            })
            .collect();

        Self {
            item_count: items.len(),
            low_stock_count: restock_list.len(),
            restock_list,
            stock_by_category,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::NewItem;

    fn item(name: &str, category: &str, current: i64, safe: i64) -> Item {
        Item::new(NewItem::new(name, category).with_stock(current, safe)).unwrap()
    }

    #[test]
    fn test_empty_dashboard() {
        let summary = DashboardSummary::from_items(Vec::new());
        assert!(summary.is_empty());
        assert_eq!(summary.low_stock_count, 0);
        assert!(summary.stock_by_category.is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let summary = DashboardSummary::from_items(vec![
            item("Gloves", "Consumables", 4, 5),
            item("Beaker", "Glassware", 12, 2),
            item("Tips", "Consumables", 30, 10),
            item("Flask", "Glassware", 2, 2),
        ]);

        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.low_stock_count, 2);
        assert_eq!(summary.restock_list, vec!["Gloves", "Flask"]);
        assert_eq!(
            summary.stock_by_category,
            vec![
                CategoryStock {
                    category: "Consumables".to_string(),
                    total_stock: 34,
                    item_count: 2,
                },
                CategoryStock {
                    category: "Glassware".to_string(),
                    total_stock: 14,
                    item_count: 2,
                },
            ]
        );

        let flags: Vec<bool> = summary.items.iter().map(|s| s.is_low_stock).collect();
        assert_eq!(flags, vec![true, false, false, true]);
    }

    #[test]
    fn test_item_status_serializes_flat() {
        let summary = DashboardSummary::from_items(vec![item("Gloves", "Consumables", 1, 5)]);
        let json = serde_json::to_value(&summary.items[0]).unwrap();
        assert_eq!(json["name"], "Gloves");
        assert_eq!(json["is_low_stock"], true);
    }
}
