//! Category commands
use serde::{Deserialize, Serialize};

use super::CommandResult;
use crate::state::AppState;
use stockroom_core::Category;

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
        }
    }
}

pub fn get_categories(state: &AppState) -> CommandResult<Vec<CategoryInfo>> {
    CommandResult::from_result(state.with_inventory(|inventory| {
        Ok(inventory
            .list_categories()?
            .into_iter()
            .map(CategoryInfo::from)
            .collect())
    }))
}

pub fn add_category(state: &AppState, name: String) -> CommandResult<CategoryInfo> {
    CommandResult::from_result(
        state.with_inventory(|inventory| Ok(inventory.add_category(name.clone())?.into())),
    )
}

pub fn delete_category(state: &AppState, name: &str) -> CommandResult<()> {
    CommandResult::from_result(state.with_inventory(|inventory| inventory.delete_category(name)))
}
