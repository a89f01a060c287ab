//! Category data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique, case-sensitive name
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// The name is kept exactly as given; only the empty name is rejected.
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(InventoryError::Validation(
                "Category name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            name,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_kept_verbatim() {
        let category = Category::new(" Reagents".to_string()).unwrap();
        assert_eq!(category.name, " Reagents");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            Category::new(String::new()),
            Err(InventoryError::Validation(_))
        ));
    }

    #[test]
    fn test_whitespace_name_accepted() {
        let category = Category::new(" ".to_string()).unwrap();
        assert_eq!(category.name, " ");
    }
}
