//! The menu: a read-only lookup table of items grouped by category.
//!
//! The menu is loaded once at startup and never mutated at runtime. Category
//! order is the order of the tabs on the order page, so it is represented as
//! a list rather than a map.

use serde::{Deserialize, Serialize};

use crate::types::{MenuItemId, Money};

/// Errors found when validating a [`Menu`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum MenuValidationError {
    /// A category has an empty name.
    #[error("category {index} has an empty name")]
    EmptyCategoryName {
        /// Zero-based category position.
        index: usize,
    },
    /// Two categories share a name.
    #[error("duplicate category name: {name}")]
    DuplicateCategory {
        /// The repeated category name.
        name: String,
    },
    /// Two items (in any categories) share an id.
    #[error("duplicate item id: {id}")]
    DuplicateItemId {
        /// The repeated item id.
        id: MenuItemId,
    },
}

/// A single dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable item id, unique across the whole menu.
    pub id: MenuItemId,
    /// Display name.
    pub name: String,
    /// Ingredients line shown under the name.
    pub ingredients: String,
    /// Unit price.
    pub price: Money,
    /// Image URL. When absent (or the image fails to load) the front-end
    /// shows the placeholder image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// An ordered group of menu items under one tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    /// Category name, shown on the tab.
    pub name: String,
    /// Items in display order.
    pub items: Vec<MenuItem>,
}

/// The full menu, with categories in tab order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    categories: Vec<MenuCategory>,
}

impl Menu {
    /// Create a menu from categories in display order.
    #[must_use]
    pub const fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    /// All categories in tab order.
    #[must_use]
    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// The first category (the initially active tab), if any.
    #[must_use]
    pub fn first_category(&self) -> Option<&MenuCategory> {
        self.categories.first()
    }

    /// Items of the named category. An unknown category is an empty list,
    /// matching what the order page renders for it.
    #[must_use]
    pub fn items_in(&self, category: &str) -> &[MenuItem] {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map_or(&[], |c| c.items.as_slice())
    }

    /// Find an item by id, searching every category.
    #[must_use]
    pub fn find_item(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| item.id == id)
    }

    /// Total number of items across all categories.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Whether the menu has no categories at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Check structural invariants: non-empty category names, unique category
    /// names, unique item ids across the whole menu.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), MenuValidationError> {
        let mut category_names = std::collections::HashSet::new();
        let mut item_ids = std::collections::HashSet::new();

        for (index, category) in self.categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(MenuValidationError::EmptyCategoryName { index });
            }
            if !category_names.insert(category.name.as_str()) {
                return Err(MenuValidationError::DuplicateCategory {
                    name: category.name.clone(),
                });
            }
            for item in &category.items {
                if !item_ids.insert(item.id) {
                    return Err(MenuValidationError::DuplicateItemId { id: item.id });
                }
            }
        }

        Ok(())
    }
}
