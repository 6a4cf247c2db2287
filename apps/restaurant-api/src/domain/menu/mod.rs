//! Menu Context
//!
//! Catalog entries a customer can order. Items are created once when the
//! store is seeded and never change afterwards.

mod catalog;

pub use catalog::seed_catalog;

use serde::{Deserialize, Serialize};

use crate::domain::shared::{MenuItemId, Money};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Store-assigned identifier.
    pub id: MenuItemId,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Free-text grouping key, e.g. "Starters".
    pub category: String,
    /// Whether the item can currently be ordered.
    pub available: bool,
}

impl MenuItem {
    /// Attach an identifier to a new catalog entry.
    #[must_use]
    pub fn from_new(id: MenuItemId, item: NewMenuItem) -> Self {
        Self {
            id,
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
            available: item.available,
        }
    }

    /// Whether this item is listed under `category` and can be ordered.
    #[must_use]
    pub fn is_listed_in(&self, category: &str) -> bool {
        self.available && self.category == category
    }
}

/// A catalog entry that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Grouping key.
    pub category: String,
    /// Availability flag; absent means available.
    #[serde(default = "default_available")]
    pub available: bool,
}

const fn default_available() -> bool {
    true
}
