//! Order line items.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{DomainError, MenuItemId};

/// One ordered menu item and how many of it.
///
/// Serialized as `{"menuItemId": 5, "quantity": 2}`. On input the decoder
/// also takes `itemId` in place of `menuItemId`, and a bare integer as a
/// single unit of that menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "LineItemWire")]
pub struct LineItem {
    /// Referenced catalog entry.
    pub menu_item_id: MenuItemId,
    /// Number of units, at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item.
    #[must_use]
    pub const fn new(menu_item_id: MenuItemId, quantity: u32) -> Self {
        Self {
            menu_item_id,
            quantity,
        }
    }

    /// Check the quantity is positive.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` when quantity is zero.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.quantity == 0 {
            return Err(DomainError::InvalidValue {
                field: "items".to_string(),
                message: format!(
                    "quantity for menu item {} must be at least 1",
                    self.menu_item_id
                ),
            });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LineItemWire {
    Bare(MenuItemId),
    Detailed(DetailedLineItem),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailedLineItem {
    #[serde(alias = "itemId")]
    menu_item_id: MenuItemId,
    #[serde(default = "default_quantity")]
    quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

impl From<LineItemWire> for LineItem {
    fn from(wire: LineItemWire) -> Self {
        match wire {
            LineItemWire::Bare(menu_item_id) => Self::new(menu_item_id, 1),
            LineItemWire::Detailed(d) => Self::new(d.menu_item_id, d.quantity),
        }
    }
}
