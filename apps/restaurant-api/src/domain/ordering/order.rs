//! Order record.

use serde::{Deserialize, Serialize};

use super::{LineItem, OrderStatus};
use crate::domain::shared::{DomainError, Money, OrderId, Timestamp};

/// Monetary breakdown of an order, as quoted to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Sum of line prices.
    pub subtotal: Money,
    /// Sales tax.
    pub tax: Money,
    /// Delivery charge.
    pub delivery_fee: Money,
    /// Amount due.
    pub total: Money,
}

impl OrderTotals {
    /// Check every amount is non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first negative field.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.subtotal.validate_for_order("subtotal")?;
        self.tax.validate_for_order("tax")?;
        self.delivery_fee.validate_for_order("deliveryFee")?;
        self.total.validate_for_order("total")
    }
}

/// Order contents before the store assigns an id and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    /// Customer name.
    pub customer_name: String,
    /// Customer phone.
    pub customer_phone: String,
    /// Customer email.
    pub customer_email: String,
    /// Delivery address.
    pub customer_address: String,
    /// Requested delivery date, opaque text.
    pub delivery_date: String,
    /// Requested delivery time slot, opaque text.
    pub delivery_time: String,
    /// Ordered items.
    pub items: Vec<LineItem>,
    /// Free-text notes for the kitchen or driver.
    pub special_instructions: Option<String>,
    /// Monetary breakdown.
    pub totals: OrderTotals,
    /// Initial status; `None` means `pending`.
    pub status: Option<OrderStatus>,
}

/// A placed order.
///
/// `id` and `created_at` are fixed at creation. `status` is the only field
/// that changes afterwards, and only through the status-update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned identifier.
    pub id: OrderId,
    /// Customer name.
    pub customer_name: String,
    /// Customer phone.
    pub customer_phone: String,
    /// Customer email.
    pub customer_email: String,
    /// Delivery address.
    pub customer_address: String,
    /// Requested delivery date.
    pub delivery_date: String,
    /// Requested delivery time slot.
    pub delivery_time: String,
    /// Ordered items.
    pub items: Vec<LineItem>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    /// Monetary breakdown.
    #[serde(flatten)]
    pub totals: OrderTotals,
    /// Current status.
    pub status: OrderStatus,
    /// Creation time.
    pub created_at: Timestamp,
}

impl Order {
    /// Build the stored record for a new order.
    #[must_use]
    pub fn place(id: OrderId, new: NewOrder, created_at: Timestamp) -> Self {
        Self {
            id,
            customer_name: new.customer_name,
            customer_phone: new.customer_phone,
            customer_email: new.customer_email,
            customer_address: new.customer_address,
            delivery_date: new.delivery_date,
            delivery_time: new.delivery_time,
            items: new.items,
            special_instructions: new.special_instructions,
            totals: new.totals,
            status: new.status.unwrap_or_default(),
            created_at,
        }
    }

    /// Replace the status.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}
