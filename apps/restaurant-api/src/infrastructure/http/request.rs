//! HTTP request DTOs.

use serde::{Deserialize, Serialize};

use crate::application::ValidationError;
use crate::domain::contact::NewContactMessage;
use crate::domain::ordering::{LineItem, NewOrder, OrderStatus, OrderTotals};
use crate::domain::shared::Money;

/// Body of `POST /api/orders`.
///
/// Text fields default to empty so a missing field is reported by name
/// during validation instead of as a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Customer name.
    #[serde(default)]
    pub customer_name: String,
    /// Customer phone.
    #[serde(default)]
    pub customer_phone: String,
    /// Customer email.
    #[serde(default)]
    pub customer_email: String,
    /// Delivery address.
    #[serde(default)]
    pub customer_address: String,
    /// Requested delivery date.
    #[serde(default)]
    pub delivery_date: String,
    /// Requested delivery time slot.
    #[serde(default)]
    pub delivery_time: String,
    /// Ordered items.
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Free-text notes.
    #[serde(default)]
    pub special_instructions: Option<String>,
    /// Sum of line prices.
    pub subtotal: Option<Money>,
    /// Sales tax.
    pub tax: Option<Money>,
    /// Delivery charge.
    pub delivery_fee: Option<Money>,
    /// Amount due.
    pub total: Option<Money>,
    /// Initial status; blank or absent means `pending`.
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateOrderRequest {
    /// Convert to the domain input, checking the money fields are present.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first missing amount.
    pub fn into_new_order(self) -> Result<NewOrder, ValidationError> {
        let totals = OrderTotals {
            subtotal: self
                .subtotal
                .ok_or_else(|| ValidationError::required("subtotal"))?,
            tax: self.tax.ok_or_else(|| ValidationError::required("tax"))?,
            delivery_fee: self
                .delivery_fee
                .ok_or_else(|| ValidationError::required("deliveryFee"))?,
            total: self.total.ok_or_else(|| ValidationError::required("total"))?,
        };

        Ok(NewOrder {
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            customer_email: self.customer_email,
            customer_address: self.customer_address,
            delivery_date: self.delivery_date,
            delivery_time: self.delivery_time,
            items: self.items,
            special_instructions: self.special_instructions,
            totals,
            status: Some(OrderStatus::or_pending(self.status)),
        })
    }
}

/// Body of `PATCH /api/orders/{id}/status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// New status text.
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateStatusRequest {
    /// Extract the new status.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when the status is absent or blank.
    pub fn into_status(self) -> Result<OrderStatus, ValidationError> {
        self.status
            .ok_or_else(|| ValidationError::required("status"))
            .and_then(|s| OrderStatus::new(s).map_err(ValidationError::from))
    }
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateContactRequest {
    /// Sender name.
    #[serde(default)]
    pub name: String,
    /// Sender email.
    #[serde(default)]
    pub email: String,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Message body.
    #[serde(default)]
    pub message: String,
}

impl From<CreateContactRequest> for NewContactMessage {
    fn from(req: CreateContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
        }
    }
}
