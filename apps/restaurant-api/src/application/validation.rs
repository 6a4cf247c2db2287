//! Input validation for order and contact submissions.
//!
//! Runs in the handler layer before anything reaches the store, so a
//! rejected request never mutates state.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::application::ports::Storage;
use crate::domain::contact::NewContactMessage;
use crate::domain::ordering::NewOrder;
use crate::domain::shared::DomainError;

/// A request body failed a field rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Offending field, as named on the wire.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    /// Create an error for `field`.
    #[must_use]
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// The field was missing or blank.
    #[must_use]
    pub fn required(field: &str) -> Self {
        Self::new(field, "is required")
    }
}

impl From<DomainError> for ValidationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidValue { field, message } => Self { field, message },
            DomainError::NotFound { entity_type, id } => Self {
                field: "items".to_string(),
                message: format!("{entity_type} {id} does not exist"),
            },
        }
    }
}

/// Whether `email` looks like `local@domain.tld`.
#[must_use]
#[allow(clippy::expect_used)] // static pattern
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_SHAPE: OnceLock<Regex> = OnceLock::new();

    let re = EMAIL_SHAPE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
    });
    re.is_match(email.trim())
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

fn require_email(field: &str, value: &str) -> Result<(), ValidationError> {
    require(field, value)?;
    if !is_valid_email(value) {
        return Err(ValidationError::new(field, "must be a valid email address"));
    }
    Ok(())
}

/// Check an order before it is stored.
///
/// Every line item must reference a menu item known to `storage`.
///
/// # Errors
///
/// Returns the first rule the order breaks.
pub fn validate_order<S: Storage + ?Sized>(
    order: &NewOrder,
    storage: &S,
) -> Result<(), ValidationError> {
    require("customerName", &order.customer_name)?;
    require("customerPhone", &order.customer_phone)?;
    require_email("customerEmail", &order.customer_email)?;
    require("customerAddress", &order.customer_address)?;
    require("deliveryDate", &order.delivery_date)?;
    require("deliveryTime", &order.delivery_time)?;

    if order.items.is_empty() {
        return Err(ValidationError::new("items", "at least one item is required"));
    }
    for item in &order.items {
        item.validate()?;
        if storage.get_menu_item(item.menu_item_id).is_none() {
            return Err(DomainError::NotFound {
                entity_type: "Menu item".to_string(),
                id: item.menu_item_id.to_string(),
            }
            .into());
        }
    }

    order.totals.validate()?;
    Ok(())
}

/// Check a contact-form submission before it is stored.
///
/// # Errors
///
/// Returns the first rule the message breaks.
pub fn validate_contact_message(message: &NewContactMessage) -> Result<(), ValidationError> {
    require("name", &message.name)?;
    require_email("email", &message.email)?;
    require("subject", &message.subject)?;
    require("message", &message.message)
}
