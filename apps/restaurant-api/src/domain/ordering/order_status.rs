//! Order status value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Free-text order state.
///
/// No transition table is enforced: an order starts as `"pending"` and the
/// status-update operation may set any non-blank value, any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderStatus(String);

impl OrderStatus {
    /// Status of a freshly placed order.
    pub const PENDING: &'static str = "pending";

    /// Create a status, rejecting blank values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if `value` is empty or whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                field: "status".to_string(),
                message: "Status is required".to_string(),
            });
        }
        Ok(Self(value))
    }

    /// The default status.
    #[must_use]
    pub fn pending() -> Self {
        Self(Self::PENDING.to_string())
    }

    /// Use `value` when it is present and non-blank, otherwise `pending`.
    #[must_use]
    pub fn or_pending(value: Option<String>) -> Self {
        value
            .and_then(|v| Self::new(v).ok())
            .unwrap_or_else(Self::pending)
    }

    /// Get the status text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::pending()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.0
    }
}
