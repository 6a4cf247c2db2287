//! Contact Context
//!
//! Contact-form submissions. Immutable once stored.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{ContactMessageId, Timestamp};

/// Contact-form contents before the store assigns an id and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// A stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Store-assigned identifier.
    pub id: ContactMessageId,
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Creation time.
    pub created_at: Timestamp,
}

impl ContactMessage {
    /// Build the stored record for a new submission.
    #[must_use]
    pub fn record(id: ContactMessageId, new: NewContactMessage, created_at: Timestamp) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            subject: new.subject,
            message: new.message,
            created_at,
        }
    }
}
