//! Shared Domain Types
//!
//! Value objects and errors shared across the menu, ordering and contact
//! contexts.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::{ContactMessageId, MenuItemId, Money, OrderId, Timestamp};
