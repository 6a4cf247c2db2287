//! Application Layer
//!
//! - **Ports**: the storage contract the handlers are written against
//! - **Validation**: request rules applied before a write reaches the store

pub mod ports;
pub mod validation;

pub use ports::Storage;
pub use validation::{ValidationError, validate_contact_message, validate_order};
