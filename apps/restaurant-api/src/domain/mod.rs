//! Domain Layer
//!
//! Plain records and value objects with no HTTP or storage concerns.
//!
//! # Bounded Contexts
//!
//! - [`menu`]: Catalog entries and the seed catalog
//! - [`ordering`]: Orders, line items and order status
//! - [`contact`]: Contact-form submissions

pub mod contact;
pub mod menu;
pub mod ordering;
pub mod shared;
