//! Strongly-typed identifiers for domain entities.
//!
//! Every entity kind is numbered by its own store counter, so the newtypes
//! keep a menu item id from being passed where an order id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an identifier from its raw integer value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the raw integer value.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// The identifier that follows this one.
            #[must_use]
            pub const fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(MenuItemId, "Identifier of a catalog entry.");
define_id!(OrderId, "Identifier of a placed order.");
define_id!(ContactMessageId, "Identifier of a contact-form submission.");
