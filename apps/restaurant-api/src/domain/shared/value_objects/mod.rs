//! Shared value objects.

mod identifiers;
mod money;
mod timestamp;

pub use identifiers::{ContactMessageId, MenuItemId, OrderId};
pub use money::Money;
pub use timestamp::Timestamp;
