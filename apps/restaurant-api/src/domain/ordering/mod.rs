//! Ordering Context
//!
//! Customer orders with delivery details, a monetary breakdown and a
//! free-text status.

mod line_item;
mod order;
mod order_status;

pub use line_item::LineItem;
pub use order::{NewOrder, Order, OrderTotals};
pub use order_status::OrderStatus;
