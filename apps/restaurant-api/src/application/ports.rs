//! Application Ports
//!
//! The storage contract consumed by the HTTP handlers. The in-memory adapter
//! lives in `infrastructure::persistence`.

use crate::domain::contact::{ContactMessage, NewContactMessage};
use crate::domain::menu::{MenuItem, NewMenuItem};
use crate::domain::ordering::{NewOrder, Order, OrderStatus};
use crate::domain::shared::{MenuItemId, OrderId};

/// Owner of all mutable server state.
///
/// Every method is a short synchronous computation. Returned records are
/// owned copies: nothing a caller does to them reaches the stored state.
/// Absence is reported as `None`, never as a default record.
pub trait Storage: Send + Sync {
    /// Every catalog entry, by ascending id.
    fn list_menu_items(&self) -> Vec<MenuItem>;

    /// Available catalog entries whose category equals `category` exactly.
    ///
    /// An empty `category` matches nothing.
    fn list_menu_items_by_category(&self, category: &str) -> Vec<MenuItem>;

    /// A single catalog entry.
    fn get_menu_item(&self, id: MenuItemId) -> Option<MenuItem>;

    /// Add a catalog entry under the next menu item id.
    fn create_menu_item(&self, item: NewMenuItem) -> MenuItem;

    /// Store a new order under the next order id, stamped with the current
    /// time. Status defaults to `pending`.
    fn create_order(&self, order: NewOrder) -> Order;

    /// Every order, by ascending id.
    fn list_orders(&self) -> Vec<Order>;

    /// A single order.
    fn get_order(&self, id: OrderId) -> Option<Order>;

    /// Replace the status of an order. Returns `None` and changes nothing
    /// when the id is unknown.
    fn update_order_status(&self, id: OrderId, status: OrderStatus) -> Option<Order>;

    /// Store a contact-form submission under the next contact id.
    fn create_contact_message(&self, message: NewContactMessage) -> ContactMessage;

    /// Every contact message, by ascending id.
    fn list_contact_messages(&self) -> Vec<ContactMessage>;
}
