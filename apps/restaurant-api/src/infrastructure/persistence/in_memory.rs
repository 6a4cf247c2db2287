//! In-memory store for menu items, orders and contact messages.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::application::ports::Storage;
use crate::domain::contact::{ContactMessage, NewContactMessage};
use crate::domain::menu::{MenuItem, NewMenuItem, seed_catalog};
use crate::domain::ordering::{NewOrder, Order, OrderStatus};
use crate::domain::shared::{ContactMessageId, MenuItemId, OrderId, Timestamp};
use crate::observability;

/// Collections and counters guarded together by the store lock.
#[derive(Debug)]
struct StoreState {
    menu_items: BTreeMap<MenuItemId, MenuItem>,
    orders: BTreeMap<OrderId, Order>,
    contact_messages: BTreeMap<ContactMessageId, ContactMessage>,
    next_menu_item_id: MenuItemId,
    next_order_id: OrderId,
    next_contact_message_id: ContactMessageId,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            menu_items: BTreeMap::new(),
            orders: BTreeMap::new(),
            contact_messages: BTreeMap::new(),
            next_menu_item_id: MenuItemId::new(1),
            next_order_id: OrderId::new(1),
            next_contact_message_id: ContactMessageId::new(1),
        }
    }

    fn insert_menu_item(&mut self, item: NewMenuItem) -> MenuItem {
        let id = self.next_menu_item_id;
        self.next_menu_item_id = id.next();

        let item = MenuItem::from_new(id, item);
        self.menu_items.insert(id, item.clone());
        item
    }
}

/// In-memory implementation of `Storage`.
///
/// A single read/write lock covers all three collections and their id
/// counters. Reads share the lock; creations and status updates take it
/// exclusively, so no two creations can observe the same counter value.
/// Nothing is persisted: state is lost when the process exits.
#[derive(Debug)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    /// Create a store seeded with the fixed catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(seed_catalog())
    }

    /// Create a store seeded with `catalog`, numbered from 1 in order.
    #[must_use]
    pub fn with_catalog(catalog: impl IntoIterator<Item = NewMenuItem>) -> Self {
        let store = Self {
            state: RwLock::new(StoreState::empty()),
        };
        for item in catalog {
            store.create_menu_item(item);
        }
        tracing::debug!(menu_items = store.state.read().menu_items.len(), "Store seeded");

        store
    }

    /// Number of stored orders.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.state.read().orders.len()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for InMemoryStore {
    fn list_menu_items(&self) -> Vec<MenuItem> {
        self.state.read().menu_items.values().cloned().collect()
    }

    fn list_menu_items_by_category(&self, category: &str) -> Vec<MenuItem> {
        self.state
            .read()
            .menu_items
            .values()
            .filter(|item| item.is_listed_in(category))
            .cloned()
            .collect()
    }

    fn get_menu_item(&self, id: MenuItemId) -> Option<MenuItem> {
        self.state.read().menu_items.get(&id).cloned()
    }

    fn create_menu_item(&self, item: NewMenuItem) -> MenuItem {
        let item = self.state.write().insert_menu_item(item);
        tracing::debug!(menu_item_id = %item.id, category = %item.category, "Menu item created");
        item
    }

    fn create_order(&self, order: NewOrder) -> Order {
        let order = {
            let mut state = self.state.write();
            let id = state.next_order_id;
            state.next_order_id = id.next();

            let order = Order::place(id, order, Timestamp::now());
            state.orders.insert(id, order.clone());
            order
        };

        observability::record_order_created();
        tracing::debug!(order_id = %order.id, status = %order.status, "Order created");
        order
    }

    fn list_orders(&self) -> Vec<Order> {
        self.state.read().orders.values().cloned().collect()
    }

    fn get_order(&self, id: OrderId) -> Option<Order> {
        self.state.read().orders.get(&id).cloned()
    }

    fn update_order_status(&self, id: OrderId, status: OrderStatus) -> Option<Order> {
        let updated = {
            let mut state = self.state.write();
            state.orders.get_mut(&id).map(|order| {
                order.set_status(status);
                order.clone()
            })
        };

        observability::record_order_status_update(updated.is_some());
        match &updated {
            Some(order) => {
                tracing::debug!(order_id = %id, status = %order.status, "Order status updated");
            }
            None => tracing::debug!(order_id = %id, "Status update for unknown order"),
        }
        updated
    }

    fn create_contact_message(&self, message: NewContactMessage) -> ContactMessage {
        let message = {
            let mut state = self.state.write();
            let id = state.next_contact_message_id;
            state.next_contact_message_id = id.next();

            let message = ContactMessage::record(id, message, Timestamp::now());
            state.contact_messages.insert(id, message.clone());
            message
        };

        observability::record_contact_message_created();
        tracing::debug!(contact_message_id = %message.id, "Contact message created");
        message
    }

    fn list_contact_messages(&self) -> Vec<ContactMessage> {
        self.state.read().contact_messages.values().cloned().collect()
    }
}
