// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Restaurant API - Rust Core Library
//!
//! Backend for a restaurant's ordering site: the menu catalog, customer
//! orders with a status workflow, and contact messages, all held in a
//! process-local store shared by concurrent request handlers.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: records and value objects
//!   - `menu`: menu items and the seed catalog
//!   - `ordering`: orders, line items, status
//!   - `contact`: contact messages
//!   - `shared`: identifiers, money, timestamps, domain errors
//!
//! - **Application**: the `Storage` port and request validation
//!
//! - **Infrastructure**: adapters
//!   - `persistence`: `InMemoryStore`
//!   - `http`: axum router, handlers, error mapping
//!   - `config`: environment settings
//!
//! - **Observability**: tracing subscriber and Prometheus counters

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Records and value objects with no framework dependencies.
pub mod domain;

/// Application layer - Storage port and validation rules.
pub mod application;

/// Infrastructure layer - Storage, HTTP and configuration adapters.
pub mod infrastructure;

/// Logging and metrics setup.
pub mod observability;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::{Storage, ValidationError};
pub use domain::contact::{ContactMessage, NewContactMessage};
pub use domain::menu::{MenuItem, NewMenuItem};
pub use domain::ordering::{LineItem, NewOrder, Order, OrderStatus, OrderTotals};
pub use domain::shared::{ContactMessageId, DomainError, MenuItemId, Money, OrderId, Timestamp};
pub use infrastructure::config::ServerConfig;
pub use infrastructure::http::{ApiError, AppState, create_app, create_router};
pub use infrastructure::persistence::InMemoryStore;
