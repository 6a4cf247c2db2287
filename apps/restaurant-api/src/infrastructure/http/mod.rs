//! HTTP/REST API adapter.
//!
//! Inbound adapter exposing the menu, ordering and contact endpoints, plus the
//! static frontend assets.

mod controller;
mod error;
mod request;
mod response;

pub use controller::{AppState, create_app, create_router};
pub use error::ApiError;
pub use request::*;
pub use response::*;
