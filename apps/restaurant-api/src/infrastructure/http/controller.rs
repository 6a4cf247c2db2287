//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API over a [`Storage`] implementation.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{HeaderName, Method, StatusCode, header},
    response::IntoResponse,
    routing::{get, patch},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::application::ports::Storage;
use crate::application::validation::{validate_contact_message, validate_order};
use crate::domain::contact::{ContactMessage, NewContactMessage};
use crate::domain::menu::MenuItem;
use crate::domain::ordering::Order;
use crate::domain::shared::OrderId;
use crate::infrastructure::config::ServerConfig;

use super::error::ApiError;
use super::request::{CreateContactRequest, CreateOrderRequest, UpdateStatusRequest};
use super::response::HealthResponse;

/// Application state shared across handlers.
pub struct AppState<S: Storage> {
    /// Backing store.
    pub store: Arc<S>,
    /// Application version.
    pub version: String,
}

impl<S: Storage> AppState<S> {
    /// Create state over `store`, reporting the crate version.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl<S: Storage> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all API endpoints, CORS and request tracing.
pub fn create_router<S: Storage + 'static>(state: AppState<S>) -> Router {
    with_layers(api_routes().with_state(state))
}

/// Create the full application: API endpoints plus static assets from the
/// configured directory, with `index.html` served for any unmatched path.
pub fn create_app<S: Storage + 'static>(state: AppState<S>, config: &ServerConfig) -> Router {
    let assets = ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()));

    with_layers(api_routes().with_state(state).fallback_service(assets))
}

fn api_routes<S: Storage + 'static>() -> Router<AppState<S>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/menu", get(list_menu))
        .route("/api/menu/{category}", get(list_menu_by_category))
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", patch(update_order_status))
        .route(
            "/api/contact",
            get(list_contact_messages).post(create_contact_message),
        )
}

fn with_layers(router: Router) -> Router {
    router.layer(cors_layer()).layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("origin"),
            header::CONTENT_LENGTH,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
}

/// Health check endpoint.
async fn health_check<S: Storage>(State(state): State<AppState<S>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

async fn list_menu<S: Storage>(State(state): State<AppState<S>>) -> Json<Vec<MenuItem>> {
    Json(state.store.list_menu_items())
}

async fn list_menu_by_category<S: Storage>(
    State(state): State<AppState<S>>,
    Path(category): Path<String>,
) -> Json<Vec<MenuItem>> {
    Json(state.store.list_menu_items_by_category(&category))
}

/// Place an order. Nothing is stored unless every check passes.
async fn create_order<S: Storage>(
    State(state): State<AppState<S>>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    const INVALID: &str = "Invalid order data";

    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected order body");
        ApiError::from_json_rejection(INVALID, &rejection)
    })?;

    let new_order = request
        .into_new_order()
        .and_then(|order| validate_order(&order, state.store.as_ref()).map(|()| order))
        .map_err(|err| {
            tracing::warn!(field = %err.field, error = %err.message, "Order failed validation");
            ApiError::from_validation(INVALID, &err)
        })?;

    let order = state.store.create_order(new_order);
    tracing::info!(
        order_id = %order.id,
        items = order.items.len(),
        total = %order.totals.total,
        "Order placed"
    );

    Ok((StatusCode::CREATED, Json(order)))
}

async fn list_orders<S: Storage>(State(state): State<AppState<S>>) -> Json<Vec<Order>> {
    Json(state.store.list_orders())
}

async fn get_order<S: Storage>(
    State(state): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Order>, ApiError> {
    let Path(id) = id.map_err(|rejection| ApiError::invalid_order_id(&rejection))?;

    state
        .store
        .get_order(OrderId::new(id))
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Order not found"))
}

async fn update_order_status<S: Storage>(
    State(state): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Path(id) = id.map_err(|rejection| ApiError::invalid_order_id(&rejection))?;
    let Json(request) =
        body.map_err(|rejection| ApiError::from_json_rejection("Status is required", &rejection))?;
    let status = request
        .into_status()
        .map_err(|err| ApiError::from_validation("Status is required", &err))?;

    let order = state
        .store
        .update_order_status(OrderId::new(id), status)
        .ok_or_else(|| ApiError::not_found("Order not found"))?;
    tracing::info!(order_id = %order.id, status = %order.status, "Order status updated");

    Ok(Json(order))
}

async fn create_contact_message<S: Storage>(
    State(state): State<AppState<S>>,
    body: Result<Json<CreateContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactMessage>), ApiError> {
    const INVALID: &str = "Invalid contact message data";

    let Json(request) =
        body.map_err(|rejection| ApiError::from_json_rejection(INVALID, &rejection))?;
    let new_message = NewContactMessage::from(request);
    validate_contact_message(&new_message).map_err(|err| ApiError::from_validation(INVALID, &err))?;

    let message = state.store.create_contact_message(new_message);
    tracing::info!(message_id = %message.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(message)))
}

async fn list_contact_messages<S: Storage>(
    State(state): State<AppState<S>>,
) -> Json<Vec<ContactMessage>> {
    Json(state.store.list_contact_messages())
}
