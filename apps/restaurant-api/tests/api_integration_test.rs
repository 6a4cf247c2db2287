//! HTTP API Integration Tests
//!
//! Drives the full router (handlers → validation → in-memory store) with
//! `tower::ServiceExt::oneshot`.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use test_case::test_case;
use tower::ServiceExt;

use restaurant_api::infrastructure::config::ServerConfig;
use restaurant_api::infrastructure::http::{AppState, create_app, create_router};
use restaurant_api::infrastructure::persistence::InMemoryStore;

// =============================================================================
// Helpers
// =============================================================================

fn api() -> Router {
    create_router(AppState::new(Arc::new(InMemoryStore::new())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn send_json(app: &Router, method: &str, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

fn valid_order() -> Value {
    json!({
        "customerName": "Priya Shah",
        "customerPhone": "555-0142",
        "customerEmail": "priya@example.com",
        "customerAddress": "12 Spice Road",
        "deliveryDate": "2026-03-14",
        "deliveryTime": "19:00",
        "items": [
            {"menuItemId": 5, "quantity": 2},
            {"menuItemId": 12, "quantity": 1}
        ],
        "specialInstructions": "Extra spicy",
        "subtotal": "38.97",
        "tax": "3.12",
        "deliveryFee": "4.99",
        "total": "47.08"
    })
}

fn valid_contact() -> Value {
    json!({
        "name": "Dev Patel",
        "email": "dev@example.com",
        "subject": "Catering",
        "message": "Do you cater for 40 guests?"
    })
}

// =============================================================================
// Menu
// =============================================================================

#[tokio::test]
async fn menu_returns_seeded_catalog_in_id_order() {
    let app = api();
    let (status, json) = get(&app, "/api/menu").await;

    assert_eq!(status, StatusCode::OK);
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 15);

    let ids: Vec<i64> = items.iter().map(|i| i["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, (1..=15).collect::<Vec<_>>());
    assert!(items.iter().all(|i| i["available"] == true));
}

#[test_case("Starters", 4 ; "starters")]
#[test_case("Main%20Courses", 7 ; "main courses percent encoded")]
#[test_case("Desserts", 4 ; "desserts")]
#[test_case("starters", 0 ; "match is case sensitive")]
#[test_case("Drinks", 0 ; "unknown category")]
#[tokio::test]
async fn menu_filters_by_category(category: &str, expected: usize) {
    let app = api();
    let (status, json) = get(&app, &format!("/api/menu/{category}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), expected);
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn place_order_then_fetch_it() {
    let app = api();

    let (status, created) = send_json(&app, "POST", "/api/orders", &valid_order()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["customerName"], "Priya Shah");
    assert_eq!(created["total"], "47.08");
    assert_eq!(created["items"][0], json!({"menuItemId": 5, "quantity": 2}));
    assert!(created["createdAt"].as_str().unwrap().ends_with('Z'));

    let (status, fetched) = get(&app, "/api/orders/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = get(&app, "/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn order_accepts_alternate_item_shapes_and_numeric_money() {
    let app = api();
    let mut order = valid_order();
    order["items"] = json!([3, {"itemId": 7, "quantity": 2}]);
    order["subtotal"] = json!(38.97);

    let (status, created) = send_json(&app, "POST", "/api/orders", &order).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created["items"],
        json!([
            {"menuItemId": 3, "quantity": 1},
            {"menuItemId": 7, "quantity": 2}
        ])
    );
    assert_eq!(created["subtotal"], "38.97");
}

#[tokio::test]
async fn order_keeps_supplied_status() {
    let app = api();
    let mut order = valid_order();
    order["status"] = json!("confirmed");

    let (status, created) = send_json(&app, "POST", "/api/orders", &order).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "confirmed");
}

#[test_case("customerName", json!("") ; "blank name")]
#[test_case("customerEmail", json!("not-an-email") ; "malformed email")]
#[test_case("items", json!([]) ; "no items")]
#[test_case("items", json!([{"menuItemId": 5, "quantity": 0}]) ; "zero quantity")]
#[test_case("items", json!([{"menuItemId": 99, "quantity": 1}]) ; "unknown menu item")]
#[test_case("total", json!("-1.00") ; "negative total")]
#[tokio::test]
async fn invalid_order_is_rejected_without_storing(field: &str, value: Value) {
    let app = api();
    let mut order = valid_order();
    order[field] = value;

    let (status, json) = send_json(&app, "POST", "/api/orders", &order).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid order data");
    assert!(json["error"].as_str().is_some());

    let (_, orders) = get(&app, "/api/orders").await;
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn missing_money_field_is_rejected() {
    let app = api();
    let mut order = valid_order();
    order.as_object_mut().unwrap().remove("deliveryFee");

    let (status, json) = send_json(&app, "POST", "/api/orders", &order).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("deliveryFee"));
}

#[tokio::test]
async fn malformed_body_is_rejected_with_json_error() {
    let app = api();
    let (status, json) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"items\": "))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let app = api();
    let mut order = valid_order();
    order["specialInstructions"] = json!("x".repeat(3 * 1024 * 1024));

    let (status, json) = send_json(&app, "POST", "/api/orders", &order).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["code"], "PAYLOAD_TOO_LARGE");
    assert_eq!(json["message"], "Invalid order data");

    let (_, orders) = get(&app, "/api/orders").await;
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn body_without_json_content_type_is_unsupported() {
    let app = api();
    let (status, json) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .body(Body::from(valid_contact().to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(json["code"], "UNSUPPORTED_MEDIA_TYPE");
}

#[tokio::test]
async fn special_instructions_are_stored_as_sent() {
    let app = api();
    let mut order = valid_order();
    order["specialInstructions"] = json!(" ");

    let (status, created) = send_json(&app, "POST", "/api/orders", &order).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["specialInstructions"], " ");
}

#[test_case("/api/orders/1" ; "never created")]
#[test_case("/api/orders/0" ; "zero")]
#[test_case("/api/orders/-5" ; "negative")]
#[tokio::test]
async fn unknown_order_is_not_found(uri: &str) {
    let app = api();
    let (status, json) = get(&app, uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Order not found");
}

#[tokio::test]
async fn non_numeric_order_id_is_bad_request() {
    let app = api();
    let (status, json) = get(&app, "/api/orders/first").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid order ID");
}

#[tokio::test]
async fn order_ids_are_sequential() {
    let app = api();
    for expected in 1..=3 {
        let (_, created) = send_json(&app, "POST", "/api/orders", &valid_order()).await;
        assert_eq!(created["id"], expected);
    }
}

#[tokio::test]
async fn concurrent_orders_get_distinct_ids() {
    let app = api();
    let handles: Vec<_> = (0..20)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let (status, created) =
                    send_json(&app, "POST", "/api/orders", &valid_order()).await;
                assert_eq!(status, StatusCode::CREATED);
                created["id"].as_i64().unwrap()
            })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids, (1..=20).collect::<BTreeSet<_>>());
}

// =============================================================================
// Order status
// =============================================================================

#[tokio::test]
async fn status_update_changes_only_status() {
    let app = api();
    let (_, created) = send_json(&app, "POST", "/api/orders", &valid_order()).await;

    let (status, updated) = send_json(
        &app,
        "PATCH",
        "/api/orders/1/status",
        &json!({"status": "out for delivery"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "out for delivery");

    let mut expected = created;
    expected["status"] = json!("out for delivery");
    assert_eq!(updated, expected);

    let (_, fetched) = get(&app, "/api/orders/1").await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn status_update_for_unknown_order_is_not_found() {
    let app = api();
    let (status, json) = send_json(
        &app,
        "PATCH",
        "/api/orders/9/status",
        &json!({"status": "delivered"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Order not found");

    let (_, orders) = get(&app, "/api/orders").await;
    assert_eq!(orders, json!([]));
}

#[test_case(json!({}) ; "missing")]
#[test_case(json!({"status": "   "}) ; "blank")]
#[test_case(json!({"status": 4}) ; "wrong type")]
#[tokio::test]
async fn status_update_requires_status(body: Value) {
    let app = api();
    send_json(&app, "POST", "/api/orders", &valid_order()).await;

    let (status, json) = send_json(&app, "PATCH", "/api/orders/1/status", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Status is required");

    let (_, order) = get(&app, "/api/orders/1").await;
    assert_eq!(order["status"], "pending");
}

// =============================================================================
// Contact
// =============================================================================

#[tokio::test]
async fn contact_message_is_stored_and_listed() {
    let app = api();

    let (status, created) = send_json(&app, "POST", "/api/contact", &valid_contact()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["subject"], "Catering");
    assert!(created["createdAt"].is_string());

    let (status, listed) = get(&app, "/api/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[test_case("name", json!("") ; "blank name")]
#[test_case("email", json!("dev at example") ; "malformed email")]
#[test_case("message", json!("  ") ; "blank message")]
#[tokio::test]
async fn invalid_contact_message_is_rejected(field: &str, value: Value) {
    let app = api();
    let mut contact = valid_contact();
    contact[field] = value;

    let (status, json) = send_json(&app, "POST", "/api/contact", &contact).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid contact message data");

    let (_, listed) = get(&app, "/api/contact").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn order_and_contact_ids_are_independent() {
    let app = api();
    send_json(&app, "POST", "/api/orders", &valid_order()).await;
    send_json(&app, "POST", "/api/orders", &valid_order()).await;

    let (_, created) = send_json(&app, "POST", "/api/contact", &valid_contact()).await;

    assert_eq!(created["id"], 1);
}

// =============================================================================
// Health, CORS, static assets
// =============================================================================

#[tokio::test]
async fn health_reports_healthy() {
    let app = api();
    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = api();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/menu")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn cors_preflight_allows_patch() {
    let app = api();
    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/orders/1/status")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap();
    assert!(methods.contains("PATCH"));
}

async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn static_assets_are_served_with_index_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('menu');").unwrap();

    let config = ServerConfig {
        static_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    };
    let app = create_app(AppState::new(Arc::new(InMemoryStore::new())), &config);

    let (status, body) = get_text(&app, "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('menu');");

    let (status, body) = get_text(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<html>app</html>");

    let (status, body) = get_text(&app, "/orders/track").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<html>app</html>");

    let (status, json) = get(&app, "/api/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 15);
}
