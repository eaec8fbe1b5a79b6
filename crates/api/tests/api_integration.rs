//! Integration tests for the REST API
//!
//! Drives the axum router directly with `oneshot`:
//! - best-execution requests over file-backed and in-memory snapshots
//! - request validation and error bodies
//! - health endpoint

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use bestex_api::{AppState, create_router};
use bestex_core::{ExchangeBalance, Order, OrderBook};
use bestex_gateway::{ExchangeDataSettings, FileMarketDataSource, InMemoryMarketDataSource};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// Test Fixtures
// ============================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("gateway")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn file_app(settings: ExchangeDataSettings) -> Router {
    create_router(Arc::new(AppState::new(FileMarketDataSource::new(settings))))
}

fn fixture_app() -> Router {
    file_app(
        ExchangeDataSettings::default()
            .with_order_books_path(fixture("order_books_data"))
            .with_balances_path(fixture("crypto_exchanges")),
    )
}

fn memory_app() -> Router {
    let book = OrderBook::new(
        7,
        vec![Order::new(dec!(100), dec!(1)), Order::new(dec!(110), dec!(2))],
        vec![Order::new(dec!(95), dec!(3))],
    );
    let balance = ExchangeBalance::new(7, dec!(1000), dec!(1));
    create_router(Arc::new(AppState::new(InMemoryMarketDataSource::new(
        vec![book],
        vec![balance],
    ))))
}

async fn post_json(app: Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/meta-exchange/best-execution")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().unwrap(),
        other => other.to_string().parse().unwrap(),
    }
}

// ============================================================================
// Best Execution
// ============================================================================

#[tokio::test]
async fn test_best_execution_buy() {
    let _ = env_logger::try_init();
    let (status, json) = post_json(
        fixture_app(),
        json!({"orderType": "Buy", "amount": "22"}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 7);
    assert_eq!(json["isComplete"], true);
    assert_eq!(decimal(&json["totalAmount"]), dec!(22));
    assert_eq!(decimal(&json["requestedAmount"]), dec!(22));

    let orders = json["executionOrders"].as_array().unwrap();
    assert_eq!(orders[0]["exchangeId"], 3);
    assert_eq!(orders[0]["orderType"], "Buy");
    assert_eq!(decimal(&orders[0]["price"]), dec!(2950));
    assert_eq!(decimal(&orders[6]["price"]), dec!(3300));
}

#[tokio::test]
async fn test_best_execution_partial_sell() {
    let (status, json) = post_json(
        fixture_app(),
        json!({"orderType": "sell", "amount": "15"}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 6);
    assert_eq!(json["isComplete"], false);
    assert_eq!(decimal(&json["totalAmount"]), dec!(14));
}

#[tokio::test]
async fn test_best_execution_in_memory_source() {
    // 1 coin on hand caps the buy; 1000 money caps the sell at 10 coins
    let (status, json) = post_json(
        memory_app(),
        json!({"orderType": "Buy", "amount": "2"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["executionOrders"][0]["exchangeId"], 7);
    assert_eq!(decimal(&json["totalAmount"]), dec!(1));

    let (status, json) = post_json(
        memory_app(),
        json!({"orderType": "Sell", "amount": "3"}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["isComplete"], true);
    assert_eq!(decimal(&json["executionOrders"][0]["price"]), dec!(95));
}

#[tokio::test]
async fn test_numeric_amount() {
    // 1000 money buys 2.5 coins at 95 with room to spare
    let (status, json) = post_json(
        memory_app(),
        json!({"orderType": "Sell", "amount": 2.5}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["isComplete"], true);
    assert_eq!(decimal(&json["requestedAmount"]), dec!(2.5));
    assert_eq!(decimal(&json["executionOrders"][0]["amount"]), dec!(2.5));

    let (status, json) = post_json(
        fixture_app(),
        json!({"orderType": "Buy", "amount": 22}).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 7);
    assert_eq!(decimal(&json["totalAmount"]), dec!(22));
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_non_positive_amount() {
    let (status, json) = post_json(
        fixture_app(),
        json!({"orderType": "Buy", "amount": "0"}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert_eq!(json["title"], "Invalid Request");
    assert_eq!(json["detail"], "Amount must be greater than zero.");
}

#[tokio::test]
async fn test_invalid_order_type() {
    let (status, json) = post_json(
        memory_app(),
        json!({"orderType": "Hold", "amount": "1"}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().contains("orderType"));
}

#[tokio::test]
async fn test_invalid_amount() {
    let (status, json) = post_json(
        memory_app(),
        json!({"orderType": "Buy", "amount": "lots"}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().contains("amount"));
}

#[tokio::test]
async fn test_malformed_body() {
    let (status, json) = post_json(memory_app(), "{\"orderType\":".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["title"], "Invalid Request");
}

#[tokio::test]
async fn test_missing_data_files() {
    let app = file_app(
        ExchangeDataSettings::default()
            .with_order_books_path(fixture("missing_books"))
            .with_balances_path(fixture("crypto_exchanges")),
    );
    let (status, json) = post_json(
        app,
        json!({"orderType": "Buy", "amount": "1"}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], 500);
    assert_eq!(json["title"], "Configuration Error");
    assert!(json["detail"].as_str().unwrap().contains("missing_books"));
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let response = memory_app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({"status": "ok"}));
}
