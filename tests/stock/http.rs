//! HTTP tests for the stock check endpoint.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use commerce_rust::stock::{self, StockRepository, StockService};
use commerce_rust::store::InMemoryStore;
use commerce_rust::microsvc;

fn stock_service() -> Arc<StockService<InMemoryStore>> {
    let store = InMemoryStore::new();
    store.save_stock("ABC", 5).unwrap();
    store.save_stock("empty", 0).unwrap();
    Arc::new(StockService::new(store))
}

/// Bind to port 0 and return the actual address.
async fn start_server(service: Arc<StockService<InMemoryStore>>) -> String {
    let app = microsvc::app("stock-service", stock::router(service));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn check(base: &str, sku_code: &str, quantity: i32) -> bool {
    let resp = reqwest::Client::new()
        .get(format!("{base}/api/stock"))
        .query(&[("skuCode", sku_code)])
        .query(&[("quantity", quantity)])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    resp.json::<bool>().await.unwrap()
}

#[tokio::test]
async fn enough_stock_is_true() {
    let base = start_server(stock_service()).await;
    assert!(check(&base, "ABC", 5).await);
    assert!(check(&base, "ABC", 1).await);
}

#[tokio::test]
async fn too_little_stock_is_false() {
    let base = start_server(stock_service()).await;
    assert!(!check(&base, "ABC", 6).await);
    assert!(!check(&base, "empty", 1).await);
}

#[tokio::test]
async fn unknown_sku_is_false() {
    let base = start_server(stock_service()).await;
    assert!(!check(&base, "XYZ", 1).await);
}

#[tokio::test]
async fn body_is_a_bare_boolean() {
    let base = start_server(stock_service()).await;
    let body = reqwest::get(format!("{base}/api/stock?skuCode=ABC&quantity=2"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "true");
}

#[tokio::test]
async fn repeated_checks_return_the_same_answer() {
    let service = stock_service();
    let base = start_server(service.clone()).await;

    for _ in 0..3 {
        assert!(check(&base, "ABC", 5).await);
        assert!(!check(&base, "ABC", 6).await);
    }
    assert_eq!(
        service.repo().find_by_sku_code("ABC").unwrap().unwrap().quantity,
        5
    );
}

#[tokio::test]
async fn missing_or_bad_parameters_are_400() {
    let base = start_server(stock_service()).await;
    let client = reqwest::Client::new();

    for query in ["skuCode=ABC", "quantity=1", "skuCode=ABC&quantity=many"] {
        let resp = client
            .get(format!("{base}/api/stock?{query}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "query {query}");

        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn health_check() {
    let base = start_server(stock_service()).await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "stock-service");
}
