//! End-to-end: order service -> HTTP -> stock service.

use std::time::Duration;

use commerce_rust::order::{OrderRepository, ORDER_PLACED};
use serde_json::json;

use crate::support::{refused_base, start_orders, start_stock};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn place_order_in_stock() {
    let stock = start_stock(&[("iphone_15", 100)]).await;
    let (base, service) = start_orders(&stock, TIMEOUT).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/order"))
        .json(&json!({ "skuCode": "iphone_15", "quantity": 1, "price": 1000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let location = resp.headers()["location"].to_str().unwrap().to_string();
    assert!(location.starts_with("/api/order/"));
    assert_eq!(resp.text().await.unwrap(), ORDER_PLACED);
    assert_eq!(service.repo().count_orders().unwrap(), 1);

    let resp = client.get(format!("{base}{location}")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["skuCode"], "iphone_15");
    assert_eq!(body["quantity"], 1);
    assert_eq!(body["price"].as_f64(), Some(1000.0));
    assert_eq!(
        format!("/api/order/{}", body["orderNumber"].as_str().unwrap()),
        location
    );
}

#[tokio::test]
async fn out_of_stock_is_422_naming_the_sku() {
    let stock = start_stock(&[("iphone_15", 1)]).await;
    let (base, service) = start_orders(&stock, TIMEOUT).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/order"))
        .json(&json!({ "skuCode": "iphone_15", "quantity": 2, "price": 1000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("iphone_15"));
    assert_eq!(service.repo().count_orders().unwrap(), 0);
}

#[tokio::test]
async fn stock_service_down_is_503() {
    let (base, service) = start_orders(&refused_base().await, TIMEOUT).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/order"))
        .json(&json!({ "skuCode": "iphone_15", "quantity": 1, "price": 1000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 503);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(!body["error"].as_str().unwrap().contains("out of stock"));
    assert_eq!(service.repo().count_orders().unwrap(), 0);
}

#[tokio::test]
async fn invalid_requests_are_400() {
    let stock = start_stock(&[("iphone_15", 100)]).await;
    let (base, service) = start_orders(&stock, TIMEOUT).await;
    let client = reqwest::Client::new();

    for body in [
        json!({ "skuCode": "iphone_15", "quantity": 0, "price": 1000 }),
        json!({ "quantity": 1, "price": 1000 }),
        json!({ "skuCode": "iphone_15", "quantity": 1, "price": -5 }),
        json!({ "skuCode": "iphone_15", "price": 1000 }),
    ] {
        let resp = client
            .post(format!("{base}/api/order"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "body {body}");
    }

    let resp = client
        .post(format!("{base}/api/order"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(service.repo().count_orders().unwrap(), 0);
}

#[tokio::test]
async fn body_without_json_content_type_is_415() {
    let stock = start_stock(&[("iphone_15", 100)]).await;
    let (base, service) = start_orders(&stock, TIMEOUT).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/order"))
        .header("content-type", "text/plain")
        .body(r#"{"skuCode":"iphone_15","quantity":1,"price":1000}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 415);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Content-Type"));
    assert_eq!(service.repo().count_orders().unwrap(), 0);
}

#[tokio::test]
async fn unknown_order_is_404() {
    let stock = start_stock(&[]).await;
    let (base, _service) = start_orders(&stock, TIMEOUT).await;

    let resp = reqwest::get(format!("{base}/api/order/does-not-exist"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
