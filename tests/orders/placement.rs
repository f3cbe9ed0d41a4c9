//! Order placement against an in-process stock service.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use commerce_rust::order::{
    LocalStockClient, OrderError, OrderRecord, OrderRepository, OrderRequest, OrderService,
    StockClient, StockClientError,
};
use commerce_rust::store::InMemoryStore;
use rust_decimal::Decimal;
use tokio::sync::Barrier;

use crate::support::stock_service;

type Orders = OrderService<InMemoryStore, LocalStockClient<InMemoryStore>>;

fn orders(seed: &[(&str, u32)]) -> Arc<Orders> {
    let stock = LocalStockClient::new(stock_service(seed));
    Arc::new(OrderService::new(InMemoryStore::new(), stock))
}

fn request(sku_code: &str, quantity: i32) -> OrderRequest {
    OrderRequest::new(sku_code, quantity, Decimal::from(1000))
}

#[tokio::test]
async fn available_sku_places_one_order() {
    let service = orders(&[("iphone_15", 5)]);

    let number = service.place_order(request("iphone_15", 5)).await.unwrap();

    let stored = service.repo().find_orders_by_sku_code("iphone_15").unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].order_number, number);
    assert_eq!(stored[0].quantity, 5);
}

#[tokio::test]
async fn order_numbers_never_repeat() {
    let service = orders(&[("iphone_15", 5)]);

    let mut numbers = Vec::new();
    for _ in 0..10 {
        numbers.push(service.place_order(request("iphone_15", 1)).await.unwrap());
    }
    numbers.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    numbers.dedup();

    assert_eq!(numbers.len(), 10);
    assert_eq!(service.repo().count_orders().unwrap(), 10);
}

#[tokio::test]
async fn unavailable_sku_places_nothing() {
    let service = orders(&[("iphone_15", 5)]);

    for (sku_code, quantity) in [("iphone_15", 6), ("pixel_8", 1)] {
        let err = service
            .place_order(request(sku_code, quantity))
            .await
            .unwrap_err();
        match err {
            OrderError::OutOfStock { sku_code: reported } => assert_eq!(reported, sku_code),
            other => panic!("expected OutOfStock, got {other:?}"),
        }
    }
    assert_eq!(service.repo().count_orders().unwrap(), 0);
}

/// Answers from the real stock service, then holds every placement until
/// all of them have been answered. Records how many orders were stored when
/// each check ran.
struct GatedStock {
    stock: LocalStockClient<InMemoryStore>,
    gate: Arc<Barrier>,
    orders: InMemoryStore,
    seen: Arc<Mutex<Vec<usize>>>,
}

#[async_trait]
impl StockClient for GatedStock {
    async fn is_in_stock(&self, sku_code: &str, quantity: i32) -> Result<bool, StockClientError> {
        let answer = self.stock.is_in_stock(sku_code, quantity).await?;
        let stored = self.orders.count_orders()?;
        self.seen.lock().unwrap().push(stored);
        self.gate.wait().await;
        Ok(answer)
    }
}

/// Orders over a shared store whose stock checks all pass through one gate
/// sized for `placements` callers.
fn gated_orders(
    seed: &[(&str, u32)],
    placements: usize,
) -> (Arc<OrderService<InMemoryStore, GatedStock>>, Arc<Mutex<Vec<usize>>>) {
    let orders = InMemoryStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let stock = GatedStock {
        stock: LocalStockClient::new(stock_service(seed)),
        gate: Arc::new(Barrier::new(placements)),
        orders: orders.clone(),
        seen: seen.clone(),
    };
    (Arc::new(OrderService::new(orders, stock)), seen)
}

fn assert_oversold(placed: &[OrderRecord], on_hand: u32) {
    let total: u32 = placed.iter().map(|o| o.quantity).sum();
    assert_eq!(placed.len(), 2);
    assert!(total > on_hand, "{total} units placed against {on_hand}");
}

#[tokio::test]
async fn concurrent_orders_can_oversell() {
    // 5 on hand: enough for one order of 3, not for two.
    let (service, seen) = gated_orders(&[("iphone_15", 5)], 2);

    let (a, b) = tokio::join!(
        service.place_order(request("iphone_15", 3)),
        service.place_order(request("iphone_15", 3)),
    );

    assert!(a.is_ok());
    assert!(b.is_ok());
    // Both checks ran before either order was written.
    assert_eq!(*seen.lock().unwrap(), vec![0, 0]);
    let placed = service.repo().find_orders_by_sku_code("iphone_15").unwrap();
    assert_oversold(&placed, 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_orders_across_tasks() {
    let (service, seen) = gated_orders(&[("iphone_15", 5)], 2);

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.place_order(request("iphone_15", 3)).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
    assert_eq!(*seen.lock().unwrap(), vec![0, 0]);
    let placed = service.repo().find_orders_by_sku_code("iphone_15").unwrap();
    assert_oversold(&placed, 5);
}
