//! Order service - places orders after a synchronous stock check.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use commerce_rust::order::{self, HttpStockClient, OrderService};
//! use commerce_rust::store::InMemoryStore;
//!
//! let stock = HttpStockClient::new("http://localhost:8081", Duration::from_secs(30))?;
//! let service = Arc::new(OrderService::new(InMemoryStore::new(), stock));
//! let app = order::router(service);
//! ```

mod client;
mod error;
mod http;
mod record;
mod repository;
mod service;

pub use client::{parse_availability, HttpStockClient, LocalStockClient, StockClient};
pub use error::{OrderError, StockClientError};
pub use http::{router, ORDER_PLACED};
pub use record::{OrderNumber, OrderRecord, OrderRequest, PlacementStatus};
pub use repository::OrderRepository;
pub use service::OrderService;
