pub mod config;
pub mod microsvc;
pub mod order;
pub mod product;
pub mod stock;
pub mod store;
pub mod telemetry;

pub use config::{Config, ConfigError};
pub use microsvc::ApiError;
pub use order::{
    HttpStockClient, LocalStockClient, OrderError, OrderNumber, OrderRecord, OrderRepository,
    OrderRequest, OrderService, StockClient, StockClientError,
};
pub use product::{ProductError, ProductRecord, ProductRepository, ProductRequest, ProductService};
pub use stock::{StockRecord, StockRepository, StockService};
pub use store::{InMemoryStore, Record, RecordStore, RecordsExt, StoreError};
