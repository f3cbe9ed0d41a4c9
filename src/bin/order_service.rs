//! Order service: places orders after checking stock with the stock service.

use std::sync::Arc;

use tracing::{debug, info};

use commerce_rust::config::{Config, ORDER_BIND_ADDR};
use commerce_rust::order::{self, HttpStockClient, OrderService};
use commerce_rust::store::InMemoryStore;
use commerce_rust::{microsvc, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    telemetry::init("commerce_rust=info,order_service=info,tower_http=info");
    if let Err(e) = dotenv {
        debug!("no .env file loaded: {}", e);
    }

    let config = Config::from_env(ORDER_BIND_ADDR)?;
    info!(
        bind_addr = %config.bind_addr,
        stock_service_url = %config.stock_service_url,
        stock_client_timeout = ?config.stock_client_timeout,
        "starting order service"
    );

    let stock = HttpStockClient::from_config(&config)?;
    let service = Arc::new(OrderService::new(InMemoryStore::new(), stock));
    let app = microsvc::app("order-service", order::router(service));
    microsvc::serve(app, config.bind_addr).await?;
    Ok(())
}
