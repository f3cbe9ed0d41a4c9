//! Stock service: answers `GET /api/stock?skuCode=..&quantity=..`.

use std::sync::Arc;

use tracing::{debug, info};

use commerce_rust::config::{Config, STOCK_BIND_ADDR};
use commerce_rust::store::InMemoryStore;
use commerce_rust::{microsvc, stock, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    telemetry::init("commerce_rust=info,stock_service=info,tower_http=info");
    if let Err(e) = dotenv {
        debug!("no .env file loaded: {}", e);
    }

    let config = Config::from_env(STOCK_BIND_ADDR)?;
    info!(bind_addr = %config.bind_addr, "starting stock service");

    let store = InMemoryStore::new();
    if let Some(path) = &config.stock_seed_file {
        stock::seed_from_file(&store, path)?;
    }

    let service = Arc::new(stock::StockService::new(store));
    let app = microsvc::app("stock-service", stock::router(service));
    microsvc::serve(app, config.bind_addr).await?;
    Ok(())
}
