//! Product service: CRUD over the product catalog.

use std::sync::Arc;

use tracing::{debug, info};

use commerce_rust::config::{Config, PRODUCT_BIND_ADDR};
use commerce_rust::product::{self, ProductService};
use commerce_rust::store::InMemoryStore;
use commerce_rust::{microsvc, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    telemetry::init("commerce_rust=info,product_service=info,tower_http=info");
    if let Err(e) = dotenv {
        debug!("no .env file loaded: {}", e);
    }

    let config = Config::from_env(PRODUCT_BIND_ADDR)?;
    info!(bind_addr = %config.bind_addr, "starting product service");

    let service = Arc::new(ProductService::new(InMemoryStore::new()));
    let app = microsvc::app("product-service", product::router(service));
    microsvc::serve(app, config.bind_addr).await?;
    Ok(())
}
