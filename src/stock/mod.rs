//! Stock service - inventory records and the stock check.
//!
//! The stock check is the leaf of the order workflow: the order service calls
//! `GET /api/stock` before persisting an order. Stock levels are seeded from
//! outside (see `seed_from_file`) and never changed by a check.

mod http;
mod record;
mod repository;
mod service;

use std::path::Path;

use tracing::info;

use crate::store::StoreError;

pub use http::{router, StockQuery};
pub use record::{StockRecord, StockSeed};
pub use repository::StockRepository;
pub use service::StockService;

/// Error loading a stock seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read stock seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid stock seed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Parse a seed document: a JSON array of `{ "skuCode": .., "quantity": .. }`.
pub fn parse_seed(json: &str) -> Result<Vec<StockSeed>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Write every seed entry into the repository. Later entries for the same SKU
/// overwrite earlier ones.
pub fn apply_seed<R: StockRepository>(repo: &R, seed: &[StockSeed]) -> Result<usize, SeedError> {
    for entry in seed {
        repo.save_stock(&entry.sku_code, entry.quantity)?;
    }
    Ok(seed.len())
}

/// Load a seed file and apply it. Returns the number of entries applied.
pub fn seed_from_file<R: StockRepository>(repo: &R, path: &Path) -> Result<usize, SeedError> {
    let json = std::fs::read_to_string(path)?;
    let seed = parse_seed(&json)?;
    let applied = apply_seed(repo, &seed)?;
    info!(path = %path.display(), entries = applied, "stock seeded");
    Ok(applied)
}
