use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Quantity on hand for one SKU.
///
/// Keyed by SKU code. The quantity is unsigned, so stock can never go negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub id: u64,
    pub sku_code: String,
    pub quantity: u32,
}

impl StockRecord {
    /// Whether at least `requested` units are on hand.
    ///
    /// A non-positive request is always covered.
    pub fn covers(&self, requested: i32) -> bool {
        i64::from(self.quantity) >= i64::from(requested)
    }
}

impl Record for StockRecord {
    const COLLECTION: &'static str = "stock";

    fn key(&self) -> &str {
        &self.sku_code
    }
}

/// One entry of a stock seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSeed {
    pub sku_code: String,
    pub quantity: u32,
}
