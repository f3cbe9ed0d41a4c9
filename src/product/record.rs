use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Body of a product create or update.
///
/// Any `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sku_code: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub sku_code: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl ProductRecord {
    /// The stored form of `request` under `id`. Every other field is kept as sent.
    pub fn from_request(id: String, request: ProductRequest) -> Self {
        Self {
            id,
            name: request.name,
            description: request.description,
            sku_code: request.sku_code,
            price: request.price,
        }
    }
}

impl Record for ProductRecord {
    const COLLECTION: &'static str = "products";

    fn key(&self) -> &str {
        &self.id
    }
}
