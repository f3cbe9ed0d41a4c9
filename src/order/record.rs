use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Record;

use super::error::OrderError;

/// Generated order number: a random v4 UUID rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// A fresh, random order number.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inbound order placement request.
///
/// `skuCode` defaults to empty so a missing SKU is reported as a validation
/// failure rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub sku_code: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl OrderRequest {
    pub fn new(sku_code: impl Into<String>, quantity: i32, price: Decimal) -> Self {
        Self {
            sku_code: sku_code.into(),
            quantity,
            price,
        }
    }

    /// Check the request before any call leaves the process.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.sku_code.trim().is_empty() {
            return Err(OrderError::Validation("skuCode is required".into()));
        }
        if self.quantity <= 0 {
            return Err(OrderError::Validation(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }
        if self.price < Decimal::ZERO {
            return Err(OrderError::Validation(format!(
                "price must not be negative, got {}",
                self.price
            )));
        }
        Ok(())
    }
}

/// A persisted order. Written once per successful placement, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: u64,
    pub order_number: OrderNumber,
    pub sku_code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

impl Record for OrderRecord {
    const COLLECTION: &'static str = "orders";

    fn key(&self) -> &str {
        self.order_number.as_str()
    }
}

/// Terminal state of one placement attempt. Every attempt starts `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStatus {
    Pending,
    /// Stock confirmed and the order persisted.
    Placed,
    /// Request invalid or stock confirmed unavailable.
    Rejected,
    /// Availability unknown: the stock service could not answer.
    Failed,
}

impl PlacementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementStatus::Pending => "pending",
            PlacementStatus::Placed => "placed",
            PlacementStatus::Rejected => "rejected",
            PlacementStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PlacementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
