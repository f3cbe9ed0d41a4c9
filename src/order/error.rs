//! Error types for order placement.

use std::time::Duration;

use crate::store::StoreError;

/// Why a stock check produced no answer.
#[derive(Debug, thiserror::Error)]
pub enum StockClientError {
    /// No response within the configured timeout.
    #[error("stock check timed out after {0:?}")]
    Timeout(Duration),
    /// Connection refused, reset, DNS failure and the like.
    #[error("stock service request failed: {0}")]
    Transport(String),
    /// The stock service answered with a non-success status.
    #[error("stock service returned status {0}")]
    Status(u16),
    /// The body was not a boolean.
    #[error("stock service returned a non-boolean body: {0:?}")]
    MalformedResponse(String),
    /// An in-process stock lookup failed.
    #[error("stock lookup failed: {0}")]
    Lookup(#[from] StoreError),
}

/// Error type for order operations.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// Malformed request, rejected before the stock check.
    #[error("invalid order request: {0}")]
    Validation(String),
    /// The stock service confirmed the SKU is not available.
    #[error("product with sku code {sku_code} is out of stock")]
    OutOfStock { sku_code: String },
    /// The stock service could not be asked; availability is unknown.
    #[error("stock availability unknown: {0}")]
    DependencyUnavailable(#[from] StockClientError),
    /// No order with this number.
    #[error("order not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
