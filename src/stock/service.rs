//! StockService - answers "is at least Q of SKU S on hand?".

use tracing::info;

use crate::store::StoreError;

use super::repository::StockRepository;

/// Read-only stock queries over a `StockRepository`.
pub struct StockService<R> {
    repo: R,
}

impl<R: StockRepository> StockService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// True iff a record exists for `sku_code` with quantity on hand of at
    /// least `quantity`.
    ///
    /// Unknown SKUs (including the empty string) are simply not in stock.
    /// Quantities are not validated: a request for zero or fewer units is
    /// satisfied by any existing record.
    pub fn is_in_stock(&self, sku_code: &str, quantity: i32) -> Result<bool, StoreError> {
        info!(sku_code, quantity, "stock check requested");
        let in_stock = self
            .repo
            .exists_by_sku_code_and_quantity_at_least(sku_code, quantity)?;
        info!(sku_code, quantity, in_stock, "stock check finished");
        Ok(in_stock)
    }

    /// Get a reference to the repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}
