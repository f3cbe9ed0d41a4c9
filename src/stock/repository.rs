use crate::store::{RecordStore, RecordsExt, StoreError};

use super::record::StockRecord;

/// Stock persistence with the queries the stock service needs.
pub trait StockRepository: Send + Sync {
    /// The stock record for a SKU, if one was ever seeded.
    fn find_by_sku_code(&self, sku_code: &str) -> Result<Option<StockRecord>, StoreError>;

    /// True iff a record exists for `sku_code` with at least `quantity` on hand.
    fn exists_by_sku_code_and_quantity_at_least(
        &self,
        sku_code: &str,
        quantity: i32,
    ) -> Result<bool, StoreError>;

    /// Set the quantity on hand for a SKU, creating the record if needed.
    /// An existing record keeps its identifier.
    fn save_stock(&self, sku_code: &str, quantity: u32) -> Result<StockRecord, StoreError>;
}

impl<S: RecordStore> StockRepository for S {
    fn find_by_sku_code(&self, sku_code: &str) -> Result<Option<StockRecord>, StoreError> {
        self.records::<StockRecord>().get(sku_code)
    }

    fn exists_by_sku_code_and_quantity_at_least(
        &self,
        sku_code: &str,
        quantity: i32,
    ) -> Result<bool, StoreError> {
        Ok(self
            .find_by_sku_code(sku_code)?
            .map(|record| record.covers(quantity))
            .unwrap_or(false))
    }

    fn save_stock(&self, sku_code: &str, quantity: u32) -> Result<StockRecord, StoreError> {
        let records = self.records::<StockRecord>();
        let id = match records.get(sku_code)? {
            Some(existing) => existing.id,
            None => records.next_id()?,
        };

        let record = StockRecord {
            id,
            sku_code: sku_code.to_string(),
            quantity,
        };
        records.upsert(&record)?;
        Ok(record)
    }
}
