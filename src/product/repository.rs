use crate::store::{RecordStore, RecordsExt, StoreError};

use super::record::ProductRecord;

/// Product persistence.
pub trait ProductRepository: Send + Sync {
    fn insert_product(&self, product: &ProductRecord) -> Result<(), StoreError>;

    fn find_product(&self, id: &str) -> Result<Option<ProductRecord>, StoreError>;

    fn find_all_products(&self) -> Result<Vec<ProductRecord>, StoreError>;

    /// Overwrite an existing product. `StoreError::NotFound` if it is missing.
    fn update_product(&self, product: &ProductRecord) -> Result<(), StoreError>;

    /// Returns true if the product existed.
    fn delete_product(&self, id: &str) -> Result<bool, StoreError>;
}

impl<S: RecordStore> ProductRepository for S {
    fn insert_product(&self, product: &ProductRecord) -> Result<(), StoreError> {
        self.records::<ProductRecord>().insert(product)
    }

    fn find_product(&self, id: &str) -> Result<Option<ProductRecord>, StoreError> {
        self.records::<ProductRecord>().get(id)
    }

    fn find_all_products(&self) -> Result<Vec<ProductRecord>, StoreError> {
        self.records::<ProductRecord>().all()
    }

    fn update_product(&self, product: &ProductRecord) -> Result<(), StoreError> {
        self.records::<ProductRecord>().replace(product)
    }

    fn delete_product(&self, id: &str) -> Result<bool, StoreError> {
        self.records::<ProductRecord>().delete(id)
    }
}
