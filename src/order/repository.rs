use crate::store::{RecordStore, RecordsExt, StoreError};

use super::record::OrderRecord;

/// Order persistence. Orders are written once and never updated.
pub trait OrderRepository: Send + Sync {
    /// Persist a new order, assigning its numeric id. Fails with
    /// `StoreError::Conflict` if the order number is already taken.
    fn save_order(&self, order: OrderRecord) -> Result<OrderRecord, StoreError>;

    fn find_by_order_number(&self, order_number: &str) -> Result<Option<OrderRecord>, StoreError>;

    fn find_orders_by_sku_code(&self, sku_code: &str) -> Result<Vec<OrderRecord>, StoreError>;

    fn count_orders(&self) -> Result<usize, StoreError>;
}

impl<S: RecordStore> OrderRepository for S {
    fn save_order(&self, mut order: OrderRecord) -> Result<OrderRecord, StoreError> {
        let orders = self.records::<OrderRecord>();
        order.id = orders.next_id()?;
        orders.insert(&order)?;
        Ok(order)
    }

    fn find_by_order_number(&self, order_number: &str) -> Result<Option<OrderRecord>, StoreError> {
        self.records::<OrderRecord>().get(order_number)
    }

    fn find_orders_by_sku_code(&self, sku_code: &str) -> Result<Vec<OrderRecord>, StoreError> {
        self.records::<OrderRecord>()
            .find(&|order| order.sku_code == sku_code)
    }

    fn count_orders(&self) -> Result<usize, StoreError> {
        Ok(self.records::<OrderRecord>().all()?.len())
    }
}
