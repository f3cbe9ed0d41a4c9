//! OrderService - order placement gated by a stock check.
//!
//! 1. validate the request;
//! 2. ask the stock client whether `quantity` of `skuCode` is available;
//! 3. `true`: persist a new order under a fresh order number;
//!    `false`: `OutOfStock`; no answer: `DependencyUnavailable`.
//!
//! The check and the write are independent operations. Stock is never
//! decremented, so concurrent placements for the same SKU can all pass the
//! check even when their combined quantity exceeds what is on hand.

use tracing::{debug, info, warn};

use super::client::StockClient;
use super::error::OrderError;
use super::record::{OrderNumber, OrderRecord, OrderRequest, PlacementStatus};
use super::repository::OrderRepository;

pub struct OrderService<R, C> {
    repo: R,
    stock: C,
}

impl<R: OrderRepository, C: StockClient> OrderService<R, C> {
    pub fn new(repo: R, stock: C) -> Self {
        Self { repo, stock }
    }

    /// Place an order. No record is written unless this returns `Ok`.
    pub async fn place_order(&self, request: OrderRequest) -> Result<OrderNumber, OrderError> {
        if let Err(e) = request.validate() {
            info!(
                sku_code = %request.sku_code,
                quantity = request.quantity,
                status = %PlacementStatus::Rejected,
                error = %e,
                "order request invalid"
            );
            return Err(e);
        }
        let quantity = u32::try_from(request.quantity)
            .map_err(|_| OrderError::Validation("quantity out of range".into()))?;
        debug!(
            sku_code = %request.sku_code,
            quantity,
            status = %PlacementStatus::Pending,
            "checking stock for order"
        );

        let in_stock = match self
            .stock
            .is_in_stock(&request.sku_code, request.quantity)
            .await
        {
            Ok(in_stock) => in_stock,
            Err(e) => {
                warn!(
                    sku_code = %request.sku_code,
                    quantity,
                    status = %PlacementStatus::Failed,
                    error = %e,
                    "stock check failed"
                );
                return Err(OrderError::DependencyUnavailable(e));
            }
        };

        if !in_stock {
            info!(
                sku_code = %request.sku_code,
                quantity,
                status = %PlacementStatus::Rejected,
                "order rejected"
            );
            return Err(OrderError::OutOfStock {
                sku_code: request.sku_code,
            });
        }

        let order = self.repo.save_order(OrderRecord {
            id: 0,
            order_number: OrderNumber::generate(),
            sku_code: request.sku_code,
            price: request.price,
            quantity,
        })?;

        info!(
            order_number = %order.order_number,
            sku_code = %order.sku_code,
            quantity,
            status = %PlacementStatus::Placed,
            "order placed"
        );
        Ok(order.order_number)
    }

    /// Look up a placed order.
    pub fn get_order(&self, order_number: &str) -> Result<OrderRecord, OrderError> {
        self.repo
            .find_by_order_number(order_number)?
            .ok_or_else(|| OrderError::NotFound(order_number.to_string()))
    }

    /// Get a reference to the repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}
