//! Stock routes.
//!
//! - `GET /api/stock?skuCode=..&quantity=..` - JSON boolean.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::microsvc::ApiError;

use super::repository::StockRepository;
use super::service::StockService;

/// Query string of a stock check. Parameter names are part of the
/// inter-service protocol.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuery {
    pub sku_code: String,
    pub quantity: i32,
}

/// Build the stock service router.
pub fn router<R: StockRepository + 'static>(service: Arc<StockService<R>>) -> Router {
    Router::new()
        .route("/api/stock", get(is_in_stock::<R>))
        .with_state(service)
}

async fn is_in_stock<R: StockRepository + 'static>(
    State(service): State<Arc<StockService<R>>>,
    query: Result<Query<StockQuery>, QueryRejection>,
) -> Result<Json<bool>, ApiError> {
    let Query(query) = query?;
    let in_stock = service.is_in_stock(&query.sku_code, query.quantity)?;
    Ok(Json(in_stock))
}
