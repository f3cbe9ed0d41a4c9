//! Order routes.
//!
//! - `POST /api/order` - place an order; 201 with a confirmation and a
//!   `Location` header pointing at the new order.
//! - `GET /api/order/:order_number` - the stored order.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::microsvc::ApiError;

use super::client::StockClient;
use super::record::{OrderRecord, OrderRequest};
use super::repository::OrderRepository;
use super::service::OrderService;

/// Confirmation body of a successful placement.
pub const ORDER_PLACED: &str = "Order placed successfully";

/// Build the order service router.
pub fn router<R, C>(service: Arc<OrderService<R, C>>) -> Router
where
    R: OrderRepository + 'static,
    C: StockClient + 'static,
{
    Router::new()
        .route("/api/order", post(place_order::<R, C>))
        .route("/api/order/:order_number", get(get_order::<R, C>))
        .with_state(service)
}

async fn place_order<R, C>(
    State(service): State<Arc<OrderService<R, C>>>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    R: OrderRepository + 'static,
    C: StockClient + 'static,
{
    let Json(request) = payload?;
    let order_number = service.place_order(request).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/order/{order_number}"))],
        ORDER_PLACED,
    ))
}

async fn get_order<R, C>(
    State(service): State<Arc<OrderService<R, C>>>,
    Path(order_number): Path<String>,
) -> Result<Json<OrderRecord>, ApiError>
where
    R: OrderRepository + 'static,
    C: StockClient + 'static,
{
    Ok(Json(service.get_order(&order_number)?))
}
