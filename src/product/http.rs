//! Product routes.
//!
//! - `POST /api/product` - create; 201 with the stored product.
//! - `GET /api/product` - list.
//! - `GET /api/product/:id`, `PUT /api/product/:id`, `DELETE /api/product/:id`.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::microsvc::ApiError;

use super::record::{ProductRecord, ProductRequest};
use super::repository::ProductRepository;
use super::service::ProductService;

type Service<R> = State<Arc<ProductService<R>>>;

/// Build the product service router.
pub fn router<R: ProductRepository + 'static>(service: Arc<ProductService<R>>) -> Router {
    Router::new()
        .route(
            "/api/product",
            get(list_products::<R>).post(create_product::<R>),
        )
        .route(
            "/api/product/:id",
            get(get_product::<R>)
                .put(update_product::<R>)
                .delete(delete_product::<R>),
        )
        .with_state(service)
}

async fn create_product<R: ProductRepository + 'static>(
    State(service): Service<R>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductRecord>), ApiError> {
    let Json(request) = payload?;
    let product = service.create(request)?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn list_products<R: ProductRepository + 'static>(
    State(service): Service<R>,
) -> Result<Json<Vec<ProductRecord>>, ApiError> {
    Ok(Json(service.list()?))
}

async fn get_product<R: ProductRepository + 'static>(
    State(service): Service<R>,
    Path(id): Path<String>,
) -> Result<Json<ProductRecord>, ApiError> {
    Ok(Json(service.get(&id)?))
}

async fn update_product<R: ProductRepository + 'static>(
    State(service): Service<R>,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductRecord>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(service.update(&id, request)?))
}

async fn delete_product<R: ProductRepository + 'static>(
    State(service): Service<R>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
