//! microsvc - shared HTTP plumbing for the three services.
//!
//! Each service builds its own axum `Router` for its `/api/...` routes.
//! `app` wraps it with a health check and request tracing, and `serve`
//! binds it to an address.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use commerce_rust::{microsvc, stock, store::InMemoryStore};
//!
//! let service = Arc::new(stock::StockService::new(InMemoryStore::new()));
//! let app = microsvc::app("stock-service", stock::router(service));
//! microsvc::serve(app, "0.0.0.0:8081".parse()?).await?;
//! ```
//!
//! ## Errors
//!
//! Handlers return `Result<_, ApiError>`. Every domain error converts into
//! an `ApiError`, which renders as `{ "error": "<message>" }` with the
//! status from `ApiError::status_code`.

mod error;
mod http;

pub use error::ApiError;
pub use http::{app, serve};
