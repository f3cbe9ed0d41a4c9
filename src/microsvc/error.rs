//! Error type for HTTP handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::order::OrderError;
use crate::product::ProductError;
use crate::store::StoreError;

/// Error returned by every HTTP handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body or query string could not be decoded.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Body sent without a JSON content type.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
    /// Request decoded but failed validation.
    #[error("{0}")]
    Validation(String),
    /// Record not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Business rule rejected the request (e.g. out of stock).
    #[error("{0}")]
    Rejected(String),
    /// A collaborating service could not answer.
    #[error("{0}")]
    Unavailable(String),
    /// Storage failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// A missing `Content-Type: application/json` keeps axum's 415. Every other
/// body rejection, including well-formed JSON of the wrong shape, is a 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::UnsupportedMediaType(rejection.body_text())
            }
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(_) => ApiError::Validation(err.to_string()),
            OrderError::OutOfStock { .. } => ApiError::Rejected(err.to_string()),
            OrderError::DependencyUnavailable(_) => ApiError::Unavailable(err.to_string()),
            OrderError::NotFound(number) => ApiError::NotFound(number),
            OrderError::Store(e) => ApiError::Store(e),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => ApiError::NotFound(id),
            ProductError::Store(e) => ApiError::Store(e),
        }
    }
}
