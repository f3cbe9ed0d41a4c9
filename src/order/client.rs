//! StockClient - the order service's view of the stock service.
//!
//! The call is request/response: the caller waits for a boolean, a failure,
//! or the timeout. Nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::Config;
use crate::stock::{StockRepository, StockService};

use super::error::StockClientError;

/// Answers whether `quantity` units of `sku_code` are available.
#[async_trait]
pub trait StockClient: Send + Sync {
    async fn is_in_stock(&self, sku_code: &str, quantity: i32) -> Result<bool, StockClientError>;
}

/// Calls `GET {base_url}/api/stock?skuCode=..&quantity=..` on a remote stock
/// service.
#[derive(Debug, Clone)]
pub struct HttpStockClient {
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl HttpStockClient {
    /// Create a client for the stock service at `base_url`. Every call is
    /// bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, StockClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StockClientError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            http,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, StockClientError> {
        Self::new(&config.stock_service_url, config.stock_client_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_error(&self, err: reqwest::Error) -> StockClientError {
        if err.is_timeout() {
            StockClientError::Timeout(self.timeout)
        } else {
            StockClientError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl StockClient for HttpStockClient {
    async fn is_in_stock(&self, sku_code: &str, quantity: i32) -> Result<bool, StockClientError> {
        let url = format!("{}/api/stock", self.base_url);
        debug!(%url, sku_code, quantity, "calling stock service");

        let response = self
            .http
            .get(&url)
            .query(&[("skuCode", sku_code)])
            .query(&[("quantity", quantity)])
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StockClientError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| self.request_error(e))?;
        parse_availability(&body)
    }
}

/// Accept `true`/`false` as a JSON boolean or plain text.
pub fn parse_availability(body: &str) -> Result<bool, StockClientError> {
    match body.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(StockClientError::MalformedResponse(other.to_string())),
    }
}

/// Asks a `StockService` in the same process.
pub struct LocalStockClient<R> {
    service: Arc<StockService<R>>,
}

impl<R> LocalStockClient<R> {
    pub fn new(service: Arc<StockService<R>>) -> Self {
        Self { service }
    }
}

impl<R> Clone for LocalStockClient<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

#[async_trait]
impl<R: StockRepository + 'static> StockClient for LocalStockClient<R> {
    async fn is_in_stock(&self, sku_code: &str, quantity: i32) -> Result<bool, StockClientError> {
        Ok(self.service.is_in_stock(sku_code, quantity)?)
    }
}
