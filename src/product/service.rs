//! ProductService - plain CRUD over the catalog.

use tracing::info;
use uuid::Uuid;

use crate::store::StoreError;

use super::record::{ProductRecord, ProductRequest};
use super::repository::ProductRepository;

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ProductError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { key, .. } => ProductError::NotFound(key),
            other => ProductError::Store(other),
        }
    }
}

pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new product under a freshly generated id.
    pub fn create(&self, request: ProductRequest) -> Result<ProductRecord, ProductError> {
        let product = ProductRecord::from_request(Uuid::new_v4().to_string(), request);
        self.repo.insert_product(&product)?;
        info!(product_id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    pub fn get(&self, id: &str) -> Result<ProductRecord, ProductError> {
        self.repo
            .find_product(id)?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    pub fn list(&self) -> Result<Vec<ProductRecord>, ProductError> {
        Ok(self.repo.find_all_products()?)
    }

    /// Replace every field but the id.
    pub fn update(&self, id: &str, request: ProductRequest) -> Result<ProductRecord, ProductError> {
        let product = ProductRecord::from_request(id.to_string(), request);
        self.repo.update_product(&product)?;
        info!(product_id = %product.id, "product updated");
        Ok(product)
    }

    pub fn delete(&self, id: &str) -> Result<(), ProductError> {
        if !self.repo.delete_product(id)? {
            return Err(ProductError::NotFound(id.to_string()));
        }
        info!(product_id = %id, "product deleted");
        Ok(())
    }

    /// Get a reference to the repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}
