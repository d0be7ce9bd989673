//! Product Service - catalog lookups

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Share an existing repository, e.g. with the cart service
    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn categories(&self) -> ProductResult<Vec<String>> {
        self.repository.categories().await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
