//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::config::{CatalogConfig, MissingWritePolicy};
use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// Page size used by the product listing
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// Offset used by the product listing
pub const DEFAULT_PAGE_OFFSET: u64 = 0;

/// Product service wrapping a repository
///
/// Adds the fixed listing page and the missing-write policy on top of the
/// raw store operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    missing_writes: MissingWritePolicy,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, CatalogConfig::default())
    }

    pub fn with_config(repository: R, config: CatalogConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            missing_writes: config.missing_writes,
        }
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: R::Id) -> ProductResult<Product<R::Id>> {
        self.repository.get_product(id).await
    }

    /// First page of products ordered by id (relational store)
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product<R::Id>>> {
        self.repository
            .get_products(DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET)
            .await
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product<R::Id>> {
        self.repository.create_product(input).await
    }

    /// Replace name and price, returning the record built from the input.
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: R::Id,
        input: ProductInput,
    ) -> ProductResult<Product<R::Id>> {
        let rows = self
            .repository
            .update_product(id.clone(), input.clone())
            .await?;
        self.check_affected(rows)?;

        Ok(input.into_product(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: R::Id) -> ProductResult<()> {
        let rows = self.repository.delete_product(id).await?;
        self.check_affected(rows)
    }

    fn check_affected(&self, rows: u64) -> ProductResult<()> {
        match (rows, self.missing_writes) {
            (0, MissingWritePolicy::NotFound) => Err(ProductError::NotFound),
            _ => Ok(()),
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            missing_writes: self.missing_writes,
        }
    }
}
