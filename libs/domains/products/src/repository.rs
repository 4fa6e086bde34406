use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, ProductId, ProductInput};

/// Repository trait for Product persistence
///
/// Each method is one round-trip to the store. Implementations exist for
/// PostgreSQL ([`crate::postgres::PgProductRepository`]) and MongoDB
/// ([`crate::mongodb::MongoProductRepository`]).
#[cfg_attr(test, mockall::automock(type Id = i32;))]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Identifier type assigned by this store
    type Id: ProductId;

    /// Get a product by ID; `ProductError::NotFound` when nothing matches
    async fn get_product(&self, id: Self::Id) -> ProductResult<Product<Self::Id>>;

    /// Insert a product and return it with its new ID
    async fn create_product(&self, input: ProductInput) -> ProductResult<Product<Self::Id>>;

    /// Replace name and price; returns the number of records matched
    async fn update_product(&self, id: Self::Id, input: ProductInput) -> ProductResult<u64>;

    /// Delete a product; returns the number of records removed
    async fn delete_product(&self, id: Self::Id) -> ProductResult<u64>;

    /// List one page of products
    async fn get_products(&self, limit: u64, offset: u64) -> ProductResult<Vec<Product<Self::Id>>>;
}
