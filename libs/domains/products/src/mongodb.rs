//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{DocumentId, Product, ProductInput};
use crate::repository::ProductRepository;

/// Collection holding product documents
pub const COLLECTION_NAME: &str = "products";

/// Stored shape of a product: `{_id: ObjectId, name, price}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub price: f64,
}

impl From<ProductDocument> for Product<DocumentId> {
    fn from(document: ProductDocument) -> Self {
        Self {
            id: DocumentId(document.id),
            name: document.name,
            price: document.price,
        }
    }
}

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductDocument>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    type Id = DocumentId;

    #[instrument(skip(self), fields(product_id = %id))]
    async fn get_product(&self, id: DocumentId) -> ProductResult<Product<DocumentId>> {
        self.collection
            .find_one(doc! { "_id": id.object_id() })
            .await?
            .map(Into::into)
            .ok_or(ProductError::NotFound)
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create_product(&self, input: ProductInput) -> ProductResult<Product<DocumentId>> {
        let document = ProductDocument {
            id: ObjectId::new(),
            name: input.name,
            price: input.price,
        };

        self.collection.insert_one(&document).await?;

        tracing::info!(product_id = %document.id, "Created product");
        Ok(document.into())
    }

    #[instrument(skip(self, input), fields(product_id = %id))]
    async fn update_product(&self, id: DocumentId, input: ProductInput) -> ProductResult<u64> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id.object_id() },
                doc! { "$set": { "name": input.name, "price": input.price } },
            )
            .await?;

        tracing::info!(matched = result.matched_count, "Updated product");
        Ok(result.matched_count)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete_product(&self, id: DocumentId) -> ProductResult<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.object_id() })
            .await?;

        tracing::info!(deleted = result.deleted_count, "Deleted product");
        Ok(result.deleted_count)
    }

    /// Returns the whole collection; `limit` and `offset` are not applied.
    #[instrument(skip(self))]
    async fn get_products(
        &self,
        _limit: u64,
        _offset: u64,
    ) -> ProductResult<Vec<Product<DocumentId>>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Into::into).collect())
    }
}
