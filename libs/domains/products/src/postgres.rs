//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::instrument;

use crate::entity::{self, price_to_decimal, CREATE_TABLE_SQL};
use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// PostgreSQL implementation of the ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the products table if it does not exist yet
    pub async fn init_schema(&self) -> ProductResult<()> {
        database::postgres::ensure_schema(&self.db, CREATE_TABLE_SQL).await?;
        tracing::info!("Products table ready");
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    type Id = i32;

    #[instrument(skip(self))]
    async fn get_product(&self, id: i32) -> ProductResult<Product<i32>> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(ProductError::NotFound)
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create_product(&self, input: ProductInput) -> ProductResult<Product<i32>> {
        let active_model: entity::ActiveModel = input.try_into()?;
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    #[instrument(skip(self, input))]
    async fn update_product(&self, id: i32, input: ProductInput) -> ProductResult<u64> {
        let price = price_to_decimal(input.price)?;

        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Name, Expr::value(input.name))
            .col_expr(entity::Column::Price, Expr::value(price))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        tracing::info!(product_id = id, rows_affected = result.rows_affected, "Updated product");
        Ok(result.rows_affected)
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: i32) -> ProductResult<u64> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        tracing::info!(product_id = id, rows_affected = result.rows_affected, "Deleted product");
        Ok(result.rows_affected)
    }

    #[instrument(skip(self))]
    async fn get_products(&self, limit: u64, offset: u64) -> ProductResult<Vec<Product<i32>>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
