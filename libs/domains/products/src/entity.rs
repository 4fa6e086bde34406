use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};

/// DDL for the products table; `price` is `NUMERIC(10,2)`
pub const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS products (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    price NUMERIC(10,2) NOT NULL DEFAULT 0.00
)";

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a JSON price to the column's two-decimal representation
pub fn price_to_decimal(price: f64) -> ProductResult<Decimal> {
    Decimal::from_f64(price)
        .map(|d| d.round_dp(2))
        .ok_or(ProductError::InvalidPayload)
}

// Conversion from Sea-ORM Model to domain Product
impl From<Model> for Product<i32> {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price.to_f64().unwrap_or_default(),
        }
    }
}

// Conversion from ProductInput to an insertable ActiveModel; the id comes from the sequence
impl TryFrom<ProductInput> for ActiveModel {
    type Error = ProductError;

    fn try_from(input: ProductInput) -> Result<Self, Self::Error> {
        Ok(ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(price_to_decimal(input.price)?),
        })
    }
}
