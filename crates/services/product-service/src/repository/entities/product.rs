//! Product database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use domain::Product;

/// `seq` is the row's insertion sequence; it orders products whose
/// `created_at` values are equal. The public identifier is `id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i32,
    #[sea_orm(unique)]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product {
            id: model.id,
            name: model.name,
            price: model.price,
            created_at: model.created_at,
        }
    }
}

/// New row; the backend assigns `seq`
impl From<&Product> for ActiveModel {
    fn from(product: &Product) -> Self {
        ActiveModel {
            seq: NotSet,
            id: Set(product.id),
            name: Set(product.name.clone()),
            price: Set(product.price),
            created_at: Set(product.created_at),
        }
    }
}
