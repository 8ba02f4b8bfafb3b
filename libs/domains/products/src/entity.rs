use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub availability: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            availability: model.availability,
        }
    }
}

impl From<crate::models::CreateProduct> for ActiveModel {
    fn from(input: crate::models::CreateProduct) -> Self {
        ActiveModel {
            // Assigned by the database
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            // New products always start available
            availability: Set(true),
        }
    }
}
