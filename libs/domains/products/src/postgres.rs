use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::entity;
use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// PostgreSQL-backed product repository over Sea-ORM.
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::ActiveModel = model.into();
        active.name = Set(input.name);
        active.price = Set(input.price);
        active.availability = Set(input.availability);

        let updated = active.update(&self.db).await?;
        tracing::info!(product_id = id, "Updated product");
        Ok(Some(updated.into()))
    }

    async fn set_availability(
        &self,
        id: i32,
        availability: bool,
    ) -> ProductResult<Option<Product>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::ActiveModel = model.into();
        active.availability = Set(availability);

        let updated = active.update(&self.db).await?;
        tracing::info!(product_id = id, availability, "Updated product availability");
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
