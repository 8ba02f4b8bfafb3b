//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic.
///
/// Validates input, maps missing rows to [`ProductError::NotFound`], and
/// orchestrates repository operations. Handlers stay thin.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product. Availability always starts true.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// All products, ordered by id.
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by id.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Fully replace a product's name, price and availability.
    #[instrument(skip(self, input), fields(product_id = id))]
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Flip the stored availability flag.
    #[instrument(skip(self), fields(product_id = id))]
    pub async fn update_availability(&self, id: i32) -> ProductResult<Product> {
        let product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        self.repository
            .set_availability(id, !product.availability)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product permanently.
    #[instrument(skip(self), fields(product_id = id))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}
