use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence.
///
/// This trait defines the narrow data access interface for products; the
/// service layer never sees the ORM. Implementations can use different
/// storage backends (PostgreSQL in production, a mock in tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product. Availability defaults to true.
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// All products, ordered by id.
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Look up a product by id.
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Fully replace name/price/availability. `Ok(None)` when the id has no row.
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Set the availability flag only. `Ok(None)` when the id has no row.
    async fn set_availability(&self, id: i32, availability: bool)
        -> ProductResult<Option<Product>>;

    /// Delete by id, returning whether a row was removed.
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}
