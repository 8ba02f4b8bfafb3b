use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - the sole managed resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the database
    #[schema(example = 1)]
    pub id: i32,
    /// Product name, never empty
    #[schema(example = "49 inch curved monitor")]
    pub name: String,
    /// Product price, strictly greater than zero
    #[schema(example = 300.0)]
    pub price: f64,
    /// Whether the product is currently available
    #[schema(example = true)]
    pub availability: bool,
}

/// DTO for creating a new product.
///
/// Availability is not accepted here; new products always start available.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    #[schema(example = "Curved Monitor 40")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    #[schema(example = 300.0)]
    pub price: f64,
}

/// DTO for fully replacing a product. All fields are required.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    #[schema(example = "Curved Monitor 40")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    #[schema(example = 399.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

/// `{data: Product}` response envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

/// `{data: Product[]}` response envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

/// `{data: string}` confirmation envelope for deletes.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "Product deleted")]
    pub data: String,
}
