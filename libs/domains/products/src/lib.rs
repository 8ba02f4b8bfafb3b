//! Products Domain
//!
//! Complete domain implementation for managing products over PostgreSQL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, PgProductRepository, ProductService};
//!
//! # async fn example(db: sea_orm::DatabaseConnection) {
//! let repository = PgProductRepository::new(db);
//! let service = ProductService::new(repository);
//! let router = handlers::router(service);
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product, UpdateProduct};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
