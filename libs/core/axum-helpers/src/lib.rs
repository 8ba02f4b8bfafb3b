//! # Axum Helpers
//!
//! Shared utilities and middleware for the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: structured error responses (`AppError` and the JSON
//!   envelopes it renders to)
//! - **[`extractors`]**: custom extractors (integer path id, validated JSON)
//! - **[`http`]**: HTTP middleware (CORS)
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export error types
pub use errors::{field_errors, AppError, ErrorResponse, FieldError, ValidationErrorResponse};

// Re-export extractors
pub use extractors::{IntPath, ValidatedJson};

// Re-export HTTP middleware
pub use http::create_cors_layer;

// Re-export server helpers
pub use server::{create_app, create_router, health_router, shutdown_signal, HealthResponse};
