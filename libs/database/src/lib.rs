//! Database connectivity for the workspace.
//!
//! PostgreSQL access goes through Sea-ORM; this crate owns connection
//! configuration, startup retry with exponential backoff, and the
//! migration runner. Repositories in the domain crates receive a
//! [`sea_orm::DatabaseConnection`] and never touch connection details.

pub mod common;
pub mod postgres;

pub use common::{retry, retry_with_backoff, RetryConfig};
