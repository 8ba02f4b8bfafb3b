mod config;
mod connector;

pub use config::PostgresConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, run_migrations,
};

// Re-export so consumers don't need a direct sea-orm dependency for the
// connection handle type.
pub use sea_orm::DatabaseConnection;
