use core_config::{env_required, ConfigError, FromEnv};
use sea_orm::ConnectOptions;
use std::time::Duration;

/// PostgreSQL connection configuration.
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout: Duration::from_secs(8),
        }
    }

    /// Build Sea-ORM connect options from this config.
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url);
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.connect_timeout)
            .sqlx_logging(true);
        options
    }
}

impl FromEnv for PostgresConfig {
    /// Requires DATABASE_URL to be set (no default).
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(env_required("DATABASE_URL")?))
    }
}
