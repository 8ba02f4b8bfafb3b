use crate::{env_or_default, env_required, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Single origin allowed by CORS. Required in the environment; the
    /// application refuses to start without it.
    pub cors_allowed_origin: String,
}

impl ServerConfig {
    pub fn new(host: String, port: u16, cors_allowed_origin: String) -> Self {
        Self {
            host,
            port,
            cors_allowed_origin,
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables:
    /// - HOST: defaults to 0.0.0.0 (all interfaces)
    /// - PORT: defaults to 8080
    /// - CORS_ALLOWED_ORIGIN: required, no default
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_or_default("PORT", "8080")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            })?;
        let cors_allowed_origin = env_required("CORS_ALLOWED_ORIGIN")?;

        Ok(Self {
            host,
            port,
            cors_allowed_origin,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
            cors_allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}
