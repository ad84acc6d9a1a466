//! API server configuration.

use thiserror::Error;

/// Fatal configuration problems, detected before the server accepts traffic.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3000").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// JWT signing secret.
    pub jwt_secret: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable       | Behavior                               |
    /// |----------------|----------------------------------------|
    /// | `BIND_ADDR`    | default `127.0.0.1:3000`               |
    /// | `DATABASE_URL` | required; startup fails when absent    |
    /// | `JWT_SECRET`   | required; startup fails when absent    |
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let jwt_secret = require_var("JWT_SECRET")?;
        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into()),
            database_url,
            jwt_secret,
        })
    }
}

/// Reads a required variable; empty counts as absent.
fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
