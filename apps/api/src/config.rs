//! API server configuration module.
//!
//! Configuration is layered, lowest priority first:
//! built-in defaults, then a local `.env` file (if present), then the
//! process environment.

use kasir_db::DbConfig;
use serde::Deserialize;
use tracing::debug;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port (`PORT`)
    pub port: u16,

    /// SQLite connection string (`DATABASE_URL`)
    pub database_url: String,

    /// Pool upper bound (`DB_MAX_CONNECTIONS`)
    pub db_max_connections: u32,

    /// Connections kept warm (`DB_MIN_CONNECTIONS`)
    pub db_min_connections: u32,
}

impl ServerConfig {
    /// Load configuration from `.env` and environment variables.
    ///
    /// Variables already present in the environment win over `.env`.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => debug!("No .env file, using environment only"),
            Err(e) => return Err(ConfigError::EnvFile(e.to_string())),
        }

        Self::from_env(config::Environment::default().ignore_empty(true))
    }

    /// Builds the configuration from defaults overlaid with `env`.
    pub fn from_env(env: config::Environment) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .set_default("port", 8080)?
            .set_default("database_url", "sqlite://kasir.db")?
            .set_default("db_max_connections", 10)?
            .set_default("db_min_connections", 2)?
            .add_source(env)
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Socket address to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Pool settings for `kasir_db::Database::new`.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_url)
            .max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),

    #[error("Failed to read .env file: {0}")]
    EnvFile(String),
}
