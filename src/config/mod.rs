//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DAILY_PUZZLE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use daily_puzzle::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod cors;
mod database;
mod error;
mod images;
mod server;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use images::{ImageBackend, ImageLinkMode, ImagesConfig};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, public URL)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Image object storage
    #[serde(default)]
    pub images: ImagesConfig,

    /// Origin allowlist
    #[serde(default)]
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DAILY_PUZZLE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DAILY_PUZZLE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DAILY_PUZZLE__DATABASE__URL=...` -> `database.url = ...`
    /// - `DAILY_PUZZLE__IMAGES__BACKEND=s3` -> `images.backend = S3`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DAILY_PUZZLE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.images.validate()?;
        self.cors.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

/// `scheme://host[:port]` with an http(s) scheme and no path or trailing slash.
pub(crate) fn is_valid_origin(origin: &str) -> bool {
    let rest = match origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
    {
        Some(rest) => rest,
        None => return false,
    };
    !rest.is_empty() && !rest.contains('/') && !rest.contains(char::is_whitespace)
}
