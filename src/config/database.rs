//! Database configuration
//!
//! The service only reads, so the pool stays small by default.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const ACCEPTED_SCHEMES: [&str; 2] = ["postgres://", "postgresql://"];

/// Upper bound on `max_connections`.
const MAX_POOL_SIZE: u32 = 100;

/// PostgreSQL connection and pool settings
///
/// Every field except `url` has a default, so `DAILY_PUZZLE__DATABASE__URL`
/// alone is a complete section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    pub min_connections: u32,
    pub max_connections: u32,

    /// Seconds to wait for a free connection
    pub acquire_timeout_secs: u64,

    /// Seconds before an idle connection is closed (0 keeps them open)
    pub idle_timeout_secs: u64,

    /// Seconds before any connection is recycled
    pub max_lifetime_secs: u64,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// `None` when idle connections are never reaped.
    pub fn idle_timeout(&self) -> Option<Duration> {
        (self.idle_timeout_secs > 0).then(|| Duration::from_secs(self.idle_timeout_secs))
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        if !ACCEPTED_SCHEMES.iter().any(|s| self.url.starts_with(s)) {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections > MAX_POOL_SIZE {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: 1,
            max_connections: 10,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        }
    }
}
