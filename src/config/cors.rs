//! Cross-origin configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::is_valid_origin;

/// Allowed browser origins.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of exact origins
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,

    /// Origin advertised to requests whose origin is absent or not allowed
    #[serde(default = "default_origin")]
    pub default_origin: String,
}

impl CorsConfig {
    /// Parse the allowlist into individual origins
    pub fn allowed_origins_list(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    /// Validate cors configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let origins = self.allowed_origins_list();
        if origins.is_empty() {
            return Err(ValidationError::EmptyOriginAllowlist);
        }
        if let Some(bad) = origins.iter().find(|o| !is_valid_origin(o)) {
            return Err(ValidationError::InvalidOrigin(bad.clone()));
        }
        if !origins.contains(&self.default_origin) {
            return Err(ValidationError::DefaultOriginNotAllowed(
                self.default_origin.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            default_origin: default_origin(),
        }
    }
}

fn default_allowed_origins() -> String {
    "https://w4-ffle.github.io,http://localhost:5173".to_string()
}

fn default_origin() -> String {
    "https://w4-ffle.github.io".to_string()
}
