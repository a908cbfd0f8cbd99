//! Image storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Image storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesConfig {
    /// Which object store backend serves images
    #[serde(default)]
    pub backend: ImageBackend,

    /// Bucket name (S3/R2 backend)
    pub bucket: Option<String>,

    /// Custom endpoint, e.g. `https://<account>.r2.cloudflarestorage.com`
    pub endpoint: Option<String>,

    /// Bucket region; R2 uses `auto`
    #[serde(default = "default_region")]
    pub region: String,

    pub access_key_id: Option<String>,

    pub secret_access_key: Option<String>,

    /// Directory served by the local backend
    #[serde(default = "default_root")]
    pub root: String,

    /// How puzzle responses reference images
    #[serde(default)]
    pub link_mode: ImageLinkMode,
}

/// Object store backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageBackend {
    S3,
    #[default]
    Local,
    Memory,
}

/// Image link format in puzzle responses
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImageLinkMode {
    /// Absolute URLs to this service's `/img/` route
    #[default]
    Proxied,
    /// Bare storage keys (legacy clients)
    RawKey,
}

impl ImagesConfig {
    /// Validate image storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == ImageBackend::S3
            && self.bucket.as_deref().map_or(true, |b| b.trim().is_empty())
        {
            return Err(ValidationError::MissingRequired("IMAGES__BUCKET"));
        }
        if self.backend == ImageBackend::Local && self.root.trim().is_empty() {
            return Err(ValidationError::MissingRequired("IMAGES__ROOT"));
        }
        Ok(())
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            backend: ImageBackend::default(),
            bucket: None,
            endpoint: None,
            region: default_region(),
            access_key_id: None,
            secret_access_key: None,
            root: default_root(),
            link_mode: ImageLinkMode::default(),
        }
    }
}

fn default_region() -> String {
    "auto".to_string()
}

fn default_root() -> String {
    "./images".to_string()
}
