//! Object Store Image Adapter - Implementation of ImageStore.
//!
//! Serves image objects out of any `object_store` backend: an S3-compatible
//! bucket (Cloudflare R2 in production), a local directory, or memory.
//!
//! # Key Mapping
//!
//! Image keys map one-to-one onto object paths:
//!
//! ```text
//! 2026-01-16/r1_1.png  ->  <bucket>/2026-01-16/r1_1.png
//! ```
//!
//! Keys the backend cannot represent verbatim as a path (empty segments,
//! `..`, a leading or trailing `/`) are rejected with
//! `ErrorCode::InvalidImageKey` rather than looked up.

use std::sync::Arc;

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};

use crate::config::{ImageBackend, ImagesConfig};
use crate::domain::foundation::{DomainError, ErrorCode, ImageKey};
use crate::domain::image::StoredImage;
use crate::ports::ImageStore;

/// Image store backed by an `ObjectStore`.
#[derive(Debug, Clone)]
pub struct ObjectImageStore {
    store: Arc<dyn ObjectStore>,
}

impl ObjectImageStore {
    /// Wraps an existing object store.
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Empty in-memory store (testing/development).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemory::new()))
    }

    /// Builds the backend selected in configuration.
    pub fn from_config(config: &ImagesConfig) -> Result<Self, DomainError> {
        let store: Arc<dyn ObjectStore> = match config.backend {
            ImageBackend::S3 => {
                let mut builder = AmazonS3Builder::new()
                    .with_bucket_name(config.bucket.clone().unwrap_or_default())
                    .with_region(config.region.clone());
                if let Some(endpoint) = &config.endpoint {
                    builder = builder.with_endpoint(endpoint.clone());
                }
                if let Some(key_id) = &config.access_key_id {
                    builder = builder.with_access_key_id(key_id.clone());
                }
                if let Some(secret) = &config.secret_access_key {
                    builder = builder.with_secret_access_key(secret.clone());
                }
                Arc::new(
                    builder
                        .build()
                        .map_err(|e| DomainError::storage("Failed to configure S3 store", e))?,
                )
            }
            ImageBackend::Local => Arc::new(
                LocalFileSystem::new_with_prefix(&config.root).map_err(|e| {
                    DomainError::storage("Failed to open local image directory", e)
                })?,
            ),
            ImageBackend::Memory => Arc::new(InMemory::new()),
        };

        Ok(Self::new(store))
    }

    /// Stores an object. Used to seed development and test stores; request
    /// handling never writes.
    pub async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), DomainError> {
        let path = object_path(key)?;
        let mut attributes = Attributes::new();
        if let Some(content_type) = content_type {
            attributes.insert(Attribute::ContentType, content_type.to_string().into());
        }
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        self.store
            .put_opts(&path, PutPayload::from(bytes), options)
            .await
            .map_err(|e| DomainError::storage("Failed to store image", e))?;
        Ok(())
    }
}

#[async_trait]
impl ImageStore for ObjectImageStore {
    async fn get(&self, key: &ImageKey) -> Result<Option<StoredImage>, DomainError> {
        let path = object_path(key.as_str())?;

        let result = match self.store.get(&path).await {
            Ok(result) => result,
            Err(object_store::Error::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(DomainError::storage("Failed to fetch image", e)),
        };

        let content_type = result.attributes.get(&Attribute::ContentType).map(|value| {
            let value: &str = value.as_ref();
            value.to_string()
        });
        let size = result.meta.size;

        let body = result
            .into_stream()
            .map_err(|e| DomainError::storage("Failed to read image body", e))
            .boxed();

        Ok(Some(StoredImage {
            content_type,
            size: Some(size),
            body,
        }))
    }
}

fn object_path(key: &str) -> Result<Path, DomainError> {
    let path = Path::parse(key).map_err(|e| {
        DomainError::new(ErrorCode::InvalidImageKey, format!("{key}: {e}"))
    })?;
    // `Path::parse` strips outer delimiters; the object must match the key exactly.
    let canonical: &str = path.as_ref();
    if canonical != key {
        return Err(DomainError::new(
            ErrorCode::InvalidImageKey,
            format!("{key}: not a canonical object path"),
        ));
    }
    Ok(path)
}
