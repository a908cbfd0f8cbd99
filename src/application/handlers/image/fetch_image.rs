//! FetchImageHandler - Query handler behind the image proxy.

use std::sync::Arc;

use crate::domain::image::{decode_image_key, ImageError, StoredImage};
use crate::ports::ImageStore;

/// Query to fetch an image by the raw, still percent-encoded path remainder.
#[derive(Debug, Clone)]
pub struct FetchImageQuery {
    pub raw_key: String,
}

/// Handler resolving a proxied image request to a streamable object.
pub struct FetchImageHandler {
    store: Arc<dyn ImageStore>,
}

impl FetchImageHandler {
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: FetchImageQuery) -> Result<StoredImage, ImageError> {
        let key = decode_image_key(&query.raw_key)?;

        match self.store.get(&key).await? {
            Some(image) => Ok(image),
            None => {
                // Rows reference a key nothing was uploaded under.
                tracing::warn!(image_key = %key, "Image missing from object store");
                Err(ImageError::not_found(key))
            }
        }
    }
}
