//! Image bytes as fetched from the object store.

use std::fmt;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::foundation::{DomainError, ImageKey};

use super::ImageError;

/// Content type used when the stored object carries none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Cache policy for proxied images: published images never change.
pub const IMMUTABLE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Streaming body of a stored object.
pub type ImageBody = BoxStream<'static, Result<Bytes, DomainError>>;

/// A stored image ready to stream to a client.
pub struct StoredImage {
    pub content_type: Option<String>,
    pub size: Option<u64>,
    pub body: ImageBody,
}

impl StoredImage {
    /// Content type from object metadata, or the generic binary type.
    pub fn content_type_or_default(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

impl fmt::Debug for StoredImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredImage")
            .field("content_type", &self.content_type)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Decodes the raw path remainder after `/img/` into an image key.
///
/// Percent-decoding is applied once, so `2026-01-16%2Fr1_1.png` and
/// `2026-01-16/r1_1.png` name the same object.
pub fn decode_image_key(raw: &str) -> Result<ImageKey, ImageError> {
    let decoded = urlencoding::decode(raw)
        .map_err(|_| ImageError::bad_key("key is not valid UTF-8"))?;
    ImageKey::new(decoded.into_owned()).map_err(|e| ImageError::bad_key(e.to_string()))
}
