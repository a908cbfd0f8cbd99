//! Image Store Port - Object storage read interface.
//!
//! The image proxy streams bytes out of whatever object store the seeding
//! process uploaded to. Only reads are exposed.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ImageKey};
use crate::domain::image::StoredImage;

/// Port for reading image objects.
///
/// # Contract
///
/// Implementations must:
/// - Return `Ok(None)` when no object exists under the key
/// - Return `ErrorCode::InvalidImageKey` when the key cannot be expressed as
///   a location in the backing store
/// - Report the object's stored content type when the backend records one
/// - Stream the body rather than buffering it whole
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Open the object stored under `key` for streaming.
    async fn get(&self, key: &ImageKey) -> Result<Option<StoredImage>, DomainError>;
}
