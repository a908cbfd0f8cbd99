//! Image proxy error types.

use crate::domain::foundation::{DomainError, ErrorCode, ImageKey};

/// Errors raised while serving an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Key empty or not representable as a storage path.
    BadKey(String),
    /// Key well-formed but no object is stored under it.
    NotFound(ImageKey),
    /// Infrastructure error.
    Infrastructure(String),
}

impl ImageError {
    pub fn bad_key(reason: impl Into<String>) -> Self {
        ImageError::BadKey(reason.into())
    }
    pub fn not_found(key: ImageKey) -> Self {
        ImageError::NotFound(key)
    }
    pub fn message(&self) -> String {
        match self {
            ImageError::BadKey(reason) => format!("Invalid image key: {}", reason),
            ImageError::NotFound(key) => format!("Image not found: {}", key),
            ImageError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ImageError {}

impl From<DomainError> for ImageError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidImageKey | ErrorCode::ValidationFailed => {
                ImageError::BadKey(err.message)
            }
            _ => ImageError::Infrastructure(err.to_string()),
        }
    }
}
