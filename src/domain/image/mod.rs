//! Image domain module.
//!
//! Types for the pass-through image proxy: decoded keys, streamed objects,
//! and the caching policy applied to every served image.

mod errors;
mod stored_image;

pub use errors::ImageError;
pub use stored_image::{
    decode_image_key, ImageBody, StoredImage, DEFAULT_CONTENT_TYPE, IMMUTABLE_CACHE_CONTROL,
};
