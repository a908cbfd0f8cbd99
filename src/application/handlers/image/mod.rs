//! Image proxy query handlers.

mod fetch_image;

pub use fetch_image::{FetchImageHandler, FetchImageQuery};
