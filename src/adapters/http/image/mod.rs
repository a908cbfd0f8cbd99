//! HTTP adapter for the image proxy.

mod handlers;
mod routes;

pub use handlers::fetch_image;
pub use routes::image_router;
