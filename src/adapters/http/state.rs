//! Shared state for the HTTP surface.

use std::sync::Arc;

use axum::http::{header, HeaderMap, Uri};

use crate::application::{CheckHealthHandler, FetchImageHandler, GetTodayPuzzleHandler};
use crate::config::{ImageLinkMode, ImagesConfig, ServerConfig};
use crate::domain::puzzle::{ImageLinks, RoundShuffler};
use crate::ports::{Clock, ImageStore, PuzzleReader, StoreIntrospector};

/// Application state handed to every route.
#[derive(Clone)]
pub struct AppState {
    pub puzzle_handler: Arc<GetTodayPuzzleHandler>,
    pub image_handler: Arc<FetchImageHandler>,
    pub health_handler: Arc<CheckHealthHandler>,
    pub links: LinkSettings,
}

impl AppState {
    /// Wires the query handlers over the given ports.
    pub fn new(
        puzzle_reader: Arc<dyn PuzzleReader>,
        introspector: Arc<dyn StoreIntrospector>,
        image_store: Arc<dyn ImageStore>,
        clock: Arc<dyn Clock>,
        shuffler: Arc<dyn RoundShuffler>,
        links: LinkSettings,
    ) -> Self {
        Self {
            puzzle_handler: Arc::new(GetTodayPuzzleHandler::new(puzzle_reader, clock, shuffler)),
            image_handler: Arc::new(FetchImageHandler::new(image_store)),
            health_handler: Arc::new(CheckHealthHandler::new(introspector)),
            links,
        }
    }
}

/// How puzzle responses reference images.
#[derive(Debug, Clone, Default)]
pub struct LinkSettings {
    pub mode: ImageLinkMode,
    /// Fixed public origin; derived per request when unset.
    pub public_url: Option<String>,
}

impl LinkSettings {
    pub fn from_config(server: &ServerConfig, images: &ImagesConfig) -> Self {
        Self {
            mode: images.link_mode,
            public_url: server.public_url.clone(),
        }
    }

    /// Link renderer for one request.
    ///
    /// Without a configured public URL the origin is rebuilt from the
    /// `Host` header (or the URI authority) and `X-Forwarded-Proto`.
    pub fn for_request(&self, headers: &HeaderMap, uri: &Uri) -> ImageLinks {
        match self.mode {
            ImageLinkMode::RawKey => ImageLinks::RawKey,
            ImageLinkMode::Proxied => match &self.public_url {
                Some(url) => ImageLinks::proxied(url.as_str()),
                None => ImageLinks::proxied(request_origin(headers, uri)),
            },
        }
    }
}

fn request_origin(headers: &HeaderMap, uri: &Uri) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("http");

    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or("localhost");

    format!("{}://{}", scheme, host)
}
