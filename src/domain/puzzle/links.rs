//! Client-facing references to stored images.

use crate::domain::foundation::ImageKey;

/// Route prefix under which the image proxy is mounted.
pub const IMAGE_ROUTE_PREFIX: &str = "/img/";

/// How image keys are exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLinks {
    /// Absolute URLs pointing back at this service's image proxy.
    Proxied { origin: String },
    /// Bare storage keys. Leaks object-store identity; kept only for
    /// clients that have not moved to the proxy.
    RawKey,
}

impl ImageLinks {
    /// Proxy links rooted at `origin` (scheme and authority, no trailing slash).
    pub fn proxied(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self::Proxied {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Renders the client-facing reference for a key.
    ///
    /// Proxy links percent-encode the whole key as one path component, so
    /// `2026-01-16/r1_1.png` becomes `.../img/2026-01-16%2Fr1_1.png`.
    pub fn link(&self, key: &ImageKey) -> String {
        match self {
            ImageLinks::Proxied { origin } => format!(
                "{}{}{}",
                origin,
                IMAGE_ROUTE_PREFIX,
                urlencoding::encode(key.as_str())
            ),
            ImageLinks::RawKey => key.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxied_link_is_absolute_and_encoded() {
        let links = ImageLinks::proxied("https://puzzle.example.com");
        let key = ImageKey::new("2026-01-16/r1_1.png").unwrap();
        assert_eq!(
            links.link(&key),
            "https://puzzle.example.com/img/2026-01-16%2Fr1_1.png"
        );
    }

    #[test]
    fn proxied_link_trims_trailing_slash_of_origin() {
        let links = ImageLinks::proxied("http://localhost:8080/");
        let key = ImageKey::new("a b.png").unwrap();
        assert_eq!(links.link(&key), "http://localhost:8080/img/a%20b.png");
    }

    #[test]
    fn raw_key_link_is_the_key() {
        let key = ImageKey::new("2026-01-16/r1_1.png").unwrap();
        assert_eq!(ImageLinks::RawKey.link(&key), "2026-01-16/r1_1.png");
    }
}
