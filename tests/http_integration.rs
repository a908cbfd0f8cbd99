//! Integration tests for the HTTP surface.
//!
//! Drives the full router (origin policy, routing, handlers, formatting)
//! with in-memory adapters:
//! 1. Puzzle of the day: shape, links, shuffling, 404s
//! 2. Image proxy: bytes, headers, key decoding, 400/404
//! 3. Health listing
//! 4. Preflight and CORS on every response
//! 5. Infrastructure failures

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use daily_puzzle::adapters::http::{app_router, AppState, LinkSettings, OriginPolicy};
use daily_puzzle::adapters::{FixedClock, InMemoryPuzzleStore, ObjectImageStore};
use daily_puzzle::config::{CorsConfig, ImageLinkMode};
use daily_puzzle::domain::foundation::{DomainError, ErrorCode, PuzzleDate, PuzzleId};
use daily_puzzle::domain::puzzle::{KeepOrder, Puzzle, PuzzleImage, RandomShuffler, RoundShuffler};
use daily_puzzle::ports::{PuzzleReader, StoreIntrospector};

// =============================================================================
// Test Infrastructure
// =============================================================================

const TODAY: &str = "2026-01-16";

fn date(s: &str) -> PuzzleDate {
    s.parse().unwrap()
}

fn seeded_store() -> InMemoryPuzzleStore {
    InMemoryPuzzleStore::new()
        .with_puzzle(1, date("2026-01-15"))
        .with_image(1, 0, "2026-01-15/r0_1.png")
        .with_puzzle(2, date(TODAY))
        .with_image(2, 0, "2026-01-16/r0_1.png")
        .with_image(2, 0, "2026-01-16/r0_2.png")
        .with_image(2, 0, "2026-01-16/r0_3.png")
        .with_image(2, 1, "2026-01-16/r1_1.png")
        .with_image(2, 1, "2026-01-16/r1_2.png")
        .with_image(2, 10, "2026-01-16/r10_1.png")
        .with_image(2, 2, "2026-01-16/r2_1.png")
}

async fn seeded_images() -> ObjectImageStore {
    let images = ObjectImageStore::in_memory();
    images
        .put("2026-01-16/r1_1.png", b"\x89PNG-r1".to_vec(), Some("image/png"))
        .await
        .unwrap();
    images
        .put("2026-01-16/r0_1.jpg", b"jpeg-bytes".to_vec(), Some("image/jpeg"))
        .await
        .unwrap();
    images
        .put("untyped.bin", vec![0, 1, 2, 3], None)
        .await
        .unwrap();
    images
}

struct TestApp {
    reader: Arc<dyn PuzzleReader>,
    introspector: Arc<dyn StoreIntrospector>,
    images: ObjectImageStore,
    today: PuzzleDate,
    shuffler: Arc<dyn RoundShuffler>,
    links: LinkSettings,
}

impl TestApp {
    async fn new() -> Self {
        let store = Arc::new(seeded_store());
        Self {
            reader: store.clone(),
            introspector: store,
            images: seeded_images().await,
            today: date(TODAY),
            shuffler: Arc::new(KeepOrder),
            links: LinkSettings::default(),
        }
    }

    fn router(self) -> Router {
        let state = AppState::new(
            self.reader,
            self.introspector,
            Arc::new(self.images),
            Arc::new(FixedClock::on_date(self.today)),
            self.shuffler,
            self.links,
        );
        app_router(
            state,
            OriginPolicy::from_config(&CorsConfig::default()).unwrap(),
        )
    }
}

async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

async fn send(app: Router, method: Method, uri: &str, origin: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "puzzle.test:8080");
    if let Some(origin) = origin {
        builder = builder.header(header::ORIGIN, origin);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

fn header_str<'a>(response: &'a Response, name: &str) -> &'a str {
    response
        .headers()
        .get(name)
        .unwrap_or_else(|| panic!("missing header {name}"))
        .to_str()
        .unwrap()
}

fn assert_cors(response: &Response, expected_origin: &str) {
    assert_eq!(
        header_str(response, "access-control-allow-origin"),
        expected_origin
    );
    assert_eq!(
        header_str(response, "access-control-allow-methods"),
        "GET, POST, OPTIONS"
    );
    assert_eq!(
        header_str(response, "access-control-allow-headers"),
        "Content-Type, X-User-Id"
    );
    assert_eq!(header_str(response, "access-control-max-age"), "86400");
}

struct FailingStore;

#[async_trait]
impl PuzzleReader for FailingStore {
    async fn find_by_date(&self, _date: PuzzleDate) -> Result<Option<Puzzle>, DomainError> {
        Err(DomainError::database("Failed to fetch puzzle", "connection reset"))
    }

    async fn list_images(&self, _puzzle_id: PuzzleId) -> Result<Vec<PuzzleImage>, DomainError> {
        Err(DomainError::database("Failed to fetch images", "connection reset"))
    }
}

#[async_trait]
impl StoreIntrospector for FailingStore {
    async fn list_tables(&self) -> Result<Vec<String>, DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "connection reset"))
    }
}

// =============================================================================
// Puzzle of the day
// =============================================================================

#[tokio::test]
async fn today_returns_rounds_keyed_in_numeric_order() {
    let response = get(TestApp::new().await.router(), "/api/puzzle/today").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_str(&response, "content-type"),
        "application/json; charset=utf-8"
    );

    let text = body_text(response).await;
    assert!(text.contains("\n  \"date\""), "JSON should be pretty-printed");

    let body: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["date"], TODAY);

    let keys: HashSet<&str> = body["rounds"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, HashSet::from(["0", "1", "2", "10"]));

    // Parsed maps re-sort keys; check the order on the wire.
    let positions: Vec<usize> = ["\"0\": [", "\"1\": [", "\"2\": [", "\"10\": ["]
        .iter()
        .map(|k| text.find(k).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn today_links_are_absolute_proxy_urls() {
    let response = get(TestApp::new().await.router(), "/api/puzzle/today").await;
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();

    assert_eq!(
        body["rounds"]["1"],
        json!([
            "http://puzzle.test:8080/img/2026-01-16%2Fr1_1.png",
            "http://puzzle.test:8080/img/2026-01-16%2Fr1_2.png",
        ])
    );
}

#[tokio::test]
async fn today_uses_configured_public_url() {
    let mut app = TestApp::new().await;
    app.links = LinkSettings {
        mode: ImageLinkMode::Proxied,
        public_url: Some("https://api.puzzle.example".to_string()),
    };

    let response = get(app.router(), "/api/puzzle/today").await;
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(
        body["rounds"]["10"],
        json!(["https://api.puzzle.example/img/2026-01-16%2Fr10_1.png"])
    );
}

#[tokio::test]
async fn today_in_raw_key_mode_returns_bare_keys() {
    let mut app = TestApp::new().await;
    app.links = LinkSettings {
        mode: ImageLinkMode::RawKey,
        public_url: None,
    };

    let response = get(app.router(), "/api/puzzle/today").await;
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["rounds"]["2"], json!(["2026-01-16/r2_1.png"]));
}

#[tokio::test]
async fn today_never_reveals_the_real_flag() {
    let mut app = TestApp::new().await;
    app.links = LinkSettings {
        mode: ImageLinkMode::RawKey,
        public_url: None,
    };

    let text = body_text(get(app.router(), "/api/puzzle/today").await).await;
    assert!(!text.contains("is_real"));
    assert!(!text.contains("real"));
    assert!(!text.contains("true"));
    assert!(!text.contains("false"));
}

#[tokio::test]
async fn shuffled_rounds_keep_their_members() {
    let expected_round0: HashSet<String> = [
        "http://puzzle.test:8080/img/2026-01-16%2Fr0_1.png",
        "http://puzzle.test:8080/img/2026-01-16%2Fr0_2.png",
        "http://puzzle.test:8080/img/2026-01-16%2Fr0_3.png",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    for _ in 0..25 {
        let mut app = TestApp::new().await;
        app.shuffler = Arc::new(RandomShuffler);
        let response = get(app.router(), "/api/puzzle/today").await;
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();

        let round0: Vec<String> =
            serde_json::from_value(body["rounds"]["0"].clone()).unwrap();
        assert_eq!(round0.len(), 3);
        assert_eq!(round0.into_iter().collect::<HashSet<_>>(), expected_round0);
    }
}

#[tokio::test]
async fn unseeded_day_is_404_with_date() {
    let mut app = TestApp::new().await;
    app.today = date("2026-02-01");

    let response = get(app.router(), "/api/puzzle/today").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        header_str(&response, "content-type"),
        "application/json; charset=utf-8"
    );
    assert_cors(&response, "https://w4-ffle.github.io");

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(
        body,
        json!({"error": "No puzzle seeded for today", "date": "2026-02-01"})
    );
}

#[tokio::test]
async fn seeded_puzzle_without_images_has_empty_rounds() {
    let mut app = TestApp::new().await;
    let store = Arc::new(InMemoryPuzzleStore::new().with_puzzle(9, date(TODAY)));
    app.reader = store;

    let response = get(app.router(), "/api/puzzle/today").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, json!({"date": TODAY, "rounds": {}}));
}

// =============================================================================
// Image proxy
// =============================================================================

#[tokio::test]
async fn image_streams_bytes_with_immutable_caching() {
    let response = get(
        TestApp::new().await.router(),
        "/img/2026-01-16%2Fr1_1.png",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_str(&response, "content-type"), "image/png");
    assert_eq!(
        header_str(&response, "cache-control"),
        "public, max-age=31536000, immutable"
    );
    assert_cors(&response, "https://w4-ffle.github.io");
    assert_eq!(body_bytes(response).await, b"\x89PNG-r1".to_vec());
}

#[tokio::test]
async fn image_key_with_literal_slash_resolves_the_same_object() {
    let response = get(TestApp::new().await.router(), "/img/2026-01-16/r0_1.jpg").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_str(&response, "content-type"), "image/jpeg");
    assert_eq!(body_bytes(response).await, b"jpeg-bytes".to_vec());
}

#[tokio::test]
async fn image_without_content_type_is_octet_stream() {
    let response = get(TestApp::new().await.router(), "/img/untyped.bin").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_str(&response, "content-type"),
        "application/octet-stream"
    );
}

#[tokio::test]
async fn empty_image_key_is_400() {
    let response = get(TestApp::new().await.router(), "/img/").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors(&response, "https://w4-ffle.github.io");
    assert_eq!(body_text(response).await, "Bad Request");
}

#[tokio::test]
async fn unrepresentable_image_key_is_400() {
    let response = get(TestApp::new().await.router(), "/img/a%2F..%2Fb.png").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn outer_slashes_do_not_alias_a_stored_image() {
    for uri in [
        "/img//2026-01-16/r1_1.png",
        "/img/2026-01-16/r1_1.png/",
        "/img/%2F2026-01-16%2Fr1_1.png",
    ] {
        let response = get(TestApp::new().await.router(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert!(response.headers().get("cache-control").is_none(), "{uri}");
    }
}

#[tokio::test]
async fn missing_image_is_404() {
    let response = get(TestApp::new().await.router(), "/img/doesnotexist.png").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_cors(&response, "https://w4-ffle.github.io");
    assert_eq!(body_text(response).await, "Not Found");
}

#[tokio::test]
async fn puzzle_links_resolve_through_the_proxy() {
    let response = get(TestApp::new().await.router(), "/api/puzzle/today").await;
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    let link = body["rounds"]["1"][0].as_str().unwrap().to_string();
    let path = link.strip_prefix("http://puzzle.test:8080").unwrap();

    let response = get(TestApp::new().await.router(), path).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"\x89PNG-r1".to_vec());
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_lists_tables() {
    let response = get(TestApp::new().await.router(), "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_str(&response, "content-type"),
        "application/json; charset=utf-8"
    );

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(
        body,
        json!({"ok": true, "tables": [{"name": "puzzle_images"}, {"name": "puzzles"}]})
    );
}

// =============================================================================
// Preflight, CORS and fallbacks
// =============================================================================

#[tokio::test]
async fn options_on_any_path_is_204_with_cors() {
    for path in ["/", "/api/puzzle/today", "/img/x.png", "/no/such/route"] {
        let response = send(
            TestApp::new().await.router(),
            Method::OPTIONS,
            path,
            Some("http://localhost:5173"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT, "OPTIONS {path}");
        assert_cors(&response, "http://localhost:5173");
        assert!(body_bytes(response).await.is_empty());
    }
}

#[tokio::test]
async fn allowlisted_origin_is_echoed_on_success() {
    let response = send(
        TestApp::new().await.router(),
        Method::GET,
        "/api/puzzle/today",
        Some("http://localhost:5173"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response, "http://localhost:5173");
}

#[tokio::test]
async fn unknown_origin_gets_default_origin() {
    let response = send(
        TestApp::new().await.router(),
        Method::GET,
        "/api/health",
        Some("https://attacker.example"),
    )
    .await;
    assert_cors(&response, "https://w4-ffle.github.io");
}

#[tokio::test]
async fn unknown_route_is_plain_404_with_cors() {
    let response = send(
        TestApp::new().await.router(),
        Method::GET,
        "/api/puzzle/yesterday",
        Some("http://localhost:5173"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_cors(&response, "http://localhost:5173");
    assert_eq!(body_text(response).await, "Not Found");
}

#[tokio::test]
async fn post_to_known_route_is_404() {
    let response = send(
        TestApp::new().await.router(),
        Method::POST,
        "/api/puzzle/today",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_cors(&response, "https://w4-ffle.github.io");
    assert_eq!(body_text(response).await, "Not Found");
}

#[tokio::test]
async fn head_on_known_routes_is_404() {
    for uri in ["/api/puzzle/today", "/api/health", "/img/2026-01-16%2Fr1_1.png"] {
        let response = send(TestApp::new().await.router(), Method::HEAD, uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_cors(&response, "https://w4-ffle.github.io");
        assert_eq!(body_text(response).await, "Not Found");
    }
}

// =============================================================================
// Infrastructure failures
// =============================================================================

#[tokio::test]
async fn database_failure_is_500_json() {
    let mut app = TestApp::new().await;
    app.reader = Arc::new(FailingStore);

    let response = get(app.router(), "/api/puzzle/today").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&response, "https://w4-ffle.github.io");

    let text = body_text(response).await;
    assert!(!text.contains("connection reset"));
    let body: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn health_failure_is_500_json() {
    let mut app = TestApp::new().await;
    app.introspector = Arc::new(FailingStore);

    let response = get(app.router(), "/api/health").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, json!({"error": "Internal server error"}));
}
