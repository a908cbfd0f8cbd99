//! Daily Puzzle server binary.

use std::sync::Arc;

use axum::http::Request;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use daily_puzzle::adapters::http::{app_router, AppState, LinkSettings, OriginPolicy};
use daily_puzzle::adapters::postgres::{
    connect_pool, PostgresPuzzleReader, PostgresStoreIntrospector,
};
use daily_puzzle::adapters::{ObjectImageStore, SystemClock};
use daily_puzzle::config::AppConfig;
use daily_puzzle::domain::puzzle::RandomShuffler;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let addr = config.server.socket_addr()?;
    let pool = connect_pool(&config.database).await?;
    let images = ObjectImageStore::from_config(&config.images)?;
    let policy = OriginPolicy::from_config(&config.cors)?;

    tracing::info!(
        backend = ?config.images.backend,
        link_mode = ?config.images.link_mode,
        "Image store ready"
    );

    let state = AppState::new(
        Arc::new(PostgresPuzzleReader::new(pool.clone())),
        Arc::new(PostgresStoreIntrospector::new(pool.clone())),
        Arc::new(images),
        Arc::new(SystemClock),
        Arc::new(RandomShuffler),
        LinkSettings::from_config(&config.server, &config.images),
    );

    let app = app_router(state, policy).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        },
    ));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
