//! HTTP API (Axum).
//!
//! | Route                | Description                                   |
//! |----------------------|-----------------------------------------------|
//! | `GET /`              | Embedded UI (also served for unknown paths)   |
//! | `GET /health`        | `{"status":"ok"}`                             |
//! | `GET /api/fetch`     | Fetch `?url=` and return the extract result   |
//! | `POST /api/summarize`| Summarize the raw request body                |
//! | `POST /api/autopilot`| Fetch `{"url"}`, extract, summarize title+text|
//!
//! Errors are JSON `{"error": "..."}` with status 400 for bad input and 502
//! for upstream failures.

pub mod config;
pub mod error;
pub mod routes;
pub mod static_files;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

pub use config::{ServerConfig, API_SUMMARY_SENTENCES};
pub use error::ApiError;

use crate::fetch::Fetcher;
use crate::options::Options;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Fetcher,
    pub config: Arc<ServerConfig>,
    pub options: Arc<Options>,
}

impl AppState {
    /// Build state, creating the HTTP client from `config`.
    pub fn new(config: ServerConfig) -> crate::Result<Self> {
        let fetcher =
            Fetcher::with_timeout(config.client_timeout)?.with_user_agent(config.user_agent.clone());
        Ok(Self {
            fetcher,
            config: Arc::new(config),
            options: Arc::new(Options::default()),
        })
    }
}

/// Build the Axum application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(static_files::index))
        .route("/app.js", get(static_files::app_js))
        .route("/styles.css", get(static_files::styles))
        .route("/health", get(routes::health))
        .route("/api/fetch", get(routes::fetch))
        .route("/api/summarize", post(routes::summarize))
        .route("/api/autopilot", post(routes::autopilot))
        .fallback(static_files::index)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}

/// Serve the API on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let app = router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
