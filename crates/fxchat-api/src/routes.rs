//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, compression,
//! and all endpoint handlers.

use std::path::PathBuf;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use fxchat_core::config::FxConfig;
use fxchat_core::error::FxError;

use crate::handlers;
use crate::state::AppState;

/// File name of the page background, looked up in `general.static_dir`.
pub const BACKGROUND_FILE: &str = "bg.jpg";

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The UI may be hosted elsewhere; accept any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let background = PathBuf::from(&state.config.general.static_dir).join(BACKGROUND_FILE);

    Router::new()
        .route("/", get(handlers::home))
        .route_service("/bg.jpg", ServeFile::new(background))
        .route("/chat", post(handlers::chat))
        .route("/convert", post(handlers::convert))
        .route("/currencies", get(handlers::currencies))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on `general.host:general.port`.
pub async fn start_server(config: &FxConfig, state: AppState) -> Result<(), FxError> {
    let addr = format!("{}:{}", config.general.host, config.general.port);

    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FxError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| FxError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
