//! HTTP API
//!
//! A small axum application: user registration, profile submission and a
//! health check. Handlers run the synchronous services on tokio's blocking
//! pool against a shared [`Storage`].

mod error;
mod handlers;

pub use error::{ApiError, ApiResult};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::config::settings::Settings;
use crate::error::{BodaiError, BodaiResult};
use crate::storage::Storage;

/// State shared by every request
pub struct AppState {
    pub storage: Storage,
    pub settings: Settings,
}

impl AppState {
    pub fn new(storage: Storage, settings: Settings) -> Self {
        Self { storage, settings }
    }
}

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins over `default_filter`. Calling this twice is harmless.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn cors_layer(origins: &[String]) -> BodaiResult<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| BodaiError::Config(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<BodaiResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> BodaiResult<Router> {
    let cors = cors_layer(&state.settings.server.allowed_origins)?;

    Ok(Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/api/auth/register", post(handlers::register))
        .route("/api/profile", post(handlers::submit_profile))
        .layer(cors)
        .with_state(state))
}

/// Serve the API until the process is stopped
pub async fn serve(state: Arc<AppState>) -> BodaiResult<()> {
    let addr: SocketAddr = state.settings.server.bind.parse().map_err(|_| {
        BodaiError::Config(format!(
            "Invalid bind address: {}",
            state.settings.server.bind
        ))
    })?;
    let app = build_router(state)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| BodaiError::Server(format!("Failed to bind {}: {}", addr, e)))?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| BodaiError::Server(e.to_string()))
}

#[cfg(test)]
mod tests;
