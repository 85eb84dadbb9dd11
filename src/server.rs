//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::FromRef,
    http::{header::CACHE_CONTROL, HeaderValue},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::models::AppConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    AppState {
        config: Arc::new(config),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests. Every API
/// response is a pure function of its query string, so `/api` routes carry
/// the configured `Cache-Control` unless the handler set its own.
pub fn build_router(state: AppState) -> Router {
    let cache_control = HeaderValue::from_str(&state.config.cache_control())
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"));

    let api_routes = Router::new()
        .route("/api/convert", get(api::handle_convert))
        .route("/api/scale", get(api::handle_scale))
        .route("/api/scale/export", get(api::handle_scale_export))
        .route("/api/variations", get(api::handle_variations))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            cache_control,
        ));

    Router::new()
        .merge(api_routes)
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
