//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`        - Create a short link (bearer token required)
//! - `GET  /shorturls/{code}` - Link statistics (public)
//! - `GET  /health`           - Health check (public)
//! - `GET  /{code}`           - Short link redirect (public)
//!
//! Fixed routes shadow the `/{code}` catch-all, which is why their names
//! are reserved as shortcodes.

use axum::{Router, routing::get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::api_routes(state.clone()))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
