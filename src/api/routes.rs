//! API route configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::api::middleware::auth;
use crate::state::AppState;

/// Short URL API routes.
///
/// # Endpoints
///
/// - `POST /shorturls`        - Create a short link (bearer token required)
/// - `GET  /shorturls/{code}` - Link statistics (public)
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/shorturls", post(shorten_handler))
        .route_layer(middleware::from_fn_with_state(state, auth::layer))
        .route("/shorturls/{code}", get(stats_handler))
}
