//! Handler for the health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health and store status.
///
/// # Endpoint
///
/// `GET /health` (public)
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let links = state.store.link_count().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("{links} links")),
            },
        },
    })
}
