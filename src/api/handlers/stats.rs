//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /shorturls/{code}` (public)
///
/// # Response
///
/// `200 OK` with the original URL, creation and expiry timestamps, total
/// click count, and every click event in recording order. Expired links
/// stay queryable.
///
/// # Errors
///
/// Returns 404 when the shortcode does not exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&code).await?;

    Ok(Json(stats.into()))
}
