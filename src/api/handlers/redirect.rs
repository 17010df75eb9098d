//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::infrastructure::logging::{Level, LogEvent, Package, send_best_effort};
use crate::state::AppState;

/// Redirects a short code to its original URL, recording one click.
///
/// # Endpoint
///
/// `GET /{code}` (public)
///
/// # Request Flow
///
/// 1. Look up the record (404 when unknown)
/// 2. Apply the expiry policy (410 when past expiry)
/// 3. Record the click — event append plus counter increment — durably
///    before responding
/// 4. Answer `302 Found` with the destination in `Location`
///
/// Expired links never record clicks.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    if link.is_expired() {
        send_best_effort(
            &state.reporter,
            LogEvent::backend(
                Level::Warn,
                Package::Handler,
                format!("Rejected redirect for expired shortcode {code}"),
            ),
        );
        return Err(AppError::gone(
            "Shortcode has expired",
            json!({ "code": code }),
        ));
    }

    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok());

    state.click_recorder.record(&code, referrer).await?;

    send_best_effort(
        &state.reporter,
        LogEvent::backend(
            Level::Info,
            Package::Handler,
            format!("Redirecting {code} to {}", link.long_url),
        ),
    );

    Ok((StatusCode::FOUND, [(header::LOCATION, link.long_url)]).into_response())
}
