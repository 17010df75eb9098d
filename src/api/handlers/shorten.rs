//! Handler for the link creation endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::infrastructure::logging::{Level, LogEvent, Package, send_best_effort};
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorturls` (bearer token required)
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "validity": 30,        // optional, minutes
///   "shortcode": "promo1"  // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with
///
/// ```json
/// {
///   "shortLink": "http://localhost:3000/promo1",
///   "expiry": "2026-01-01T12:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 on an invalid URL, validity, or shortcode format (including
///   malformed request bodies, which bypass axum's default 422)
/// - 409 when the requested shortcode is taken
/// - 500 when generated codes keep colliding past the retry bound
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Malformed request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let link = match state
        .link_service
        .create_short_link(payload.url, payload.validity, payload.shortcode)
        .await
    {
        Ok(link) => link,
        Err(e) => {
            let level = if matches!(e, AppError::ResourceExhausted { .. }) {
                Level::Fatal
            } else {
                Level::Error
            };
            send_best_effort(
                &state.reporter,
                LogEvent::backend(level, Package::Handler, e.to_string()),
            );
            return Err(e);
        }
    };

    send_best_effort(
        &state.reporter,
        LogEvent::backend(
            Level::Info,
            Package::Handler,
            format!("Short URL created for {} as {}", link.long_url, link.code),
        ),
    );

    let response = ShortenResponse {
        short_link: state.link_service.short_url(&link.code),
        expiry: link.expires_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
