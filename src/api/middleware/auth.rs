//! Bearer token presence middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::error::AppError;
use crate::infrastructure::logging::{Level, LogEvent, Package, send_best_effort};
use crate::state::AppState;

/// Requires a bearer token on the request.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// Only presence is checked; there is no token registry to validate
/// against. A missing or empty token answers `401 Unauthorized` (with a
/// `WWW-Authenticate: Bearer` challenge) and reports a middleware event.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/shorturls", post(shorten_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map(|AuthBearer(token)| token)
        .unwrap_or_default();

    if token.trim().is_empty() {
        send_best_effort(
            &state.reporter,
            LogEvent::backend(Level::Error, Package::Middleware, "Missing bearer token"),
        );
        return Err(AppError::unauthorized(
            "Authorization token required",
            json!({ "reason": "Authorization header is missing or invalid" }),
        ));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}
