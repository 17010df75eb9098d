//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom shortcode validation.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,16}$").unwrap());

/// Request to create a shortened URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination URL (must be absolute).
    #[validate(url(message = "Invalid or missing URL"))]
    pub url: String,

    /// Requested lifetime in minutes (default 30, must be positive).
    #[validate(range(min = 1, message = "Validity must be a positive integer (minutes)"))]
    pub validity: Option<i64>,

    /// Optional custom short code (3-16 alphanumeric characters).
    #[validate(regex(
        path = "*SHORTCODE_REGEX",
        message = "Shortcode must be alphanumeric and 3-16 chars"
    ))]
    pub shortcode: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}
