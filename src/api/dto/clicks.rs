//! DTO for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Click;

/// Individual click event as reported in statistics responses.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub shortcode: String,
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub geo: String,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            shortcode: click.code,
            timestamp: click.clicked_at,
            referrer: click.referrer,
            geo: click.geo,
        }
    }
}
