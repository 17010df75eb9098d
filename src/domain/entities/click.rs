//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Referrer value recorded when the inbound request carries no Referer header.
pub const DIRECT_REFERRER: &str = "direct";

/// Geo-location placeholder. A real deployment would wire an IP lookup here.
pub const GEO_PLACEHOLDER: &str = "unknown";

/// A click event recorded when a shortened link is accessed.
///
/// Events reference their link by code value, not by pointer; the record and
/// its events are stored independently and joined at read time. Events are
/// immutable once appended and are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Click {
    pub code: String,
    pub clicked_at: DateTime<Utc>,
    pub referrer: String,
    pub geo: String,
}

impl Click {
    /// Creates a new Click, filling in the placeholder defaults.
    ///
    /// A missing referrer becomes [`DIRECT_REFERRER`]; geo is always the
    /// [`GEO_PLACEHOLDER`] in this implementation.
    pub fn new(code: String, clicked_at: DateTime<Utc>, referrer: Option<&str>) -> Self {
        Self {
            code,
            clicked_at,
            referrer: referrer
                .filter(|r| !r.is_empty())
                .unwrap_or(DIRECT_REFERRER)
                .to_string(),
            geo: GEO_PLACEHOLDER.to_string(),
        }
    }
}
