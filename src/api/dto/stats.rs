//! DTOs for the link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::application::services::UrlStats;

/// Statistics for a specific short link.
///
/// `total_clicks` reports the record's counter; `click_details` lists every
/// recorded event in recording order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub total_clicks: i64,
    pub click_details: Vec<ClickInfo>,
}

impl From<UrlStats> for StatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            original_url: stats.link.long_url,
            created_at: stats.link.created_at,
            expiry: stats.link.expires_at,
            total_clicks: stats.link.click_count,
            click_details: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Click, Link};
    use chrono::Duration;

    #[test]
    fn test_stats_wire_shape() {
        let now = Utc::now();
        let mut link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
            now + Duration::minutes(30),
        );
        link.click_count = 1;

        let stats = UrlStats {
            link,
            clicks: vec![Click::new("abc123".to_string(), now, None)],
        };

        let value = serde_json::to_value(StatsResponse::from(stats)).unwrap();

        assert_eq!(value["originalUrl"], "https://example.com");
        assert_eq!(value["totalClicks"], 1);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("expiry").is_some());

        let details = value["clickDetails"].as_array().unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0]["shortcode"], "abc123");
        assert_eq!(details[0]["referrer"], "direct");
        assert_eq!(details[0]["geo"], "unknown");
        assert!(details[0].get("timestamp").is_some());
    }
}
