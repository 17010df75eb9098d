//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened URL record.
///
/// Maps a short code to its destination URL together with creation and expiry
/// timestamps and a running click counter. Records are never deleted and
/// codes are never reused; expiry is enforced only at redirect time, so
/// expired records stay queryable for statistics.
///
/// Entities double as the persistence shape of the JSON-file store, hence the
/// serde derives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: i64,
}

impl Link {
    /// Creates a new Link with a zeroed click counter.
    pub fn new(
        code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            long_url,
            created_at,
            expires_at,
            click_count: 0,
        }
    }

    /// Returns true if the link has passed its expiry at `now`.
    ///
    /// The expiry instant itself counts as expired: a link with
    /// `expires_at == now` no longer redirects.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for creating a new link.
///
/// `created_at` is stamped by the repository at insert time.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
            now + Duration::minutes(30),
        );

        assert_eq!(link.code, "abc123");
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.created_at, now);
        assert_eq!(link.click_count, 0);
        assert!(!link.is_expired());
    }

    #[test]
    fn test_link_expired_in_the_past() {
        let now = Utc::now();
        let link = Link::new(
            "code".to_string(),
            "https://example.com".to_string(),
            now - Duration::minutes(31),
            now - Duration::milliseconds(1),
        );
        assert!(link.is_expired_at(now));
    }

    #[test]
    fn test_link_expiry_instant_is_expired() {
        let now = Utc::now();
        let link = Link::new(
            "code".to_string(),
            "https://example.com".to_string(),
            now - Duration::minutes(30),
            now,
        );
        assert!(link.is_expired_at(now));
    }

    #[test]
    fn test_link_not_expired_before_expiry() {
        let now = Utc::now();
        let link = Link::new(
            "code".to_string(),
            "https://example.com".to_string(),
            now,
            now + Duration::minutes(1),
        );
        assert!(!link.is_expired_at(now));
    }

    #[test]
    fn test_link_serde_round_trip() {
        let now = Utc::now();
        let link = Link::new(
            "xyz789".to_string(),
            "https://rust-lang.org".to_string(),
            now,
            now + Duration::minutes(30),
        );

        let json = serde_json::to_string(&link).unwrap();
        let parsed: Link = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.code, link.code);
        assert_eq!(parsed.long_url, link.long_url);
        assert_eq!(parsed.created_at, link.created_at);
        assert_eq!(parsed.expires_at, link.expires_at);
        assert_eq!(parsed.click_count, 0);
    }
}
