//! Click recording service.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::Click;
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::error::AppError;

/// Service that records one click per successful redirect.
///
/// The event append and the counter increment are one logical unit. The
/// event list is the source of truth and `click_count` a derived cache of
/// its length, so the append happens first and a failed increment is only
/// warned about, never surfaced.
pub struct ClickRecorder<S: StatsRepository, L: LinkRepository> {
    stats_repository: Arc<S>,
    link_repository: Arc<L>,
}

impl<S: StatsRepository, L: LinkRepository> ClickRecorder<S, L> {
    /// Creates a new click recorder.
    pub fn new(stats_repository: Arc<S>, link_repository: Arc<L>) -> Self {
        Self {
            stats_repository,
            link_repository,
        }
    }

    /// Records a click for `code`.
    ///
    /// `referrer` comes from the inbound Referer header; a missing header is
    /// recorded as the literal `"direct"`. Geo stays the placeholder value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the event itself cannot be
    /// appended. A failed counter increment does not fail the call.
    pub async fn record(&self, code: &str, referrer: Option<&str>) -> Result<Click, AppError> {
        let click = Click::new(code.to_string(), Utc::now(), referrer);

        self.stats_repository.append_click(click.clone()).await?;

        if let Err(e) = self.link_repository.increment_clicks(code).await {
            tracing::warn!("click counter increment failed for {code}: {e}");
        }

        Ok(click)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DIRECT_REFERRER;
    use crate::domain::repositories::{MockLinkRepository, MockStatsRepository};
    use serde_json::json;

    #[tokio::test]
    async fn test_record_appends_then_increments() {
        let mut stats = MockStatsRepository::new();
        stats
            .expect_append_click()
            .withf(|c| c.code == "abc123" && c.referrer == "https://google.com")
            .times(1)
            .returning(|_| Ok(()));

        let mut links = MockLinkRepository::new();
        links
            .expect_increment_clicks()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(()));

        let recorder = ClickRecorder::new(Arc::new(stats), Arc::new(links));
        let click = recorder
            .record("abc123", Some("https://google.com"))
            .await
            .unwrap();

        assert_eq!(click.referrer, "https://google.com");
    }

    #[tokio::test]
    async fn test_record_missing_referrer_is_direct() {
        let mut stats = MockStatsRepository::new();
        stats
            .expect_append_click()
            .withf(|c| c.referrer == DIRECT_REFERRER)
            .times(1)
            .returning(|_| Ok(()));

        let mut links = MockLinkRepository::new();
        links.expect_increment_clicks().returning(|_| Ok(()));

        let recorder = ClickRecorder::new(Arc::new(stats), Arc::new(links));
        recorder.record("abc123", None).await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_append_surfaces() {
        let mut stats = MockStatsRepository::new();
        stats
            .expect_append_click()
            .returning(|_| Err(AppError::internal("Storage error", json!({}))));

        let mut links = MockLinkRepository::new();
        links.expect_increment_clicks().never();

        let recorder = ClickRecorder::new(Arc::new(stats), Arc::new(links));
        let err = recorder.record("abc123", None).await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_failed_increment_is_swallowed() {
        let mut stats = MockStatsRepository::new();
        stats.expect_append_click().times(1).returning(|_| Ok(()));

        let mut links = MockLinkRepository::new();
        links
            .expect_increment_clicks()
            .times(1)
            .returning(|_| Err(AppError::internal("Storage error", json!({}))));

        let recorder = ClickRecorder::new(Arc::new(stats), Arc::new(links));
        assert!(recorder.record("abc123", None).await.is_ok());
    }
}
