//! Click statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Click, Link};
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::error::AppError;

/// Statistics view for one short link: the record joined with every click
/// event, in recording order.
#[derive(Debug, Clone)]
pub struct UrlStats {
    pub link: Link,
    pub clicks: Vec<Click>,
}

/// Service joining a URL record with its click events at read time.
///
/// Stats never filter by expiry: an expired link stays queryable.
pub struct StatsService<L: LinkRepository, S: StatsRepository> {
    link_repository: Arc<L>,
    stats_repository: Arc<S>,
}

impl<L: LinkRepository, S: StatsRepository> StatsService<L, S> {
    /// Creates a new statistics service.
    pub fn new(link_repository: Arc<L>, stats_repository: Arc<S>) -> Self {
        Self {
            link_repository,
            stats_repository,
        }
    }

    /// Retrieves statistics for a specific short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_stats(&self, code: &str) -> Result<UrlStats, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Shortcode does not exist", json!({ "code": code }))
            })?;

        let clicks = self.stats_repository.find_clicks_by_code(code).await?;

        Ok(UrlStats { link, clicks })
    }
}
