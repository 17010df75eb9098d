//! Repository trait for click event storage.

use crate::domain::entities::Click;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recording and reading click events.
///
/// The event list is the source of truth for click analytics; the per-link
/// counter held by [`crate::domain::repositories::LinkRepository`] is a
/// derived cache of its length.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonStatsRepository`] - JSON-file store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_stats.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Appends a click event.
    ///
    /// Events are immutable once appended and are never deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn append_click(&self, click: Click) -> Result<(), AppError>;

    /// Returns every click event for a code, in insertion order.
    ///
    /// An unknown code yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_clicks_by_code(&self, code: &str) -> Result<Vec<Click>, AppError>;
}
