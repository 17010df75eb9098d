//! Narrow reporting interface injected into request handlers.

use std::sync::Arc;

use async_trait::async_trait;

use super::event::LogEvent;

/// Failures raised while reporting an event.
///
/// Callers on the request path must treat reporting as best-effort: these
/// errors are logged to the local diagnostic channel and never alter the
/// primary response.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("log message must be a non-empty string")]
    EmptyMessage,

    #[error("log collector token is missing")]
    MissingToken,

    #[error("log collector rejected the event with status {0}")]
    Rejected(u16),

    #[error("log collector transport failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Destination for structured events.
///
/// # Implementations
///
/// - [`super::RemoteReporter`] - POSTs events to the remote collector
/// - [`super::NullReporter`] - drops events (tests, token-less configs)
#[async_trait]
pub trait EventReporter: Send + Sync {
    /// Delivers one event.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] when the event fails validation or the collector
    /// is unreachable or rejects it.
    async fn report(&self, event: LogEvent) -> Result<(), LogError>;
}

/// Fire-and-forget delivery for the request path.
///
/// Spawns the report so reporter latency never sits on the response, and
/// downgrades failures to a local warning.
pub fn send_best_effort(reporter: &Arc<dyn EventReporter>, event: LogEvent) {
    let reporter = Arc::clone(reporter);
    tokio::spawn(async move {
        if let Err(e) = reporter.report(event).await {
            tracing::warn!("event report dropped: {e}");
        }
    });
}
