//! HTTP client for the remote log-collection endpoint.

use async_trait::async_trait;

use super::event::LogEvent;
use super::reporter::{EventReporter, LogError};

/// Reporter that POSTs events to the remote collector as JSON.
///
/// The collector authenticates with a bearer token and answers non-2xx for
/// events it refuses.
pub struct RemoteReporter {
    endpoint: String,
    token: String,
    client: reqwest::Client,
}

impl RemoteReporter {
    /// Creates a reporter for the given collector endpoint.
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EventReporter for RemoteReporter {
    async fn report(&self, event: LogEvent) -> Result<(), LogError> {
        if event.message.trim().is_empty() {
            return Err(LogError::EmptyMessage);
        }
        if self.token.is_empty() {
            return Err(LogError::MissingToken);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&event)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LogError::Rejected(response.status().as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::logging::event::{Level, LogEvent, Package};

    #[tokio::test]
    async fn test_empty_message_rejected_before_send() {
        let reporter = RemoteReporter::new("http://127.0.0.1:1/logs", "token");
        let event = LogEvent::backend(Level::Info, Package::Handler, "   ");

        let err = reporter.report(event).await.unwrap_err();
        assert!(matches!(err, LogError::EmptyMessage));
    }

    #[tokio::test]
    async fn test_missing_token_rejected_before_send() {
        let reporter = RemoteReporter::new("http://127.0.0.1:1/logs", "");
        let event = LogEvent::backend(Level::Info, Package::Handler, "created");

        let err = reporter.report(event).await.unwrap_err();
        assert!(matches!(err, LogError::MissingToken));
    }

    #[tokio::test]
    async fn test_unreachable_collector_is_transport_error() {
        // Port 1 refuses connections immediately.
        let reporter = RemoteReporter::new("http://127.0.0.1:1/logs", "token");
        let event = LogEvent::backend(Level::Info, Package::Handler, "created");

        let err = reporter.report(event).await.unwrap_err();
        assert!(matches!(err, LogError::Transport(_)));
    }
}
