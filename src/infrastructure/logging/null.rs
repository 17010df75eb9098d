//! No-op reporter used when no collector token is configured.

use async_trait::async_trait;

use super::event::LogEvent;
use super::reporter::{EventReporter, LogError};

/// Reporter that silently drops every event.
///
/// Selected at startup when `LOG_TOKEN` is unset; also the default in tests.
#[derive(Debug, Default)]
pub struct NullReporter;

impl NullReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventReporter for NullReporter {
    async fn report(&self, _event: LogEvent) -> Result<(), LogError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::logging::event::{Level, Package};

    #[tokio::test]
    async fn test_null_reporter_accepts_everything() {
        let reporter = NullReporter::new();
        let event = LogEvent::backend(Level::Fatal, Package::Db, "ignored");
        assert!(reporter.report(event).await.is_ok());
    }
}
