//! Structured event model accepted by the remote log collector.
//!
//! The collector enumerates the values it accepts; modelling them as enums
//! makes an out-of-set field unrepresentable, leaving only the non-empty
//! message and token-presence checks to runtime.

use serde::Serialize;

/// Originating side of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    Backend,
    Frontend,
}

/// Event severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Code area the event originates from, from the collector's fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Package {
    // Backend
    Cache,
    Controller,
    CronJob,
    Db,
    Domain,
    Handler,
    Repository,
    Route,
    Service,
    // Frontend
    Api,
    Component,
    Hook,
    Page,
    State,
    Style,
    // Both
    Auth,
    Config,
    Middleware,
    Utils,
}

/// One structured event, serialized verbatim as the collector's JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub stack: Stack,
    pub level: Level,
    pub package: Package,
    pub message: String,
}

impl LogEvent {
    /// Creates an event.
    pub fn new(stack: Stack, level: Level, package: Package, message: impl Into<String>) -> Self {
        Self {
            stack,
            level,
            package,
            message: message.into(),
        }
    }

    /// Creates a backend-side event; this service only ever reports those.
    pub fn backend(level: Level, package: Package, message: impl Into<String>) -> Self {
        Self::new(Stack::Backend, level, package, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_wire_shape() {
        let event = LogEvent::backend(Level::Error, Package::Handler, "Invalid or missing URL");

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "stack": "backend",
                "level": "error",
                "package": "handler",
                "message": "Invalid or missing URL",
            })
        );
    }

    #[test]
    fn test_levels_serialize_lowercase() {
        for (level, expected) in [
            (Level::Debug, "debug"),
            (Level::Info, "info"),
            (Level::Warn, "warn"),
            (Level::Error, "error"),
            (Level::Fatal, "fatal"),
        ] {
            assert_eq!(serde_json::to_value(level).unwrap(), json!(expected));
        }
    }

    #[test]
    fn test_multiword_package_is_snake_case() {
        assert_eq!(
            serde_json::to_value(Package::CronJob).unwrap(),
            serde_json::json!("cron_job")
        );
    }

    #[test]
    fn test_frontend_stack_serializes() {
        assert_eq!(
            serde_json::to_value(Stack::Frontend).unwrap(),
            serde_json::json!("frontend")
        );
    }
}
