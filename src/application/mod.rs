//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and
//! provide a clean API for HTTP handlers.
//!
//! - [`services::LinkService`] - Shortcode allocation and link creation
//! - [`services::ClickRecorder`] - Click event recording
//! - [`services::StatsService`] - Read-time stats aggregation

pub mod services;
