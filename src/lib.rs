//! # Linklet
//!
//! A small URL shortener with click analytics, built with Axum and a
//! JSON-file store.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON-file store and the remote log collector client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Custom or generated short codes with collision-free allocation
//! - Per-link expiry with click recording on every successful redirect
//! - Statistics joining each record with its full click history
//! - Best-effort structured event reporting to a remote collector
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; everything has a default
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="http://localhost:3000"
//! export DATA_FILE="links.json"
//!
//! # Forward structured events to a collector (both or neither)
//! export LOG_ENDPOINT="https://logs.example.com/logs"
//! export LOG_TOKEN="..."
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ClickRecorder, LinkService, StatsService};
    pub use crate::domain::entities::{Click, Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
