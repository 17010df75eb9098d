//! Infrastructure layer for persistence and external integrations.
//!
//! Implements the interfaces defined by the domain layer:
//!
//! - [`persistence`] - JSON-file-backed repository implementations
//! - [`logging`] - Remote log-collection client and no-op fallback

pub mod logging;
pub mod persistence;
