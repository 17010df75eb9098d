//! JSON-file repository implementations.
//!
//! A single [`JsonStore`] document holds both tables (links and clicks); the
//! repositories are thin trait adapters over it. The store is opened once in
//! [`crate::server::run`] and shared via `Arc`.

pub mod json_link_repository;
pub mod json_stats_repository;
pub mod json_store;

pub use json_link_repository::JsonLinkRepository;
pub use json_stats_repository::JsonStatsRepository;
pub use json_store::{JsonStore, StoreError};

use crate::error::AppError;
use serde_json::json;

/// Maps a store failure to the public error taxonomy.
///
/// Storage detail goes to the local diagnostic channel only; the response
/// body stays generic.
pub fn map_store_error(e: StoreError) -> AppError {
    tracing::error!("store operation failed: {e}");
    AppError::internal("Storage error", json!({}))
}
