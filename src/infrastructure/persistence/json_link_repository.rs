//! JSON-file implementation of the link repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::json_store::{JsonStore, StoreError};
use super::map_store_error;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Link repository over the shared [`JsonStore`].
pub struct JsonLinkRepository {
    store: Arc<JsonStore>,
}

impl JsonLinkRepository {
    /// Creates a new repository over the shared store.
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LinkRepository for JsonLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.store.insert_link(new_link).await.map_err(|e| match e {
            StoreError::DuplicateCode(code) => {
                AppError::conflict("Shortcode already in use", json!({ "code": code }))
            }
            other => map_store_error(other),
        })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.store.find_link(code).await)
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        // Unknown codes are silently ignored; the caller just confirmed the
        // record exists, so a miss here means it raced with nothing we track.
        self.store
            .increment_clicks(code)
            .await
            .map(|_| ())
            .map_err(map_store_error)
    }
}
