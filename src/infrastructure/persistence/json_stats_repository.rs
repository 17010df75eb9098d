//! JSON-file implementation of the click event repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::json_store::JsonStore;
use super::map_store_error;
use crate::domain::entities::Click;
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// Click event repository over the shared [`JsonStore`].
pub struct JsonStatsRepository {
    store: Arc<JsonStore>,
}

impl JsonStatsRepository {
    /// Creates a new repository over the shared store.
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl StatsRepository for JsonStatsRepository {
    async fn append_click(&self, click: Click) -> Result<(), AppError> {
        self.store.append_click(click).await.map_err(map_store_error)
    }

    async fn find_clicks_by_code(&self, code: &str) -> Result<Vec<Click>, AppError> {
        Ok(self.store.clicks_for(code).await)
    }
}
