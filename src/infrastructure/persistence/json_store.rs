//! Shared JSON-file table holding URL records and click events.
//!
//! The store is process-wide singleton state: opened once at startup, held
//! behind [`AppState`](crate::state::AppState), flushed on shutdown. A single
//! `tokio::sync::RwLock` guards the document; every mutation takes the write
//! guard for the full check-mutate-flush sequence, which makes
//! [`JsonStore::insert_link`] an atomic insert-if-absent and serializes all
//! writers. Reads may run concurrently.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::entities::{Click, Link, NewLink};

/// Errors raised by the JSON-file store.
///
/// Mapped to [`crate::error::AppError`] at the repository boundary so that
/// storage details never leak into HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("shortcode already present: {0}")]
    DuplicateCode(String),

    #[error("store file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// On-disk document: one table of links, one of clicks.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    links: Vec<Link>,
    clicks: Vec<Click>,
}

/// JSON-file-backed record store.
///
/// When opened without a path the store is purely in-memory, which the test
/// suite uses. Lookups are linear scans; at the scale this service targets
/// the whole document stays small.
#[derive(Debug)]
pub struct JsonStore {
    path: Option<PathBuf>,
    data: RwLock<StoreData>,
}

impl JsonStore {
    /// Opens a store backed by the given file, creating it when missing.
    ///
    /// An existing file is parsed eagerly so a corrupt document fails startup
    /// instead of the first request.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let data = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let data: StoreData = serde_json::from_slice(&bytes)?;
                info!(
                    links = data.links.len(),
                    clicks = data.clicks.len(),
                    "loaded store from {}",
                    path.display()
                );
                data
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("store file {} not found, starting empty", path.display());
                StoreData::default()
            }
            Err(e) => return Err(e.into()),
        };

        let store = Self {
            path: Some(path),
            data: RwLock::new(data),
        };

        // Write the initial document so the file exists from startup on.
        store.flush().await?;

        Ok(store)
    }

    /// Creates a store with no backing file.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(StoreData::default()),
        }
    }

    /// Inserts a link if its code is absent; the check and the insert happen
    /// under one write guard.
    ///
    /// `created_at` is stamped here, at commit time.
    pub async fn insert_link(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let mut data = self.data.write().await;

        if data.links.iter().any(|l| l.code == new_link.code) {
            return Err(StoreError::DuplicateCode(new_link.code));
        }

        let link = Link::new(
            new_link.code,
            new_link.long_url,
            Utc::now(),
            new_link.expires_at,
        );
        data.links.push(link.clone());
        self.persist(&data).await?;

        Ok(link)
    }

    /// Looks up a link by code.
    pub async fn find_link(&self, code: &str) -> Option<Link> {
        let data = self.data.read().await;
        data.links.iter().find(|l| l.code == code).cloned()
    }

    /// Increments the click counter of a link.
    ///
    /// Returns whether the code was present; an unknown code leaves the
    /// store untouched.
    pub async fn increment_clicks(&self, code: &str) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;

        let Some(link) = data.links.iter_mut().find(|l| l.code == code) else {
            return Ok(false);
        };
        link.click_count += 1;
        self.persist(&data).await?;

        Ok(true)
    }

    /// Appends a click event.
    pub async fn append_click(&self, click: Click) -> Result<(), StoreError> {
        let mut data = self.data.write().await;
        data.clicks.push(click);
        self.persist(&data).await
    }

    /// Returns all click events for a code, in insertion order.
    pub async fn clicks_for(&self, code: &str) -> Vec<Click> {
        let data = self.data.read().await;
        data.clicks.iter().filter(|c| c.code == code).cloned().collect()
    }

    /// Number of link records currently held, live and expired.
    pub async fn link_count(&self) -> usize {
        self.data.read().await.links.len()
    }

    /// Rewrites the backing file from current state. No-op when in-memory.
    pub async fn flush(&self) -> Result<(), StoreError> {
        let data = self.data.read().await;
        self.persist(&data).await
    }

    /// Serializes the document and replaces the backing file.
    ///
    /// Writes to a sibling temp file and renames over the target, so a crash
    /// mid-write never leaves a truncated document behind.
    async fn persist(&self, data: &StoreData) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let json = serde_json::to_vec_pretty(data)?;
        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, path).await?;

        Ok(())
    }
}
