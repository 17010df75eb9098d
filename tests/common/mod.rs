#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use linklet::application::services::{ClickRecorder, LinkService, StatsService};
use linklet::domain::entities::{Click, NewLink};
use linklet::infrastructure::logging::NullReporter;
use linklet::infrastructure::persistence::{JsonLinkRepository, JsonStatsRepository, JsonStore};
use linklet::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Builds an [`AppState`] over a fresh in-memory store.
///
/// The store handle is returned alongside so tests can seed and inspect it
/// directly.
pub fn create_test_state() -> (AppState, Arc<JsonStore>) {
    create_test_state_with(JsonStore::in_memory())
}

/// Builds an [`AppState`] over the given store (e.g. a file-backed one).
pub fn create_test_state_with(store: JsonStore) -> (AppState, Arc<JsonStore>) {
    let store = Arc::new(store);

    let link_repo = Arc::new(JsonLinkRepository::new(store.clone()));
    let stats_repo = Arc::new(JsonStatsRepository::new(store.clone()));

    let link_service = Arc::new(LinkService::new(
        link_repo.clone(),
        TEST_BASE_URL.to_string(),
        30,
    ));
    let stats_service = Arc::new(StatsService::new(link_repo.clone(), stats_repo.clone()));
    let click_recorder = Arc::new(ClickRecorder::new(stats_repo, link_repo));

    let state = AppState {
        link_service,
        stats_service,
        click_recorder,
        reporter: Arc::new(NullReporter::new()),
        store: store.clone(),
    };

    (state, store)
}

pub async fn create_test_link(store: &JsonStore, code: &str, url: &str) {
    store
        .insert_link(NewLink {
            code: code.to_string(),
            long_url: url.to_string(),
            expires_at: Utc::now() + Duration::minutes(30),
        })
        .await
        .unwrap();
}

pub async fn create_expired_link(store: &JsonStore, code: &str, url: &str) {
    store
        .insert_link(NewLink {
            code: code.to_string(),
            long_url: url.to_string(),
            expires_at: Utc::now() - Duration::hours(1),
        })
        .await
        .unwrap();
}

pub async fn create_test_click(store: &JsonStore, code: &str, referrer: Option<&str>) {
    store
        .append_click(Click::new(code.to_string(), Utc::now(), referrer))
        .await
        .unwrap();
}
