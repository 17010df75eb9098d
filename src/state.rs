//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ClickRecorder, LinkService, StatsService};
use crate::infrastructure::logging::EventReporter;
use crate::infrastructure::persistence::{JsonLinkRepository, JsonStatsRepository, JsonStore};

/// Process-wide state: the services over the single shared store, plus the
/// injected event reporter.
///
/// The store itself is kept here too so the health endpoint can inspect it
/// and the server can flush it on shutdown.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<JsonLinkRepository>>,
    pub stats_service: Arc<StatsService<JsonLinkRepository, JsonStatsRepository>>,
    pub click_recorder: Arc<ClickRecorder<JsonStatsRepository, JsonLinkRepository>>,
    pub reporter: Arc<dyn EventReporter>,
    pub store: Arc<JsonStore>,
}
