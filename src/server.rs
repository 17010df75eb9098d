//! HTTP server initialization and runtime setup.
//!
//! Handles store lifecycle, service wiring, and the Axum serve loop.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::{ClickRecorder, LinkService, StatsService};
use crate::config::Config;
use crate::infrastructure::logging::{EventReporter, NullReporter, RemoteReporter};
use crate::infrastructure::persistence::{JsonLinkRepository, JsonStatsRepository, JsonStore};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The JSON-file store (parsed eagerly; a corrupt file fails startup)
/// - Repositories and services over it
/// - The remote event reporter, or a no-op one without collector config
/// - The Axum HTTP server, with a final store flush on graceful shutdown
///
/// # Errors
///
/// Returns an error if the store cannot be opened, the bind fails, or the
/// server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(JsonStore::open(&config.data_file).await?);
    tracing::info!("Store ready at {}", config.data_file.display());

    let link_repository = Arc::new(JsonLinkRepository::new(store.clone()));
    let stats_repository = Arc::new(JsonStatsRepository::new(store.clone()));

    let link_service = Arc::new(LinkService::new(
        link_repository.clone(),
        config.base_url.clone(),
        config.default_validity_minutes,
    ));
    let stats_service = Arc::new(StatsService::new(
        link_repository.clone(),
        stats_repository.clone(),
    ));
    let click_recorder = Arc::new(ClickRecorder::new(stats_repository, link_repository));

    let reporter: Arc<dyn EventReporter> = match (&config.log_endpoint, &config.log_token) {
        (Some(endpoint), Some(token)) => {
            tracing::info!("Remote event reporting enabled ({endpoint})");
            Arc::new(RemoteReporter::new(endpoint.clone(), token.clone()))
        }
        _ => {
            tracing::info!("Remote event reporting disabled");
            Arc::new(NullReporter::new())
        }
    };

    let state = AppState {
        link_service,
        stats_service,
        click_recorder,
        reporter,
        store: store.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.flush().await?;
    tracing::info!("Store flushed, bye");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
