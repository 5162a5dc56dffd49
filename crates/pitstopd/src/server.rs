//! HTTP server for pitstopd.

use crate::routes;
use anyhow::Result;
use axum::Router;
use pitstop_common::{Catalog, GuidanceTable, RiskThresholds};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
///
/// Catalog, guidance, and thresholds are read-only after startup, so
/// handlers share them without locking.
pub struct AppState {
    pub catalog: Catalog,
    pub guidance: GuidanceTable,
    pub thresholds: RiskThresholds,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(catalog: Catalog, guidance: GuidanceTable, thresholds: RiskThresholds) -> Self {
        Self {
            catalog,
            guidance,
            thresholds,
            start_time: Instant::now(),
        }
    }
}

/// Assemble the full router. Exposed separately from `run` so tests can
/// drive it without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::checklist_routes())
        .merge(routes::api_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until the process is stopped.
pub async fn run(state: AppState, bind_addr: &str) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("  Listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
