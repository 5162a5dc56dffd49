//! Pitstop Daemon - cybersecurity posture self-assessment service.
//!
//! Serves the checklist form, scores submissions, and renders remediation
//! guidance for every gap found.

use anyhow::Result;
use pitstop_common::{Catalog, GuidanceTable, PitstopConfig};
use pitstopd::server::{self, AppState};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Pitstop Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = PitstopConfig::load()?;

    let catalog = Catalog::standard();
    let guidance = GuidanceTable::standard();
    let thresholds = config.scoring.thresholds_for(catalog.len());
    thresholds.validate(catalog.len())?;

    info!(
        "Catalog ready: {} questions, low-risk cutoff {}, moderate cutoff {}",
        catalog.len(),
        thresholds.high,
        thresholds.mid
    );

    server::run(
        AppState::new(catalog, guidance, thresholds),
        &config.server.bind_addr,
    )
    .await
}
