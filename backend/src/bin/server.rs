//! ISP dashboard HTTP server binary.
//!
//! Loads configuration, seeds the local repository and serves the snapshot API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin isp-dashboard-server
//!
//! # Hourly usage buckets on port 9000
//! DASHBOARD_BUCKET_MINUTES=60 PORT=9000 cargo run --bin isp-dashboard-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: Repository backend (default: local)
//! - `DASHBOARD_*`: Aggregator overrides, see `isp_dashboard::config`
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use chrono::Utc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use isp_dashboard::config::DashboardConfig;
use isp_dashboard::db::RepositoryFactory;
use isp_dashboard::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting ISP dashboard server");

    let config = DashboardConfig::load()?;
    info!(
        "Aggregator: {} min buckets, {} h alert lookback, {} min router staleness",
        config.aggregator.usage_bucket_minutes,
        config.aggregator.alert_lookback_hours,
        config.aggregator.router_staleness_minutes
    );

    let repository = RepositoryFactory::from_settings(&config.repository, Utc::now())?;
    info!("Repository initialized ({})", config.repository.repo_type);

    let state = AppState::new(repository, config.aggregator.clone());
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Dashboard snapshot: http://{}/v1/dashboard/snapshot", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
