//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AggregatorConfig;
use crate::db::repository::DashboardRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of the raw dashboard collections
    pub repository: Arc<dyn DashboardRepository>,
    /// Validated aggregator settings
    pub config: Arc<AggregatorConfig>,
}

impl AppState {
    pub fn new(repository: Arc<dyn DashboardRepository>, config: AggregatorConfig) -> Self {
        Self {
            repository,
            config: Arc::new(config),
        }
    }
}
