//! Data Transfer Objects for the HTTP API.
//!
//! Snapshot and view types already derive Serialize/Deserialize and are
//! returned as-is; only the request query and health body live here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::api::DashboardSnapshot;
pub use crate::render::DashboardView;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Repository status
    pub repository: String,
}

/// Query parameters for the snapshot endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotQuery {
    /// Snapshot instant (RFC 3339); the current time when omitted
    #[serde(default)]
    pub at: Option<DateTime<Utc>>,
}

impl SnapshotQuery {
    pub fn instant(&self) -> DateTime<Utc> {
        self.at.unwrap_or_else(Utc::now)
    }
}
