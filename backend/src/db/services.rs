//! High-level repository service layer.
//!
//! Repository-agnostic operations that work with any [`DashboardRepository`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, render targets)           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - Concurrent fetch of all raw collections              │
//! │  - Collaborator outages mapped to absent inputs         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!             ┌───────▼─────────────────┐
//!             │ Local Repository        │
//!             │ (in-memory)             │
//!             └─────────────────────────┘
//! ```

use log::{debug, warn};

use super::repository::{DashboardRepository, RepositoryResult};
use crate::error::InputKind;
use crate::models::DashboardInputs;

/// Check if the backing store is healthy.
pub async fn health_check<R: DashboardRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Fetch every raw collection the aggregator consumes.
///
/// Fetches run concurrently. A failed fetch does not fail the call: the
/// collection is left absent so the aggregator can decide whether that is
/// fatal (required inputs) or just means "no data" (optional inputs).
pub async fn load_inputs<R: DashboardRepository + ?Sized>(repo: &R) -> DashboardInputs {
    let (customers, billing_records, pings, subscriptions, alerts, routers) = tokio::join!(
        repo.fetch_customers(),
        repo.fetch_billing_records(),
        repo.fetch_router_pings(),
        repo.fetch_subscriptions(),
        repo.fetch_alerts(),
        repo.fetch_routers(),
    );

    DashboardInputs {
        customers: settle(InputKind::Customers, customers),
        billing_records: settle(InputKind::BillingRecords, billing_records),
        pings: settle(InputKind::Pings, pings),
        subscriptions: settle(InputKind::Subscriptions, subscriptions),
        alerts: settle(InputKind::Alerts, alerts),
        routers: settle(InputKind::Routers, routers),
    }
}

fn settle<T>(kind: InputKind, result: RepositoryResult<Vec<T>>) -> Option<Vec<T>> {
    match result {
        Ok(records) => {
            debug!("Fetched {} {} records", records.len(), kind);
            Some(records)
        }
        Err(e) => {
            warn!("Failed to fetch {}: {}", kind, e);
            None
        }
    }
}
