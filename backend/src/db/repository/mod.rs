//! Repository trait for the upstream dashboard data sources.
//!
//! The dashboard reads from four collaborators: the customer/subscription
//! store, the billing system, the monitoring system and the alert source.
//! [`DashboardRepository`] puts them behind one async interface so the
//! aggregator never learns where records come from.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::models::{
    BillingRecord, CustomerRecord, RawAlert, RouterPing, RouterRecord, Subscription,
};

/// Source of raw dashboard records.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across HTTP handlers.
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Check the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Customer accounts from the subscription store.
    async fn fetch_customers(&self) -> RepositoryResult<Vec<CustomerRecord>>;

    /// Billing line items from the billing system.
    async fn fetch_billing_records(&self) -> RepositoryResult<Vec<BillingRecord>>;

    /// Router pings from the monitoring system.
    async fn fetch_router_pings(&self) -> RepositoryResult<Vec<RouterPing>>;

    /// Plan subscriptions from the subscription store.
    async fn fetch_subscriptions(&self) -> RepositoryResult<Vec<Subscription>>;

    /// Raw alert events from the event source.
    async fn fetch_alerts(&self) -> RepositoryResult<Vec<RawAlert>>;

    /// Router inventory from the monitoring system.
    async fn fetch_routers(&self) -> RepositoryResult<Vec<RouterRecord>>;
}
