//! In-memory local repository implementation.
//!
//! This module provides a local implementation of [`DashboardRepository`]
//! suitable for unit testing and local development. All data is stored in
//! memory, providing fast, deterministic, and isolated execution.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::BTreeSet;
use std::sync::Arc;

use super::sample;
use crate::db::repository::{DashboardRepository, RepositoryError, RepositoryResult};
use crate::error::InputKind;
use crate::models::{
    BillingRecord, CustomerRecord, RawAlert, RouterPing, RouterRecord, Subscription,
};

/// In-memory local repository.
///
/// Collections can be marked unavailable to simulate a collaborator outage.
///
/// # Example
/// ```
/// use isp_dashboard::db::repositories::LocalRepository;
/// use isp_dashboard::error::InputKind;
///
/// let repo = LocalRepository::new();
/// repo.set_unavailable(InputKind::Pings, true);
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    customers: Vec<CustomerRecord>,
    billing_records: Vec<BillingRecord>,
    pings: Vec<RouterPing>,
    subscriptions: Vec<Subscription>,
    alerts: Vec<RawAlert>,
    routers: Vec<RouterRecord>,

    // Collections that fail on fetch
    unavailable: BTreeSet<InputKind>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            customers: Vec::new(),
            billing_records: Vec::new(),
            pings: Vec::new(),
            subscriptions: Vec::new(),
            alerts: Vec::new(),
            routers: Vec::new(),
            unavailable: BTreeSet::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with the reference dashboard data, laid out
    /// relative to `now` (six months of billing, a day of pings, two alerts).
    pub fn with_sample_data(now: DateTime<Utc>) -> Self {
        let repo = Self::new();
        repo.seed_customers(sample::customers(now));
        repo.seed_billing_records(sample::billing_records(now));
        repo.seed_subscriptions(sample::subscriptions());
        repo.seed_router_pings(sample::router_pings(now));
        repo.seed_routers(sample::routers());
        repo.seed_alerts(sample::alerts(now));
        repo
    }

    pub fn seed_customers(&self, records: impl IntoIterator<Item = CustomerRecord>) {
        self.data.write().customers.extend(records);
    }

    pub fn seed_billing_records(&self, records: impl IntoIterator<Item = BillingRecord>) {
        self.data.write().billing_records.extend(records);
    }

    pub fn seed_router_pings(&self, records: impl IntoIterator<Item = RouterPing>) {
        self.data.write().pings.extend(records);
    }

    pub fn seed_subscriptions(&self, records: impl IntoIterator<Item = Subscription>) {
        self.data.write().subscriptions.extend(records);
    }

    pub fn seed_alerts(&self, records: impl IntoIterator<Item = RawAlert>) {
        self.data.write().alerts.extend(records);
    }

    pub fn seed_routers(&self, records: impl IntoIterator<Item = RouterRecord>) {
        self.data.write().routers.extend(records);
    }

    /// Remove every stored record, keeping availability flags.
    pub fn clear(&self) {
        let mut data = self.data.write();
        data.customers.clear();
        data.billing_records.clear();
        data.pings.clear();
        data.subscriptions.clear();
        data.alerts.clear();
        data.routers.clear();
    }

    /// Make fetches of one collection fail (or succeed again).
    pub fn set_unavailable(&self, kind: InputKind, unavailable: bool) {
        let mut data = self.data.write();
        if unavailable {
            data.unavailable.insert(kind);
        } else {
            data.unavailable.remove(&kind);
        }
    }

    /// Set the health status (for testing).
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clone one collection out, failing if it is marked unavailable.
    fn read_collection<T: Clone>(
        &self,
        kind: InputKind,
        select: impl FnOnce(&LocalData) -> &Vec<T>,
    ) -> RepositoryResult<Vec<T>> {
        let data = self.data.read();
        if data.unavailable.contains(&kind) {
            return Err(RepositoryError::unreachable(
                kind,
                format!("{} source unavailable", kind),
            ));
        }
        Ok(select(&data).clone())
    }
}

#[async_trait]
impl DashboardRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn fetch_customers(&self) -> RepositoryResult<Vec<CustomerRecord>> {
        self.read_collection(InputKind::Customers, |d| &d.customers)
    }

    async fn fetch_billing_records(&self) -> RepositoryResult<Vec<BillingRecord>> {
        self.read_collection(InputKind::BillingRecords, |d| &d.billing_records)
    }

    async fn fetch_router_pings(&self) -> RepositoryResult<Vec<RouterPing>> {
        self.read_collection(InputKind::Pings, |d| &d.pings)
    }

    async fn fetch_subscriptions(&self) -> RepositoryResult<Vec<Subscription>> {
        self.read_collection(InputKind::Subscriptions, |d| &d.subscriptions)
    }

    async fn fetch_alerts(&self) -> RepositoryResult<Vec<RawAlert>> {
        self.read_collection(InputKind::Alerts, |d| &d.alerts)
    }

    async fn fetch_routers(&self) -> RepositoryResult<Vec<RouterRecord>> {
        self.read_collection(InputKind::Routers, |d| &d.routers)
    }
}
