//! Raw records as delivered by the upstream collaborators.
//!
//! Nothing here is validated: the aggregator decides which records are usable
//! and reports the rest as skipped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InputKind;

crate::define_id_type!(CustomerId);
crate::define_id_type!(RouterId);
crate::define_id_type!(AlertId);

/// A customer account from the subscription store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    pub joined_at: DateTime<Utc>,
}

/// One billing line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingRecord {
    pub customer_id: CustomerId,
    pub amount: f64,
    pub billed_at: DateTime<Utc>,
}

/// A health ping reported by the monitoring system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterPing {
    pub router_id: RouterId,
    pub received_at: DateTime<Utc>,
    pub load_percent: f64,
    pub reachable: bool,
}

/// A plan subscription held by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub customer_id: CustomerId,
    pub plan_name: String,
    pub active: bool,
}

/// An alert event as emitted by the event source. Severity is free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAlert {
    pub id: AlertId,
    pub severity: String,
    pub title: String,
    pub detail: String,
    pub occurred_at: DateTime<Utc>,
}

/// Router inventory entry, including the last flag the monitoring system stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterRecord {
    pub id: RouterId,
    pub online: bool,
    pub load_percent: f64,
}

/// Everything one aggregation call consumes.
///
/// `None` means the collaborator delivered nothing at all, which is different
/// from delivering an empty collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardInputs {
    pub customers: Option<Vec<CustomerRecord>>,
    pub billing_records: Option<Vec<BillingRecord>>,
    pub pings: Option<Vec<RouterPing>>,
    pub subscriptions: Option<Vec<Subscription>>,
    pub alerts: Option<Vec<RawAlert>>,
    pub routers: Option<Vec<RouterRecord>>,
}

impl DashboardInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(mut self, customers: Vec<CustomerRecord>) -> Self {
        self.customers = Some(customers);
        self
    }

    pub fn with_billing_records(mut self, records: Vec<BillingRecord>) -> Self {
        self.billing_records = Some(records);
        self
    }

    pub fn with_pings(mut self, pings: Vec<RouterPing>) -> Self {
        self.pings = Some(pings);
        self
    }

    pub fn with_subscriptions(mut self, subscriptions: Vec<Subscription>) -> Self {
        self.subscriptions = Some(subscriptions);
        self
    }

    pub fn with_alerts(mut self, alerts: Vec<RawAlert>) -> Self {
        self.alerts = Some(alerts);
        self
    }

    pub fn with_routers(mut self, routers: Vec<RouterRecord>) -> Self {
        self.routers = Some(routers);
        self
    }

    /// Whether the collaborator behind `kind` delivered anything.
    pub fn is_present(&self, kind: InputKind) -> bool {
        match kind {
            InputKind::Customers => self.customers.is_some(),
            InputKind::BillingRecords => self.billing_records.is_some(),
            InputKind::Pings => self.pings.is_some(),
            InputKind::Subscriptions => self.subscriptions.is_some(),
            InputKind::Alerts => self.alerts.is_some(),
            InputKind::Routers => self.routers.is_some(),
        }
    }
}
