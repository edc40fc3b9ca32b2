use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alerts::Alert;
use super::metrics::MetricCard;
use super::plans::PlanShare;
use super::revenue::RevenuePoint;
use super::routers::RouterStatus;
use super::usage::UsagePoint;
use crate::error::InputKind;

// =========================================================
// Data-quality diagnostics
// =========================================================

/// Why a raw record was left out of the aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SkipReason {
    /// The record's identifier is empty.
    MissingId,
    /// The identifier was already seen earlier in the same collection.
    DuplicateId(String),
    /// A monetary amount that is negative, NaN or infinite.
    InvalidAmount,
    /// A load/utilisation figure outside [0, 100].
    LoadOutOfRange,
    /// A subscription without a plan name.
    BlankPlan,
    /// A severity label that is none of warning, info, critical.
    UnknownSeverity(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingId => write!(f, "missing id"),
            SkipReason::DuplicateId(id) => write!(f, "duplicate id {}", id),
            SkipReason::InvalidAmount => write!(f, "invalid amount"),
            SkipReason::LoadOutOfRange => write!(f, "load out of range"),
            SkipReason::BlankPlan => write!(f, "blank plan name"),
            SkipReason::UnknownSeverity(s) => write!(f, "unknown severity '{}'", s),
        }
    }
}

/// A single skipped record: which collection, its position there, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub source: InputKind,
    pub index: usize,
    pub reason: SkipReason,
}

/// Accumulated skip diagnostics for one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipReport {
    pub total: usize,
    pub records: Vec<SkippedRecord>,
}

impl SkipReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, source: InputKind, index: usize, reason: SkipReason) {
        log::debug!("Skipping {} record #{}: {}", source, index, reason);
        self.records.push(SkippedRecord {
            source,
            index,
            reason,
        });
        self.total = self.records.len();
    }

    pub fn is_clean(&self) -> bool {
        self.total == 0
    }

    /// Number of skipped records from one collection.
    pub fn count_for(&self, source: InputKind) -> usize {
        self.records.iter().filter(|r| r.source == source).count()
    }
}

// =========================================================
// Snapshot
// =========================================================

/// One consistent, point-in-time bundle of all dashboard display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub metrics: Vec<MetricCard>,
    pub revenue_trend: Vec<RevenuePoint>,
    pub plan_distribution: Vec<PlanShare>,
    pub usage_series: Vec<UsagePoint>,
    pub alerts: Vec<Alert>,
    pub routers: Vec<RouterStatus>,
    pub skipped: SkipReport,
}
