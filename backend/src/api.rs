//! Public API surface of the dashboard backend.
//!
//! This file consolidates the display types a presentation layer consumes.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::alerts::Alert;
pub use crate::routes::alerts::Severity;
pub use crate::routes::metrics::ChangeType;
pub use crate::routes::metrics::MetricCard;
pub use crate::routes::metrics::MetricKey;
pub use crate::routes::metrics::MetricUnit;
pub use crate::routes::metrics::SecondaryValue;
pub use crate::routes::plans::PlanShare;
pub use crate::routes::revenue::RevenuePoint;
pub use crate::routes::routers::RouterStatus;
pub use crate::routes::snapshot::DashboardSnapshot;
pub use crate::routes::snapshot::SkipReason;
pub use crate::routes::snapshot::SkipReport;
pub use crate::routes::snapshot::SkippedRecord;
pub use crate::routes::usage::UsagePoint;

pub use crate::models::{AlertId, CustomerId, RouterId};
