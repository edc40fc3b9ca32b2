//! Service layer for the snapshot aggregator.
//!
//! Each panel of the dashboard has one compute function working on
//! already-validated records; [`snapshot::build_snapshot`] validates the raw
//! inputs once and feeds the same records to every panel.

pub mod alerts;
pub mod metrics;
pub mod plans;
pub mod revenue;
pub mod routers;
pub mod sanitize;
pub mod snapshot;
pub mod usage;

pub use alerts::compute_alert_feed;
pub use metrics::{classify_change, compute_metric_cards};
pub use plans::compute_plan_distribution;
pub use revenue::compute_revenue_trend;
pub use routers::compute_router_status;
pub use snapshot::{build_snapshot, snapshot_from_repository};
pub use usage::compute_usage_series;
