//! Presentation contract.
//!
//! A [`RenderTarget`] receives each display shape of a snapshot in turn; the
//! chart or widget binding behind it is its own business. [`DashboardView`]
//! is the built-in target producing a serialisable, pre-formatted view.

use chrono::{DateTime, Utc};

use crate::api::{
    Alert, DashboardSnapshot, MetricCard, PlanShare, RevenuePoint, RouterStatus, SkipReport,
    UsagePoint,
};

pub mod format;
pub mod styles;
pub mod view;

pub use styles::Tone;
pub use view::DashboardView;

/// A consumer of dashboard display data, one method per panel.
pub trait RenderTarget {
    fn metric_cards(&mut self, cards: &[MetricCard]);

    fn revenue_trend(&mut self, points: &[RevenuePoint]);

    fn plan_distribution(&mut self, shares: &[PlanShare]);

    fn usage_series(&mut self, points: &[UsagePoint]);

    /// `now` is the snapshot instant, for relative timestamps.
    fn alert_feed(&mut self, alerts: &[Alert], now: DateTime<Utc>);

    fn router_status(&mut self, routers: &[RouterStatus]);

    /// Called last. Targets that do not surface data quality can ignore it.
    fn data_quality(&mut self, _skipped: &SkipReport) {}
}

/// Drive `target` through every panel of `snapshot`, in display order.
pub fn render_snapshot<T: RenderTarget + ?Sized>(snapshot: &DashboardSnapshot, target: &mut T) {
    target.metric_cards(&snapshot.metrics);
    target.revenue_trend(&snapshot.revenue_trend);
    target.plan_distribution(&snapshot.plan_distribution);
    target.usage_series(&snapshot.usage_series);
    target.alert_feed(&snapshot.alerts, snapshot.generated_at);
    target.router_status(&snapshot.routers);
    target.data_quality(&snapshot.skipped);
}
