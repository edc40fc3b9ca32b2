use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::format::{change_text, format_value, relative_age, secondary_text};
use super::styles::{change_tone, plan_color, severity_tone, Tone, OFFLINE_TONE, ONLINE_TONE};
use super::{render_snapshot, RenderTarget};
use crate::api::{
    Alert, AlertId, DashboardSnapshot, MetricCard, MetricKey, MetricUnit, PlanShare,
    RevenuePoint, RouterId, RouterStatus, Severity, SkipReport, UsagePoint,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCardView {
    pub key: MetricKey,
    pub title: String,
    pub value_text: String,
    pub change_text: Option<String>,
    pub secondary_text: Option<String>,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueBarView {
    pub period: String,
    pub revenue: f64,
    pub customers: usize,
    pub revenue_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSliceView {
    pub plan_name: String,
    pub percentage: u32,
    /// `Basic 10Mbps: 45%`
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageBarView {
    pub time_label: String,
    /// Absent buckets stay absent so the chart draws a gap.
    pub utilization_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRowView {
    pub id: AlertId,
    pub severity: Severity,
    pub title: String,
    pub detail: String,
    pub age_text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterRowView {
    pub id: RouterId,
    pub status_text: String,
    pub load_text: String,
    pub tone: Tone,
}

/// Pre-formatted dashboard, ready for a front end to bind without further logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub currency_code: String,
    pub metrics: Vec<MetricCardView>,
    pub revenue: Vec<RevenueBarView>,
    pub plans: Vec<PlanSliceView>,
    pub usage: Vec<UsageBarView>,
    pub alerts: Vec<AlertRowView>,
    pub routers: Vec<RouterRowView>,
    pub data_quality_warning: Option<String>,
}

impl DashboardView {
    pub fn new(currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            metrics: Vec::new(),
            revenue: Vec::new(),
            plans: Vec::new(),
            usage: Vec::new(),
            alerts: Vec::new(),
            routers: Vec::new(),
            data_quality_warning: None,
        }
    }

    pub fn from_snapshot(snapshot: &DashboardSnapshot, currency_code: impl Into<String>) -> Self {
        let mut view = Self::new(currency_code);
        render_snapshot(snapshot, &mut view);
        view
    }

    fn card_view(&self, card: &MetricCard) -> MetricCardView {
        MetricCardView {
            key: card.key,
            title: card.title.clone(),
            value_text: format_value(card.value, card.unit, &self.currency_code),
            change_text: change_text(card),
            secondary_text: card
                .secondary
                .as_ref()
                .map(|s| secondary_text(s, &self.currency_code)),
            tone: change_tone(card.change_type),
        }
    }
}

impl RenderTarget for DashboardView {
    fn metric_cards(&mut self, cards: &[MetricCard]) {
        self.metrics = cards.iter().map(|card| self.card_view(card)).collect();
    }

    fn revenue_trend(&mut self, points: &[RevenuePoint]) {
        self.revenue = points
            .iter()
            .map(|p| RevenueBarView {
                period: p.period.clone(),
                revenue: p.revenue,
                customers: p.customers,
                revenue_text: format_value(p.revenue, MetricUnit::Currency, &self.currency_code),
            })
            .collect();
    }

    fn plan_distribution(&mut self, shares: &[PlanShare]) {
        self.plans = shares
            .iter()
            .enumerate()
            .map(|(index, share)| PlanSliceView {
                plan_name: share.plan_name.clone(),
                percentage: share.percentage,
                label: format!("{}: {}%", share.plan_name, share.percentage),
                color: plan_color(index).to_string(),
            })
            .collect();
    }

    fn usage_series(&mut self, points: &[UsagePoint]) {
        self.usage = points
            .iter()
            .map(|p| UsageBarView {
                time_label: p.time_label.clone(),
                utilization_percent: p.utilization_percent,
            })
            .collect();
    }

    fn alert_feed(&mut self, alerts: &[Alert], now: DateTime<Utc>) {
        self.alerts = alerts
            .iter()
            .map(|a| AlertRowView {
                id: a.id.clone(),
                severity: a.severity,
                title: a.title.clone(),
                detail: a.detail.clone(),
                age_text: relative_age(a.occurred_at, now),
                tone: severity_tone(a.severity),
            })
            .collect();
    }

    fn router_status(&mut self, routers: &[RouterStatus]) {
        self.routers = routers
            .iter()
            .map(|r| RouterRowView {
                id: r.id.clone(),
                status_text: if r.online { "Online" } else { "Offline" }.to_string(),
                load_text: format!(
                    "Load: {}",
                    format_value(r.load_percent, MetricUnit::Percent, &self.currency_code)
                ),
                tone: if r.online { ONLINE_TONE } else { OFFLINE_TONE },
            })
            .collect();
    }

    fn data_quality(&mut self, skipped: &SkipReport) {
        self.data_quality_warning = (!skipped.is_clean()).then(|| {
            format!(
                "{} malformed record(s) were left out of these figures",
                skipped.total
            )
        });
    }
}
