use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::api::{
    ChangeType, MetricCard, MetricKey, MetricUnit, RouterStatus, SecondaryValue, UsagePoint,
};
use crate::models::{BillingRecord, CustomerRecord, MonthPeriod, Subscription};

use super::revenue::revenue_in_month;
use super::routers::mean_online_load;
use super::usage::peak_utilization;

/// Relative change of `value` against `previous`, and its classification.
///
/// Returns no ratio when there is no usable baseline (absent, zero or not
/// finite). Non-directional metrics keep the ratio but are always neutral.
pub fn classify_change(
    value: f64,
    previous: Option<f64>,
    directional: bool,
) -> (Option<f64>, ChangeType) {
    let previous = match previous {
        Some(p) if p.is_finite() && p != 0.0 => p,
        _ => return (None, ChangeType::Neutral),
    };

    let ratio = (value - previous) / previous;
    if !ratio.is_finite() {
        return (None, ChangeType::Neutral);
    }

    let change_type = if !directional || ratio == 0.0 {
        ChangeType::Neutral
    } else if ratio > 0.0 {
        ChangeType::Positive
    } else {
        ChangeType::Negative
    };

    (Some(ratio), change_type)
}

fn card(
    key: MetricKey,
    value: f64,
    previous_value: Option<f64>,
    secondary: Option<SecondaryValue>,
) -> MetricCard {
    let (change, change_type) = classify_change(value, previous_value, key.is_directional());
    MetricCard {
        key,
        title: key.title().to_string(),
        value,
        previous_value,
        unit: key.unit(),
        change,
        change_type,
        secondary,
    }
}

/// The four headline cards, in [`MetricKey::ALL`] order.
pub fn compute_metric_cards(
    customers: &[&CustomerRecord],
    billing: &[&BillingRecord],
    subscriptions: &[&Subscription],
    routers: &[RouterStatus],
    usage: &[UsagePoint],
    now: DateTime<Utc>,
) -> Vec<MetricCard> {
    let month = MonthPeriod::of(now);
    let month_start = month.start_instant();

    let joined: Vec<&CustomerRecord> = customers
        .iter()
        .copied()
        .filter(|c| c.joined_at <= now)
        .collect();
    let joined_before_month = joined.iter().filter(|c| c.joined_at < month_start).count();

    let total_customers = card(
        MetricKey::TotalCustomers,
        joined.len() as f64,
        Some(joined_before_month as f64),
        None,
    );

    let monthly_revenue = card(
        MetricKey::MonthlyRevenue,
        revenue_in_month(billing, month).unwrap_or(0.0),
        revenue_in_month(billing, month.previous()),
        None,
    );

    let subscribed: HashSet<&str> = subscriptions
        .iter()
        .filter(|s| s.active)
        .map(|s| s.customer_id.as_str())
        .collect();
    let connected = joined
        .iter()
        .filter(|c| subscribed.contains(c.id.as_str()))
        .count();
    let connected_share = (!joined.is_empty()).then(|| SecondaryValue {
        label: "Connected".to_string(),
        value: connected as f64 / joined.len() as f64 * 100.0,
        unit: MetricUnit::Percent,
    });
    let active_connections = card(
        MetricKey::ActiveConnections,
        connected as f64,
        None,
        connected_share,
    );

    let peak = peak_utilization(usage).map(|value| SecondaryValue {
        label: "Peak".to_string(),
        value,
        unit: MetricUnit::Percent,
    });
    let network_load = card(MetricKey::NetworkLoad, mean_online_load(routers), None, peak);

    vec![total_customers, monthly_revenue, active_connections, network_load]
}
