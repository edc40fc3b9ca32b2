//! Snapshot assembly.
//!
//! [`build_snapshot`] is the single entry point of the aggregator: it checks
//! the configuration and the presence of required inputs, filters malformed
//! records into a [`SkipReport`], and derives every display dataset from the
//! same validated records so the panels agree with each other.

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::api::{DashboardSnapshot, SkipReport};
use crate::config::AggregatorConfig;
use crate::db::repository::DashboardRepository;
use crate::db::services::load_inputs;
use crate::error::{AggregationError, AggregationResult, InputKind};
use crate::models::DashboardInputs;

use super::alerts::compute_alert_feed;
use super::metrics::compute_metric_cards;
use super::plans::compute_plan_distribution;
use super::revenue::compute_revenue_trend;
use super::routers::compute_router_status;
use super::sanitize;
use super::usage::compute_usage_series;

fn check_inputs(inputs: &DashboardInputs) -> AggregationResult<()> {
    for kind in InputKind::ALL {
        if inputs.is_present(kind) {
            continue;
        }
        if kind.is_required() {
            return Err(AggregationError::missing(kind));
        }
        warn!("No {} supplied; treating as empty", kind);
    }
    Ok(())
}

/// Build one point-in-time snapshot from materialised inputs.
///
/// Pure and synchronous: the same inputs, instant and configuration always
/// yield the same snapshot.
///
/// # Errors
///
/// * [`AggregationError::InvalidConfiguration`] if `config` fails validation.
/// * [`AggregationError::MissingInput`] naming the first absent required
///   collection (customers, billing records, subscriptions).
pub fn build_snapshot(
    inputs: &DashboardInputs,
    now: DateTime<Utc>,
    config: &AggregatorConfig,
) -> AggregationResult<DashboardSnapshot> {
    config.validate()?;
    check_inputs(inputs)?;

    let mut skipped = SkipReport::new();

    let customers = sanitize::valid_customers(
        inputs.customers.as_deref().unwrap_or_default(),
        &mut skipped,
    );
    let billing = sanitize::valid_billing_records(
        inputs.billing_records.as_deref().unwrap_or_default(),
        &mut skipped,
    );
    let pings = sanitize::valid_pings(inputs.pings.as_deref().unwrap_or_default(), &mut skipped);
    let subscriptions = sanitize::valid_subscriptions(
        inputs.subscriptions.as_deref().unwrap_or_default(),
        &mut skipped,
    );
    let alerts = sanitize::parse_alerts(inputs.alerts.as_deref().unwrap_or_default(), &mut skipped);
    let inventory =
        sanitize::valid_routers(inputs.routers.as_deref().unwrap_or_default(), &mut skipped);

    let revenue_trend = compute_revenue_trend(&billing);
    let plan_distribution = compute_plan_distribution(&subscriptions);
    let usage_series = compute_usage_series(&pings, now, config.usage_bucket_minutes);
    let alerts = compute_alert_feed(
        alerts,
        now,
        config.alert_lookback(),
        config.alert_max_count,
    );
    let routers = compute_router_status(&inventory, &pings, now, config.router_staleness());
    let metrics = compute_metric_cards(
        &customers,
        &billing,
        &subscriptions,
        &routers,
        &usage_series,
        now,
    );

    if !skipped.is_clean() {
        warn!(
            "Skipped {} malformed record(s) while building snapshot at {}",
            skipped.total, now
        );
    }
    info!(
        "Built snapshot at {}: {} months, {} plans, {} alerts, {} routers",
        now,
        revenue_trend.len(),
        plan_distribution.len(),
        alerts.len(),
        routers.len()
    );

    Ok(DashboardSnapshot {
        generated_at: now,
        metrics,
        revenue_trend,
        plan_distribution,
        usage_series,
        alerts,
        routers,
        skipped,
    })
}

/// Fetch inputs from `repo` and build a snapshot from them.
///
/// Collections the repository fails to deliver are treated as absent.
pub async fn snapshot_from_repository<R: DashboardRepository + ?Sized>(
    repo: &R,
    now: DateTime<Utc>,
    config: &AggregatorConfig,
) -> AggregationResult<DashboardSnapshot> {
    let inputs = load_inputs(repo).await;
    build_snapshot(&inputs, now, config)
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
