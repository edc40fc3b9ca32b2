//! Property-based tests for the snapshot aggregator.
//!
//! Uses proptest to check the aggregate invariants over randomly generated
//! record collections, including malformed ones.

mod support;

use chrono::Duration;
use proptest::prelude::*;

use isp_dashboard::config::AggregatorConfig;
use isp_dashboard::models::{BillingRecord, DashboardInputs, RawAlert, RouterPing, Subscription};
use isp_dashboard::services::build_snapshot;

// ============================================================================
// Test Strategies
// ============================================================================

/// Billing items over roughly a year before the fixed instant; some with
/// negative amounts or blank customers that must be skipped.
fn billing_strategy() -> impl Strategy<Value = Vec<BillingRecord>> {
    prop::collection::vec((0u32..25, -500i64..100_000, 0i64..(365 * 24)), 0..150).prop_map(
        |items| {
            items
                .into_iter()
                .map(|(customer, amount, hours_ago)| BillingRecord {
                    customer_id: if customer == 0 {
                        "".into()
                    } else {
                        format!("CUST-{:04}", customer).into()
                    },
                    amount: amount as f64,
                    billed_at: support::fixed_now() - Duration::hours(hours_ago),
                })
                .collect()
        },
    )
}

fn subscription_strategy() -> impl Strategy<Value = Vec<Subscription>> {
    let plans = prop::sample::select(vec!["Basic", "Standard", "Premium", "Enterprise", "Gold"]);
    prop::collection::vec((0u32..500, plans, any::<bool>()), 0..300).prop_map(|items| {
        items
            .into_iter()
            .map(|(customer, plan, active)| Subscription {
                customer_id: format!("CUST-{:04}", customer).into(),
                plan_name: plan.to_string(),
                active,
            })
            .collect()
    })
}

fn ping_strategy() -> impl Strategy<Value = Vec<RouterPing>> {
    prop::collection::vec((0u32..6, 0i64..(48 * 60), -10.0f64..120.0, any::<bool>()), 0..200)
        .prop_map(|items| {
            items
                .into_iter()
                .map(|(router, minutes_ago, load, reachable)| RouterPing {
                    router_id: format!("MK-{:03}", router).into(),
                    received_at: support::fixed_now() - Duration::minutes(minutes_ago),
                    load_percent: load,
                    reachable,
                })
                .collect()
        })
}

fn alert_strategy() -> impl Strategy<Value = Vec<RawAlert>> {
    let severities = prop::sample::select(vec!["warning", "info", "critical", "urgent"]);
    prop::collection::vec((0u32..60, severities, -120i64..(48 * 60)), 0..60).prop_map(|items| {
        items
            .into_iter()
            .map(|(id, severity, minutes_ago)| RawAlert {
                id: format!("ALT-{:04}", id).into(),
                severity: severity.to_string(),
                title: "Alert".to_string(),
                detail: String::new(),
                occurred_at: support::fixed_now() - Duration::minutes(minutes_ago),
            })
            .collect()
    })
}

fn bucket_strategy() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![15u32, 30, 60, 120, 180, 240, 360, 480, 720, 1440])
}

fn inputs(
    billing: Vec<BillingRecord>,
    subscriptions: Vec<Subscription>,
    pings: Vec<RouterPing>,
    alerts: Vec<RawAlert>,
) -> DashboardInputs {
    DashboardInputs::new()
        .with_customers(Vec::new())
        .with_billing_records(billing)
        .with_subscriptions(subscriptions)
        .with_pings(pings)
        .with_alerts(alerts)
}

// ============================================================================
// Aggregate Properties
// ============================================================================

proptest! {
    /// Emitted monthly revenue sums to the total of the valid billing amounts
    #[test]
    fn prop_revenue_sum_matches_valid_amounts(billing in billing_strategy()) {
        let expected: f64 = billing
            .iter()
            .filter(|r| !r.customer_id.is_blank() && r.amount >= 0.0)
            .map(|r| r.amount)
            .sum();

        let snapshot = build_snapshot(
            &inputs(billing, Vec::new(), Vec::new(), Vec::new()),
            support::fixed_now(),
            &AggregatorConfig::default(),
        ).unwrap();

        let emitted: f64 = snapshot.revenue_trend.iter().map(|p| p.revenue).sum();
        prop_assert_eq!(emitted, expected);

        let starts: Vec<_> = snapshot.revenue_trend.iter().map(|p| p.period_start).collect();
        prop_assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }

    /// Plan shares add up to 100 and each is within a point of its exact share
    #[test]
    fn prop_plan_percentages_sum_to_100(subscriptions in subscription_strategy()) {
        let active = subscriptions.iter().filter(|s| s.active).count();

        let snapshot = build_snapshot(
            &inputs(Vec::new(), subscriptions, Vec::new(), Vec::new()),
            support::fixed_now(),
            &AggregatorConfig::default(),
        ).unwrap();
        let shares = &snapshot.plan_distribution;

        if active == 0 {
            prop_assert!(shares.is_empty());
        } else {
            let total: u32 = shares.iter().map(|s| s.percentage).sum();
            prop_assert_eq!(total, 100);
            for share in shares {
                let exact = share.subscribers as f64 * 100.0 / active as f64;
                prop_assert!((share.percentage as f64 - exact).abs() < 1.0);
            }
            prop_assert!(shares.windows(2).all(|w| w[0].subscribers >= w[1].subscribers));
        }
    }

    /// Every bucket of the day is emitted; absent exactly when it has no samples
    #[test]
    fn prop_usage_buckets_tile_the_day(pings in ping_strategy(), width in bucket_strategy()) {
        let config = AggregatorConfig { usage_bucket_minutes: width, ..AggregatorConfig::default() };
        let snapshot = build_snapshot(
            &inputs(Vec::new(), Vec::new(), pings, Vec::new()),
            support::fixed_now(),
            &config,
        ).unwrap();

        prop_assert_eq!(snapshot.usage_series.len(), (1440 / width) as usize);
        for point in &snapshot.usage_series {
            prop_assert_eq!(point.utilization_percent.is_none(), point.samples == 0);
            if let Some(value) = point.utilization_percent {
                prop_assert!((0.0..=100.0).contains(&value));
            }
        }
    }

    /// The alert feed is bounded, inside the window and newest first
    #[test]
    fn prop_alert_feed_is_bounded_and_ordered(alerts in alert_strategy(), max in 1usize..15) {
        let config = AggregatorConfig { alert_max_count: max, ..AggregatorConfig::default() };
        let now = support::fixed_now();
        let snapshot = build_snapshot(
            &inputs(Vec::new(), Vec::new(), Vec::new(), alerts),
            now,
            &config,
        ).unwrap();

        prop_assert!(snapshot.alerts.len() <= max);
        for alert in &snapshot.alerts {
            prop_assert!(alert.occurred_at <= now);
            prop_assert!(alert.occurred_at >= now - Duration::hours(24));
        }
        prop_assert!(snapshot
            .alerts
            .windows(2)
            .all(|w| w[0].occurred_at > w[1].occurred_at
                || (w[0].occurred_at == w[1].occurred_at && w[0].id < w[1].id)));
    }

    /// Identical inputs always produce identical snapshots
    #[test]
    fn prop_snapshot_is_idempotent(
        billing in billing_strategy(),
        subscriptions in subscription_strategy(),
        pings in ping_strategy(),
        alerts in alert_strategy(),
    ) {
        let data = inputs(billing, subscriptions, pings, alerts);
        let config = AggregatorConfig::default();

        let first = build_snapshot(&data, support::fixed_now(), &config).unwrap();
        let second = build_snapshot(&data, support::fixed_now(), &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
