//! Reference dashboard data used to seed the local repository.
//!
//! Everything is laid out relative to a caller-supplied `now` so the sample
//! always looks current and two calls with the same instant agree exactly.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    BillingRecord, CustomerRecord, MonthPeriod, RawAlert, RouterPing, RouterRecord, Subscription,
    MINUTES_PER_DAY,
};

/// Monthly revenue (KES) and paying customers, oldest month first.
/// The last entry is the month containing `now`.
pub const MONTHLY_REVENUE: [(u64, usize); 6] = [
    (45_000, 120),
    (52_000, 135),
    (48_000, 128),
    (61_000, 156),
    (55_000, 142),
    (67_000, 168),
];

/// Customers holding an active subscription.
pub const ACTIVE_SUBSCRIBERS: usize = 156;

/// Plans offered, in display order.
pub const PLAN_NAMES: [&str; 4] = [
    "Basic 10Mbps",
    "Standard 25Mbps",
    "Premium 50Mbps",
    "Enterprise 100Mbps",
];

/// Mean utilisation per four-hour block of the day, starting at 00:00.
pub const USAGE_PROFILE: [f64; 6] = [45.0, 25.0, 75.0, 85.0, 95.0, 80.0];

/// Managed routers and their offset from the network-wide utilisation.
/// Offsets cancel out, so per-bucket means equal [`USAGE_PROFILE`].
pub const ROUTERS: [(&str, f64); 4] = [
    ("MK-001", 3.0),
    ("MK-002", -3.0),
    ("MK-003", 1.0),
    ("MK-004", -1.0),
];

fn total_customers() -> usize {
    MONTHLY_REVENUE.iter().map(|(_, c)| *c).max().unwrap_or(0)
}

fn customer_id(index: usize) -> String {
    format!("CUST-{:04}", index + 1)
}

/// The six sample months, oldest first, ending with the month containing `now`.
fn sample_months(now: DateTime<Utc>) -> Vec<MonthPeriod> {
    let mut months = Vec::with_capacity(MONTHLY_REVENUE.len());
    let mut month = MonthPeriod::of(now);
    for _ in 0..MONTHLY_REVENUE.len() {
        months.push(month);
        month = month.previous();
    }
    months.reverse();
    months
}

/// Customers join in the first sample month whose paying count exceeds their index.
pub fn customers(now: DateTime<Utc>) -> Vec<CustomerRecord> {
    let months = sample_months(now);
    (0..total_customers())
        .map(|index| {
            let joined = MONTHLY_REVENUE
                .iter()
                .zip(&months)
                .find(|((_, paying), _)| *paying > index)
                .map(|(_, month)| month.start_instant())
                .unwrap_or(now);
            CustomerRecord {
                id: customer_id(index).into(),
                name: format!("Customer {:04}", index + 1),
                joined_at: joined,
            }
        })
        .collect()
}

/// One line item per paying customer per month; the last payer absorbs the
/// rounding remainder so each month sums to its revenue exactly.
pub fn billing_records(now: DateTime<Utc>) -> Vec<BillingRecord> {
    let months = sample_months(now);
    let mut records = Vec::new();

    for ((revenue, paying), month) in MONTHLY_REVENUE.iter().zip(&months) {
        if *paying == 0 {
            continue;
        }
        let share = revenue / *paying as u64;
        let remainder = revenue - share * (*paying as u64 - 1);

        for index in 0..*paying {
            let amount = if index + 1 == *paying { remainder } else { share };
            records.push(BillingRecord {
                customer_id: customer_id(index).into(),
                amount: amount as f64,
                billed_at: month.start_instant() + Duration::seconds(index as i64),
            });
        }
    }

    records
}

/// Plans repeat in blocks of twenty customers (9 basic, 6 standard,
/// 4 premium, 1 enterprise), i.e. a 45/30/20/5 mix.
pub fn subscriptions() -> Vec<Subscription> {
    (0..total_customers())
        .map(|index| {
            let plan = match index % 20 {
                0..=8 => PLAN_NAMES[0],
                9..=14 => PLAN_NAMES[1],
                15..=18 => PLAN_NAMES[2],
                _ => PLAN_NAMES[3],
            };
            Subscription {
                customer_id: customer_id(index).into(),
                plan_name: plan.to_string(),
                active: index < ACTIVE_SUBSCRIBERS,
            }
        })
        .collect()
}

/// Hourly pings from every router over the last 24 hours; the newest is one
/// minute old.
pub fn router_pings(now: DateTime<Utc>) -> Vec<RouterPing> {
    let block_minutes = MINUTES_PER_DAY / USAGE_PROFILE.len() as u32;
    let mut pings = Vec::new();

    for hours_ago in 0..24 {
        let received_at = now - Duration::minutes(1) - Duration::hours(hours_ago);
        let block = (crate::models::minute_of_day(received_at) / block_minutes) as usize;
        let base = USAGE_PROFILE[block.min(USAGE_PROFILE.len() - 1)];

        for (router, offset) in ROUTERS {
            pings.push(RouterPing {
                router_id: router.into(),
                received_at,
                load_percent: (base + offset).clamp(0.0, 100.0),
                reachable: true,
            });
        }
    }

    pings
}

pub fn routers() -> Vec<RouterRecord> {
    ROUTERS
        .iter()
        .map(|(router, _)| RouterRecord {
            id: (*router).into(),
            online: true,
            load_percent: 0.0,
        })
        .collect()
}

pub fn alerts(now: DateTime<Utc>) -> Vec<RawAlert> {
    vec![
        RawAlert {
            id: "ALT-0001".into(),
            severity: "warning".to_string(),
            title: "High bandwidth usage detected".to_string(),
            detail: "Router MK-001 at 95% capacity".to_string(),
            occurred_at: now - Duration::minutes(2),
        },
        RawAlert {
            id: "ALT-0002".into(),
            severity: "info".to_string(),
            title: "New customer registration".to_string(),
            detail: "John Doe signed up for Premium plan".to_string(),
            occurred_at: now - Duration::minutes(15),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sample_months_end_at_now() {
        let months = sample_months(now());
        assert_eq!(months.len(), 6);
        assert_eq!(months.last().copied(), Some(MonthPeriod::of(now())));
        assert_eq!(months[0].label(), "Jan 2026");
    }

    #[test]
    fn test_billing_sums_match_monthly_revenue() {
        let records = billing_records(now());
        for ((revenue, _), month) in MONTHLY_REVENUE.iter().zip(sample_months(now())) {
            let total: f64 = records
                .iter()
                .filter(|r| MonthPeriod::of(r.billed_at) == month)
                .map(|r| r.amount)
                .sum();
            assert_eq!(total, *revenue as f64);
        }
    }

    #[test]
    fn test_customers_join_before_first_bill() {
        let customers = customers(now());
        assert_eq!(customers.len(), 168);
        for record in billing_records(now()) {
            let customer = customers.iter().find(|c| c.id == record.customer_id).unwrap();
            assert!(customer.joined_at <= record.billed_at);
        }
    }

    #[test]
    fn test_subscription_plan_mix() {
        let subs = subscriptions();
        assert_eq!(subs.iter().filter(|s| s.active).count(), ACTIVE_SUBSCRIBERS);
        let first_block: Vec<&str> = subs[..20].iter().map(|s| s.plan_name.as_str()).collect();
        assert_eq!(first_block.iter().filter(|p| **p == PLAN_NAMES[0]).count(), 9);
        assert_eq!(first_block.iter().filter(|p| **p == PLAN_NAMES[1]).count(), 6);
        assert_eq!(first_block.iter().filter(|p| **p == PLAN_NAMES[2]).count(), 4);
        assert_eq!(first_block.iter().filter(|p| **p == PLAN_NAMES[3]).count(), 1);
    }

    #[test]
    fn test_pings_cover_last_day_within_range() {
        let pings = router_pings(now());
        assert_eq!(pings.len(), 24 * ROUTERS.len());
        for ping in &pings {
            assert!(ping.received_at <= now());
            assert!(ping.received_at > now() - Duration::hours(24));
            assert!((0.0..=100.0).contains(&ping.load_percent));
        }
    }
}
