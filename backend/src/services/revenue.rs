use std::collections::{BTreeMap, HashSet};

use crate::api::RevenuePoint;
use crate::models::{BillingRecord, MonthPeriod};

#[derive(Default)]
struct MonthAccumulator<'a> {
    revenue: f64,
    customers: HashSet<&'a str>,
}

/// Group billing items by calendar month.
///
/// Emits one point per month that has at least one item, ascending by month.
/// Months without billing are left out rather than filled with zeros.
pub fn compute_revenue_trend(records: &[&BillingRecord]) -> Vec<RevenuePoint> {
    let mut by_month: BTreeMap<MonthPeriod, MonthAccumulator> = BTreeMap::new();

    for record in records {
        let acc = by_month.entry(MonthPeriod::of(record.billed_at)).or_default();
        acc.revenue += record.amount;
        acc.customers.insert(record.customer_id.as_str());
    }

    by_month
        .into_iter()
        .map(|(month, acc)| RevenuePoint {
            period: month.label(),
            period_start: month.start(),
            revenue: acc.revenue,
            customers: acc.customers.len(),
        })
        .collect()
}

/// Total billed in `month`, or `None` when nothing was billed in it.
pub fn revenue_in_month(records: &[&BillingRecord], month: MonthPeriod) -> Option<f64> {
    let mut in_month = records
        .iter()
        .filter(|r| MonthPeriod::of(r.billed_at) == month)
        .peekable();
    in_month.peek()?;
    Some(in_month.map(|r| r.amount).sum())
}

#[cfg(test)]
#[path = "revenue_tests.rs"]
mod revenue_tests;
