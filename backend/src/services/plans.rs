use std::collections::BTreeMap;

use crate::api::PlanShare;
use crate::models::Subscription;

/// Share of active subscriptions per plan, in whole percent.
///
/// Percentages are apportioned by largest remainder: every plan gets the
/// floor of its exact share, and the leftover points go to the largest
/// fractional parts. Each value is within one point of its exact share and
/// the set sums to exactly 100 whenever there is at least one subscription.
///
/// Plans are ordered by subscriber count (descending), then name.
pub fn compute_plan_distribution(subscriptions: &[&Subscription]) -> Vec<PlanShare> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for subscription in subscriptions.iter().filter(|s| s.active) {
        *counts.entry(subscription.plan_name.trim()).or_default() += 1;
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    // (plan, subscribers, floor percent, remainder numerator)
    let mut shares: Vec<(&str, usize, u32, usize)> = counts
        .into_iter()
        .map(|(plan, count)| {
            let scaled = count * 100;
            (plan, count, (scaled / total) as u32, scaled % total)
        })
        .collect();

    let assigned: u32 = shares.iter().map(|s| s.2).sum();
    let leftover = 100u32.saturating_sub(assigned) as usize;

    shares.sort_by(|a, b| b.3.cmp(&a.3).then(b.1.cmp(&a.1)).then(a.0.cmp(b.0)));
    for share in shares.iter_mut().take(leftover) {
        share.2 += 1;
    }

    shares.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    shares
        .into_iter()
        .map(|(plan, subscribers, percentage, _)| PlanShare {
            plan_name: plan.to_string(),
            percentage,
            subscribers,
        })
        .collect()
}

#[cfg(test)]
#[path = "plans_tests.rs"]
mod plans_tests;
