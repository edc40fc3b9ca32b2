use chrono::{DateTime, Duration, Utc};

use crate::api::Alert;

/// Recent alerts, newest first.
///
/// Keeps alerts with `now - lookback <= occurred_at <= now`, orders them by
/// occurrence time descending (ties broken by id ascending so the order is
/// total) and truncates to `max_count`.
pub fn compute_alert_feed(
    alerts: Vec<Alert>,
    now: DateTime<Utc>,
    lookback: Duration,
    max_count: usize,
) -> Vec<Alert> {
    let window_start = now
        .checked_sub_signed(lookback)
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let mut feed: Vec<Alert> = alerts
        .into_iter()
        .filter(|a| a.occurred_at >= window_start && a.occurred_at <= now)
        .collect();

    feed.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at).then_with(|| a.id.cmp(&b.id)));
    feed.truncate(max_count);
    feed
}
