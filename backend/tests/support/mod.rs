#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use isp_dashboard::db::repositories::sample;
use isp_dashboard::models::DashboardInputs;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process environment, since tests in one binary run in parallel.
///
/// `Some(v)` sets a variable, `None` removes it.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::apply(changes);
    f()
}

struct EnvRestore {
    previous: Vec<(String, Option<String>)>,
}

impl EnvRestore {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let previous = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { previous }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (k, v) in self.previous.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Every `DASHBOARD_*` override cleared, so ambient settings cannot leak in.
pub const CLEAN_DASHBOARD_ENV: [(&str, Option<&str>); 8] = [
    ("DASHBOARD_BUCKET_MINUTES", None),
    ("DASHBOARD_ALERT_LOOKBACK_HOURS", None),
    ("DASHBOARD_ALERT_MAX", None),
    ("DASHBOARD_STALENESS_MINUTES", None),
    ("DASHBOARD_CURRENCY", None),
    ("REPOSITORY_TYPE", None),
    ("HOST", None),
    ("PORT", None),
];

/// Fixed instant the sample data is laid out around.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
}

pub fn sample_inputs(now: DateTime<Utc>) -> DashboardInputs {
    DashboardInputs::new()
        .with_customers(sample::customers(now))
        .with_billing_records(sample::billing_records(now))
        .with_pings(sample::router_pings(now))
        .with_subscriptions(sample::subscriptions())
        .with_alerts(sample::alerts(now))
        .with_routers(sample::routers())
}
