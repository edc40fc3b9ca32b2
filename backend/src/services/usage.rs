use chrono::{DateTime, Duration, Utc};

use crate::api::UsagePoint;
use crate::models::{minute_of_day, time_of_day_label, RouterPing, MINUTES_PER_DAY};

/// Mean router load per time-of-day bucket over the day ending at `now`.
///
/// Only reachable pings received in `(now - 24h, now]` are counted. Every
/// bucket of the day is emitted, in time-of-day order; a bucket that saw no
/// samples reports `None` so a chart can show a gap instead of a false zero.
///
/// `bucket_minutes` must divide a day; the config validator guarantees this.
pub fn compute_usage_series(
    pings: &[&RouterPing],
    now: DateTime<Utc>,
    bucket_minutes: u32,
) -> Vec<UsagePoint> {
    let width = bucket_minutes.max(1);
    let bucket_count = (MINUTES_PER_DAY / width) as usize;
    let window_start = now - Duration::hours(24);

    let mut sums = vec![0.0_f64; bucket_count];
    let mut counts = vec![0_usize; bucket_count];

    for ping in pings
        .iter()
        .filter(|p| p.reachable && p.received_at > window_start && p.received_at <= now)
    {
        let bucket = ((minute_of_day(ping.received_at) / width) as usize).min(bucket_count - 1);
        sums[bucket] += ping.load_percent;
        counts[bucket] += 1;
    }

    sums.into_iter()
        .zip(counts)
        .enumerate()
        .map(|(bucket, (sum, samples))| UsagePoint {
            time_label: time_of_day_label(bucket as u32 * width),
            utilization_percent: (samples > 0).then(|| sum / samples as f64),
            samples,
        })
        .collect()
}

/// Highest measured bucket, or `None` when every bucket is empty.
pub fn peak_utilization(series: &[UsagePoint]) -> Option<f64> {
    series
        .iter()
        .filter_map(|p| p.utilization_percent)
        .fold(None, |peak, value| match peak {
            Some(current) if current >= value => Some(current),
            _ => Some(value),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ping(router: &str, at: DateTime<Utc>, load: f64, reachable: bool) -> RouterPing {
        RouterPing {
            router_id: router.into(),
            received_at: at,
            load_percent: load,
            reachable,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 22, 0, 0).unwrap()
    }

    fn series(pings: &[RouterPing], bucket_minutes: u32) -> Vec<UsagePoint> {
        let refs: Vec<&RouterPing> = pings.iter().collect();
        compute_usage_series(&refs, now(), bucket_minutes)
    }

    #[test]
    fn test_emits_every_bucket_in_order() {
        let points = series(&[], 240);
        let labels: Vec<&str> = points.iter().map(|p| p.time_label.as_str()).collect();
        assert_eq!(labels, vec!["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"]);
    }

    #[test]
    fn test_empty_bucket_is_absent_not_zero() {
        let pings = vec![ping("MK-001", now() - Duration::hours(1), 0.0, true)];
        let points = series(&pings, 240);

        // 21:00 falls in the 20:00 bucket; a measured idle reads 0, not absent
        assert_eq!(points[5].utilization_percent, Some(0.0));
        assert_eq!(points[5].samples, 1);
        assert!(points[..5].iter().all(|p| p.utilization_percent.is_none()));
        assert!(points[..5].iter().all(|p| p.samples == 0));
    }

    #[test]
    fn test_bucket_reports_mean_load() {
        let base = Utc.with_ymd_and_hms(2026, 6, 15, 9, 0, 0).unwrap();
        let pings = vec![
            ping("MK-001", base, 70.0, true),
            ping("MK-002", base + Duration::minutes(30), 80.0, true),
            ping("MK-003", base + Duration::minutes(90), 90.0, true),
        ];
        let points = series(&pings, 240);

        assert_eq!(points[2].time_label, "08:00");
        assert_eq!(points[2].samples, 3);
        assert!((points[2].utilization_percent.unwrap() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_unreachable_pings_are_excluded() {
        let at = now() - Duration::minutes(10);
        let pings = vec![ping("MK-001", at, 40.0, true), ping("MK-002", at, 0.0, false)];
        let points = series(&pings, 240);

        assert_eq!(points[5].samples, 1);
        assert_eq!(points[5].utilization_percent, Some(40.0));
    }

    #[test]
    fn test_window_is_open_at_start_closed_at_end() {
        let pings = vec![
            ping("MK-001", now() - Duration::hours(24), 10.0, true),
            ping("MK-001", now(), 50.0, true),
            ping("MK-001", now() + Duration::minutes(1), 99.0, true),
        ];
        let points = series(&pings, 240);

        let samples: usize = points.iter().map(|p| p.samples).sum();
        assert_eq!(samples, 1);
        assert_eq!(points[5].utilization_percent, Some(50.0));
    }

    #[test]
    fn test_custom_bucket_width() {
        let points = series(&[], 60);
        assert_eq!(points.len(), 24);
        assert_eq!(points[13].time_label, "13:00");
    }

    #[test]
    fn test_peak_utilization() {
        assert_eq!(peak_utilization(&series(&[], 240)), None);

        let base = Utc.with_ymd_and_hms(2026, 6, 15, 1, 0, 0).unwrap();
        let pings = vec![
            ping("MK-001", base, 45.0, true),
            ping("MK-001", base + Duration::hours(16), 95.0, true),
            ping("MK-001", base + Duration::hours(8), 75.0, true),
        ];
        assert_eq!(peak_utilization(&series(&pings, 240)), Some(95.0));
    }
}
