//! Record-level validation.
//!
//! Each function keeps the usable records of one collection, in input order,
//! and records every rejected one in the [`SkipReport`]. Nothing here fails.

use std::collections::HashSet;

use crate::api::{Alert, Severity, SkipReason, SkipReport};
use crate::error::InputKind;
use crate::models::{
    BillingRecord, CustomerRecord, RawAlert, RouterPing, RouterRecord, Subscription,
};

fn is_valid_load(load: f64) -> bool {
    load.is_finite() && (0.0..=100.0).contains(&load)
}

/// Customers with a non-empty, first-seen id.
pub fn valid_customers<'a>(
    records: &'a [CustomerRecord],
    skipped: &mut SkipReport,
) -> Vec<&'a CustomerRecord> {
    let mut seen = HashSet::new();
    let mut valid = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.id.is_blank() {
            skipped.record(InputKind::Customers, index, SkipReason::MissingId);
        } else if !seen.insert(record.id.as_str()) {
            skipped.record(
                InputKind::Customers,
                index,
                SkipReason::DuplicateId(record.id.to_string()),
            );
        } else {
            valid.push(record);
        }
    }

    valid
}

/// Billing items with a customer and a finite, non-negative amount.
pub fn valid_billing_records<'a>(
    records: &'a [BillingRecord],
    skipped: &mut SkipReport,
) -> Vec<&'a BillingRecord> {
    let mut valid = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.customer_id.is_blank() {
            skipped.record(InputKind::BillingRecords, index, SkipReason::MissingId);
        } else if !record.amount.is_finite() || record.amount < 0.0 {
            skipped.record(InputKind::BillingRecords, index, SkipReason::InvalidAmount);
        } else {
            valid.push(record);
        }
    }

    valid
}

/// Pings with a router id and a load within [0, 100].
pub fn valid_pings<'a>(records: &'a [RouterPing], skipped: &mut SkipReport) -> Vec<&'a RouterPing> {
    let mut valid = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.router_id.is_blank() {
            skipped.record(InputKind::Pings, index, SkipReason::MissingId);
        } else if !is_valid_load(record.load_percent) {
            skipped.record(InputKind::Pings, index, SkipReason::LoadOutOfRange);
        } else {
            valid.push(record);
        }
    }

    valid
}

/// Subscriptions with a customer and a non-blank plan name.
pub fn valid_subscriptions<'a>(
    records: &'a [Subscription],
    skipped: &mut SkipReport,
) -> Vec<&'a Subscription> {
    let mut valid = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.customer_id.is_blank() {
            skipped.record(InputKind::Subscriptions, index, SkipReason::MissingId);
        } else if record.plan_name.trim().is_empty() {
            skipped.record(InputKind::Subscriptions, index, SkipReason::BlankPlan);
        } else {
            valid.push(record);
        }
    }

    valid
}

/// Alerts with a first-seen id and a recognised severity, converted to feed entries.
/// The severity label is parsed as-is and never guessed.
pub fn parse_alerts(records: &[RawAlert], skipped: &mut SkipReport) -> Vec<Alert> {
    let mut seen = HashSet::new();
    let mut parsed = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.id.is_blank() {
            skipped.record(InputKind::Alerts, index, SkipReason::MissingId);
            continue;
        }
        let severity = match record.severity.parse::<Severity>() {
            Ok(severity) => severity,
            Err(_) => {
                skipped.record(
                    InputKind::Alerts,
                    index,
                    SkipReason::UnknownSeverity(record.severity.clone()),
                );
                continue;
            }
        };
        if !seen.insert(record.id.as_str()) {
            skipped.record(
                InputKind::Alerts,
                index,
                SkipReason::DuplicateId(record.id.to_string()),
            );
            continue;
        }

        parsed.push(Alert {
            id: record.id.clone(),
            severity,
            title: record.title.clone(),
            detail: record.detail.clone(),
            occurred_at: record.occurred_at,
        });
    }

    parsed
}

/// Inventory entries with a first-seen id and a load within [0, 100].
pub fn valid_routers<'a>(
    records: &'a [RouterRecord],
    skipped: &mut SkipReport,
) -> Vec<&'a RouterRecord> {
    let mut seen = HashSet::new();
    let mut valid = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.id.is_blank() {
            skipped.record(InputKind::Routers, index, SkipReason::MissingId);
        } else if !is_valid_load(record.load_percent) {
            skipped.record(InputKind::Routers, index, SkipReason::LoadOutOfRange);
        } else if !seen.insert(record.id.as_str()) {
            skipped.record(
                InputKind::Routers,
                index,
                SkipReason::DuplicateId(record.id.to_string()),
            );
        } else {
            valid.push(record);
        }
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_customers_drop_blank_and_duplicate_ids() {
        let records = vec![
            CustomerRecord { id: "c-1".into(), name: "A".into(), joined_at: at() },
            CustomerRecord { id: " ".into(), name: "B".into(), joined_at: at() },
            CustomerRecord { id: "c-1".into(), name: "C".into(), joined_at: at() },
            CustomerRecord { id: "c-2".into(), name: "D".into(), joined_at: at() },
        ];
        let mut skipped = SkipReport::new();
        let valid = valid_customers(&records, &mut skipped);

        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].name, "A");
        assert_eq!(valid[1].name, "D");
        assert_eq!(skipped.total, 2);
        assert_eq!(skipped.records[0].index, 1);
        assert_eq!(skipped.records[0].reason, SkipReason::MissingId);
        assert_eq!(
            skipped.records[1].reason,
            SkipReason::DuplicateId("c-1".to_string())
        );
    }

    #[test]
    fn test_billing_rejects_bad_amounts() {
        let record = |amount: f64| BillingRecord {
            customer_id: "c-1".into(),
            amount,
            billed_at: at(),
        };
        let records = vec![
            record(100.0),
            record(-5.0),
            record(f64::NAN),
            record(f64::INFINITY),
            record(0.0),
        ];
        let mut skipped = SkipReport::new();
        let valid = valid_billing_records(&records, &mut skipped);

        assert_eq!(valid.len(), 2);
        assert_eq!(skipped.count_for(InputKind::BillingRecords), 3);
        assert!(skipped
            .records
            .iter()
            .all(|r| r.reason == SkipReason::InvalidAmount));
    }

    #[test]
    fn test_pings_reject_out_of_range_load() {
        let ping = |id: &str, load: f64| RouterPing {
            router_id: id.into(),
            received_at: at(),
            load_percent: load,
            reachable: true,
        };
        let records = vec![
            ping("MK-001", 0.0),
            ping("MK-001", 100.0),
            ping("MK-001", 100.5),
            ping("MK-001", -1.0),
            ping("", 50.0),
            ping("MK-002", f64::NAN),
        ];
        let mut skipped = SkipReport::new();
        let valid = valid_pings(&records, &mut skipped);

        assert_eq!(valid.len(), 2);
        assert_eq!(skipped.total, 4);
        assert_eq!(skipped.records[2].reason, SkipReason::MissingId);
    }

    #[test]
    fn test_subscriptions_reject_blank_plan() {
        let records = vec![
            Subscription { customer_id: "c-1".into(), plan_name: "Basic".into(), active: true },
            Subscription { customer_id: "c-2".into(), plan_name: "  ".into(), active: true },
            Subscription { customer_id: "".into(), plan_name: "Basic".into(), active: true },
        ];
        let mut skipped = SkipReport::new();
        let valid = valid_subscriptions(&records, &mut skipped);

        assert_eq!(valid.len(), 1);
        assert_eq!(skipped.records[0].reason, SkipReason::BlankPlan);
        assert_eq!(skipped.records[1].reason, SkipReason::MissingId);
    }

    #[test]
    fn test_alerts_keep_severity_verbatim() {
        let alert = |id: &str, severity: &str| RawAlert {
            id: id.into(),
            severity: severity.to_string(),
            title: "t".into(),
            detail: "d".into(),
            occurred_at: at(),
        };
        let records = vec![
            alert("a-1", "critical"),
            alert("a-2", "urgent"),
            alert("a-1", "info"),
            alert("a-3", "Info"),
        ];
        let mut skipped = SkipReport::new();
        let parsed = parse_alerts(&records, &mut skipped);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].severity, Severity::Critical);
        assert_eq!(parsed[1].severity, Severity::Info);
        assert_eq!(
            skipped.records[0].reason,
            SkipReason::UnknownSeverity("urgent".to_string())
        );
        assert_eq!(
            skipped.records[1].reason,
            SkipReason::DuplicateId("a-1".to_string())
        );
    }

    #[test]
    fn test_unknown_severity_does_not_reserve_id() {
        let records = vec![
            RawAlert {
                id: "a-1".into(),
                severity: "bogus".into(),
                title: "t".into(),
                detail: "d".into(),
                occurred_at: at(),
            },
            RawAlert {
                id: "a-1".into(),
                severity: "warning".into(),
                title: "t".into(),
                detail: "d".into(),
                occurred_at: at(),
            },
        ];
        let mut skipped = SkipReport::new();
        let parsed = parse_alerts(&records, &mut skipped);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].severity, Severity::Warning);
    }

    #[test]
    fn test_routers_dedupe_inventory() {
        let router = |id: &str, load: f64| RouterRecord {
            id: id.into(),
            online: true,
            load_percent: load,
        };
        let records = vec![router("MK-001", 10.0), router("MK-001", 20.0), router("MK-002", 150.0)];
        let mut skipped = SkipReport::new();
        let valid = valid_routers(&records, &mut skipped);

        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].load_percent, 10.0);
        assert_eq!(skipped.count_for(InputKind::Routers), 2);
    }
}
