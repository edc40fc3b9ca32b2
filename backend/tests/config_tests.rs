//! Tests for dashboard configuration loading and environment overrides.

mod support;

use std::fs;

use isp_dashboard::config::{AggregatorConfig, DashboardConfig};
use isp_dashboard::error::AggregationError;
use tempfile::TempDir;

fn with_env<F: FnOnce()>(overrides: &[(&str, Option<&str>)], f: F) {
    let mut changes = support::CLEAN_DASHBOARD_ENV.to_vec();
    changes.extend_from_slice(overrides);
    support::with_scoped_env(&changes, f);
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dashboard.toml");
    fs::write(
        &path,
        r#"
[repository]
type = "memory"
seed_sample_data = false

[aggregator]
usage_bucket_minutes = 60
alert_lookback_hours = 12
alert_max_count = 3
router_staleness_minutes = 10
currency_code = "USD"

[server]
host = "127.0.0.1"
port = 3000
"#,
    )
    .unwrap();

    let config = DashboardConfig::from_file(&path).unwrap();
    assert_eq!(config.repository.repo_type, "memory");
    assert!(!config.repository.seed_sample_data);
    assert_eq!(config.aggregator.usage_bucket_minutes, 60);
    assert_eq!(config.aggregator.alert_lookback_hours, 12);
    assert_eq!(config.aggregator.alert_max_count, 3);
    assert_eq!(config.aggregator.router_staleness_minutes, 10);
    assert_eq!(config.aggregator.currency_code, "USD");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
}

#[test]
fn test_from_missing_file_is_invalid_configuration() {
    let dir = TempDir::new().unwrap();
    let result = DashboardConfig::from_file(dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(AggregationError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_from_file_rejects_invalid_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dashboard.toml");
    fs::write(&path, "[aggregator]\nalert_max_count = 0\n").unwrap();

    let err = DashboardConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("alert_max_count"));
}

#[test]
fn test_aggregator_env_overrides() {
    with_env(
        &[
            ("DASHBOARD_BUCKET_MINUTES", Some("120")),
            ("DASHBOARD_ALERT_MAX", Some("5")),
            ("DASHBOARD_CURRENCY", Some("UGX")),
        ],
        || {
            let config = AggregatorConfig::from_env().unwrap();
            assert_eq!(config.usage_bucket_minutes, 120);
            assert_eq!(config.alert_max_count, 5);
            assert_eq!(config.currency_code, "UGX");
            assert_eq!(config.alert_lookback_hours, 24);
        },
    );
}

#[test]
fn test_unparseable_env_override_is_rejected() {
    with_env(&[("DASHBOARD_STALENESS_MINUTES", Some("soon"))], || {
        let err = AggregatorConfig::from_env().unwrap_err();
        assert!(matches!(err, AggregationError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("DASHBOARD_STALENESS_MINUTES"));
    });
}

#[test]
fn test_env_override_is_validated() {
    with_env(&[("DASHBOARD_BUCKET_MINUTES", Some("7"))], || {
        assert!(AggregatorConfig::from_env().is_err());
    });
}

#[test]
fn test_oversized_lookback_override_is_rejected() {
    with_env(&[("DASHBOARD_ALERT_LOOKBACK_HOURS", Some("3000000000"))], || {
        let err = AggregatorConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("alert_lookback_hours"));
    });
}

#[test]
fn test_dashboard_config_env_overrides_file_values() {
    with_env(
        &[
            ("PORT", Some("9191")),
            ("HOST", Some("127.0.0.1")),
            ("REPOSITORY_TYPE", Some("in-memory")),
            ("DASHBOARD_ALERT_LOOKBACK_HOURS", Some("48")),
        ],
        || {
            let mut config =
                DashboardConfig::from_toml_str("[server]\nport = 8000\n").unwrap();
            config.apply_env().unwrap();

            assert_eq!(config.server.port, 9191);
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.repository.repo_type, "in-memory");
            assert_eq!(config.aggregator.alert_lookback_hours, 48);
        },
    );
}

#[test]
fn test_invalid_port_override() {
    with_env(&[("PORT", Some("99999"))], || {
        let mut config = DashboardConfig::default();
        assert!(config.apply_env().is_err());
    });
}
