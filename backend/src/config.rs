//! Dashboard configuration.
//!
//! Settings come from a `dashboard.toml` file when one is present, then
//! environment variables override individual values:
//!
//! | Variable | Setting |
//! |---|---|
//! | `DASHBOARD_BUCKET_MINUTES` | `aggregator.usage_bucket_minutes` |
//! | `DASHBOARD_ALERT_LOOKBACK_HOURS` | `aggregator.alert_lookback_hours` |
//! | `DASHBOARD_ALERT_MAX` | `aggregator.alert_max_count` |
//! | `DASHBOARD_STALENESS_MINUTES` | `aggregator.router_staleness_minutes` |
//! | `DASHBOARD_CURRENCY` | `aggregator.currency_code` |
//! | `REPOSITORY_TYPE` | `repository.type` |
//! | `HOST` / `PORT` | `server.host` / `server.port` |

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::db::repo_config::RepositorySettings;
use crate::error::{AggregationError, AggregationResult};
use crate::models::MINUTES_PER_DAY;

/// Longest accepted alert lookback, ten years.
pub const MAX_ALERT_LOOKBACK_HOURS: u32 = 24 * 366 * 10;

/// Tunables of the snapshot aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Width of a usage bucket; must tile a day exactly.
    pub usage_bucket_minutes: u32,
    pub alert_lookback_hours: u32,
    pub alert_max_count: usize,
    /// Maximum ping age before a router is reported offline.
    pub router_staleness_minutes: u32,
    pub currency_code: String,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            usage_bucket_minutes: 240,
            alert_lookback_hours: 24,
            alert_max_count: 10,
            router_staleness_minutes: 5,
            currency_code: "KES".to_string(),
        }
    }
}

impl AggregatorConfig {
    /// Defaults overridden by `DASHBOARD_*` environment variables.
    pub fn from_env() -> AggregationResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Check every setting is in range.
    pub fn validate(&self) -> AggregationResult<()> {
        if self.usage_bucket_minutes == 0 || MINUTES_PER_DAY % self.usage_bucket_minutes != 0 {
            return Err(AggregationError::invalid_setting(
                "usage_bucket_minutes",
                format!(
                    "bucket width {} must be positive and divide {} minutes",
                    self.usage_bucket_minutes, MINUTES_PER_DAY
                ),
            ));
        }
        if self.alert_lookback_hours == 0 || self.alert_lookback_hours > MAX_ALERT_LOOKBACK_HOURS {
            return Err(AggregationError::invalid_setting(
                "alert_lookback_hours",
                format!(
                    "lookback window {}h must be between 1 and {} hours",
                    self.alert_lookback_hours, MAX_ALERT_LOOKBACK_HOURS
                ),
            ));
        }
        if self.alert_max_count == 0 {
            return Err(AggregationError::invalid_setting(
                "alert_max_count",
                "alert feed must allow at least one entry",
            ));
        }
        if self.router_staleness_minutes == 0 {
            return Err(AggregationError::invalid_setting(
                "router_staleness_minutes",
                "staleness threshold must be positive",
            ));
        }
        if self.currency_code.trim().is_empty() {
            return Err(AggregationError::invalid_setting(
                "currency_code",
                "currency code must not be empty",
            ));
        }
        Ok(())
    }

    pub fn alert_lookback(&self) -> Duration {
        Duration::hours(i64::from(self.alert_lookback_hours))
    }

    pub fn router_staleness(&self) -> Duration {
        Duration::minutes(i64::from(self.router_staleness_minutes))
    }

    fn apply_env(&mut self) -> AggregationResult<()> {
        env_override(
            "DASHBOARD_BUCKET_MINUTES",
            "usage_bucket_minutes",
            &mut self.usage_bucket_minutes,
        )?;
        env_override(
            "DASHBOARD_ALERT_LOOKBACK_HOURS",
            "alert_lookback_hours",
            &mut self.alert_lookback_hours,
        )?;
        env_override("DASHBOARD_ALERT_MAX", "alert_max_count", &mut self.alert_max_count)?;
        env_override(
            "DASHBOARD_STALENESS_MINUTES",
            "router_staleness_minutes",
            &mut self.router_staleness_minutes,
        )?;
        if let Ok(code) = env::var("DASHBOARD_CURRENCY") {
            self.currency_code = code;
        }
        Ok(())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Complete dashboard configuration as stored in `dashboard.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub repository: RepositorySettings,
    pub aggregator: AggregatorConfig,
    pub server: ServerSettings,
}

impl DashboardConfig {
    /// Parse a TOML document and validate the aggregator section.
    pub fn from_toml_str(content: &str) -> AggregationResult<Self> {
        let config: DashboardConfig = toml::from_str(content).map_err(|e| {
            AggregationError::invalid_setting("dashboard.toml", format!("Failed to parse config: {}", e))
        })?;
        config.aggregator.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> AggregationResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            AggregationError::invalid_setting(
                "dashboard.toml",
                format!("Failed to read config file {}: {}", path.as_ref().display(), e),
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the first `dashboard.toml` found in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists in any of them.
    pub fn from_default_location() -> AggregationResult<Option<Self>> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Loading dashboard configuration from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// File configuration (or defaults when there is none) with environment overrides applied.
    pub fn load() -> AggregationResult<Self> {
        let mut config = Self::from_default_location()?.unwrap_or_default();
        config.apply_env()?;
        Ok(config)
    }

    /// Apply environment overrides and re-validate.
    pub fn apply_env(&mut self) -> AggregationResult<()> {
        self.aggregator.apply_env()?;
        if let Ok(repo_type) = env::var("REPOSITORY_TYPE") {
            self.repository.repo_type = repo_type;
        }
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        env_override("PORT", "server.port", &mut self.server.port)?;
        self.aggregator.validate()
    }
}

fn env_override<T: FromStr>(var: &str, setting: &str, target: &mut T) -> AggregationResult<()> {
    if let Ok(raw) = env::var(var) {
        *target = raw.trim().parse().map_err(|_| {
            AggregationError::invalid_setting(setting, format!("{} has invalid value '{}'", var, raw))
        })?;
    }
    Ok(())
}
