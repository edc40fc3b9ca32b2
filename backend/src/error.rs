//! Errors raised by the snapshot aggregator.
//!
//! Only two things stop an aggregation call: a required input collection that
//! never arrived, and a configuration that cannot produce a meaningful
//! snapshot. Everything else is reported as a skipped record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::db::repository::ErrorContext;

/// Result type for aggregation calls.
pub type AggregationResult<T> = Result<T, AggregationError>;

/// The raw input collections the aggregator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Customers,
    BillingRecords,
    Pings,
    Subscriptions,
    Alerts,
    Routers,
}

impl InputKind {
    pub const ALL: [InputKind; 6] = [
        InputKind::Customers,
        InputKind::BillingRecords,
        InputKind::Pings,
        InputKind::Subscriptions,
        InputKind::Alerts,
        InputKind::Routers,
    ];

    /// Required collections fail the call when absent; optional ones count as empty.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            InputKind::Customers | InputKind::BillingRecords | InputKind::Subscriptions
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Customers => "customers",
            InputKind::BillingRecords => "billing_records",
            InputKind::Pings => "pings",
            InputKind::Subscriptions => "subscriptions",
            InputKind::Alerts => "alerts",
            InputKind::Routers => "routers",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    /// A required input collection was not supplied.
    #[error("Missing required input: {input}")]
    MissingInput { input: InputKind },

    /// Aggregator settings are out of range.
    #[error("Invalid configuration: {message} {context}")]
    InvalidConfiguration {
        message: String,
        context: ErrorContext,
    },
}

impl AggregationError {
    pub fn missing(input: InputKind) -> Self {
        Self::MissingInput { input }
    }

    /// Create a configuration error naming the offending setting.
    pub fn invalid_setting(setting: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
            context: ErrorContext::new("validate_config").about(setting),
        }
    }
}
