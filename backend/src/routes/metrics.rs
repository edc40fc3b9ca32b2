use serde::{Deserialize, Serialize};

// =========================================================
// Metric card types
// =========================================================

/// Unit a metric is expressed in; drives value formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricUnit {
    Currency,
    Count,
    Percent,
}

/// Direction of a metric's period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Positive,
    Negative,
    Neutral,
}

/// The metrics the dashboard tracks, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    TotalCustomers,
    MonthlyRevenue,
    ActiveConnections,
    NetworkLoad,
}

impl MetricKey {
    pub const ALL: [MetricKey; 4] = [
        MetricKey::TotalCustomers,
        MetricKey::MonthlyRevenue,
        MetricKey::ActiveConnections,
        MetricKey::NetworkLoad,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MetricKey::TotalCustomers => "Total Customers",
            MetricKey::MonthlyRevenue => "Monthly Revenue",
            MetricKey::ActiveConnections => "Active Connections",
            MetricKey::NetworkLoad => "Network Load",
        }
    }

    pub fn unit(&self) -> MetricUnit {
        match self {
            MetricKey::TotalCustomers | MetricKey::ActiveConnections => MetricUnit::Count,
            MetricKey::MonthlyRevenue => MetricUnit::Currency,
            MetricKey::NetworkLoad => MetricUnit::Percent,
        }
    }

    /// Whether a rise or fall of this metric means anything good or bad.
    /// Current load does not, so it is always reported neutral.
    pub fn is_directional(&self) -> bool {
        !matches!(self, MetricKey::NetworkLoad)
    }
}

/// A supporting figure shown under the headline value (e.g. "Peak: 95%").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryValue {
    pub label: String,
    pub value: f64,
    pub unit: MetricUnit,
}

/// One scalar metric card with its trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub key: MetricKey,
    pub title: String,
    pub value: f64,
    pub previous_value: Option<f64>,
    pub unit: MetricUnit,
    /// Relative change as a ratio (0.1 = +10%). Absent when there is no usable baseline.
    pub change: Option<f64>,
    pub change_type: ChangeType,
    pub secondary: Option<SecondaryValue>,
}

impl MetricCard {
    /// Relative change as a percentage (10.0 = +10%).
    pub fn change_percent(&self) -> Option<f64> {
        self.change.map(|c| c * 100.0)
    }
}
