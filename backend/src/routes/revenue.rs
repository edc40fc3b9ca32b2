use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Revenue and paying customers for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Chart label, e.g. `Jun 2026`.
    pub period: String,
    pub period_start: NaiveDate,
    pub revenue: f64,
    /// Distinct customers billed in the month.
    pub customers: usize,
}
