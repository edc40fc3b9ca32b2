use serde::{Deserialize, Serialize};

/// Mean bandwidth utilisation for one time-of-day bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagePoint {
    /// Bucket start, `HH:MM`.
    pub time_label: String,
    /// `None` when the bucket received no samples; measured idle is `Some(0.0)`.
    pub utilization_percent: Option<f64>,
    pub samples: usize,
}
