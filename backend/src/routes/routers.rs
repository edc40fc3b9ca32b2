use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::RouterId;

/// Status row for one managed router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterStatus {
    pub id: RouterId,
    pub online: bool,
    pub load_percent: f64,
    /// Time of the latest ping at or before the snapshot instant.
    pub last_seen: Option<DateTime<Utc>>,
}
