use serde::{Deserialize, Serialize};

/// Share of active subscriptions held by one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanShare {
    pub plan_name: String,
    /// Whole percent in [0, 100].
    pub percentage: u32,
    pub subscribers: usize,
}
