//! Revenue milestones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Amount;

/// A revenue target tracked by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: i64,
    pub company: i64,
    #[serde(default)]
    pub company_name: String,
    pub target_amount: Amount,
    pub label: String,
    #[serde(default)]
    pub achieved: bool,
    #[serde(default)]
    pub achieved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Percentage of the target reached, 0 to 100.
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub days_taken: Option<i64>,
}

impl Milestone {
    /// Amount still missing to reach the target.
    pub fn remaining(&self) -> f64 {
        let target = self.target_amount.value();
        let progress = self.progress.unwrap_or(0.0);
        (target - target * progress / 100.0).max(0.0)
    }
}

/// Body of `POST /milestones/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewMilestone {
    pub company: i64,
    pub target_amount: Amount,
    pub label: String,
}

/// Partial update of a milestone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MilestoneUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
