//! Server-computed balances.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Amount;

/// Company balance sheet from `GET /summary/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub income_total: Amount,
    pub expense_total: Amount,
    pub salary_total: Amount,
    pub total_balance: Amount,
    pub partner1_balance: Amount,
    pub partner2_balance: Amount,
    pub company_balance: Amount,
    #[serde(default)]
    pub director_balances: Vec<DirectorBalance>,
    #[serde(default)]
    pub milestones: Vec<SummaryMilestone>,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorBalance {
    pub director_id: i64,
    pub director_name: String,
    pub balance: Amount,
}

/// Milestone as embedded in the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMilestone {
    #[serde(default)]
    pub id: Option<i64>,
    pub target: Amount,
    pub label: String,
    pub achieved: bool,
    #[serde(default)]
    pub days_taken: Option<i64>,
    #[serde(default)]
    pub achieved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub progress: Option<f64>,
}

/// Counters from `GET /admin/dashboard/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub company_count: u64,
    pub director_count: u64,
}
