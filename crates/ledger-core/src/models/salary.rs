//! Director salaries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Account, Amount, ApprovalStatus};

/// A salary payment to a director.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub id: i64,
    pub company: i64,
    #[serde(default)]
    pub company_name: String,
    pub director: i64,
    #[serde(default)]
    pub director_name: String,
    pub amount: Amount,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    pub account: Account,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub status: ApprovalStatus,
}

/// Body of `POST /salaries/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewSalary {
    pub company: i64,
    pub director: i64,
    pub amount: Amount,
    pub description: String,
    pub date: NaiveDate,
    pub account: Account,
}
