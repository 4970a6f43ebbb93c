//! Projects.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Amount, Approval, Approvals, wire_enum};

wire_enum! {
    /// Lifecycle state of a project.
    ProjectStatus, "project status" {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
        Completed => "COMPLETED",
    }
}

/// A client project that income and expenses can be attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub company: i64,
    #[serde(default)]
    pub company_name: String,
    pub name: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub project_value: Amount,
    #[serde(default)]
    pub received_amount: Amount,
    pub status: ProjectStatus,
    pub created_by: i64,
    #[serde(default)]
    pub created_by_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub approvals: Vec<Approval>,
    #[serde(default)]
    pub all_approved: bool,
    #[serde(default)]
    pub pending_count: u32,
    #[serde(default)]
    pub profit: Option<f64>,
}

impl Approvals for Project {
    fn approvals(&self) -> &[Approval] {
        &self.approvals
    }
}

/// Body of `POST /projects/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub company: i64,
    pub name: String,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub project_value: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_amount: Option<Amount>,
}

/// Partial update of a project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_value: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}
