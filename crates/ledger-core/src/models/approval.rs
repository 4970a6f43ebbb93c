//! Multi-party approval records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wire_enum;

wire_enum! {
    /// Approval state of a transaction or salary.
    ApprovalStatus, "approval status" {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
    }
}

/// One stakeholder's vote on a project or transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub id: i64,
    /// The project or transaction this vote belongs to.
    #[serde(alias = "project", alias = "transaction", default)]
    pub subject: i64,
    pub approver: i64,
    #[serde(default)]
    pub approver_name: String,
    pub approved: bool,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: String,
}

/// Records that carry a list of approval votes.
pub trait Approvals {
    fn approvals(&self) -> &[Approval];

    /// Votes cast in favour.
    fn approved_count(&self) -> usize {
        self.approvals().iter().filter(|a| a.approved).count()
    }

    /// Votes expected.
    fn approval_total(&self) -> usize {
        self.approvals().len()
    }

    /// Returns true if `user_id` has already approved.
    fn approved_by(&self, user_id: i64) -> bool {
        self.approvals()
            .iter()
            .any(|a| a.approver == user_id && a.approved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_accepts_project_or_transaction_key() {
        let a: Approval = serde_json::from_value(serde_json::json!({
            "id": 1, "project": 7, "approver": 3, "approver_name": "alice",
            "approved": true, "approved_at": "2025-01-02T10:00:00Z", "notes": ""
        }))
        .unwrap();
        assert_eq!(a.subject, 7);

        let b: Approval = serde_json::from_value(serde_json::json!({
            "id": 2, "transaction": 9, "approver": 4, "approved": false
        }))
        .unwrap();
        assert_eq!(b.subject, 9);
        assert!(b.approved_at.is_none());
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("approved".parse::<ApprovalStatus>().unwrap(), ApprovalStatus::Approved);
        assert!("maybe".parse::<ApprovalStatus>().is_err());
        assert_eq!(ApprovalStatus::Pending.to_string(), "PENDING");
    }
}
