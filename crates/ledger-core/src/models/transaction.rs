//! Income, expense and salary transactions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Amount, Approval, ApprovalStatus, Approvals, wire_enum};

wire_enum! {
    /// Kind of money movement.
    TransactionType, "transaction type" {
        Income => "INCOME",
        Expense => "EXPENSE",
        Salary => "SALARY",
    }
}

wire_enum! {
    /// The account a transaction is booked against.
    Account, "account" {
        Partner1 => "PARTNER1",
        Partner2 => "PARTNER2",
        Company => "COMPANY",
    }
}

/// A booked transaction awaiting or holding approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub company: i64,
    #[serde(default)]
    pub company_name: String,
    pub transaction_type: TransactionType,
    pub amount: Amount,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    pub account: Account,
    #[serde(default)]
    pub project: Option<i64>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub is_project_related: bool,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub approvals: Vec<Approval>,
    #[serde(default)]
    pub all_approved: bool,
    #[serde(default)]
    pub pending_count: i64,
}

impl Approvals for Transaction {
    fn approvals(&self) -> &[Approval] {
        &self.approvals
    }
}

/// Body of `POST /transactions/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTransaction {
    pub company: i64,
    pub transaction_type: TransactionType,
    pub amount: Amount,
    pub description: String,
    pub date: NaiveDate,
    pub account: Account,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<i64>,
    pub is_project_related: bool,
}

impl NewTransaction {
    /// A transaction not tied to any project.
    pub fn new(
        company: i64,
        transaction_type: TransactionType,
        amount: impl Into<Amount>,
        date: NaiveDate,
        account: Account,
    ) -> Self {
        Self {
            company,
            transaction_type,
            amount: amount.into(),
            description: String::new(),
            date,
            account,
            project: None,
            is_project_related: false,
        }
    }

    /// Attach the transaction to a project.
    pub fn for_project(mut self, project: i64) -> Self {
        self.project = Some(project);
        self.is_project_related = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update of a transaction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
}
