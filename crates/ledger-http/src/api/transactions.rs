use tracing::instrument;

use ledger_core::Result;
use ledger_core::models::{NewTransaction, Transaction, TransactionType, TransactionUpdate};

use crate::endpoints::{self, ApprovalNote, TRANSACTIONS};
use crate::gateway::Gateway;
use crate::request::PendingRequest;

/// Server-side filters for listing transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub company: Option<i64>,
    pub transaction_type: Option<TransactionType>,
}

impl TransactionFilter {
    pub fn company(company: i64) -> Self {
        Self {
            company: Some(company),
            transaction_type: None,
        }
    }

    pub fn of_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }
}

impl Gateway {
    pub async fn list_transactions(&self, filter: TransactionFilter) -> Result<Vec<Transaction>> {
        let request = PendingRequest::get(TRANSACTIONS)
            .query_opt("company", filter.company)
            .query_opt("type", filter.transaction_type);
        self.fetch(request, "Failed to load transactions").await
    }

    #[instrument(skip(self, transaction), fields(company = transaction.company, kind = %transaction.transaction_type))]
    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction> {
        let request = PendingRequest::post(TRANSACTIONS).json(transaction)?;
        self.fetch(request, "Failed to create transaction").await
    }

    #[instrument(skip(self, update))]
    pub async fn update_transaction(
        &self,
        id: i64,
        update: &TransactionUpdate,
    ) -> Result<Transaction> {
        let request = PendingRequest::patch(endpoints::item(TRANSACTIONS, id)).json(update)?;
        self.fetch(request, "Failed to update transaction").await
    }

    #[instrument(skip(self))]
    pub async fn delete_transaction(&self, id: i64) -> Result<()> {
        self.execute(
            PendingRequest::delete(endpoints::item(TRANSACTIONS, id)),
            "Failed to delete transaction",
        )
        .await
    }

    #[instrument(skip(self, notes))]
    pub async fn approve_transaction(&self, id: i64, notes: Option<&str>) -> Result<Transaction> {
        let request = PendingRequest::post(endpoints::action(TRANSACTIONS, id, "approve"))
            .json(&ApprovalNote { notes })?;
        self.fetch(request, "Failed to approve transaction").await
    }

    #[instrument(skip(self))]
    pub async fn reject_transaction(&self, id: i64) -> Result<Transaction> {
        self.fetch(
            PendingRequest::post(endpoints::action(TRANSACTIONS, id, "reject")),
            "Failed to reject transaction",
        )
        .await
    }
}
