use ledger_core::Result;
use ledger_core::models::Summary;

use crate::endpoints::SUMMARY;
use crate::gateway::Gateway;
use crate::request::PendingRequest;

impl Gateway {
    /// Balances, totals and milestone progress for one company, as computed
    /// by the server.
    pub async fn summary(&self, company: i64) -> Result<Summary> {
        let request = PendingRequest::get(SUMMARY).query("company", company);
        self.fetch(request, "Failed to load summary").await
    }
}
