use tracing::instrument;

use ledger_core::Result;
use ledger_core::models::{NewSalary, Salary};

use crate::endpoints::SALARIES;
use crate::gateway::Gateway;
use crate::request::PendingRequest;

impl Gateway {
    pub async fn list_salaries(&self, company: Option<i64>) -> Result<Vec<Salary>> {
        let request = PendingRequest::get(SALARIES).query_opt("company", company);
        self.fetch(request, "Failed to load salaries").await
    }

    #[instrument(skip(self, salary), fields(company = salary.company, director = salary.director))]
    pub async fn create_salary(&self, salary: &NewSalary) -> Result<Salary> {
        let request = PendingRequest::post(SALARIES).json(salary)?;
        self.fetch(request, "Failed to create salary").await
    }
}
