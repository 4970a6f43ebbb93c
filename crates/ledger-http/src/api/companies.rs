use tracing::instrument;

use ledger_core::Result;
use ledger_core::models::{Company, CompanyUpdate, Director, NewCompany, NewDirector};

use crate::endpoints::{self, COMPANIES, DIRECTORS};
use crate::gateway::Gateway;
use crate::request::PendingRequest;

impl Gateway {
    pub async fn list_companies(&self) -> Result<Vec<Company>> {
        self.fetch(PendingRequest::get(COMPANIES), "Failed to load companies")
            .await
    }

    #[instrument(skip(self, company), fields(name = %company.name))]
    pub async fn create_company(&self, company: &NewCompany) -> Result<Company> {
        let request = PendingRequest::post(COMPANIES).json(company)?;
        self.fetch(request, "Failed to create company").await
    }

    pub async fn get_company(&self, id: i64) -> Result<Company> {
        self.fetch(
            PendingRequest::get(endpoints::item(COMPANIES, id)),
            "Failed to load company",
        )
        .await
    }

    #[instrument(skip(self, update))]
    pub async fn update_company(&self, id: i64, update: &CompanyUpdate) -> Result<Company> {
        let request = PendingRequest::patch(endpoints::item(COMPANIES, id)).json(update)?;
        self.fetch(request, "Failed to update company").await
    }

    #[instrument(skip(self))]
    pub async fn delete_company(&self, id: i64) -> Result<()> {
        self.execute(
            PendingRequest::delete(endpoints::item(COMPANIES, id)),
            "Failed to delete company",
        )
        .await
    }

    /// Directors, optionally limited to one company.
    pub async fn list_directors(&self, company: Option<i64>) -> Result<Vec<Director>> {
        let request = PendingRequest::get(DIRECTORS).query_opt("company", company);
        self.fetch(request, "Failed to load directors").await
    }

    #[instrument(skip(self))]
    pub async fn add_director(&self, director: &NewDirector) -> Result<Director> {
        let request = PendingRequest::post(DIRECTORS).json(director)?;
        self.fetch(request, "Failed to add director").await
    }
}
