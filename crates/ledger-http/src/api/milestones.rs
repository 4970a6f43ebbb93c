use tracing::instrument;

use ledger_core::Result;
use ledger_core::models::{Milestone, MilestoneUpdate, NewMilestone};

use crate::endpoints::{self, MILESTONES};
use crate::gateway::Gateway;
use crate::request::PendingRequest;

impl Gateway {
    pub async fn list_milestones(&self, company: Option<i64>) -> Result<Vec<Milestone>> {
        let request = PendingRequest::get(MILESTONES).query_opt("company", company);
        self.fetch(request, "Failed to load milestones").await
    }

    #[instrument(skip(self, milestone), fields(company = milestone.company, label = %milestone.label))]
    pub async fn create_milestone(&self, milestone: &NewMilestone) -> Result<Milestone> {
        let request = PendingRequest::post(MILESTONES).json(milestone)?;
        self.fetch(request, "Failed to create milestone").await
    }

    #[instrument(skip(self, update))]
    pub async fn update_milestone(&self, id: i64, update: &MilestoneUpdate) -> Result<Milestone> {
        let request = PendingRequest::patch(endpoints::item(MILESTONES, id)).json(update)?;
        self.fetch(request, "Failed to update milestone").await
    }

    #[instrument(skip(self))]
    pub async fn delete_milestone(&self, id: i64) -> Result<()> {
        self.execute(
            PendingRequest::delete(endpoints::item(MILESTONES, id)),
            "Failed to delete milestone",
        )
        .await
    }
}
