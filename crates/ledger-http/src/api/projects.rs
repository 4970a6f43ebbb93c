use tracing::instrument;

use ledger_core::Result;
use ledger_core::models::{NewProject, Project, ProjectUpdate};

use crate::endpoints::{self, ApprovalNote, PROJECTS};
use crate::gateway::Gateway;
use crate::request::PendingRequest;

impl Gateway {
    pub async fn list_projects(&self, company: Option<i64>) -> Result<Vec<Project>> {
        let request = PendingRequest::get(PROJECTS).query_opt("company", company);
        self.fetch(request, "Failed to load projects").await
    }

    #[instrument(skip(self, project), fields(company = project.company, name = %project.name))]
    pub async fn create_project(&self, project: &NewProject) -> Result<Project> {
        let request = PendingRequest::post(PROJECTS).json(project)?;
        self.fetch(request, "Failed to create project").await
    }

    #[instrument(skip(self, update))]
    pub async fn update_project(&self, id: i64, update: &ProjectUpdate) -> Result<Project> {
        let request = PendingRequest::patch(endpoints::item(PROJECTS, id)).json(update)?;
        self.fetch(request, "Failed to update project").await
    }

    #[instrument(skip(self))]
    pub async fn delete_project(&self, id: i64) -> Result<()> {
        self.execute(
            PendingRequest::delete(endpoints::item(PROJECTS, id)),
            "Failed to delete project",
        )
        .await
    }

    /// Record the caller's approval. The server decides when the project as a
    /// whole becomes approved.
    #[instrument(skip(self, notes))]
    pub async fn approve_project(&self, id: i64, notes: Option<&str>) -> Result<Project> {
        let request = PendingRequest::post(endpoints::action(PROJECTS, id, "approve"))
            .json(&ApprovalNote { notes })?;
        self.fetch(request, "Failed to approve project").await
    }

    #[instrument(skip(self))]
    pub async fn reject_project(&self, id: i64) -> Result<Project> {
        self.fetch(
            PendingRequest::post(endpoints::action(PROJECTS, id, "reject")),
            "Failed to reject project",
        )
        .await
    }
}
