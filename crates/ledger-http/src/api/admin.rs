use tracing::instrument;

use ledger_core::Result;
use ledger_core::models::{AdminDashboard, AdminNewUser, AdminUserCreated, UserProfile, UserUpdate};

use crate::endpoints;
use crate::gateway::Gateway;
use crate::request::PendingRequest;

impl Gateway {
    pub async fn list_users(&self) -> Result<Vec<UserProfile>> {
        self.fetch(PendingRequest::get(endpoints::ADMIN_USERS), "Failed to load users")
            .await
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn create_user(&self, user: &AdminNewUser) -> Result<AdminUserCreated> {
        let request = PendingRequest::post(endpoints::ADMIN_CREATE_USER).json(user)?;
        self.fetch(request, "Failed to create user").await
    }

    #[instrument(skip(self, update))]
    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<UserProfile> {
        let request = PendingRequest::patch(endpoints::admin_user(id)).json(update)?;
        self.fetch(request, "Failed to update user").await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> Result<()> {
        self.execute(
            PendingRequest::delete(endpoints::admin_delete_user(id)),
            "Failed to delete user",
        )
        .await
    }

    /// Company and director counts across the whole installation.
    pub async fn dashboard(&self) -> Result<AdminDashboard> {
        self.fetch(
            PendingRequest::get(endpoints::ADMIN_DASHBOARD),
            "Failed to load admin dashboard",
        )
        .await
    }
}
