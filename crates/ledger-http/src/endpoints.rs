//! Endpoint paths and auth request/response types.
//!
//! Paths are relative to the API base and keep the trailing slash the server
//! routes on.

use serde::{Deserialize, Serialize};

use ledger_core::UserProfile;

// ============================================================================
// Auth
// ============================================================================

pub const LOGIN: &str = "auth/login/";
pub const REGISTER: &str = "auth/register/";
pub const REFRESH: &str = "auth/refresh/";
pub const ME: &str = "auth/me/";

// ============================================================================
// Admin
// ============================================================================

pub const ADMIN_USERS: &str = "admin/users/";
pub const ADMIN_CREATE_USER: &str = "admin/users/create/";
pub const ADMIN_DASHBOARD: &str = "admin/dashboard/";

pub fn admin_user(id: i64) -> String {
    format!("admin/users/{}/", id)
}

pub fn admin_delete_user(id: i64) -> String {
    format!("admin/users/{}/delete/", id)
}

// ============================================================================
// Ledger resources
// ============================================================================

pub const COMPANIES: &str = "companies/";
pub const DIRECTORS: &str = "directors/";
pub const PROJECTS: &str = "projects/";
pub const TRANSACTIONS: &str = "transactions/";
pub const SALARIES: &str = "salaries/";
pub const MILESTONES: &str = "milestones/";
pub const SUMMARY: &str = "summary/";

/// Path of one record in a collection, e.g. `item(PROJECTS, 3)`.
pub fn item(collection: &str, id: i64) -> String {
    format!("{}{}/", collection, id)
}

/// Path of an action on one record, e.g. `action(PROJECTS, 3, "approve")`.
pub fn action(collection: &str, id: i64, name: &str) -> String {
    format!("{}{}/{}/", collection, id, name)
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response from login and register.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserProfile,
    pub access: String,
    pub refresh: String,
}

/// Request body for the token refresh.
#[derive(Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Response from the token refresh.
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Optional note attached to an approval.
#[derive(Debug, Serialize)]
pub struct ApprovalNote<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
}
