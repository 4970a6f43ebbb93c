//! User accounts.

use serde::{Deserialize, Serialize};

use super::wire_enum;

wire_enum! {
    /// Role of a user within the application.
    UserRole, "user role" {
        Admin => "ADMIN",
        Company => "COMPANY",
        Director => "DIRECTOR",
    }
}

/// The current user's profile, as returned by `/auth/me/`.
///
/// A cached copy is persisted by the session store for cheap reads; it is
/// not authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: UserRole,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl UserProfile {
    /// Administrators see the user and company management screens.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin || self.is_staff || self.is_superuser
    }

    /// "First Last", or the username when no name is set.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Body of `POST /admin/users/create/`.
#[derive(Clone, Serialize)]
pub struct AdminNewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub company_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl std::fmt::Debug for AdminNewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminNewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("company_id", &self.company_id)
            .finish()
    }
}

/// Response of `POST /admin/users/create/`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUserCreated {
    pub user: UserProfile,
    #[serde(default)]
    pub message: String,
}

/// Partial update of a user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: UserRole) -> UserProfile {
        UserProfile {
            id: 1,
            username: "alice".to_string(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role,
            phone: String::new(),
            is_staff: false,
            is_superuser: false,
            company_id: None,
            company_name: None,
        }
    }

    #[test]
    fn minimal_profile_deserializes() {
        let user: UserProfile = serde_json::from_str(
            r#"{"id": 5, "username": "bob", "role": "DIRECTOR", "email": "b@example.com"}"#,
        )
        .unwrap();
        assert_eq!(user.role, UserRole::Director);
        assert!(!user.is_admin());
        assert_eq!(user.display_name(), "bob");
    }

    #[test]
    fn staff_counts_as_admin() {
        let mut user = profile(UserRole::Company);
        assert!(!user.is_admin());
        user.is_staff = true;
        assert!(user.is_admin());
        assert!(profile(UserRole::Admin).is_admin());
    }

    #[test]
    fn display_name_uses_full_name() {
        let mut user = profile(UserRole::Director);
        user.first_name = "Alice".to_string();
        user.last_name = "Doe".to_string();
        assert_eq!(user.display_name(), "Alice Doe");
    }
}
