//! Companies and their directors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserProfile;

/// A tenant company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub created_by: i64,
    #[serde(default)]
    pub created_by_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub incorporation_date: Option<String>,
    #[serde(default)]
    pub partner1_name: String,
    #[serde(default)]
    pub partner2_name: String,
    #[serde(default)]
    pub directors_count: u32,
}

/// Body of `POST /companies/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewCompany {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner1_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner2_name: Option<String>,
}

/// Partial update of a company.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompanyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorporation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner1_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner2_name: Option<String>,
}

/// A user acting as director of a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    pub id: i64,
    pub user: UserProfile,
    pub user_id: Option<i64>,
    pub company: i64,
    #[serde(default)]
    pub company_name: String,
    pub added_at: DateTime<Utc>,
}

/// Body of `POST /directors/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewDirector {
    pub user_id: i64,
    pub company: i64,
}
