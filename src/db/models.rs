use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub email: String,
    /// Argon2 PHC string, never the plaintext password.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbListing {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub notes: Option<String>,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
    /// Owning user, when there is one. Listings may exist unowned.
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Field set for inserting or updating a listing; the id and timestamp
/// are assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub url: String,
    pub notes: Option<String>,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbSession {
    pub token: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
