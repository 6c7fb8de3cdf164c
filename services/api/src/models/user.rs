//! User model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User entity
///
/// The password hash never leaves the process: it is skipped on
/// serialization and the plaintext is hashed before it reaches this type.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New user creation payload, carrying the plaintext password in memory
/// only until the repository hashes it
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
}

/// User profile update payload
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateUser {
    pub full_name: Option<String>,
    pub phone: Option<String>,
}
