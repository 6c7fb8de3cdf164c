//! User repository for database operations
//!
//! Owns credential handling: passwords are argon2-hashed on the way in and
//! verified against the stored hash on login. The plaintext is never
//! persisted or logged.

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use sqlx::PgPool;
use tracing::info;

use crate::models::{NewUser, UpdateUser, User};

const USER_COLUMNS: &str = "id, email, password_hash, full_name, phone, created_at, updated_at";

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user with a freshly hashed password
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        info!("Creating new user: {}", new_user.email);

        let salt = SaltString::generate(&mut rand::thread_rng());
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(new_user.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
            .to_string();

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password_hash, full_name, phone) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&new_user.email)
        .bind(&password_hash)
        .bind(&new_user.full_name)
        .bind(&new_user.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Verify a submitted password against the stored hash
    pub async fn verify_password(&self, user: &User, password: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

        let argon2 = Argon2::default();
        let result = argon2.verify_password(password.as_bytes(), &parsed_hash);

        Ok(result.is_ok())
    }

    /// Apply a partial profile update; `None` when the user is absent
    pub async fn update_profile(&self, id: i64, update: &UpdateUser) -> Result<Option<User>> {
        info!("Updating profile for user {}", id);

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users \
             SET full_name = COALESCE($2, full_name), \
                 phone = COALESCE($3, phone), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(&update.full_name)
        .bind(&update.phone)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
