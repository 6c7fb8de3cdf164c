//! Investment repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::models::{Investment, NewInvestment, UpdateInvestment};

/// Investment repository
#[derive(Clone)]
pub struct InvestmentRepository {
    pool: PgPool,
}

impl InvestmentRepository {
    /// Create a new investment repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new investment owned by the given user
    pub async fn create(&self, user_id: i64, new_investment: &NewInvestment) -> Result<Investment> {
        info!("Creating investment for user {}", user_id);

        let investment = sqlx::query_as::<_, Investment>(
            r#"
            INSERT INTO investments (type, institution, description, amount, date, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, type, institution, description, amount, date, user_id
            "#,
        )
        .bind(&new_investment.investment_type)
        .bind(&new_investment.institution)
        .bind(&new_investment.description)
        .bind(new_investment.amount)
        .bind(new_investment.date)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(investment)
    }

    /// All investments owned by a user, in store order
    pub async fn find_all_by_user_id(&self, user_id: i64) -> Result<Vec<Investment>> {
        let investments = sqlx::query_as::<_, Investment>(
            r#"
            SELECT id, type, institution, description, amount, date, user_id
            FROM investments
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(investments)
    }

    /// Look up one investment, scoped to its owner
    pub async fn find_by_id(&self, id: i64, user_id: i64) -> Result<Option<Investment>> {
        let investment = sqlx::query_as::<_, Investment>(
            r#"
            SELECT id, type, institution, description, amount, date, user_id
            FROM investments
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(investment)
    }

    /// Apply a partial update, scoped to the owner; `None` when absent
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        update: &UpdateInvestment,
    ) -> Result<Option<Investment>> {
        let investment = sqlx::query_as::<_, Investment>(
            r#"
            UPDATE investments
            SET type = COALESCE($3, type),
                institution = COALESCE($4, institution),
                description = COALESCE($5, description),
                amount = COALESCE($6, amount),
                date = COALESCE($7, date)
            WHERE id = $1 AND user_id = $2
            RETURNING id, type, institution, description, amount, date, user_id
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.investment_type)
        .bind(&update.institution)
        .bind(&update.description)
        .bind(update.amount)
        .bind(update.date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(investment)
    }

    /// Delete by id, scoped to the owner; true when a row was removed
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM investments WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
