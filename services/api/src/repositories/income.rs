//! Income repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::models::{Income, NewIncome, UpdateIncome};

/// Income repository
#[derive(Clone)]
pub struct IncomeRepository {
    pool: PgPool,
}

impl IncomeRepository {
    /// Create a new income repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new income record owned by the given user
    pub async fn create(&self, user_id: i64, new_income: &NewIncome) -> Result<Income> {
        info!("Creating income record for user {}", user_id);

        let income = sqlx::query_as::<_, Income>(
            r#"
            INSERT INTO incomes (source, description, category, amount, date, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, source, description, category, amount, date, user_id
            "#,
        )
        .bind(&new_income.source)
        .bind(&new_income.description)
        .bind(&new_income.category)
        .bind(new_income.amount)
        .bind(new_income.date)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(income)
    }

    /// All income records owned by a user, in store order
    pub async fn find_all_by_user_id(&self, user_id: i64) -> Result<Vec<Income>> {
        let incomes = sqlx::query_as::<_, Income>(
            r#"
            SELECT id, source, description, category, amount, date, user_id
            FROM incomes
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(incomes)
    }

    /// Look up one income record, scoped to its owner
    pub async fn find_by_id(&self, id: i64, user_id: i64) -> Result<Option<Income>> {
        let income = sqlx::query_as::<_, Income>(
            r#"
            SELECT id, source, description, category, amount, date, user_id
            FROM incomes
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(income)
    }

    /// Apply a partial update, scoped to the owner; `None` when absent
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        update: &UpdateIncome,
    ) -> Result<Option<Income>> {
        let income = sqlx::query_as::<_, Income>(
            r#"
            UPDATE incomes
            SET source = COALESCE($3, source),
                description = COALESCE($4, description),
                category = COALESCE($5, category),
                amount = COALESCE($6, amount),
                date = COALESCE($7, date)
            WHERE id = $1 AND user_id = $2
            RETURNING id, source, description, category, amount, date, user_id
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.source)
        .bind(&update.description)
        .bind(&update.category)
        .bind(update.amount)
        .bind(update.date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(income)
    }

    /// Delete by id, scoped to the owner; true when a row was removed
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM incomes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
