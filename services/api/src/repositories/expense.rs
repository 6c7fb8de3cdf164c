//! Expense repository for database operations
//!
//! Lookups, updates, and deletes are scoped to the owning user: another
//! user's record is indistinguishable from an absent one.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::models::{Expense, NewExpense, UpdateExpense};

/// Expense repository
#[derive(Clone)]
pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new expense owned by the given user
    pub async fn create(&self, user_id: i64, new_expense: &NewExpense) -> Result<Expense> {
        info!("Creating expense for user {}", user_id);

        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (description, category, amount, date, payment_mode, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, description, category, amount, date, payment_mode, user_id
            "#,
        )
        .bind(&new_expense.description)
        .bind(&new_expense.category)
        .bind(new_expense.amount)
        .bind(new_expense.date)
        .bind(&new_expense.payment_mode)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    /// All expenses owned by a user, in store order
    pub async fn find_all_by_user_id(&self, user_id: i64) -> Result<Vec<Expense>> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, description, category, amount, date, payment_mode, user_id
            FROM expenses
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    /// Look up one expense, scoped to its owner
    pub async fn find_by_id(&self, id: i64, user_id: i64) -> Result<Option<Expense>> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, description, category, amount, date, payment_mode, user_id
            FROM expenses
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(expense)
    }

    /// Apply a partial update, scoped to the owner; `None` when absent
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        update: &UpdateExpense,
    ) -> Result<Option<Expense>> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            UPDATE expenses
            SET description = COALESCE($3, description),
                category = COALESCE($4, category),
                amount = COALESCE($5, amount),
                date = COALESCE($6, date),
                payment_mode = COALESCE($7, payment_mode)
            WHERE id = $1 AND user_id = $2
            RETURNING id, description, category, amount, date, payment_mode, user_id
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.description)
        .bind(&update.category)
        .bind(update.amount)
        .bind(update.date)
        .bind(&update.payment_mode)
        .fetch_optional(&self.pool)
        .await?;

        Ok(expense)
    }

    /// Delete by id, scoped to the owner; true when a row was removed
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
