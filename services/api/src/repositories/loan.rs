//! Loan repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::models::{Loan, NewLoan, UpdateLoan};

/// Loan repository
#[derive(Clone)]
pub struct LoanRepository {
    pool: PgPool,
}

impl LoanRepository {
    /// Create a new loan repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new loan owned by the given user
    pub async fn create(&self, user_id: i64, new_loan: &NewLoan) -> Result<Loan> {
        info!("Creating loan for user {}", user_id);

        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans
                (type, lender, description, principal, interest_rate, emi,
                 start_date, end_date, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, type, lender, description, principal, interest_rate, emi,
                      start_date, end_date, user_id
            "#,
        )
        .bind(&new_loan.loan_type)
        .bind(&new_loan.lender)
        .bind(&new_loan.description)
        .bind(new_loan.principal)
        .bind(new_loan.interest_rate)
        .bind(new_loan.emi)
        .bind(new_loan.start_date)
        .bind(new_loan.end_date)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(loan)
    }

    /// All loans owned by a user, in store order
    pub async fn find_all_by_user_id(&self, user_id: i64) -> Result<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>(
            r#"
            SELECT id, type, lender, description, principal, interest_rate, emi,
                   start_date, end_date, user_id
            FROM loans
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(loans)
    }

    /// Look up one loan, scoped to its owner
    pub async fn find_by_id(&self, id: i64, user_id: i64) -> Result<Option<Loan>> {
        let loan = sqlx::query_as::<_, Loan>(
            r#"
            SELECT id, type, lender, description, principal, interest_rate, emi,
                   start_date, end_date, user_id
            FROM loans
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(loan)
    }

    /// Apply a partial update, scoped to the owner; `None` when absent
    pub async fn update(&self, id: i64, user_id: i64, update: &UpdateLoan) -> Result<Option<Loan>> {
        let loan = sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans
            SET type = COALESCE($3, type),
                lender = COALESCE($4, lender),
                description = COALESCE($5, description),
                principal = COALESCE($6, principal),
                interest_rate = COALESCE($7, interest_rate),
                emi = COALESCE($8, emi),
                start_date = COALESCE($9, start_date),
                end_date = COALESCE($10, end_date)
            WHERE id = $1 AND user_id = $2
            RETURNING id, type, lender, description, principal, interest_rate, emi,
                      start_date, end_date, user_id
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.loan_type)
        .bind(&update.lender)
        .bind(&update.description)
        .bind(update.principal)
        .bind(update.interest_rate)
        .bind(update.emi)
        .bind(update.start_date)
        .bind(update.end_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(loan)
    }

    /// Delete by id, scoped to the owner; true when a row was removed
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM loans WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
