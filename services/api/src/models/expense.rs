//! Expense model and related payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Expense entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub payment_mode: String,
    pub user_id: i64,
}

/// New expense creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub payment_mode: String,
}

/// Expense partial-update payload; only submitted fields overwrite
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateExpense {
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub payment_mode: Option<String>,
}
