//! Income model and related payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Income entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Income {
    pub id: i64,
    pub source: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub user_id: i64,
}

/// New income creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewIncome {
    pub source: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Income partial-update payload; only submitted fields overwrite
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateIncome {
    pub source: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
}
