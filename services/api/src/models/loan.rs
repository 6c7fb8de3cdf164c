//! Loan model and related payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Loan entity, e.g. a home, personal, or education loan
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Loan {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub loan_type: String,
    pub lender: String,
    pub description: String,
    pub principal: f64,
    /// Annual interest rate, in percent
    pub interest_rate: f64,
    pub emi: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub user_id: i64,
}

/// New loan creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewLoan {
    #[serde(rename = "type")]
    pub loan_type: String,
    pub lender: String,
    pub description: String,
    pub principal: f64,
    pub interest_rate: f64,
    pub emi: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Loan partial-update payload; only submitted fields overwrite
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateLoan {
    #[serde(rename = "type")]
    pub loan_type: Option<String>,
    pub lender: Option<String>,
    pub description: Option<String>,
    pub principal: Option<f64>,
    pub interest_rate: Option<f64>,
    pub emi: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
