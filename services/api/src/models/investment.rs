//! Investment model and related payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Investment entity, e.g. a mutual fund, stock, or fixed deposit
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Investment {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub investment_type: String,
    pub institution: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub user_id: i64,
}

/// New investment creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewInvestment {
    #[serde(rename = "type")]
    pub investment_type: String,
    pub institution: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Investment partial-update payload; only submitted fields overwrite
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateInvestment {
    #[serde(rename = "type")]
    pub investment_type: Option<String>,
    pub institution: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn investment_type_serializes_as_type() {
        let investment = Investment {
            id: 1,
            investment_type: "Mutual Fund".to_string(),
            institution: "Vanguard".to_string(),
            description: "Index fund".to_string(),
            amount: 1500.0,
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            user_id: 7,
        };

        let json = serde_json::to_value(&investment).unwrap();
        assert_eq!(json["type"], "Mutual Fund");
        assert!(json.get("investment_type").is_none());
    }
}
