//! Input validation at the transport boundary
//!
//! Field-level constraints are enforced here before any repository call;
//! violations surface as 400 responses. Limits mirror the column
//! constraints in the schema.

use chrono::{NaiveDate, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::models::{
    NewExpense, NewIncome, NewInvestment, NewLoan, UpdateExpense, UpdateIncome, UpdateInvestment,
    UpdateLoan, UpdateUser,
};

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    Ok(())
}

/// Require a non-blank text field within a length limit
pub fn validate_required_text(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }

    if value.len() > max_len {
        return Err(format!("{field} cannot exceed {max_len} characters"));
    }

    Ok(())
}

fn validate_optional_text(
    field: &str,
    value: Option<&String>,
    max_len: usize,
) -> Result<(), String> {
    match value {
        Some(v) => validate_required_text(field, v, max_len),
        None => Ok(()),
    }
}

/// Require a strictly positive, finite monetary amount
pub fn validate_amount(field: &str, amount: f64) -> Result<(), String> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(format!("{field} must be greater than 0"));
    }

    Ok(())
}

fn validate_optional_amount(field: &str, amount: Option<f64>) -> Result<(), String> {
    match amount {
        Some(a) => validate_amount(field, a),
        None => Ok(()),
    }
}

fn validate_past_or_present(field: &str, date: NaiveDate) -> Result<(), String> {
    if date > Utc::now().date_naive() {
        return Err(format!("{field} cannot be in the future"));
    }

    Ok(())
}

pub fn validate_new_expense(payload: &NewExpense) -> Result<(), String> {
    validate_required_text("Description", &payload.description, 500)?;
    validate_required_text("Category", &payload.category, 100)?;
    validate_amount("Amount", payload.amount)?;
    validate_past_or_present("Date", payload.date)?;
    validate_required_text("Payment mode", &payload.payment_mode, 50)
}

pub fn validate_update_expense(payload: &UpdateExpense) -> Result<(), String> {
    validate_optional_text("Description", payload.description.as_ref(), 500)?;
    validate_optional_text("Category", payload.category.as_ref(), 100)?;
    validate_optional_amount("Amount", payload.amount)?;
    if let Some(date) = payload.date {
        validate_past_or_present("Date", date)?;
    }
    validate_optional_text("Payment mode", payload.payment_mode.as_ref(), 50)
}

pub fn validate_new_income(payload: &NewIncome) -> Result<(), String> {
    validate_required_text("Source", &payload.source, 255)?;
    validate_required_text("Description", &payload.description, 500)?;
    validate_required_text("Category", &payload.category, 100)?;
    validate_amount("Amount", payload.amount)
}

pub fn validate_update_income(payload: &UpdateIncome) -> Result<(), String> {
    validate_optional_text("Source", payload.source.as_ref(), 255)?;
    validate_optional_text("Description", payload.description.as_ref(), 500)?;
    validate_optional_text("Category", payload.category.as_ref(), 100)?;
    validate_optional_amount("Amount", payload.amount)
}

pub fn validate_new_investment(payload: &NewInvestment) -> Result<(), String> {
    validate_required_text("Investment type", &payload.investment_type, 100)?;
    validate_required_text("Institution", &payload.institution, 255)?;
    validate_required_text("Description", &payload.description, 500)?;
    validate_amount("Amount", payload.amount)
}

pub fn validate_update_investment(payload: &UpdateInvestment) -> Result<(), String> {
    validate_optional_text("Investment type", payload.investment_type.as_ref(), 100)?;
    validate_optional_text("Institution", payload.institution.as_ref(), 255)?;
    validate_optional_text("Description", payload.description.as_ref(), 500)?;
    validate_optional_amount("Amount", payload.amount)
}

pub fn validate_new_loan(payload: &NewLoan) -> Result<(), String> {
    validate_required_text("Loan type", &payload.loan_type, 100)?;
    validate_required_text("Lender", &payload.lender, 255)?;
    validate_required_text("Description", &payload.description, 500)?;
    validate_amount("Principal", payload.principal)?;
    validate_amount("Interest rate", payload.interest_rate)?;
    validate_amount("EMI", payload.emi)?;
    if payload.end_date < payload.start_date {
        return Err("End date cannot be before start date".to_string());
    }
    Ok(())
}

pub fn validate_update_loan(payload: &UpdateLoan) -> Result<(), String> {
    validate_optional_text("Loan type", payload.loan_type.as_ref(), 100)?;
    validate_optional_text("Lender", payload.lender.as_ref(), 255)?;
    validate_optional_text("Description", payload.description.as_ref(), 500)?;
    validate_optional_amount("Principal", payload.principal)?;
    validate_optional_amount("Interest rate", payload.interest_rate)?;
    validate_optional_amount("EMI", payload.emi)?;
    if let (Some(start), Some(end)) = (payload.start_date, payload.end_date) {
        if end < start {
            return Err("End date cannot be before start date".to_string());
        }
    }
    Ok(())
}

pub fn validate_update_user(payload: &UpdateUser) -> Result<(), String> {
    validate_optional_text("Full name", payload.full_name.as_ref(), 255)?;
    validate_optional_text("Phone", payload.phone.as_ref(), 20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_email() {
        assert!(validate_email("alice@example.com").is_ok());
    }

    #[test]
    fn rejects_invalid_email() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn accepts_simple_password() {
        assert!(validate_password("secret123").is_ok());
    }

    #[test]
    fn rejects_short_or_oversized_password() {
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn rejects_non_positive_amounts() {
        assert!(validate_amount("Amount", 0.0).is_err());
        assert!(validate_amount("Amount", -5.0).is_err());
        assert!(validate_amount("Amount", f64::NAN).is_err());
        assert!(validate_amount("Amount", 0.01).is_ok());
    }

    #[test]
    fn rejects_future_expense_date() {
        let payload = NewExpense {
            description: "Groceries".to_string(),
            category: "Food".to_string(),
            amount: 20.0,
            date: Utc::now().date_naive() + chrono::Days::new(2),
            payment_mode: "Card".to_string(),
        };

        assert!(validate_new_expense(&payload).is_err());
    }

    #[test]
    fn accepts_today_as_expense_date() {
        let payload = NewExpense {
            description: "Groceries".to_string(),
            category: "Food".to_string(),
            amount: 20.0,
            date: Utc::now().date_naive(),
            payment_mode: "Card".to_string(),
        };

        assert!(validate_new_expense(&payload).is_ok());
    }

    #[test]
    fn rejects_blank_required_fields() {
        let payload = NewIncome {
            source: "  ".to_string(),
            description: "Salary".to_string(),
            category: "Job".to_string(),
            amount: 1000.0,
            date: Utc::now().date_naive(),
        };

        assert!(validate_new_income(&payload).is_err());
    }

    #[test]
    fn rejects_inverted_loan_dates() {
        let payload = NewLoan {
            loan_type: "Home".to_string(),
            lender: "Bank".to_string(),
            description: "Mortgage".to_string(),
            principal: 100_000.0,
            interest_rate: 6.5,
            emi: 900.0,
            start_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
        };

        assert!(validate_new_loan(&payload).is_err());
    }

    #[test]
    fn partial_update_with_no_fields_is_valid() {
        assert!(validate_update_expense(&UpdateExpense::default()).is_ok());
        assert!(validate_update_loan(&UpdateLoan::default()).is_ok());
    }
}
