//! Application state shared across handlers
//!
//! Every collaborator is constructed once in `main` and passed in
//! explicitly; handlers never reach for ambient global state.

use sqlx::PgPool;

use crate::{
    jwt::JwtService,
    repositories::{
        ExpenseRepository, IncomeRepository, InvestmentRepository, LoanRepository, UserRepository,
    },
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_service: JwtService,
    pub user_repository: UserRepository,
    pub expense_repository: ExpenseRepository,
    pub income_repository: IncomeRepository,
    pub investment_repository: InvestmentRepository,
    pub loan_repository: LoanRepository,
}
