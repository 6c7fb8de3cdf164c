//! Domain models for the finance service

pub mod expense;
pub mod income;
pub mod investment;
pub mod loan;
pub mod user;

// Re-export for convenience
pub use expense::{Expense, NewExpense, UpdateExpense};
pub use income::{Income, NewIncome, UpdateIncome};
pub use investment::{Investment, NewInvestment, UpdateInvestment};
pub use loan::{Loan, NewLoan, UpdateLoan};
pub use user::{NewUser, UpdateUser, User};
