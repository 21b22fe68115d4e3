//! Monthly expense records, the subject of the approval workflow.
//!
//! # Modules
//!
//! - `types` - Record and line item types
//! - `validation` - Input rules for new records

pub mod types;
pub mod validation;

pub use types::{
    DailyExpense, MonthlyExpenseRecord, MonthlyExpenseSummary, NewDailyExpense, NewMonthlyExpense,
};
pub use validation::{ExpenseValidationError, validate_new_expense};
