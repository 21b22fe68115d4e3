//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod expense;
pub mod workflow;

pub use expense::{ExpenseError, ExpenseFilter, ExpenseRepository, PendingExpense};
pub use workflow::{TransitionOutcome, WorkflowRepository};
