//! Entity re-exports.

pub use super::daily_expenses::Entity as DailyExpenses;
pub use super::expense_actions::Entity as ExpenseActions;
pub use super::monthly_expenses::Entity as MonthlyExpenses;
