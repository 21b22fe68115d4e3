//! `SeaORM` entity definitions.

pub mod prelude;

pub mod daily_expenses;
pub mod expense_actions;
pub mod monthly_expenses;
pub mod sea_orm_active_enums;
