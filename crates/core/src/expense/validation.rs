//! Business rule validation for new monthly expense records.

use chrono::Datelike;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::NewMonthlyExpense;

/// Validation errors for monthly expense input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseValidationError {
    /// Office name is blank.
    #[error("Office is required")]
    MissingOffice,

    /// Governorate is blank.
    #[error("Governorate is required")]
    MissingGovernorate,

    /// Supervisor profile is nil.
    #[error("Supervisor profile is required")]
    MissingSupervisor,

    /// A daily line has a zero or negative amount.
    #[error("Daily expense on line {line} must have a positive amount")]
    InvalidAmount {
        /// 1-based line number.
        line: usize,
    },

    /// A daily line has no description.
    #[error("Daily expense on line {line} needs a description")]
    MissingDescription {
        /// 1-based line number.
        line: usize,
    },

    /// Daily lines span more than one calendar month.
    #[error("Daily expenses must all fall in the same month")]
    MixedMonths,
}

/// Validates input for a new monthly expense record.
///
/// # Errors
///
/// Returns the first rule the input violates.
pub fn validate_new_expense(input: &NewMonthlyExpense) -> Result<(), ExpenseValidationError> {
    if input.office.trim().is_empty() {
        return Err(ExpenseValidationError::MissingOffice);
    }
    if input.governorate.trim().is_empty() {
        return Err(ExpenseValidationError::MissingGovernorate);
    }
    if input.supervisor_profile_id.is_nil() {
        return Err(ExpenseValidationError::MissingSupervisor);
    }

    for (idx, line) in input.daily_expenses.iter().enumerate() {
        if line.amount <= Decimal::ZERO {
            return Err(ExpenseValidationError::InvalidAmount { line: idx + 1 });
        }
        if line.description.trim().is_empty() {
            return Err(ExpenseValidationError::MissingDescription { line: idx + 1 });
        }
    }

    let mut months = input
        .daily_expenses
        .iter()
        .map(|line| (line.expense_date.year(), line.expense_date.month()));
    if let Some(first) = months.next()
        && months.any(|m| m != first)
    {
        return Err(ExpenseValidationError::MixedMonths);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::types::NewDailyExpense;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn line(day: u32, amount: Decimal) -> NewDailyExpense {
        NewDailyExpense {
            expense_date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            description: "Fuel".to_string(),
            amount,
        }
    }

    fn input(lines: Vec<NewDailyExpense>) -> NewMonthlyExpense {
        NewMonthlyExpense {
            office: "Central".to_string(),
            governorate: "Baghdad".to_string(),
            supervisor_profile_id: Uuid::new_v4(),
            supervisor_name: "Sara".to_string(),
            daily_expenses: lines,
            notes: None,
        }
    }

    #[test]
    fn test_valid_input() {
        let input = input(vec![line(1, dec!(10.50)), line(2, dec!(4.25))]);
        assert_eq!(validate_new_expense(&input), Ok(()));
        assert_eq!(input.total_amount(), dec!(14.75));
    }

    #[test]
    fn test_empty_lines_are_allowed() {
        let input = input(vec![]);
        assert_eq!(validate_new_expense(&input), Ok(()));
        assert_eq!(input.total_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_missing_office() {
        let mut input = input(vec![]);
        input.office = "  ".to_string();
        assert_eq!(
            validate_new_expense(&input),
            Err(ExpenseValidationError::MissingOffice)
        );
    }

    #[test]
    fn test_missing_governorate() {
        let mut input = input(vec![]);
        input.governorate = String::new();
        assert_eq!(
            validate_new_expense(&input),
            Err(ExpenseValidationError::MissingGovernorate)
        );
    }

    #[test]
    fn test_missing_supervisor() {
        let mut input = input(vec![]);
        input.supervisor_profile_id = Uuid::nil();
        assert_eq!(
            validate_new_expense(&input),
            Err(ExpenseValidationError::MissingSupervisor)
        );
    }

    #[test]
    fn test_non_positive_amount() {
        let input = input(vec![line(1, dec!(5)), line(2, dec!(0))]);
        assert_eq!(
            validate_new_expense(&input),
            Err(ExpenseValidationError::InvalidAmount { line: 2 })
        );
    }

    #[test]
    fn test_blank_description() {
        let mut bad = line(3, dec!(2));
        bad.description = " ".to_string();
        let input = input(vec![bad]);
        assert_eq!(
            validate_new_expense(&input),
            Err(ExpenseValidationError::MissingDescription { line: 1 })
        );
    }

    #[test]
    fn test_mixed_months() {
        let mut other = line(1, dec!(1));
        other.expense_date = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        let input = input(vec![line(30, dec!(1)), other]);
        assert_eq!(
            validate_new_expense(&input),
            Err(ExpenseValidationError::MixedMonths)
        );
    }

    #[test]
    fn test_new_records_start_in_new() {
        assert_eq!(
            NewMonthlyExpense::initial_status(),
            crate::workflow::types::ExpenseStatus::New
        );
    }
}
