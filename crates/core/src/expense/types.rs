//! Monthly expense record types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::workflow::types::ExpenseStatus;

/// One day's expense line within a monthly record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyExpense {
    /// Line identifier.
    pub id: Uuid,
    /// Day the expense was incurred.
    pub expense_date: NaiveDate,
    /// What the money was spent on.
    pub description: String,
    /// Amount spent.
    pub amount: Decimal,
}

/// The subject of the approval workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpenseRecord {
    /// Record identifier.
    pub id: Uuid,
    /// Current workflow status.
    pub status: ExpenseStatus,
    /// Owning office.
    pub office: String,
    /// Governorate the office belongs to.
    pub governorate: String,
    /// Supervisor who owns the record.
    pub supervisor_profile_id: Uuid,
    /// Supervisor display name.
    pub supervisor_name: String,
    /// Sum of all daily lines.
    pub total_amount: Decimal,
    /// Daily line items.
    pub daily_expenses: Vec<DailyExpense>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// A record without its line items, as shown in lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpenseSummary {
    /// Record identifier.
    pub id: Uuid,
    /// Current workflow status.
    pub status: ExpenseStatus,
    /// Owning office.
    pub office: String,
    /// Governorate the office belongs to.
    pub governorate: String,
    /// Supervisor who owns the record.
    pub supervisor_profile_id: Uuid,
    /// Supervisor display name.
    pub supervisor_name: String,
    /// Sum of all daily lines.
    pub total_amount: Decimal,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// A line item supplied when creating a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDailyExpense {
    /// Day the expense was incurred.
    pub expense_date: NaiveDate,
    /// What the money was spent on.
    pub description: String,
    /// Amount spent.
    pub amount: Decimal,
}

/// Input for creating a monthly expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMonthlyExpense {
    /// Owning office.
    pub office: String,
    /// Governorate the office belongs to.
    pub governorate: String,
    /// Supervisor who owns the record.
    pub supervisor_profile_id: Uuid,
    /// Supervisor display name.
    pub supervisor_name: String,
    /// Daily line items.
    #[serde(default)]
    pub daily_expenses: Vec<NewDailyExpense>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl NewMonthlyExpense {
    /// Sum of all daily line amounts.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.daily_expenses.iter().map(|line| line.amount).sum()
    }

    /// Status every new record starts in.
    #[must_use]
    pub const fn initial_status() -> ExpenseStatus {
        ExpenseStatus::New
    }
}
