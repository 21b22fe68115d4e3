//! Monthly expense repository.
//!
//! Creates records with their daily lines and serves the read side of the
//! dashboard: single records, filtered pages, and the records waiting on a
//! given actor.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use expensa_core::expense::{
    DailyExpense, ExpenseValidationError, MonthlyExpenseRecord, MonthlyExpenseSummary,
    NewMonthlyExpense, validate_new_expense,
};
use expensa_core::workflow::{ActorContext, AvailableActions, ExpenseStatus};
use expensa_shared::AppError;
use expensa_shared::types::{PageRequest, PageResponse};

use crate::entities::{
    daily_expenses, monthly_expenses, sea_orm_active_enums::ExpenseStatusCode,
};

/// Error types for monthly expense operations.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    /// Input failed a business rule.
    #[error(transparent)]
    Validation(#[from] ExpenseValidationError),

    /// Record not found.
    #[error("Monthly expense not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::Validation(rule) => Self::Validation(rule.to_string()),
            ExpenseError::NotFound(id) => Self::NotFound(format!("monthly expense {id}")),
            ExpenseError::Database(db) => Self::Database(db.to_string()),
        }
    }
}

/// Filter options for listing records.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Filter by status.
    pub status: Option<ExpenseStatus>,
    /// Filter by office (exact match).
    pub office: Option<String>,
    /// Filter by owning supervisor.
    pub supervisor_profile_id: Option<Uuid>,
}

/// A record waiting on the actor, with what the actor may do to it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingExpense {
    /// The record.
    pub expense: MonthlyExpenseSummary,
    /// Actions the actor may take.
    pub actions: AvailableActions,
}

/// Statuses at which `position` can approve or return something.
pub fn actionable_statuses(position: &str) -> Vec<ExpenseStatus> {
    ExpenseStatus::ALL
        .into_iter()
        .filter(|status| AvailableActions::for_actor(*status, position).any())
        .collect()
}

/// Monthly expense repository.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: Arc<DatabaseConnection>,
}

impl ExpenseRepository {
    /// Creates a new expense repository over a shared connection.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Creates a record in `New` together with its daily lines.
    ///
    /// The total is the sum of the lines.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input breaks a validation rule
    /// - Database operation fails
    pub async fn create(
        &self,
        input: &NewMonthlyExpense,
    ) -> Result<MonthlyExpenseRecord, ExpenseError> {
        validate_new_expense(input)?;

        let now = Utc::now();
        let id = Uuid::new_v4();
        let lines: Vec<DailyExpense> = input
            .daily_expenses
            .iter()
            .map(|line| DailyExpense {
                id: Uuid::new_v4(),
                expense_date: line.expense_date,
                description: line.description.trim().to_string(),
                amount: line.amount,
            })
            .collect();

        let record = MonthlyExpenseRecord {
            id,
            status: NewMonthlyExpense::initial_status(),
            office: input.office.trim().to_string(),
            governorate: input.governorate.trim().to_string(),
            supervisor_profile_id: input.supervisor_profile_id,
            supervisor_name: input.supervisor_name.trim().to_string(),
            total_amount: input.total_amount(),
            daily_expenses: lines,
            notes: input
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from),
            created_at: now,
            updated_at: now,
        };

        let txn = self.db.begin().await?;

        monthly_expenses::Entity::insert(monthly_expenses::ActiveModel {
            id: Set(record.id),
            status: Set(record.status.into()),
            office: Set(record.office.clone()),
            governorate: Set(record.governorate.clone()),
            supervisor_profile_id: Set(record.supervisor_profile_id),
            supervisor_name: Set(record.supervisor_name.clone()),
            total_amount: Set(record.total_amount),
            notes: Set(record.notes.clone()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        })
        .exec_without_returning(&txn)
        .await?;

        if !record.daily_expenses.is_empty() {
            let rows = record
                .daily_expenses
                .iter()
                .map(|line| daily_expenses::ActiveModel {
                    id: Set(line.id),
                    monthly_expense_id: Set(id),
                    expense_date: Set(line.expense_date),
                    description: Set(line.description.clone()),
                    amount: Set(line.amount),
                    created_at: Set(now.into()),
                });
            daily_expenses::Entity::insert_many(rows)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            expense_id = %id,
            office = %record.office,
            lines = record.daily_expenses.len(),
            total = %record.total_amount,
            "monthly expense created"
        );

        Ok(record)
    }

    /// Finds a record with its lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MonthlyExpenseRecord>, ExpenseError> {
        let Some(row) = monthly_expenses::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let lines = daily_expenses::Entity::find()
            .filter(daily_expenses::Column::MonthlyExpenseId.eq(id))
            .order_by_asc(daily_expenses::Column::ExpenseDate)
            .order_by_asc(daily_expenses::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(Some(row.into_record(lines)))
    }

    /// Gets a record with its lines.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NotFound` if the record does not exist.
    pub async fn get(&self, id: Uuid) -> Result<MonthlyExpenseRecord, ExpenseError> {
        self.find_by_id(id).await?.ok_or(ExpenseError::NotFound(id))
    }

    /// Lists records, most recently changed first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: &ExpenseFilter,
        page: PageRequest,
    ) -> Result<PageResponse<MonthlyExpenseSummary>, ExpenseError> {
        let page = page.normalized();
        let mut query = monthly_expenses::Entity::find();

        if let Some(status) = filter.status {
            query = query.filter(monthly_expenses::Column::Status.eq(ExpenseStatusCode::from(status)));
        }

        if let Some(office) = filter.office.as_deref().map(str::trim).filter(|o| !o.is_empty()) {
            query = query.filter(monthly_expenses::Column::Office.eq(office));
        }

        if let Some(supervisor) = filter.supervisor_profile_id {
            query = query.filter(monthly_expenses::Column::SupervisorProfileId.eq(supervisor));
        }

        let total = query.clone().count(self.db.as_ref()).await?;

        let rows = query
            .order_by_desc(monthly_expenses::Column::UpdatedAt)
            .order_by_desc(monthly_expenses::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.db.as_ref())
            .await?;

        let data = rows
            .into_iter()
            .map(monthly_expenses::Model::into_summary)
            .collect();

        Ok(PageResponse::new(data, page, total))
    }

    /// Lists the records the actor can approve or return, oldest change
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn pending_for_actor(
        &self,
        actor: &ActorContext,
    ) -> Result<Vec<PendingExpense>, ExpenseError> {
        let statuses = actionable_statuses(&actor.position);
        if statuses.is_empty() {
            return Ok(Vec::new());
        }

        let codes: Vec<ExpenseStatusCode> = statuses.into_iter().map(Into::into).collect();
        let rows = monthly_expenses::Entity::find()
            .filter(monthly_expenses::Column::Status.is_in(codes))
            .order_by_asc(monthly_expenses::Column::UpdatedAt)
            .all(self.db.as_ref())
            .await?;

        tracing::debug!(
            profile_id = %actor.profile_id,
            position = %actor.position,
            count = rows.len(),
            "pending expenses loaded"
        );

        Ok(rows
            .into_iter()
            .map(|row| {
                let expense = row.into_summary();
                let actions = AvailableActions::for_actor(expense.status, &actor.position);
                PendingExpense { expense, actions }
            })
            .collect())
    }
}
