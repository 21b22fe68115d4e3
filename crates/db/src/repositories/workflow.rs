//! Workflow repository for monthly expense status transitions.
//!
//! `record_transition` is the only way a status changes. It validates the
//! request, plans the move with the pure engine, then applies the new status
//! and its audit entry in one database transaction, guarded by the status
//! the plan was made against.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

use expensa_core::workflow::{
    ActionLogEntry, ActorContext, AvailableActions, ExpenseStatus, TransitionKind, WorkflowError,
    WorkflowService,
};

use crate::entities::{expense_actions, monthly_expenses, sea_orm_active_enums::ExpenseStatusCode};

/// Result of a recorded transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionOutcome {
    /// The record that moved.
    pub expense_id: Uuid,
    /// Status before the transition.
    pub from: ExpenseStatus,
    /// Status after the transition.
    pub to: ExpenseStatus,
    /// The audit entry written with it.
    pub action: ActionLogEntry,
}

#[allow(clippy::needless_pass_by_value)]
fn persistence(err: DbErr) -> WorkflowError {
    WorkflowError::PersistenceFailure(err.to_string())
}

async fn load_status<C>(conn: &C, expense_id: Uuid) -> Result<ExpenseStatus, WorkflowError>
where
    C: ConnectionTrait,
{
    monthly_expenses::Entity::find_by_id(expense_id)
        .one(conn)
        .await
        .map_err(persistence)?
        .map(|row| row.status.into())
        .ok_or(WorkflowError::RecordNotFound(expense_id))
}

/// Workflow repository for monthly expense status transitions.
#[derive(Debug, Clone)]
pub struct WorkflowRepository {
    db: Arc<DatabaseConnection>,
}

impl WorkflowRepository {
    /// Creates a new workflow repository over a shared connection.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Approves or returns a record and appends the audit entry, atomically.
    ///
    /// When `expected_status` is given, the call fails with `StaleStatus`
    /// unless the stored status still equals it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The actor has no profile or position (`UnauthorizedActor`)
    /// - The note is blank (`MissingNote`)
    /// - The record does not exist (`RecordNotFound`)
    /// - The record moved since the caller looked at it (`StaleStatus`)
    /// - The actor may not act at this status (`IllegalTransition`)
    /// - The edge leads nowhere new (`NoOpTransition`)
    /// - The database fails (`PersistenceFailure`); nothing is applied
    pub async fn record_transition(
        &self,
        expense_id: Uuid,
        kind: TransitionKind,
        actor: &ActorContext,
        note: &str,
        expected_status: Option<ExpenseStatus>,
    ) -> Result<TransitionOutcome, WorkflowError> {
        WorkflowService::validate_request(actor, note)?;

        // Dropping `txn` on any early return rolls it back.
        let txn = self.db.begin().await.map_err(persistence)?;

        let current = load_status(&txn, expense_id).await?;
        if let Some(expected) = expected_status
            && expected != current
        {
            tracing::info!(
                expense_id = %expense_id,
                %expected,
                actual = %current,
                "transition based on stale status"
            );
            return Err(WorkflowError::StaleStatus {
                expected,
                actual: current,
            });
        }

        let planned = WorkflowService::plan(kind, current, actor, note)?;
        let mut entry = planned.log_entry(expense_id);
        let now = Utc::now();
        entry.created_at = now;

        let updated = monthly_expenses::Entity::update_many()
            .col_expr(
                monthly_expenses::Column::Status,
                Expr::value(ExpenseStatusCode::from(planned.to)),
            )
            .col_expr(monthly_expenses::Column::UpdatedAt, Expr::value(now))
            .filter(monthly_expenses::Column::Id.eq(expense_id))
            .filter(monthly_expenses::Column::Status.eq(ExpenseStatusCode::from(planned.from)))
            .exec(&txn)
            .await
            .map_err(persistence)?;

        if updated.rows_affected == 0 {
            let actual = load_status(&txn, expense_id).await?;
            tracing::warn!(
                expense_id = %expense_id,
                expected = %planned.from,
                %actual,
                "concurrent transition won the race"
            );
            return Err(WorkflowError::StaleStatus {
                expected: planned.from,
                actual,
            });
        }

        expense_actions::Entity::insert(expense_actions::ActiveModel::from(&entry))
            .exec_without_returning(&txn)
            .await
            .map_err(persistence)?;

        txn.commit().await.map_err(persistence)?;

        tracing::info!(
            expense_id = %expense_id,
            from = %planned.from,
            to = %planned.to,
            %kind,
            profile_id = %actor.profile_id,
            "expense status changed"
        );

        Ok(TransitionOutcome {
            expense_id,
            from: planned.from,
            to: planned.to,
            action: entry,
        })
    }

    /// Returns the audit trail of a record, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if the record does not exist, or
    /// `PersistenceFailure` if the database fails.
    pub async fn history(&self, expense_id: Uuid) -> Result<Vec<ActionLogEntry>, WorkflowError> {
        load_status(self.db.as_ref(), expense_id).await?;

        let rows = expense_actions::Entity::find()
            .filter(expense_actions::Column::MonthlyExpenseId.eq(expense_id))
            .order_by_asc(expense_actions::Column::CreatedAt)
            .order_by_asc(expense_actions::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(persistence)?;

        Ok(rows
            .into_iter()
            .map(expense_actions::Model::into_log_entry)
            .collect())
    }

    /// What `actor` may do to a record right now.
    ///
    /// # Errors
    ///
    /// Returns `UnauthorizedActor` for an unidentified actor,
    /// `RecordNotFound` if the record does not exist, or
    /// `PersistenceFailure` if the database fails.
    pub async fn available_actions(
        &self,
        expense_id: Uuid,
        actor: &ActorContext,
    ) -> Result<AvailableActions, WorkflowError> {
        if !actor.is_identified() {
            return Err(WorkflowError::UnauthorizedActor);
        }

        let status = load_status(self.db.as_ref(), expense_id).await?;
        Ok(AvailableActions::for_actor(status, &actor.position))
    }
}
