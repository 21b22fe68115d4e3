//! Workflow service for monthly expense state transitions.
//!
//! Planning is pure: it validates the request, consults the transition
//! tables and returns what must be persisted. The database layer applies
//! the plan atomically.

use chrono::Utc;
use uuid::Uuid;

use crate::workflow::error::WorkflowError;
use crate::workflow::transition::{next_status, required_capability};
use crate::workflow::types::{
    ActionLogEntry, ActorContext, ExpenseStatus, TransitionKind, describe_transition,
};

/// A validated transition ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTransition {
    /// Approval or return.
    pub kind: TransitionKind,
    /// Status the record is in now.
    pub from: ExpenseStatus,
    /// Status the record moves to.
    pub to: ExpenseStatus,
    /// Trimmed note supplied by the actor.
    pub note: String,
    /// Actor performing the transition.
    pub actor: ActorContext,
}

impl PlannedTransition {
    /// Human-readable description for the audit log.
    #[must_use]
    pub fn description(&self) -> String {
        describe_transition(self.kind, self.from, self.to)
    }

    /// Builds the audit entry for this transition on `monthly_expense_id`.
    #[must_use]
    pub fn log_entry(&self, monthly_expense_id: Uuid) -> ActionLogEntry {
        ActionLogEntry {
            id: Uuid::new_v4(),
            monthly_expense_id,
            actor_profile_id: self.actor.profile_id,
            actor_name: self.actor.name.clone(),
            actor_position: self.actor.position.clone(),
            kind: self.kind,
            description: self.description(),
            from_status: self.from,
            to_status: self.to,
            note: self.note.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Stateless service for planning expense workflow transitions.
pub struct WorkflowService;

impl WorkflowService {
    /// Checks the parts of a request that do not depend on stored state.
    ///
    /// Run this before touching the database.
    ///
    /// # Returns
    /// * `Ok(trimmed_note)` if the actor and note are acceptable
    /// * `Err(WorkflowError::UnauthorizedActor)` if the actor has no identity
    /// * `Err(WorkflowError::MissingNote)` if the note is blank
    pub fn validate_request<'a>(
        actor: &ActorContext,
        note: &'a str,
    ) -> Result<&'a str, WorkflowError> {
        if !actor.is_identified() {
            return Err(WorkflowError::UnauthorizedActor);
        }

        let note = note.trim();
        if note.is_empty() {
            return Err(WorkflowError::MissingNote);
        }

        Ok(note)
    }

    /// Plans a transition of `kind` for `actor` on a record in `current`.
    ///
    /// # Returns
    /// * `Ok(PlannedTransition)` if the transition is allowed
    /// * `Err(WorkflowError::UnauthorizedActor)` if the actor has no identity
    /// * `Err(WorkflowError::MissingNote)` if the note is blank
    /// * `Err(WorkflowError::IllegalTransition)` if no edge matches
    /// * `Err(WorkflowError::NoOpTransition)` if the edge leads back to `current`
    pub fn plan(
        kind: TransitionKind,
        current: ExpenseStatus,
        actor: &ActorContext,
        note: &str,
    ) -> Result<PlannedTransition, WorkflowError> {
        let note = Self::validate_request(actor, note)?;

        let to = next_status(kind, current, &actor.position).ok_or_else(|| {
            WorkflowError::IllegalTransition {
                from: current,
                kind,
                position: actor.position.clone(),
                awaiting: required_capability(kind, current),
            }
        })?;

        if to == current {
            return Err(WorkflowError::NoOpTransition { status: current });
        }

        Ok(PlannedTransition {
            kind,
            from: current,
            to,
            note: note.to_string(),
            actor: actor.clone(),
        })
    }

    /// Plans an approval.
    pub fn approve(
        current: ExpenseStatus,
        actor: &ActorContext,
        note: &str,
    ) -> Result<PlannedTransition, WorkflowError> {
        Self::plan(TransitionKind::Approval, current, actor, note)
    }

    /// Plans a return to the previous holder.
    pub fn return_to_previous(
        current: ExpenseStatus,
        actor: &ActorContext,
        note: &str,
    ) -> Result<PlannedTransition, WorkflowError> {
        Self::plan(TransitionKind::Return, current, actor, note)
    }
}
