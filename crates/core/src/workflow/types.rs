//! Workflow domain types for monthly expense approval.
//!
//! This module defines the status enumeration persisted by the backend,
//! the kinds of transition an actor can request, the explicit actor
//! context and the audit entry produced by every transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Status of a monthly expense record in the approval workflow.
///
/// The discriminant is the wire code stored by the backend and must never
/// be renumbered. Records start in `New` and finish in `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
pub enum ExpenseStatus {
    /// Created by the supervisor, not yet submitted.
    New = 0,
    /// Waiting on the project coordinator.
    SentToProjectCoordinator = 1,
    /// Returned to the project coordinator by a later approver.
    ReturnedToProjectCoordinator = 2,
    /// Waiting on the manager.
    SentToManager = 3,
    /// Returned to the manager by the director.
    ReturnedToManager = 4,
    /// Waiting on the director.
    SentToDirector = 5,
    /// Returned to the supervisor by the project coordinator.
    ReturnedToSupervisor = 6,
    /// Fully approved, waiting on the supervisor to confirm receipt.
    RecievedBySupervisor = 7,
    /// Terminal state.
    Completed = 8,
    /// Approved by the director, waiting on the expense auditor.
    SentFromDirector = 9,
    /// Returned to the expense auditor by the expense manager.
    ReturnedToExpenseAuditor = 10,
    /// Waiting on the expense manager.
    SentToExpenseManager = 11,
    /// Returned to the expense manager by the general manager.
    ReturnedToExpenseManager = 12,
    /// Waiting on the expense general manager.
    SentToExpenseGeneralManager = 13,
}

impl ExpenseStatus {
    /// Every status, in wire-code order.
    pub const ALL: [Self; 14] = [
        Self::New,
        Self::SentToProjectCoordinator,
        Self::ReturnedToProjectCoordinator,
        Self::SentToManager,
        Self::ReturnedToManager,
        Self::SentToDirector,
        Self::ReturnedToSupervisor,
        Self::RecievedBySupervisor,
        Self::Completed,
        Self::SentFromDirector,
        Self::ReturnedToExpenseAuditor,
        Self::SentToExpenseManager,
        Self::ReturnedToExpenseManager,
        Self::SentToExpenseGeneralManager,
    ];

    /// Returns the integer code used on the wire and in the database.
    #[must_use]
    pub const fn code(self) -> i16 {
        self as i16
    }

    /// Looks up a status by its wire code.
    #[must_use]
    pub fn from_code(code: i16) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Returns the symbolic name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::SentToProjectCoordinator => "SentToProjectCoordinator",
            Self::ReturnedToProjectCoordinator => "ReturnedToProjectCoordinator",
            Self::SentToManager => "SentToManager",
            Self::ReturnedToManager => "ReturnedToManager",
            Self::SentToDirector => "SentToDirector",
            Self::ReturnedToSupervisor => "ReturnedToSupervisor",
            Self::RecievedBySupervisor => "RecievedBySupervisor",
            Self::Completed => "Completed",
            Self::SentFromDirector => "SentFromDirector",
            Self::ReturnedToExpenseAuditor => "ReturnedToExpenseAuditor",
            Self::SentToExpenseManager => "SentToExpenseManager",
            Self::ReturnedToExpenseManager => "ReturnedToExpenseManager",
            Self::SentToExpenseGeneralManager => "SentToExpenseGeneralManager",
        }
    }

    /// Parses a status from its symbolic name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ExpenseStatus> for i16 {
    fn from(status: ExpenseStatus) -> Self {
        status.code()
    }
}

/// Error returned when a wire code does not name any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown expense status code {0}")]
pub struct UnknownStatusCode(pub i16);

impl TryFrom<i16> for ExpenseStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(UnknownStatusCode(code))
    }
}

/// The two actions an approver can take on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Move the record forward to the next holder.
    Approval,
    /// Send the record back to the previous holder.
    Return,
}

impl TransitionKind {
    /// Both kinds.
    pub const ALL: [Self; 2] = [Self::Approval, Self::Return];

    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approval => "approval",
            Self::Return => "return",
        }
    }

    /// Parses a kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "approval" | "approve" => Some(Self::Approval),
            "return" | "reject" => Some(Self::Return),
            _ => None,
        }
    }

    /// Past-tense verb used in audit descriptions.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Approval => "Approved",
            Self::Return => "Returned",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user performing a transition.
///
/// Passed explicitly into every workflow call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    /// Profile of the acting user.
    pub profile_id: Uuid,
    /// Display name recorded in the audit log.
    pub name: String,
    /// Job position, matched against capability tokens.
    pub position: String,
}

impl ActorContext {
    /// Creates a new actor context.
    #[must_use]
    pub fn new(profile_id: Uuid, name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            profile_id,
            name: name.into(),
            position: position.into(),
        }
    }

    /// Returns true if the context identifies somebody who can act at all.
    #[must_use]
    pub fn is_identified(&self) -> bool {
        !self.profile_id.is_nil() && !self.position.trim().is_empty()
    }
}

/// Audit record written once per transition.
///
/// Entries are append-only: nothing in the system updates or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogEntry {
    /// Unique identifier of the entry.
    pub id: Uuid,
    /// The monthly expense record the action applies to.
    pub monthly_expense_id: Uuid,
    /// Profile of the actor.
    pub actor_profile_id: Uuid,
    /// Display name of the actor.
    pub actor_name: String,
    /// Position of the actor at the time of the action.
    pub actor_position: String,
    /// Approval or return.
    pub kind: TransitionKind,
    /// Human-readable description, e.g. `Approved: SentToManager -> SentToDirector`.
    pub description: String,
    /// Status before the transition.
    pub from_status: ExpenseStatus,
    /// Status after the transition.
    pub to_status: ExpenseStatus,
    /// Free-text note supplied by the actor.
    pub note: String,
    /// When the action happened.
    pub created_at: DateTime<Utc>,
}

/// Builds the human-readable description stored on an audit entry.
#[must_use]
pub fn describe_transition(kind: TransitionKind, from: ExpenseStatus, to: ExpenseStatus) -> String {
    format!("{}: {from} -> {to}", kind.verb())
}
