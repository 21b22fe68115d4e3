//! Workflow error types for expense approval.
//!
//! This module defines all error types that can occur while planning or
//! recording a status transition.

use thiserror::Error;
use uuid::Uuid;

use crate::workflow::capability::Capability;
use crate::workflow::types::{ExpenseStatus, TransitionKind};

fn awaiting_suffix(awaiting: Option<&Capability>) -> String {
    awaiting.map_or_else(
        || " (no one can act on it)".to_string(),
        |capability| format!(" (waiting on {capability})"),
    )
}

/// Errors that can occur during workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// No edge exists for the actor's position at the current status.
    #[error(
        "Position '{position}' cannot perform {kind} on status {from}{}",
        awaiting_suffix(.awaiting.as_ref())
    )]
    IllegalTransition {
        /// The current status.
        from: ExpenseStatus,
        /// The requested action.
        kind: TransitionKind,
        /// The actor's position.
        position: String,
        /// Capability the table expects for this action, if any.
        awaiting: Option<Capability>,
    },

    /// The edge resolves to the current status.
    #[error("Transition would leave status {status} unchanged")]
    NoOpTransition {
        /// The current status.
        status: ExpenseStatus,
    },

    /// Every transition needs a note.
    #[error("A note is required for every transition")]
    MissingNote,

    /// The actor has no usable identity or position.
    #[error("Actor has no profile or position")]
    UnauthorizedActor,

    /// The stored status no longer matches what the caller acted on.
    #[error("Expected status {expected} but record is {actual}")]
    StaleStatus {
        /// Status the caller based its decision on.
        expected: ExpenseStatus,
        /// Status currently stored.
        actual: ExpenseStatus,
    },

    /// Monthly expense record not found.
    #[error("Monthly expense record {0} not found")]
    RecordNotFound(Uuid),

    /// Writing the status change or the audit entry failed.
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),
}

impl WorkflowError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingNote => 400,
            Self::UnauthorizedActor => 401,
            Self::IllegalTransition { .. } => 403,
            Self::RecordNotFound(_) => 404,
            Self::NoOpTransition { .. } | Self::StaleStatus { .. } => 409,
            Self::PersistenceFailure(_) => 503,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::IllegalTransition { .. } => "ILLEGAL_TRANSITION",
            Self::NoOpTransition { .. } => "NO_OP_TRANSITION",
            Self::MissingNote => "MISSING_NOTE",
            Self::UnauthorizedActor => "UNAUTHORIZED_ACTOR",
            Self::StaleStatus { .. } => "STALE_STATUS",
            Self::RecordNotFound(_) => "RECORD_NOT_FOUND",
            Self::PersistenceFailure(_) => "PERSISTENCE_FAILURE",
        }
    }

    /// Message shown to the user.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::IllegalTransition { .. } => {
                "You cannot perform this action on the current status."
            }
            Self::NoOpTransition { .. } => "Current status does not allow this action.",
            Self::MissingNote => "Please enter a note before submitting.",
            Self::UnauthorizedActor => "Your profile is not allowed to perform this action.",
            Self::StaleStatus { .. } => {
                "This record was changed by someone else. Refresh and try again."
            }
            Self::RecordNotFound(_) => "The expense record was not found.",
            Self::PersistenceFailure(_) => "The action could not be saved. Please try again.",
        }
    }

    /// Returns true if the error is shown as a warning rather than a failure.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::NoOpTransition { .. })
    }

    /// Returns true if repeating the same request may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::PersistenceFailure(_))
    }
}
