//! Authorization guard derived from the transition tables.

use serde::{Deserialize, Serialize};

use crate::workflow::transition::{next_approval_status, next_rejection_status};
use crate::workflow::types::ExpenseStatus;

/// Returns true if `role` may approve a record in `status`.
#[must_use]
pub fn can_approve(status: ExpenseStatus, role: &str) -> bool {
    next_approval_status(status, role).is_some()
}

/// Returns true if `role` may return a record in `status`.
#[must_use]
pub fn can_return(status: ExpenseStatus, role: &str) -> bool {
    next_rejection_status(status, role).is_some()
}

/// Actions available to one actor on one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableActions {
    /// Current status of the record.
    pub status: ExpenseStatus,
    /// Whether the approve button is enabled.
    pub can_approve: bool,
    /// Whether the return button is enabled.
    pub can_return: bool,
    /// Status the record would move to on approval.
    pub approval_target: Option<ExpenseStatus>,
    /// Status the record would move to on return.
    pub return_target: Option<ExpenseStatus>,
}

impl AvailableActions {
    /// Evaluates both tables for `role` at `status`.
    #[must_use]
    pub fn for_actor(status: ExpenseStatus, role: &str) -> Self {
        let approval_target = next_approval_status(status, role);
        let return_target = next_rejection_status(status, role);
        Self {
            status,
            can_approve: approval_target.is_some(),
            can_return: return_target.is_some(),
            approval_target,
            return_target,
        }
    }

    /// Returns true if the actor can do anything with the record.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.can_approve || self.can_return
    }
}
