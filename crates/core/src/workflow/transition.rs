//! Transition tables for the expense approval workflow.
//!
//! Each status names at most one capability that may act on it, and for
//! that capability one approval target and one return target. Both tables
//! are total: any other (status, role) pair yields `None`.

use crate::workflow::capability::{Capability, role_has_capability};
use crate::workflow::types::{ExpenseStatus, TransitionKind};

/// One edge of a transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Status the edge leaves.
    pub from: ExpenseStatus,
    /// Capability that may take the edge.
    pub capability: Capability,
    /// Status the edge enters.
    pub to: ExpenseStatus,
}

/// Approval edge leaving `status`, if any.
#[must_use]
pub const fn approval_edge(status: ExpenseStatus) -> Option<(Capability, ExpenseStatus)> {
    use crate::workflow::types::ExpenseStatus as S;
    match status {
        S::SentFromDirector => Some((Capability::ExpenseAuditor, S::SentToExpenseManager)),
        S::SentToProjectCoordinator | S::ReturnedToProjectCoordinator => {
            Some((Capability::ProjectCoordinator, S::SentToManager))
        }
        S::SentToManager | S::ReturnedToManager => Some((Capability::Manager, S::SentToDirector)),
        S::SentToDirector => Some((Capability::Director, S::SentFromDirector)),
        S::SentToExpenseGeneralManager => Some((
            Capability::ExpenseGeneralManager,
            S::RecievedBySupervisor,
        )),
        S::ReturnedToExpenseAuditor => Some((
            Capability::ExpenseAuditor,
            S::SentToExpenseGeneralManager,
        )),
        S::SentToExpenseManager | S::ReturnedToExpenseManager => Some((
            Capability::ExpenseManager,
            S::SentToExpenseGeneralManager,
        )),
        S::RecievedBySupervisor => Some((Capability::Supervisor, S::Completed)),
        S::New | S::ReturnedToSupervisor | S::Completed => None,
    }
}

/// Return edge leaving `status`, if any.
#[must_use]
pub const fn return_edge(status: ExpenseStatus) -> Option<(Capability, ExpenseStatus)> {
    use crate::workflow::types::ExpenseStatus as S;
    match status {
        S::SentToProjectCoordinator | S::ReturnedToProjectCoordinator => {
            Some((Capability::ProjectCoordinator, S::ReturnedToSupervisor))
        }
        S::SentToManager | S::ReturnedToManager => {
            Some((Capability::Manager, S::ReturnedToProjectCoordinator))
        }
        S::SentFromDirector | S::ReturnedToExpenseAuditor => {
            Some((Capability::ExpenseAuditor, S::ReturnedToProjectCoordinator))
        }
        S::SentToExpenseManager | S::ReturnedToExpenseManager => {
            Some((Capability::ExpenseManager, S::ReturnedToExpenseAuditor))
        }
        S::SentToDirector => Some((Capability::Director, S::ReturnedToManager)),
        S::SentToExpenseGeneralManager => Some((
            Capability::ExpenseGeneralManager,
            S::ReturnedToExpenseManager,
        )),
        S::New | S::ReturnedToSupervisor | S::RecievedBySupervisor | S::Completed => None,
    }
}

/// Edge of the `kind` table leaving `status`, if any.
#[must_use]
pub const fn edge(kind: TransitionKind, status: ExpenseStatus) -> Option<(Capability, ExpenseStatus)> {
    match kind {
        TransitionKind::Approval => approval_edge(status),
        TransitionKind::Return => return_edge(status),
    }
}

/// Next status when `role` approves a record in `status`.
#[must_use]
pub fn next_approval_status(status: ExpenseStatus, role: &str) -> Option<ExpenseStatus> {
    next_status(TransitionKind::Approval, status, role)
}

/// Next status when `role` returns a record in `status`.
#[must_use]
pub fn next_rejection_status(status: ExpenseStatus, role: &str) -> Option<ExpenseStatus> {
    next_status(TransitionKind::Return, status, role)
}

/// Next status for a transition of `kind`, or `None` when no edge exists.
#[must_use]
pub fn next_status(kind: TransitionKind, status: ExpenseStatus, role: &str) -> Option<ExpenseStatus> {
    edge(kind, status)
        .filter(|(capability, _)| role_has_capability(role, *capability))
        .map(|(_, to)| to)
}

/// Capability a record in `status` is waiting on for a transition of `kind`.
#[must_use]
pub const fn required_capability(kind: TransitionKind, status: ExpenseStatus) -> Option<Capability> {
    match edge(kind, status) {
        Some((capability, _)) => Some(capability),
        None => None,
    }
}

/// Lists every edge of the `kind` table.
#[must_use]
pub fn edges(kind: TransitionKind) -> Vec<Edge> {
    ExpenseStatus::ALL
        .into_iter()
        .filter_map(|from| edge(kind, from).map(|(capability, to)| Edge { from, capability, to }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::workflow::types::ExpenseStatus as S;

    #[rstest]
    #[case(S::SentFromDirector, "expenseauditer", S::SentToExpenseManager)]
    #[case(S::SentToProjectCoordinator, "projectcoordinator", S::SentToManager)]
    #[case(S::ReturnedToProjectCoordinator, "projectcoordinator", S::SentToManager)]
    #[case(S::SentToManager, "manager", S::SentToDirector)]
    #[case(S::ReturnedToManager, "manager", S::SentToDirector)]
    #[case(S::SentToDirector, "director", S::SentFromDirector)]
    #[case(S::SentToExpenseGeneralManager, "expensegeneralmanager", S::RecievedBySupervisor)]
    #[case(S::ReturnedToExpenseAuditor, "expenseauditer", S::SentToExpenseGeneralManager)]
    #[case(S::SentToExpenseManager, "expensemanager", S::SentToExpenseGeneralManager)]
    #[case(S::ReturnedToExpenseManager, "expensemanager", S::SentToExpenseGeneralManager)]
    #[case(S::RecievedBySupervisor, "supervisor", S::Completed)]
    fn test_approval_table(
        #[case] from: ExpenseStatus,
        #[case] role: &str,
        #[case] to: ExpenseStatus,
    ) {
        assert_eq!(next_approval_status(from, role), Some(to));
    }

    #[rstest]
    #[case(S::SentToProjectCoordinator, "projectcoordinator", S::ReturnedToSupervisor)]
    #[case(S::ReturnedToProjectCoordinator, "projectcoordinator", S::ReturnedToSupervisor)]
    #[case(S::SentToManager, "manager", S::ReturnedToProjectCoordinator)]
    #[case(S::ReturnedToManager, "manager", S::ReturnedToProjectCoordinator)]
    #[case(S::SentFromDirector, "expenseauditer", S::ReturnedToProjectCoordinator)]
    #[case(S::ReturnedToExpenseAuditor, "expenseauditer", S::ReturnedToProjectCoordinator)]
    #[case(S::SentToExpenseManager, "expensemanager", S::ReturnedToExpenseAuditor)]
    #[case(S::ReturnedToExpenseManager, "expensemanager", S::ReturnedToExpenseAuditor)]
    #[case(S::SentToDirector, "director", S::ReturnedToManager)]
    #[case(S::SentToExpenseGeneralManager, "expensegeneralmanager", S::ReturnedToExpenseManager)]
    fn test_rejection_table(
        #[case] from: ExpenseStatus,
        #[case] role: &str,
        #[case] to: ExpenseStatus,
    ) {
        assert_eq!(next_rejection_status(from, role), Some(to));
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(edges(TransitionKind::Approval).len(), 11);
        assert_eq!(edges(TransitionKind::Return).len(), 10);
    }

    #[test]
    fn test_new_and_completed_have_no_edges() {
        for kind in TransitionKind::ALL {
            assert_eq!(edge(kind, S::New), None);
            assert_eq!(edge(kind, S::Completed), None);
            assert_eq!(edge(kind, S::ReturnedToSupervisor), None);
        }
    }

    #[test]
    fn test_supervisor_cannot_return_received_record() {
        assert_eq!(next_rejection_status(S::RecievedBySupervisor, "supervisor"), None);
    }

    #[test]
    fn test_role_matching_ignores_case() {
        assert_eq!(
            next_approval_status(S::SentToDirector, "DIRECTOR"),
            Some(S::SentFromDirector)
        );
        assert_eq!(
            next_rejection_status(S::SentFromDirector, "ExpenseAuditerSenior"),
            Some(S::ReturnedToProjectCoordinator)
        );
    }

    #[test]
    fn test_senior_manager_matches_manager_token() {
        assert_eq!(
            next_approval_status(S::SentToManager, "SeniorManagerX"),
            Some(S::SentToDirector)
        );
    }

    #[test]
    fn test_expense_manager_matches_plain_manager_step() {
        // Substring matching lets expense department managers act on the
        // plain manager step as well.
        assert_eq!(
            next_approval_status(S::SentToManager, "ExpenseManager"),
            Some(S::SentToDirector)
        );
        assert_eq!(
            next_approval_status(S::SentToExpenseManager, "Manager"),
            None
        );
    }

    #[test]
    fn test_required_capability() {
        assert_eq!(
            required_capability(TransitionKind::Approval, S::RecievedBySupervisor),
            Some(Capability::Supervisor)
        );
        assert_eq!(
            required_capability(TransitionKind::Return, S::RecievedBySupervisor),
            None
        );
        assert_eq!(
            required_capability(TransitionKind::Return, S::SentFromDirector),
            Some(Capability::ExpenseAuditor)
        );
    }

    #[test]
    fn test_both_tables_agree_on_owner() {
        for status in ExpenseStatus::ALL {
            if let (Some((a, _)), Some((r, _))) = (approval_edge(status), return_edge(status)) {
                assert_eq!(a, r, "status {status} has two owners");
            }
        }
    }
}
